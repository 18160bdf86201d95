//! Route definitions for sounds.

use axum::routing::get;
use axum::Router;
use catalog_core::models::Sound;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/sounds`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_one
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(resource::list::<Sound>).post(resource::create::<Sound>),
        )
        .route(
            "/{id}",
            get(resource::get_one::<Sound>)
                .put(resource::update::<Sound>)
                .delete(resource::delete::<Sound>),
        )
}
