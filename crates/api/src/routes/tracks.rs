//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;
use catalog_core::models::Track;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/tracks`.
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
            get(resource::list::<Track>).post(resource::create::<Track>),
        )
        .route(
            "/{id}",
            get(resource::get_one::<Track>)
                .put(resource::update::<Track>)
                .delete(resource::delete::<Track>),
        )
}
