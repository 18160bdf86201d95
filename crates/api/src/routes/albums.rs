//! Route definitions for albums. Reads return tracks populated.

use axum::routing::get;
use axum::Router;
use catalog_core::models::Album;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/albums`.
///
/// ```text
/// GET    /       -> list_populated
/// POST   /       -> create
/// GET    /{id}   -> get_populated
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(resource::list_populated::<Album>).post(resource::create::<Album>),
        )
        .route(
            "/{id}",
            get(resource::get_populated::<Album>)
                .put(resource::update::<Album>)
                .delete(resource::delete::<Album>),
        )
}
