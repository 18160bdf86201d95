//! Route definitions for sample packs. Reads return sounds populated.

use axum::routing::get;
use axum::Router;
use catalog_core::models::SamplePack;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/samplePacks`.
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
            get(resource::list_populated::<SamplePack>).post(resource::create::<SamplePack>),
        )
        .route(
            "/{id}",
            get(resource::get_populated::<SamplePack>)
                .put(resource::update::<SamplePack>)
                .delete(resource::delete::<SamplePack>),
        )
}
