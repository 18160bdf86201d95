pub mod albums;
pub mod health;
pub mod sample_packs;
pub mod sounds;
pub mod tracks;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /                    liveness text
/// /tracks              list, create
/// /tracks/{id}         get, update, delete
/// /albums              list (populated), create
/// /albums/{id}         get (populated), update, delete
/// /samplePacks         list (populated), create
/// /samplePacks/{id}    get (populated), update, delete
/// /sounds              list, create
/// /sounds/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .nest("/tracks", tracks::router())
        .nest("/albums", albums::router())
        .nest("/samplePacks", sample_packs::router())
        .nest("/sounds", sounds::router())
}

async fn api_root() -> &'static str {
    "API is working!"
}
