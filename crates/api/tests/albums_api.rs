//! HTTP-level integration tests for the `/api/albums` endpoints, including
//! track population.

mod common;

use axum::http::StatusCode;
use catalog_core::document::Collection;
use catalog_core::types::parse_doc_id;
use catalog_db::DocumentStore;
use common::{body_json, build_test_app, create, delete, get, post_json, put_json, track_body};
use serde_json::json;

fn album_body(title: &str, tracks: &[&str]) -> serde_json::Value {
    json!({
        "title": title,
        "artist": "Synth Club",
        "price": 9.99,
        "tracks": tracks,
    })
}

// ---------------------------------------------------------------------------
// Test: create returns raw ids, reads return populated tracks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_ids_and_get_populates_tracks() {
    let app = build_test_app();
    let t1 = create(app.app(), "/api/tracks", track_body("One")).await;
    let t2 = create(app.app(), "/api/tracks", track_body("Two")).await;

    let response = post_json(app.app(), "/api/albums", album_body("Debut", &[&t2, &t1])).await;
    assert_eq!(response.status(), StatusCode::OK);
    let album = body_json(response).await;
    assert_eq!(album["tracks"], json!([t2, t1]));
    let id = album["_id"].as_str().unwrap();

    let response = get(app.app(), &format!("/api/albums/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let populated = body_json(response).await;
    assert_eq!(populated["title"], "Debut");
    assert_eq!(populated["tracks"][0]["_id"], t2.as_str());
    assert_eq!(populated["tracks"][0]["title"], "Two");
    assert_eq!(populated["tracks"][1]["title"], "One");
}

#[tokio::test]
async fn list_populates_every_album() {
    let app = build_test_app();
    let t1 = create(app.app(), "/api/tracks", track_body("Shared")).await;
    create(app.app(), "/api/albums", album_body("A", &[&t1])).await;
    create(app.app(), "/api/albums", album_body("B", &[&t1, &t1])).await;
    create(app.app(), "/api/albums", album_body("C", &[])).await;

    let list = body_json(get(app.app(), "/api/albums").await).await;
    let albums = list.as_array().unwrap();
    assert_eq!(albums.len(), 3);
    assert_eq!(albums[0]["tracks"][0]["title"], "Shared");
    assert_eq!(
        albums[1]["tracks"].as_array().unwrap().len(),
        2,
        "duplicate references expand twice"
    );
    assert_eq!(albums[2]["tracks"], json!([]));
}

#[tokio::test]
async fn tracks_and_artwork_default_when_omitted() {
    let app = build_test_app();
    let response = post_json(
        app.app(),
        "/api/albums",
        json!({ "title": "Bare", "artist": "X", "price": 5, "artworkPath": "/art.png" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let album = body_json(response).await;
    assert_eq!(album["tracks"], json!([]));
    assert_eq!(album["artworkPath"], "/art.png");
    assert!(album["releaseDate"].is_string());
}

// ---------------------------------------------------------------------------
// Test: deleting a referenced track
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleted_track_is_omitted_but_reference_is_kept() {
    let app = build_test_app();
    let keep = create(app.app(), "/api/tracks", track_body("Keep")).await;
    let gone = create(app.app(), "/api/tracks", track_body("Gone")).await;
    let album_id = create(app.app(), "/api/albums", album_body("Mixed", &[&keep, &gone])).await;

    let response = delete(app.app(), &format!("/api/tracks/{gone}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let populated = body_json(get(app.app(), &format!("/api/albums/{album_id}")).await).await;
    let tracks = populated["tracks"].as_array().unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0]["_id"], keep.as_str());

    let raw = app
        .store
        .find_by_id(Collection::Albums, parse_doc_id(&album_id).unwrap())
        .await
        .unwrap()
        .expect("album is still stored");
    assert_eq!(raw.body["tracks"], json!([keep, gone]));
}

// ---------------------------------------------------------------------------
// Test: update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_track_list_and_returns_ids() {
    let app = build_test_app();
    let t1 = create(app.app(), "/api/tracks", track_body("One")).await;
    let t2 = create(app.app(), "/api/tracks", track_body("Two")).await;
    let id = create(app.app(), "/api/albums", album_body("Evolving", &[&t1])).await;

    let response = put_json(
        app.app(),
        &format!("/api/albums/{id}"),
        json!({ "tracks": [t2], "genre": "ambient" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let album = body_json(response).await;
    assert_eq!(album["tracks"], json!([t2]));
    assert_eq!(album["genre"], "ambient");
    assert_eq!(album["title"], "Evolving");
}

#[tokio::test]
async fn update_release_date() {
    let app = build_test_app();
    let id = create(app.app(), "/api/albums", album_body("Dated", &[])).await;

    let response = put_json(
        app.app(),
        &format!("/api/albums/{id}"),
        json!({ "releaseDate": "2001-09-09T01:46:40Z" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["releaseDate"], "2001-09-09T01:46:40Z");
}

#[tokio::test]
async fn unknown_album_is_not_found() {
    let app = build_test_app();
    let uri = format!("/api/albums/{}", uuid::Uuid::new_v4());

    let response = get(app.app(), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "msg": "Album not found" }));

    let response = delete(app.app(), "/api/albums/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_album_leaves_tracks_alone() {
    let app = build_test_app();
    let t1 = create(app.app(), "/api/tracks", track_body("Survivor")).await;
    let id = create(app.app(), "/api/albums", album_body("Short Lived", &[&t1])).await;

    let response = delete(app.app(), &format!("/api/albums/{id}")).await;
    assert_eq!(body_json(response).await, json!({ "msg": "Album removed" }));

    let response = get(app.app(), &format!("/api/tracks/{t1}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
