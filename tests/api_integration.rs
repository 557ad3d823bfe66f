//! Integration tests for API endpoints.

use axum::http::StatusCode;
use axum_test::TestServer;
use mood_tune::config::AppConfig;
use mood_tune::server::{create_router, AppState};
use serde_json::{json, Value};

/// Create a test server with default configuration
fn create_test_server() -> TestServer {
    let config = AppConfig::default();
    let state = AppState::new(config);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Mood Tune AI API is running");
}

#[tokio::test]
async fn test_config_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/config").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["server"]["port"], 3000);
    assert_eq!(body["languages"], json!(["en", "hi"]));
    assert_eq!(body["moods"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_detect_mood_happy() {
    let server = create_test_server();

    let response = server
        .post("/api/detect-mood")
        .json(&json!({ "text": "I am so happy and excited today", "language": "en" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "happy");
    assert_eq!(body["score"], 6);
    assert!((body["confidence"].as_f64().unwrap() - 0.6).abs() < 1e-9);
}

#[tokio::test]
async fn test_detect_mood_keywords_beat_sentiment() {
    let server = create_test_server();

    let response = server
        .post("/api/detect-mood")
        .json(&json!({ "text": "I am so sad and lonely" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "sad");
    assert!(body["score"].as_i64().unwrap() < 0);
}

#[tokio::test]
async fn test_detect_mood_sentiment_fallback() {
    let server = create_test_server();

    // No mood keyword present, sentiment -6
    let response = server
        .post("/api/detect-mood")
        .json(&json!({ "text": "the weather is terrible and awful" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "sad");
    assert_eq!(body["score"], -6);
}

#[tokio::test]
async fn test_detect_mood_scores_everyday_words() {
    let server = create_test_server();

    let response = server
        .post("/api/detect-mood")
        .json(&json!({ "text": "crazy weird disaster" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "sad");
    assert_eq!(body["score"], -6);
    assert!((body["confidence"].as_f64().unwrap() - 0.6).abs() < 1e-9);
}

#[tokio::test]
async fn test_detect_mood_hindi() {
    let server = create_test_server();

    let response = server
        .post("/api/detect-mood")
        .json(&json!({ "text": "आज मैं बहुत खुश हूँ", "language": "hi" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "happy");
    assert_eq!(body["score"], 0);
    assert_eq!(body["confidence"], 0.0);
}

#[tokio::test]
async fn test_detect_mood_requires_text() {
    let server = create_test_server();

    for payload in [json!({ "text": "" }), json!({ "language": "en" })] {
        let response = server.post("/api/detect-mood").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Text is required");
        assert_eq!(body["code"], "INVALID_INPUT");
    }
}

#[tokio::test]
async fn test_detect_mood_rejects_malformed_json() {
    let server = create_test_server();

    let response = server
        .post("/api/detect-mood")
        .text("{\"text\": ")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_playlist_calm_english() {
    let server = create_test_server();

    let response = server
        .post("/api/generate-playlist")
        .json(&json!({ "mood": "calm", "language": "en" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "calm");
    assert_eq!(body["language"], "en");
    assert_eq!(body["count"], 10);

    let songs = body["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 10);
    assert_eq!(songs[0]["title"], "Weightless");
    assert_eq!(songs[9]["title"], "River Flows in You");
    assert!(songs[0]["reason"].is_string());
}

#[tokio::test]
async fn test_generate_playlist_hindi() {
    let server = create_test_server();

    let response = server
        .post("/api/generate-playlist")
        .json(&json!({ "mood": "happy", "language": "hi" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["language"], "hi");
    assert_eq!(body["songs"][0]["title"], "Badtameez Dil");
}

#[tokio::test]
async fn test_generate_playlist_unknown_mood_uses_happy() {
    let server = create_test_server();

    let response = server
        .post("/api/generate-playlist")
        .json(&json!({ "mood": "nostalgic" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "nostalgic");
    assert_eq!(body["language"], "en");
    assert_eq!(body["songs"][0]["title"], "Happy");
}

#[tokio::test]
async fn test_generate_playlist_unknown_language_uses_english_table() {
    let server = create_test_server();

    let response = server
        .post("/api/generate-playlist")
        .json(&json!({ "mood": "calm", "language": "fr" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "calm");
    assert_eq!(body["language"], "fr");
    assert_eq!(body["songs"][0]["title"], "Weightless");
}

#[tokio::test]
async fn test_generate_playlist_requires_mood() {
    let server = create_test_server();

    for payload in [json!({ "mood": "" }), json!({ "language": "hi" })] {
        let response = server.post("/api/generate-playlist").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Mood is required");
    }
}

#[tokio::test]
async fn test_list_moods() {
    let server = create_test_server();

    let response = server.get("/api/moods").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["language"], "en");
    let moods = body["moods"].as_array().unwrap();
    assert_eq!(moods.len(), 6);
    assert_eq!(moods[0]["id"], "sad");
    assert_eq!(moods[0]["position"], 0);
    assert_eq!(moods[5]["id"], "romantic");
}

#[tokio::test]
async fn test_list_moods_hindi_names() {
    let server = create_test_server();

    let en: Value = server.get("/api/moods").await.json();
    let hi: Value = server.get("/api/moods?language=hi").await.json();

    assert_eq!(hi["language"], "hi");
    assert_eq!(en["moods"][2]["id"], hi["moods"][2]["id"]);
    assert_ne!(en["moods"][2]["name"], hi["moods"][2]["name"]);
}

#[tokio::test]
async fn test_share_playlist() {
    let server = create_test_server();

    let response = server
        .post("/api/share-playlist")
        .json(&json!({ "mood": "calm" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "My Calm Mood Playlist");

    let text = body["text"].as_str().unwrap();
    assert!(text.starts_with("😌 My Calm Mood Playlist from Mood Tune AI\n\n1. Weightless - "));
    assert!(text.ends_with("🎵 Create your own mood playlist at Mood Tune AI!"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = create_test_server();

    let response = server.get("/api/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
