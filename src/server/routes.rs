//! Service-level route handlers.

use axum::{extract::State, Json};

use crate::language::Language;
use crate::mood::MoodLabel;
use crate::types::{ConfigResponse, HealthResponse, HealthStatus, ServerInfo};

use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check endpoint
///
/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Ok,
        message: "Mood Tune AI API is running".to_string(),
    })
}

/// Configuration endpoint
///
/// GET /api/config
pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let server = &state.config.server;

    Json(ConfigResponse {
        version: VERSION.to_string(),
        server: ServerInfo {
            host: server.host.clone(),
            port: server.port,
            cors: server.cors,
            static_files: server.static_dir.is_some(),
        },
        languages: Language::ALL.to_vec(),
        moods: MoodLabel::ALL.to_vec(),
    })
}
