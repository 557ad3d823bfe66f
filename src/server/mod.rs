//! HTTP server setup and routing.

mod extractors;
mod mood;
mod playlist;
mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::mood::MoodClassifier;

pub use extractors::ApiJson;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Mood classifier (lexicon built once at startup)
    pub classifier: Arc<MoodClassifier>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_classifier(config, MoodClassifier::new())
    }

    /// Create AppState around a specific classifier
    pub fn with_classifier(config: AppConfig, classifier: MoodClassifier) -> Self {
        Self {
            config: Arc::new(config),
            classifier: Arc::new(classifier),
        }
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Mood endpoints
        .route("/detect-mood", post(mood::detect_mood))
        .route("/moods", get(mood::list_moods))
        // Playlist endpoints
        .route("/generate-playlist", post(playlist::generate_playlist))
        .route("/share-playlist", post(playlist::share_playlist));

    let mut router = Router::new().nest("/api", api_routes);

    // Front-end assets for everything outside /api
    if let Some(dir) = &state.config.server.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    let mut router = router.layer(TraceLayer::new_for_http());
    if state.config.server.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}
