//! Shared types for the mood tune API.
//!
//! These types are used across the application for request/response handling.

pub mod api;

use serde::{Deserialize, Serialize};

pub use api::*;

use crate::language::Language;
use crate::mood::MoodLabel;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

/// Configuration response (subset of config safe to expose)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub version: String,
    pub server: ServerInfo,
    pub languages: Vec<Language>,
    pub moods: Vec<MoodLabel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
    pub cors: bool,
    pub static_files: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_shape() {
        let health = HealthResponse {
            status: HealthStatus::Ok,
            message: "Mood Tune AI API is running".to_string(),
        };

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ok", "message": "Mood Tune AI API is running"})
        );
    }
}
