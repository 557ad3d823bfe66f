//! Playlist API route handlers.

use axum::Json;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::language::Language;
use crate::playlist::{select_by_name, share_message, ShareMessage};
use crate::types::{PlaylistRequest, PlaylistResponse};

use super::extractors::ApiJson;

fn required_mood(req: &PlaylistRequest) -> Result<&str> {
    req.mood
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Mood is required".to_string()))
}

/// POST /api/generate-playlist
///
/// Return the curated playlist for a mood. The response echoes the requested
/// mood and language even when the lookup fell back to a default table.
pub async fn generate_playlist(
    ApiJson(req): ApiJson<PlaylistRequest>,
) -> Result<Json<PlaylistResponse>> {
    let mood = required_mood(&req)?;
    let requested_language = req.language.as_deref().unwrap_or(Language::default().tag());
    let language = Language::resolve(req.language.as_deref());

    let playlist = select_by_name(mood, language)?;
    if playlist.mood.id() != mood {
        debug!(requested = mood, table = %playlist.mood, "Unknown mood, using default table");
    }

    info!(mood, %language, count = playlist.len(), "Playlist generated");

    Ok(Json(PlaylistResponse::new(
        mood.to_string(),
        requested_language.to_string(),
        playlist,
    )))
}

/// POST /api/share-playlist
///
/// Render the share message for a mood's playlist.
pub async fn share_playlist(ApiJson(req): ApiJson<PlaylistRequest>) -> Result<Json<ShareMessage>> {
    let mood = required_mood(&req)?;
    let language = Language::resolve(req.language.as_deref());

    let playlist = select_by_name(mood, language)?;

    Ok(Json(share_message(mood, playlist.tracks)))
}
