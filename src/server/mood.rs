//! Mood detection API route handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use crate::error::{AppError, Result};
use crate::language::Language;
use crate::mood::MOODOMETER;
use crate::types::{DetectMoodRequest, DetectMoodResponse, MoodInfo, MoodListQuery, MoodListResponse};

use super::extractors::ApiJson;
use super::AppState;

/// POST /api/detect-mood
///
/// Classify the mood of free text.
pub async fn detect_mood(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DetectMoodRequest>,
) -> Result<Json<DetectMoodResponse>> {
    let text = req
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Text is required".to_string()))?;
    let language = Language::resolve(req.language.as_deref());

    let result = state.classifier.classify(&text, language)?;

    info!(
        mood = %result.label,
        score = result.raw_sentiment_score,
        confidence = result.confidence,
        %language,
        "Mood detected"
    );

    Ok(Json(result.into()))
}

/// GET /api/moods
///
/// List the moodometer scale with display names for the requested language.
pub async fn list_moods(Query(query): Query<MoodListQuery>) -> Json<MoodListResponse> {
    let language = Language::resolve(query.language.as_deref());

    let moods = MOODOMETER
        .iter()
        .enumerate()
        .map(|(position, stop)| MoodInfo::from_stop(position, stop, language))
        .collect();

    Json(MoodListResponse { moods, language })
}
