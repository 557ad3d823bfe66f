//! API request and response types for mood and playlist operations.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::mood::{ClassificationResult, MoodLabel, MoodometerStop};
use crate::playlist::{Playlist, Track};

/// Request to detect the mood of a piece of text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectMoodRequest {
    /// Free text or voice transcript
    #[serde(default)]
    pub text: Option<String>,
    /// Language tag: "en" (default) or "hi"
    #[serde(default)]
    pub language: Option<String>,
}

/// Detected mood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectMoodResponse {
    pub mood: MoodLabel,
    /// Raw lexical sentiment score
    pub score: i32,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
}

impl From<ClassificationResult> for DetectMoodResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            mood: result.label,
            score: result.raw_sentiment_score,
            confidence: result.confidence,
        }
    }
}

/// Request to build the playlist for a mood
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistRequest {
    /// Mood name, usually one returned by detect-mood or the moodometer
    #[serde(default)]
    pub mood: Option<String>,
    /// Language tag: "en" (default) or "hi"
    #[serde(default)]
    pub language: Option<String>,
}

/// Generated playlist
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistResponse {
    /// Mood as requested (unrecognized moods are echoed too)
    pub mood: String,
    pub songs: &'static [Track],
    pub count: usize,
    /// Language tag as requested; the table itself falls back to English
    pub language: String,
}

impl PlaylistResponse {
    pub fn new(requested_mood: String, requested_language: String, playlist: Playlist) -> Self {
        Self {
            mood: requested_mood,
            songs: playlist.tracks,
            count: playlist.len(),
            language: requested_language,
        }
    }
}

/// Query for the moodometer scale
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodListQuery {
    #[serde(default)]
    pub language: Option<String>,
}

/// One moodometer stop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodInfo {
    /// Slider position
    pub position: usize,
    pub id: MoodLabel,
    pub emoji: String,
    /// Display name in the requested language
    pub name: String,
}

impl MoodInfo {
    pub fn from_stop(position: usize, stop: &MoodometerStop, language: Language) -> Self {
        Self {
            position,
            id: stop.mood,
            emoji: stop.emoji.to_string(),
            name: stop.display_name(language).to_string(),
        }
    }
}

/// Response listing the moodometer scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodListResponse {
    pub moods: Vec<MoodInfo>,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::select;

    #[test]
    fn test_detect_request_defaults() {
        let req: DetectMoodRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_none());
        assert!(req.language.is_none());

        let req: DetectMoodRequest =
            serde_json::from_str(r#"{"text": "so calm", "language": "hi"}"#).unwrap();
        assert_eq!(req.text.as_deref(), Some("so calm"));
        assert_eq!(req.language.as_deref(), Some("hi"));
    }

    #[test]
    fn test_detect_request_null_text() {
        let req: DetectMoodRequest = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert!(req.text.is_none());
    }

    #[test]
    fn test_detect_response_shape() {
        let response = DetectMoodResponse::from(ClassificationResult {
            label: MoodLabel::Energetic,
            raw_sentiment_score: -12,
            confidence: 1.0,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"mood": "energetic", "score": -12, "confidence": 1.0})
        );
    }

    #[test]
    fn test_playlist_response_shape() {
        let response = PlaylistResponse::new(
            "angry".to_string(),
            "hi".to_string(),
            select(MoodLabel::Angry, Language::Hi),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mood"], "angry");
        assert_eq!(json["count"], 10);
        assert_eq!(json["language"], "hi");
        assert_eq!(json["songs"].as_array().unwrap().len(), 10);
        assert_eq!(json["songs"][0]["title"], "Apna Time Aayega");
    }

    #[test]
    fn test_playlist_response_echoes_requested_language() {
        let response = PlaylistResponse::new(
            "calm".to_string(),
            "fr".to_string(),
            select(MoodLabel::Calm, Language::En),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["language"], "fr");
        assert_eq!(json["songs"][0]["title"], "Weightless");
    }

    #[test]
    fn test_mood_info_from_stop() {
        let stop = crate::mood::MOODOMETER[3];
        let info = MoodInfo::from_stop(3, &stop, Language::Hi);

        assert_eq!(info.id, MoodLabel::Calm);
        assert_eq!(info.name, "शांत");
        assert_eq!(info.emoji, "😌");
    }
}
