//! Curated playlists keyed by mood and language.
//!
//! Every `(language, mood)` pair has a fixed, hand-ordered table of ten
//! tracks. Selection is a pure lookup: no shuffling, ranking or filtering.

mod english;
mod hindi;
pub mod share;

pub use share::{share_message, ShareMessage};

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::language::Language;
use crate::mood::MoodLabel;

/// A single curated track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Why this track fits the mood
    #[serde(rename = "reason", skip_serializing_if = "Option::is_none")]
    pub explanation: Option<&'static str>,
}

impl Track {
    pub const fn new(title: &'static str, artist: &'static str) -> Self {
        Self {
            title,
            artist,
            album: None,
            year: None,
            explanation: None,
        }
    }

    pub const fn album(self, album: &'static str) -> Self {
        Self {
            album: Some(album),
            ..self
        }
    }

    pub const fn year(self, year: u16) -> Self {
        Self {
            year: Some(year),
            ..self
        }
    }

    pub const fn explanation(self, explanation: &'static str) -> Self {
        Self {
            explanation: Some(explanation),
            ..self
        }
    }
}

/// The track list for one `(language, mood)` key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playlist {
    pub mood: MoodLabel,
    pub language: Language,
    pub tracks: &'static [Track],
}

impl Playlist {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Track> {
        self.tracks.iter()
    }
}

fn table(mood: MoodLabel, language: Language) -> &'static [Track] {
    match language {
        Language::En => match mood {
            MoodLabel::Happy => english::HAPPY,
            MoodLabel::Sad => english::SAD,
            MoodLabel::Angry => english::ANGRY,
            MoodLabel::Calm => english::CALM,
            MoodLabel::Energetic => english::ENERGETIC,
            MoodLabel::Romantic => english::ROMANTIC,
        },
        Language::Hi => match mood {
            MoodLabel::Happy => hindi::HAPPY,
            MoodLabel::Sad => hindi::SAD,
            MoodLabel::Angry => hindi::ANGRY,
            MoodLabel::Calm => hindi::CALM,
            MoodLabel::Energetic => hindi::ENERGETIC,
            MoodLabel::Romantic => hindi::ROMANTIC,
        },
    }
}

/// Playlist for a known mood
pub fn select(mood: MoodLabel, language: Language) -> Playlist {
    Playlist {
        mood,
        language,
        tracks: table(mood, language),
    }
}

/// Playlist for a mood name as sent by a client.
///
/// An empty name is rejected. Names are matched exactly against the mood
/// identifiers; anything unrecognized gets the [`MoodLabel::DEFAULT`] table.
pub fn select_by_name(name: &str, language: Language) -> Result<Playlist> {
    if name.is_empty() {
        return Err(AppError::InvalidInput("Mood is required".to_string()));
    }

    let mood = MoodLabel::from_id(name).unwrap_or(MoodLabel::DEFAULT);
    Ok(select(mood, language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_has_ten_tracks() {
        for language in Language::ALL {
            for mood in MoodLabel::ALL {
                let playlist = select(mood, language);
                assert_eq!(playlist.len(), 10, "{language}/{mood}");
                assert_eq!(playlist.mood, mood);
                assert_eq!(playlist.language, language);
            }
        }
    }

    #[test]
    fn test_tracks_are_complete() {
        for language in Language::ALL {
            for mood in MoodLabel::ALL {
                for track in select(mood, language).iter() {
                    assert!(!track.title.is_empty());
                    assert!(!track.artist.is_empty());
                    assert!(track.album.is_some());
                    assert!(track.year.is_some());
                    assert!(track.explanation.is_some());
                }
            }
        }
    }

    #[test]
    fn test_english_calm_order() {
        let titles: Vec<_> = select(MoodLabel::Calm, Language::En)
            .iter()
            .map(|t| t.title)
            .collect();

        assert_eq!(
            titles,
            vec![
                "Weightless",
                "Breathe Me",
                "Holocene",
                "To Build a Home",
                "Clair de Lune",
                "Sunset Lover",
                "Banana Pancakes",
                "The A Team",
                "Skinny Love",
                "River Flows in You",
            ]
        );
    }

    #[test]
    fn test_select_is_deterministic() {
        let a = select(MoodLabel::Calm, Language::En);
        let b = select(MoodLabel::Calm, Language::En);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_vec(a.tracks).unwrap(),
            serde_json::to_vec(b.tracks).unwrap()
        );
    }

    #[test]
    fn test_languages_differ() {
        let en = select(MoodLabel::Sad, Language::En);
        let hi = select(MoodLabel::Sad, Language::Hi);
        assert_eq!(en.tracks[0].title, "Someone Like You");
        assert_eq!(hi.tracks[0].title, "Tum Hi Ho");
    }

    #[test]
    fn test_select_by_name() {
        let playlist = select_by_name("romantic", Language::Hi).unwrap();
        assert_eq!(playlist.mood, MoodLabel::Romantic);
        assert_eq!(playlist.tracks[0].title, "Tum Jo Aaye");
    }

    #[test]
    fn test_unknown_mood_falls_back_to_happy() {
        let playlist = select_by_name("stressed", Language::En).unwrap();
        assert_eq!(playlist.mood, MoodLabel::Happy);
        assert_eq!(playlist.tracks, select(MoodLabel::Happy, Language::En).tracks);

        // Matching is exact
        let playlist = select_by_name("Calm", Language::En).unwrap();
        assert_eq!(playlist.mood, MoodLabel::Happy);
    }

    #[test]
    fn test_empty_mood_is_invalid() {
        let err = select_by_name("", Language::En).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_track_serialization() {
        let track = select(MoodLabel::Happy, Language::En).tracks[0];
        let json = serde_json::to_value(track).unwrap();

        assert_eq!(json["title"], "Happy");
        assert_eq!(json["artist"], "Pharrell Williams");
        assert_eq!(json["album"], "G I R L");
        assert_eq!(json["year"], 2013);
        assert!(json["reason"].as_str().unwrap().starts_with("This upbeat anthem"));
        assert!(json.get("explanation").is_none());
    }

    #[test]
    fn test_track_optional_fields_skipped() {
        let track = Track::new("Untitled", "Nobody");
        let json = serde_json::to_string(&track).unwrap();
        assert_eq!(json, r#"{"title":"Untitled","artist":"Nobody"}"#);
    }
}
