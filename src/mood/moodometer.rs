//! The moodometer: a six-stop slider that picks a mood directly.

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::language::Language;

use super::MoodLabel;

/// One stop on the moodometer scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodometerStop {
    pub mood: MoodLabel,
    pub emoji: &'static str,
    /// English display name
    pub en: &'static str,
    /// Hindi display name
    pub hi: &'static str,
}

impl MoodometerStop {
    /// Display name in the given language
    pub fn display_name(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Hi => self.hi,
        }
    }
}

/// Slider stops, indexed by slider position
pub static MOODOMETER: [MoodometerStop; 6] = [
    MoodometerStop {
        mood: MoodLabel::Sad,
        emoji: "😢",
        en: "Sad",
        hi: "दुखी",
    },
    MoodometerStop {
        mood: MoodLabel::Angry,
        emoji: "😠",
        en: "Angry",
        hi: "गुस्सा",
    },
    MoodometerStop {
        mood: MoodLabel::Happy,
        emoji: "😊",
        en: "Happy",
        hi: "खुश",
    },
    MoodometerStop {
        mood: MoodLabel::Calm,
        emoji: "😌",
        en: "Calm",
        hi: "शांत",
    },
    MoodometerStop {
        mood: MoodLabel::Energetic,
        emoji: "⚡",
        en: "Energetic",
        hi: "ऊर्जावान",
    },
    MoodometerStop {
        mood: MoodLabel::Romantic,
        emoji: "💕",
        en: "Romantic",
        hi: "रोमांटिक",
    },
];

/// Emoji shown when a mood has no moodometer stop
pub const FALLBACK_EMOJI: &str = "🎵";

/// Stop at a slider position
pub fn stop_at(position: usize) -> Result<&'static MoodometerStop> {
    MOODOMETER.get(position).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "Moodometer position must be between 0 and {}, got {position}",
            MOODOMETER.len() - 1
        ))
    })
}

/// Stop for a mood identifier, if the mood is on the scale
pub fn stop_for(mood_id: &str) -> Option<&'static MoodometerStop> {
    MOODOMETER.iter().find(|stop| stop.mood.id() == mood_id)
}

/// Emoji for a mood identifier
pub fn emoji_for(mood_id: &str) -> &'static str {
    stop_for(mood_id).map_or(FALLBACK_EMOJI, |stop| stop.emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_order() {
        let moods: Vec<_> = MOODOMETER.iter().map(|s| s.mood).collect();
        assert_eq!(
            moods,
            vec![
                MoodLabel::Sad,
                MoodLabel::Angry,
                MoodLabel::Happy,
                MoodLabel::Calm,
                MoodLabel::Energetic,
                MoodLabel::Romantic,
            ]
        );
    }

    #[test]
    fn test_every_mood_on_scale() {
        for mood in MoodLabel::ALL {
            assert!(stop_for(mood.id()).is_some(), "{mood} missing from moodometer");
        }
    }

    #[test]
    fn test_stop_at() {
        assert_eq!(stop_at(2).unwrap().mood, MoodLabel::Happy);
        assert_eq!(stop_at(5).unwrap().display_name(Language::Hi), "रोमांटिक");
        assert!(matches!(stop_at(6), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_emoji_for() {
        assert_eq!(emoji_for("calm"), "😌");
        assert_eq!(emoji_for("stressed"), FALLBACK_EMOJI);
    }
}
