//! Offline mood preview.
//!
//! A lightweight simulator used when the classification service is not
//! reachable. It has its own five-profile vocabulary (including `stressed`,
//! which the server classifier does not know) and is intentionally not
//! reconciled with [`crate::mood::MoodClassifier`].

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Moods known to the preview simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMood {
    Happy,
    Stressed,
    Sad,
    Angry,
    Calm,
    Excited,
    Neutral,
}

impl std::fmt::Display for PreviewMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Happy => "happy",
            Self::Stressed => "stressed",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Calm => "calm",
            Self::Excited => "excited",
            Self::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

/// Named emotion with an intensity from 0 to 100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emotion {
    pub emotion: String,
    pub intensity: u8,
}

/// A simulated mood reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPreview {
    pub primary: PreviewMood,
    pub secondary: String,
    pub confidence: f32,
    pub emotions: Vec<Emotion>,
    pub transcript: String,
}

struct Profile {
    primary: PreviewMood,
    secondary: &'static str,
    confidence: f32,
    emotions: [(&'static str, u8); 4],
    /// Any of these substrings selects the profile
    triggers: &'static [&'static str],
}

// Table order is the random-pick order; triggers are checked in TRIGGER_ORDER.
const PROFILES: [Profile; 5] = [
    Profile {
        primary: PreviewMood::Happy,
        secondary: "energetic",
        confidence: 0.92,
        emotions: [("Joy", 85), ("Energy", 78), ("Confidence", 90), ("Excitement", 72)],
        triggers: &["happy", "amazing", "great"],
    },
    Profile {
        primary: PreviewMood::Stressed,
        secondary: "overwhelmed",
        confidence: 0.88,
        emotions: [("Anxiety", 82), ("Pressure", 90), ("Fatigue", 65), ("Worry", 75)],
        triggers: &["stress", "overwhelm"],
    },
    Profile {
        primary: PreviewMood::Sad,
        secondary: "lonely",
        confidence: 0.88,
        emotions: [("Sadness", 80), ("Loneliness", 75), ("Melancholy", 70), ("Nostalgia", 60)],
        triggers: &["sad", "lonely", "down"],
    },
    Profile {
        primary: PreviewMood::Angry,
        secondary: "frustrated",
        confidence: 0.90,
        emotions: [("Anger", 85), ("Frustration", 90), ("Irritation", 78), ("Intensity", 88)],
        triggers: &["angry", "mad", "frustrated"],
    },
    Profile {
        primary: PreviewMood::Calm,
        secondary: "peaceful",
        confidence: 0.87,
        emotions: [("Serenity", 85), ("Peace", 90), ("Relaxation", 82), ("Mindfulness", 75)],
        triggers: &["calm", "peaceful", "relax"],
    },
];

/// Profile indices in the order their triggers are checked
const TRIGGER_ORDER: [usize; 5] = [1, 0, 2, 3, 4];

fn to_preview(profile: &Profile, transcript: &str) -> MoodPreview {
    MoodPreview {
        primary: profile.primary,
        secondary: profile.secondary.to_string(),
        confidence: profile.confidence,
        emotions: profile
            .emotions
            .iter()
            .map(|(emotion, intensity)| Emotion {
                emotion: (*emotion).to_string(),
                intensity: *intensity,
            })
            .collect(),
        transcript: transcript.to_string(),
    }
}

/// Simulate a mood reading for `input`.
///
/// Keyword triggers are checked first (stress, happy, sad, angry, calm);
/// without a trigger the profile is picked uniformly at random.
pub fn simulate<R: Rng>(input: &str, rng: &mut R) -> MoodPreview {
    let lower = input.to_lowercase();

    let index = TRIGGER_ORDER
        .iter()
        .copied()
        .find(|&i| PROFILES[i].triggers.iter().any(|t| lower.contains(t)))
        .unwrap_or_else(|| rng.random_range(0..PROFILES.len()));

    to_preview(&PROFILES[index], input)
}

/// Manual slider positions, each 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderValues {
    pub energy: u8,
    pub positivity: u8,
    pub intensity: u8,
    pub calmness: u8,
}

impl Default for SliderValues {
    fn default() -> Self {
        Self {
            energy: 50,
            positivity: 50,
            intensity: 50,
            calmness: 50,
        }
    }
}

/// Confidence reported for manually set moods
pub const SLIDER_CONFIDENCE: f32 = 0.85;

/// Derive a mood reading from manual slider positions
pub fn from_sliders(values: SliderValues) -> MoodPreview {
    let SliderValues {
        energy,
        positivity,
        intensity,
        calmness,
    } = values;

    let primary = if positivity > 70 && energy > 60 {
        PreviewMood::Happy
    } else if positivity < 30 {
        PreviewMood::Sad
    } else if intensity > 70 && energy > 60 {
        PreviewMood::Angry
    } else if calmness > 70 {
        PreviewMood::Calm
    } else if energy < 30 && intensity > 50 {
        PreviewMood::Stressed
    } else if energy > 80 {
        PreviewMood::Excited
    } else {
        PreviewMood::Neutral
    };

    let secondary = if calmness > 60 {
        "peaceful"
    } else if intensity > 60 {
        "intense"
    } else {
        "balanced"
    };

    MoodPreview {
        primary,
        secondary: secondary.to_string(),
        confidence: SLIDER_CONFIDENCE,
        emotions: vec![
            Emotion {
                emotion: "Energy".to_string(),
                intensity: energy,
            },
            Emotion {
                emotion: "Positivity".to_string(),
                intensity: positivity,
            },
            Emotion {
                emotion: "Intensity".to_string(),
                intensity,
            },
            Emotion {
                emotion: "Calmness".to_string(),
                intensity: calmness,
            },
        ],
        transcript: format!(
            "Manual mood set: Energy {energy}%, Positivity {positivity}%, \
             Intensity {intensity}%, Calmness {calmness}%"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_trigger_selects_profile() {
        let mut rng = rng();

        let preview = simulate("Today was AMAZING", &mut rng);
        assert_eq!(preview.primary, PreviewMood::Happy);
        assert_eq!(preview.secondary, "energetic");
        assert_eq!(preview.confidence, 0.92);
        assert_eq!(preview.transcript, "Today was AMAZING");

        assert_eq!(simulate("feeling down", &mut rng).primary, PreviewMood::Sad);
        assert_eq!(simulate("so mad", &mut rng).primary, PreviewMood::Angry);
        assert_eq!(simulate("need to relax", &mut rng).primary, PreviewMood::Calm);
    }

    #[test]
    fn test_stress_checked_before_happy() {
        let preview = simulate("happy but stressed", &mut rng());
        assert_eq!(preview.primary, PreviewMood::Stressed);
        assert_eq!(preview.emotions.len(), 4);
        assert_eq!(preview.emotions[1].emotion, "Pressure");
    }

    #[test]
    fn test_random_fallback_picks_a_profile() {
        let mut rng = rng();
        let canned = [
            PreviewMood::Happy,
            PreviewMood::Stressed,
            PreviewMood::Sad,
            PreviewMood::Angry,
            PreviewMood::Calm,
        ];
        for _ in 0..32 {
            let preview = simulate("the weather is fine", &mut rng);
            assert!(canned.contains(&preview.primary));
        }
    }

    #[test]
    fn test_random_fallback_is_reproducible_with_seed() {
        let a = simulate("hmm", &mut StdRng::seed_from_u64(42));
        let b = simulate("hmm", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sliders_default_is_neutral() {
        let preview = from_sliders(SliderValues::default());
        assert_eq!(preview.primary, PreviewMood::Neutral);
        assert_eq!(preview.secondary, "balanced");
        assert_eq!(preview.confidence, SLIDER_CONFIDENCE);
        assert_eq!(
            preview.transcript,
            "Manual mood set: Energy 50%, Positivity 50%, Intensity 50%, Calmness 50%"
        );
    }

    #[test]
    fn test_slider_rules() {
        let mood = |energy, positivity, intensity, calmness| {
            from_sliders(SliderValues {
                energy,
                positivity,
                intensity,
                calmness,
            })
            .primary
        };

        assert_eq!(mood(61, 71, 50, 50), PreviewMood::Happy);
        assert_eq!(mood(90, 29, 90, 90), PreviewMood::Sad);
        assert_eq!(mood(61, 50, 71, 50), PreviewMood::Angry);
        assert_eq!(mood(50, 50, 50, 71), PreviewMood::Calm);
        assert_eq!(mood(29, 50, 51, 50), PreviewMood::Stressed);
        assert_eq!(mood(81, 50, 50, 50), PreviewMood::Excited);
    }

    #[test]
    fn test_slider_secondary() {
        let values = SliderValues {
            intensity: 80,
            ..SliderValues::default()
        };
        assert_eq!(from_sliders(values).secondary, "intense");

        let values = SliderValues {
            calmness: 61,
            intensity: 80,
            ..SliderValues::default()
        };
        assert_eq!(from_sliders(values).secondary, "peaceful");
    }
}
