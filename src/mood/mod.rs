//! Mood classification from free text.
//!
//! Each mood owns a keyword dictionary per language. The mood whose keywords
//! occur most often in the input wins; ties go to the mood declared first in
//! [`MoodLabel::ALL`]. When no keyword matches at all, the lexical sentiment
//! score decides between happy, sad and calm.

pub mod keywords;
pub mod moodometer;

pub use keywords::{keyword_score, keywords};
pub use moodometer::{MoodometerStop, MOODOMETER};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::language::Language;
use crate::sentiment::SentimentAnalyzer;

/// Closed set of moods served by the playlist tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Sad,
    Angry,
    Calm,
    Energetic,
    Romantic,
}

impl MoodLabel {
    /// All moods in declaration order (also the keyword tie-break order)
    pub const ALL: [MoodLabel; 6] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Angry,
        MoodLabel::Calm,
        MoodLabel::Energetic,
        MoodLabel::Romantic,
    ];

    /// Mood used when a requested mood name is not recognized
    pub const DEFAULT: MoodLabel = MoodLabel::Happy;

    /// Lowercase identifier used on the wire
    pub fn id(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Romantic => "romantic",
        }
    }

    /// Look up a mood by its exact identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Outcome of classifying one piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: MoodLabel,
    /// Lexical sentiment score of the whole input
    pub raw_sentiment_score: i32,
    /// `min(|score| / 10, 1)`, derived from the sentiment score alone
    pub confidence: f64,
}

/// Which rule produced the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    Keywords,
    Sentiment,
}

/// Keyword + sentiment mood classifier.
///
/// Holds the sentiment lexicon; cheap to share behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct MoodClassifier {
    sentiment: SentimentAnalyzer,
}

impl MoodClassifier {
    /// Create a classifier over the built-in lexicon
    pub fn new() -> Self {
        Self::with_analyzer(SentimentAnalyzer::new())
    }

    /// Create a classifier over a specific sentiment analyzer
    pub fn with_analyzer(sentiment: SentimentAnalyzer) -> Self {
        Self { sentiment }
    }

    pub fn sentiment(&self) -> &SentimentAnalyzer {
        &self.sentiment
    }

    /// Classify `text` using the dictionaries for `language`.
    ///
    /// Fails only when `text` is empty.
    pub fn classify(&self, text: &str, language: Language) -> Result<ClassificationResult> {
        self.classify_detailed(text, language)
            .map(|(result, _)| result)
    }

    /// Classify and also report which rule picked the label
    pub fn classify_detailed(
        &self,
        text: &str,
        language: Language,
    ) -> Result<(ClassificationResult, LabelSource)> {
        if text.is_empty() {
            return Err(AppError::InvalidInput("Text is required".to_string()));
        }

        let score = self.sentiment.score(text);
        let text_lower = text.to_lowercase();

        let (label, source) = match best_keyword_match(&text_lower, language) {
            Some(label) => (label, LabelSource::Keywords),
            None => (sentiment_fallback(score), LabelSource::Sentiment),
        };

        debug!(
            mood = %label,
            score,
            language = %language,
            source = ?source,
            "Classified mood"
        );

        Ok((
            ClassificationResult {
                label,
                raw_sentiment_score: score,
                confidence: confidence(score),
            },
            source,
        ))
    }
}

/// Mood with the highest keyword count, first in declaration order on ties.
/// `None` when no keyword of any mood occurs.
fn best_keyword_match(text_lower: &str, language: Language) -> Option<MoodLabel> {
    let mut best: Option<(MoodLabel, usize)> = None;

    for mood in MoodLabel::ALL {
        let count = keyword_score(mood, language, text_lower);
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((mood, count));
        }
    }

    best.map(|(mood, _)| mood)
}

/// Label chosen from the sentiment score when no keyword matched.
///
/// Zero and small positive scores land on happy, small negative scores on
/// calm. The asymmetry is intentional until a single default is agreed on.
pub fn sentiment_fallback(score: i32) -> MoodLabel {
    if score > 2 {
        MoodLabel::Happy
    } else if score < -2 {
        MoodLabel::Sad
    } else if score < 0 {
        MoodLabel::Calm
    } else {
        MoodLabel::Happy
    }
}

/// Confidence derived from the sentiment magnitude, clamped to `[0, 1]`
pub fn confidence(score: i32) -> f64 {
    (f64::from(score).abs() / 10.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classifier() -> MoodClassifier {
        MoodClassifier::new()
    }

    #[test]
    fn test_mood_label_ids() {
        for mood in MoodLabel::ALL {
            assert_eq!(MoodLabel::from_id(mood.id()), Some(mood));
            assert_eq!(
                serde_json::to_string(&mood).unwrap(),
                format!("\"{}\"", mood.id())
            );
        }
        assert_eq!(MoodLabel::from_id("Happy"), None);
        assert_eq!(MoodLabel::from_id("stressed"), None);
    }

    #[test]
    fn test_happy_and_excited() {
        let result = classifier()
            .classify("I am so happy and excited today", Language::En)
            .unwrap();

        assert_eq!(result.label, MoodLabel::Happy);
        assert_eq!(result.raw_sentiment_score, 6);
        assert!((result.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text_is_invalid() {
        let err = classifier().classify("", Language::En).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_whitespace_text_is_accepted() {
        let result = classifier().classify("   ", Language::En).unwrap();
        assert_eq!(result.label, MoodLabel::Happy);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_single_keyword_classifies_as_its_mood() {
        let classifier = classifier();

        for language in Language::ALL {
            for mood in MoodLabel::ALL {
                for keyword in keywords(mood, language) {
                    // Skip keywords that also hit another mood's dictionary
                    let overlaps = MoodLabel::ALL.iter().any(|other| {
                        *other != mood
                            && keywords(*other, language)
                                .iter()
                                .any(|k| keyword.contains(k))
                    });
                    if overlaps {
                        continue;
                    }

                    let result = classifier.classify(keyword, language).unwrap();
                    assert_eq!(
                        result.label, mood,
                        "keyword {keyword:?} ({language}) classified as {}",
                        result.label
                    );
                }
            }
        }
    }

    #[test]
    fn test_tie_goes_to_first_declared_mood() {
        let classifier = classifier();

        // "love" is both a happy and a romantic keyword
        let result = classifier.classify("love", Language::En).unwrap();
        assert_eq!(result.label, MoodLabel::Happy);

        // "unhappy" also contains "happy": one point each, happy first
        let result = classifier.classify("unhappy", Language::En).unwrap();
        assert_eq!(result.label, MoodLabel::Happy);

        // angry (declared before calm) wins a 1-1 tie
        let result = classifier.classify("calm but angry", Language::En).unwrap();
        assert_eq!(result.label, MoodLabel::Angry);
    }

    #[test]
    fn test_highest_keyword_count_wins() {
        let result = classifier()
            .classify("love on a valentine date with my sweetheart", Language::En)
            .unwrap();
        assert_eq!(result.label, MoodLabel::Romantic);
    }

    #[test]
    fn test_keyword_label_keeps_sentiment_confidence() {
        // "still" is a calm keyword with no lexicon weight
        let result = classifier().classify("still", Language::En).unwrap();
        assert_eq!(result.label, MoodLabel::Calm);
        assert_eq!(result.raw_sentiment_score, 0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_sentiment_fallback_branches() {
        assert_eq!(sentiment_fallback(3), MoodLabel::Happy);
        assert_eq!(sentiment_fallback(-3), MoodLabel::Sad);
        assert_eq!(sentiment_fallback(-2), MoodLabel::Calm);
        assert_eq!(sentiment_fallback(-1), MoodLabel::Calm);
        assert_eq!(sentiment_fallback(0), MoodLabel::Happy);
        assert_eq!(sentiment_fallback(2), MoodLabel::Happy);
    }

    #[test]
    fn test_fallback_used_without_keywords() {
        let classifier = classifier();

        let (result, source) = classifier
            .classify_detailed("what a terrible awful week", Language::En)
            .unwrap();
        assert_eq!(source, LabelSource::Sentiment);
        assert_eq!(result.label, MoodLabel::Sad);
        assert_eq!(result.raw_sentiment_score, -6);

        let (result, source) = classifier
            .classify_detailed("I am so happy", Language::En)
            .unwrap();
        assert_eq!(source, LabelSource::Keywords);
        assert_eq!(result.label, MoodLabel::Happy);

        let result = classifier.classify("I feel tired", Language::En).unwrap();
        assert_eq!(result.label, MoodLabel::Calm);
    }

    #[test]
    fn test_fallback_scores_everyday_vocabulary() {
        let (result, source) = classifier()
            .classify_detailed("crazy weird disaster", Language::En)
            .unwrap();

        assert_eq!(source, LabelSource::Sentiment);
        assert_eq!(result.label, MoodLabel::Sad);
        assert_eq!(result.raw_sentiment_score, -6);
        assert!((result.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_hindi_keywords() {
        let classifier = classifier();

        let result = classifier.classify("आज मैं बहुत उदास हूं", Language::Hi).unwrap();
        assert_eq!(result.label, MoodLabel::Sad);
        assert_eq!(result.raw_sentiment_score, 0);

        let result = classifier.classify("मुझे गुस्सा आ रहा है", Language::Hi).unwrap();
        assert_eq!(result.label, MoodLabel::Angry);
    }

    #[test]
    fn test_language_selects_dictionary() {
        // English keywords are not consulted for Hindi input
        let (result, source) = classifier()
            .classify_detailed("angry", Language::Hi)
            .unwrap();
        assert_eq!(source, LabelSource::Sentiment);
        assert_eq!(result.label, MoodLabel::Sad);
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(confidence(0), 0.0);
        assert!((confidence(-4) - 0.4).abs() < 1e-9);
        assert_eq!(confidence(10), 1.0);
        assert_eq!(confidence(-50), 1.0);
    }

    #[test]
    fn test_deterministic() {
        let classifier = classifier();
        let a = classifier.classify("pumped and ready", Language::En).unwrap();
        let b = classifier.classify("pumped and ready", Language::En).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.label, MoodLabel::Energetic);
    }

    proptest! {
        #[test]
        fn confidence_always_in_unit_range(score in any::<i32>()) {
            let c = confidence(score);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn classify_confidence_in_unit_range(text in ".{1,64}") {
            let result = MoodClassifier::new().classify(&text, Language::En).unwrap();
            prop_assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}
