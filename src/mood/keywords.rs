//! Keyword dictionaries for mood detection.
//!
//! A mood scores one point for every distinct keyword that occurs anywhere in
//! the lowercased input (substring match, so "down" also hits "download").
//! Some keywords are shared between moods on purpose ("love" is both happy
//! and romantic).

use crate::language::Language;

use super::MoodLabel;

const HAPPY_EN: &[&str] = &[
    "happy",
    "joy",
    "excited",
    "amazing",
    "great",
    "good",
    "wonderful",
    "ecstatic",
    "cheerful",
    "delighted",
    "thrilled",
    "blessed",
    "fantastic",
    "awesome",
    "love",
    "loving",
];

const HAPPY_HI: &[&str] = &[
    "खुश",
    "खुशी",
    "प्रसन्न",
    "आनंद",
    "मस्त",
    "बढ़िया",
    "शानदार",
    "अच्छा",
    "उत्साहित",
    "रोमांचित",
    "धन्य",
    "प्यार",
];

const SAD_EN: &[&str] = &[
    "sad",
    "depressed",
    "unhappy",
    "miserable",
    "down",
    "lonely",
    "heartbroken",
    "crying",
    "tears",
    "hurt",
    "pain",
    "sorrow",
    "grief",
    "blue",
    "melancholy",
];

const SAD_HI: &[&str] = &[
    "दुखी",
    "उदास",
    "अकेला",
    "रोना",
    "आंसू",
    "दर्द",
    "पीड़ा",
    "गम",
    "निराश",
    "टूटा",
    "अवसाद",
];

const ANGRY_EN: &[&str] = &[
    "angry",
    "mad",
    "furious",
    "annoyed",
    "irritated",
    "frustrated",
    "rage",
    "hate",
    "pissed",
    "upset",
    "livid",
];

const ANGRY_HI: &[&str] = &[
    "गुस्सा",
    "क्रोध",
    "नाराज",
    "चिढ़",
    "परेशान",
    "झुंझलाहट",
    "रोष",
    "नफरत",
    "क्रोधित",
];

const CALM_EN: &[&str] = &[
    "calm", "peaceful", "relaxed", "chill", "serene", "tranquil", "mellow", "zen", "quiet", "still",
];

const CALM_HI: &[&str] = &[
    "शांत",
    "सुकून",
    "आराम",
    "ठंडा",
    "स्थिर",
    "निर्मल",
    "चैन",
    "प्रशांत",
];

const ENERGETIC_EN: &[&str] = &[
    "energetic",
    "pumped",
    "hyped",
    "motivated",
    "ready",
    "fired",
    "powerful",
    "strong",
    "active",
];

const ENERGETIC_HI: &[&str] = &[
    "ऊर्जावान",
    "जोश",
    "उत्साह",
    "प्रेरित",
    "तैयार",
    "शक्तिशाली",
    "मजबूत",
    "सक्रिय",
    "ताकतवर",
];

const ROMANTIC_EN: &[&str] = &[
    "romantic",
    "love",
    "crush",
    "dating",
    "relationship",
    "valentine",
    "sweetheart",
    "affection",
];

const ROMANTIC_HI: &[&str] = &[
    "रोमांटिक",
    "प्यार",
    "प्रेम",
    "मोहब्बत",
    "इश्क",
    "दिल",
    "प्रेमी",
    "स्नेह",
];

/// Keyword list for a mood in the given language
pub fn keywords(mood: MoodLabel, language: Language) -> &'static [&'static str] {
    match (mood, language) {
        (MoodLabel::Happy, Language::En) => HAPPY_EN,
        (MoodLabel::Happy, Language::Hi) => HAPPY_HI,
        (MoodLabel::Sad, Language::En) => SAD_EN,
        (MoodLabel::Sad, Language::Hi) => SAD_HI,
        (MoodLabel::Angry, Language::En) => ANGRY_EN,
        (MoodLabel::Angry, Language::Hi) => ANGRY_HI,
        (MoodLabel::Calm, Language::En) => CALM_EN,
        (MoodLabel::Calm, Language::Hi) => CALM_HI,
        (MoodLabel::Energetic, Language::En) => ENERGETIC_EN,
        (MoodLabel::Energetic, Language::Hi) => ENERGETIC_HI,
        (MoodLabel::Romantic, Language::En) => ROMANTIC_EN,
        (MoodLabel::Romantic, Language::Hi) => ROMANTIC_HI,
    }
}

/// Count how many distinct keywords of `mood` occur in already-lowercased text
pub fn keyword_score(mood: MoodLabel, language: Language, text_lower: &str) -> usize {
    keywords(mood, language)
        .iter()
        .filter(|keyword| text_lower.contains(*keyword))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_mood_has_keywords() {
        for language in Language::ALL {
            for mood in MoodLabel::ALL {
                assert!(
                    !keywords(mood, language).is_empty(),
                    "{mood} has no keywords for {language}"
                );
            }
        }
    }

    #[test]
    fn test_keywords_are_distinct_within_a_mood() {
        for language in Language::ALL {
            for mood in MoodLabel::ALL {
                let list = keywords(mood, language);
                let unique: HashSet<_> = list.iter().collect();
                assert_eq!(unique.len(), list.len(), "{mood}/{language} has duplicates");
            }
        }
    }

    #[test]
    fn test_keyword_score_counts_substrings() {
        assert_eq!(keyword_score(MoodLabel::Sad, Language::En, "downloading"), 1);
        assert_eq!(
            keyword_score(MoodLabel::Happy, Language::En, "happy happy joy"),
            2
        );
        assert_eq!(keyword_score(MoodLabel::Calm, Language::En, "furious"), 0);
    }

    #[test]
    fn test_keyword_score_hindi() {
        assert_eq!(keyword_score(MoodLabel::Happy, Language::Hi, "मैं बहुत खुश हूं"), 1);
        assert_eq!(keyword_score(MoodLabel::Calm, Language::Hi, "प्रशांत"), 2);
    }

    #[test]
    fn test_shared_keywords() {
        assert!(keywords(MoodLabel::Happy, Language::En).contains(&"love"));
        assert!(keywords(MoodLabel::Romantic, Language::En).contains(&"love"));
        assert!(keywords(MoodLabel::Happy, Language::Hi).contains(&"प्यार"));
        assert!(keywords(MoodLabel::Romantic, Language::Hi).contains(&"प्यार"));
    }
}
