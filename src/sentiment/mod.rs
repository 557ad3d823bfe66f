//! Lexicon-based sentiment scoring.
//!
//! Text is split into lowercase tokens and every token found in the AFINN
//! lexicon contributes its weight to the total score. A token directly
//! preceded by a negator ("not", "don't", ...) contributes the opposite weight.

pub mod lexicon;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

pub use lexicon::{AFINN, NEGATORS};

/// Characters treated as token separators in addition to whitespace
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"',
    '~', '(', ')',
];

/// A single scored token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenScore {
    pub token: String,
    pub score: i32,
}

/// Full result of a sentiment analysis pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Sum of all token contributions
    pub score: i32,
    /// Score divided by the number of tokens
    pub comparative: f64,
    /// Tokens in input order
    pub tokens: Vec<String>,
    /// Tokens that contributed a positive weight
    pub positive: Vec<String>,
    /// Tokens that contributed a negative weight
    pub negative: Vec<String>,
    /// Per-token contributions after negation
    pub calculation: Vec<TokenScore>,
}

/// Sentiment analyzer with an immutable word lexicon.
///
/// Build once and share; analysis never mutates the analyzer.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: HashMap<String, i32>,
    negators: HashSet<String>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Create an analyzer over the built-in AFINN lexicon
    pub fn new() -> Self {
        Self::with_lexicon(AFINN.iter().map(|(word, weight)| (*word, *weight)))
    }

    /// Create an analyzer over a custom lexicon
    pub fn with_lexicon<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let lexicon = entries
            .into_iter()
            .map(|(word, weight)| (word.to_lowercase(), weight))
            .collect();
        let negators = NEGATORS.iter().map(|n| (*n).to_string()).collect();

        Self { lexicon, negators }
    }

    /// Number of words in the lexicon
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Weight of a single word, if it is in the lexicon
    pub fn weight(&self, word: &str) -> Option<i32> {
        self.lexicon.get(word).copied()
    }

    /// Score a piece of text
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let tokens = tokenize(text);
        let mut analysis = SentimentAnalysis::default();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut weight) = self.weight(token) else {
                continue;
            };

            if i > 0 && self.negators.contains(&tokens[i - 1]) {
                weight = -weight;
            }

            if weight > 0 {
                analysis.positive.push(token.clone());
            } else if weight < 0 {
                analysis.negative.push(token.clone());
            }

            analysis.score += weight;
            analysis.calculation.push(TokenScore {
                token: token.clone(),
                score: weight,
            });
        }

        analysis.comparative = if tokens.is_empty() {
            0.0
        } else {
            f64::from(analysis.score) / tokens.len() as f64
        };
        analysis.tokens = tokens;

        analysis
    }

    /// Shorthand for `analyze(text).score`
    pub fn score(&self, text: &str) -> i32 {
        self.analyze(text).score
    }
}

/// Split text into lowercase tokens, dropping punctuation.
///
/// Apostrophes and hyphens stay inside tokens so that "don't" and
/// "well-being" survive as single words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || PUNCTUATION.contains(&c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("Hello, World! I'm (very) happy."),
            vec!["hello", "world", "i'm", "very", "happy"]
        );
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  so\n\ncalm\t now "), vec!["so", "calm", "now"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_analyze_sums_weights() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("I am so happy and excited today");

        assert_eq!(result.score, 6);
        assert_eq!(result.positive, vec!["happy", "excited"]);
        assert!(result.negative.is_empty());
        assert_eq!(result.tokens.len(), 7);
        assert!((result.comparative - 6.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_negative_text() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("terrible, awful day");

        assert_eq!(result.score, -6);
        assert_eq!(result.negative, vec!["terrible", "awful"]);
    }

    #[test]
    fn test_negation_flips_weight() {
        let analyzer = SentimentAnalyzer::new();

        assert_eq!(analyzer.score("good"), 3);
        assert_eq!(analyzer.score("not good"), -3);
        assert_eq!(analyzer.score("I don't like it"), -2);

        let result = analyzer.analyze("not good");
        assert_eq!(result.negative, vec!["good"]);
        assert_eq!(
            result.calculation,
            vec![TokenScore {
                token: "good".to_string(),
                score: -3
            }]
        );
    }

    #[test]
    fn test_negator_must_be_adjacent() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.score("not really good"), 3);
    }

    #[test]
    fn test_unknown_words_score_zero() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("मैं बहुत खुश हूं");

        assert_eq!(result.score, 0);
        assert_eq!(result.tokens.len(), 4);
        assert_eq!(result.comparative, 0.0);
    }

    #[test]
    fn test_empty_text() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("");

        assert_eq!(result.score, 0);
        assert_eq!(result.comparative, 0.0);
        assert!(result.tokens.is_empty());
    }

    #[test]
    fn test_custom_lexicon() {
        let analyzer = SentimentAnalyzer::with_lexicon([("Groovy", 4), ("meh", -1)]);

        assert_eq!(analyzer.len(), 2);
        assert_eq!(analyzer.score("GROOVY groovy meh"), 7);
        assert_eq!(analyzer.score("happy"), 0);
    }

    #[test]
    fn test_everyday_words_are_scored() {
        let analyzer = SentimentAnalyzer::new();

        for (word, weight) in [
            ("crazy", -2),
            ("weird", -2),
            ("disaster", -2),
            ("lol", 3),
            ("thanks", 2),
            ("help", 2),
            ("please", 1),
            ("shit", -4),
        ] {
            assert_eq!(analyzer.weight(word), Some(weight), "weight of {word:?}");
        }

        assert_eq!(analyzer.score("thanks for the help lol"), 7);
        assert_eq!(analyzer.score("please help, this is shit"), -1);
    }

    #[test]
    fn test_builtin_lexicon_loaded() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.len(), AFINN.len());
        assert!(analyzer.len() > 3000);
        assert_eq!(analyzer.weight("thrilled"), Some(5));
        assert_eq!(analyzer.weight("pissed"), Some(-4));
        assert_eq!(analyzer.weight("zzz"), None);
    }
}
