//! Mood Tune AI
//!
//! A small web service that reads the mood of a piece of text (typed or
//! transcribed from voice) and answers with a curated playlist for that mood,
//! in English or Hindi.

pub mod config;
pub mod error;
pub mod language;
pub mod mood;
pub mod playlist;
pub mod preview;
pub mod sentiment;
pub mod server;
pub mod types;
pub mod view;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use language::Language;

pub use mood::{ClassificationResult, MoodClassifier, MoodLabel};
pub use playlist::{Playlist, Track};
pub use sentiment::{SentimentAnalysis, SentimentAnalyzer};
