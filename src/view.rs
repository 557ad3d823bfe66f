//! Client view state as an immutable value with a pure reducer.
//!
//! Every UI event becomes a [`ViewAction`]; [`reduce`] returns the next state
//! and never touches the previous one.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::mood::MoodLabel;

/// Which screen the client is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppPhase {
    #[default]
    Input,
    Analyzing,
    Results,
}

/// Complete client view state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub phase: AppPhase,
    pub language: Language,
    /// Voice recorder is capturing
    pub recording: bool,
    /// Text typed or transcribed so far
    pub transcript: String,
    /// Mood the current playlist was built for
    pub mood: Option<MoodLabel>,
    pub share_open: bool,
    /// Last non-fatal problem shown to the user
    pub notice: Option<String>,
}

/// Events that move the view forward
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    SetLanguage(Language),
    StartRecording,
    StopRecording,
    UpdateTranscript(String),
    StartAnalysis,
    MoodDetected(MoodLabel),
    /// Mood detection request failed; the client carries on with a default
    DetectionFailed(String),
    OpenShare,
    CloseShare,
    Reset,
}

/// Mood used when detection fails on the client side
pub const DETECTION_FALLBACK: MoodLabel = MoodLabel::Happy;

/// Compute the next view state
pub fn reduce(state: &ViewState, action: ViewAction) -> ViewState {
    match action {
        ViewAction::SetLanguage(language) => ViewState {
            language,
            ..state.clone()
        },
        ViewAction::StartRecording => ViewState {
            recording: true,
            transcript: String::new(),
            notice: None,
            ..state.clone()
        },
        ViewAction::StopRecording => ViewState {
            recording: false,
            ..state.clone()
        },
        ViewAction::UpdateTranscript(transcript) => ViewState {
            transcript,
            ..state.clone()
        },
        ViewAction::StartAnalysis => ViewState {
            phase: AppPhase::Analyzing,
            recording: false,
            share_open: false,
            notice: None,
            ..state.clone()
        },
        ViewAction::MoodDetected(mood) => ViewState {
            phase: AppPhase::Results,
            mood: Some(mood),
            ..state.clone()
        },
        ViewAction::DetectionFailed(reason) => ViewState {
            phase: AppPhase::Results,
            mood: Some(DETECTION_FALLBACK),
            notice: Some(reason),
            ..state.clone()
        },
        ViewAction::OpenShare if state.phase == AppPhase::Results => ViewState {
            share_open: true,
            ..state.clone()
        },
        ViewAction::OpenShare => state.clone(),
        ViewAction::CloseShare => ViewState {
            share_open: false,
            ..state.clone()
        },
        ViewAction::Reset => ViewState {
            language: state.language,
            ..ViewState::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: Vec<ViewAction>) -> ViewState {
        actions
            .into_iter()
            .fold(ViewState::default(), |state, action| reduce(&state, action))
    }

    #[test]
    fn test_happy_path() {
        let state = run(vec![
            ViewAction::StartRecording,
            ViewAction::UpdateTranscript("feeling calm".to_string()),
            ViewAction::StopRecording,
            ViewAction::StartAnalysis,
            ViewAction::MoodDetected(MoodLabel::Calm),
        ]);

        assert_eq!(state.phase, AppPhase::Results);
        assert_eq!(state.mood, Some(MoodLabel::Calm));
        assert_eq!(state.transcript, "feeling calm");
        assert!(!state.recording);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let before = ViewState::default();
        let after = reduce(&before, ViewAction::StartAnalysis);

        assert_eq!(before.phase, AppPhase::Input);
        assert_eq!(after.phase, AppPhase::Analyzing);
    }

    #[test]
    fn test_detection_failure_falls_back_to_happy() {
        let state = run(vec![
            ViewAction::StartAnalysis,
            ViewAction::DetectionFailed("network unreachable".to_string()),
        ]);

        assert_eq!(state.phase, AppPhase::Results);
        assert_eq!(state.mood, Some(DETECTION_FALLBACK));
        assert_eq!(state.notice.as_deref(), Some("network unreachable"));
    }

    #[test]
    fn test_share_only_opens_on_results() {
        let state = run(vec![ViewAction::OpenShare]);
        assert!(!state.share_open);

        let state = run(vec![
            ViewAction::StartAnalysis,
            ViewAction::MoodDetected(MoodLabel::Sad),
            ViewAction::OpenShare,
        ]);
        assert!(state.share_open);

        let state = reduce(&state, ViewAction::CloseShare);
        assert!(!state.share_open);
    }

    #[test]
    fn test_reset_keeps_language() {
        let state = run(vec![
            ViewAction::SetLanguage(Language::Hi),
            ViewAction::UpdateTranscript("खुश".to_string()),
            ViewAction::StartAnalysis,
            ViewAction::MoodDetected(MoodLabel::Happy),
            ViewAction::Reset,
        ]);

        assert_eq!(
            state,
            ViewState {
                language: Language::Hi,
                ..ViewState::default()
            }
        );
    }
}
