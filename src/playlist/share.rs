//! Plain-text rendering of a playlist for sharing.

use serde::{Deserialize, Serialize};

use crate::mood::moodometer::emoji_for;

use super::Track;

const APP_NAME: &str = "Mood Tune AI";

/// Title and body of a share message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
}

/// Render the share message for a mood name and its tracks.
///
/// The mood name is shown as given, with its first letter uppercased.
pub fn share_message(mood: &str, tracks: &[Track]) -> ShareMessage {
    let display = capitalize(mood);
    let emoji = emoji_for(mood);

    let mut text = format!("{emoji} My {display} Mood Playlist from {APP_NAME}\n\n");
    for (index, track) in tracks.iter().enumerate() {
        text.push_str(&format!("{}. {} - {}\n", index + 1, track.title, track.artist));
    }
    text.push_str(&format!("\n🎵 Create your own mood playlist at {APP_NAME}!"));

    ShareMessage {
        title: format!("My {display} Mood Playlist"),
        text,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_message() {
        let tracks = [
            Track::new("Weightless", "Marconi Union"),
            Track::new("Holocene", "Bon Iver"),
        ];
        let message = share_message("calm", &tracks);

        assert_eq!(message.title, "My Calm Mood Playlist");
        assert_eq!(
            message.text,
            "😌 My Calm Mood Playlist from Mood Tune AI\n\n\
             1. Weightless - Marconi Union\n\
             2. Holocene - Bon Iver\n\
             \n🎵 Create your own mood playlist at Mood Tune AI!"
        );
    }

    #[test]
    fn test_unknown_mood_uses_fallback_emoji() {
        let message = share_message("stressed", &[]);
        assert!(message.text.starts_with("🎵 My Stressed Mood Playlist"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("happy"), "Happy");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("खुश"), "खुश");
    }
}
