//! Supported content languages.

use serde::{Deserialize, Serialize};

/// Language of the keyword dictionaries and playlist tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Hindi (Bollywood playlists, Devanagari keywords)
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    /// Short language tag used on the wire
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Resolve a language tag, falling back to English for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "hi" => Self::Hi,
            _ => Self::En,
        }
    }

    /// Resolve an optional tag as sent by clients
    pub fn resolve(tag: Option<&str>) -> Self {
        tag.map(Self::from_tag).unwrap_or_default()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("en"), Language::En);
        assert_eq!(Language::from_tag("hi"), Language::Hi);
        assert_eq!(Language::from_tag("fr"), Language::En);
        assert_eq!(Language::from_tag("HI"), Language::En);
    }

    #[test]
    fn test_resolve_missing() {
        assert_eq!(Language::resolve(None), Language::En);
        assert_eq!(Language::resolve(Some("hi")), Language::Hi);
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Hi.to_string(), "hi");
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), r#""en""#);
    }
}
