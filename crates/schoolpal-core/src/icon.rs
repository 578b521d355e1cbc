//! Icon Tags
//!
//! Closed set of glyphs the page can draw. Catalog records name icons by
//! their PascalCase tag; the tag is resolved once when the catalog loads so
//! that rendering never meets an unknown glyph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

/// Glyph identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Wifi,
    BookOpen,
    Shield,
    MessageCircle,
    Heart,
    FileText,
    Upload,
    Brain,
    MessageSquare,
    TrendingUp,
    ArrowRight,
    Send,
    Check,
    Star,
    Quote,
    /// Drawn in place of an icon reference that failed to resolve
    Placeholder,
}

impl Icon {
    /// Every resolvable tag (excludes `Placeholder`)
    pub const ALL: [Self; 15] = [
        Self::Wifi,
        Self::BookOpen,
        Self::Shield,
        Self::MessageCircle,
        Self::Heart,
        Self::FileText,
        Self::Upload,
        Self::Brain,
        Self::MessageSquare,
        Self::TrendingUp,
        Self::ArrowRight,
        Self::Send,
        Self::Check,
        Self::Star,
        Self::Quote,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wifi => "Wifi",
            Self::BookOpen => "BookOpen",
            Self::Shield => "Shield",
            Self::MessageCircle => "MessageCircle",
            Self::Heart => "Heart",
            Self::FileText => "FileText",
            Self::Upload => "Upload",
            Self::Brain => "Brain",
            Self::MessageSquare => "MessageSquare",
            Self::TrendingUp => "TrendingUp",
            Self::ArrowRight => "ArrowRight",
            Self::Send => "Send",
            Self::Check => "Check",
            Self::Star => "Star",
            Self::Quote => "Quote",
            Self::Placeholder => "Placeholder",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| SiteError::UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_parses_back() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>().unwrap(), icon);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "Rocket".parse::<Icon>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownIcon(name) if name == "Rocket"));
    }

    #[test]
    fn test_placeholder_is_not_addressable() {
        assert!("Placeholder".parse::<Icon>().is_err());
    }
}
