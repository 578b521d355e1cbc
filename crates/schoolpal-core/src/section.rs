//! Page Layout
//!
//! The landing page is a fixed vertical stack of sections. Each section owns
//! a document anchor; only one page instance is mounted per document, so
//! anchors are constants.

use serde::{Deserialize, Serialize};

/// Landing page section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Hero,
    Features,
    HowItWorks,
    Pricing,
    Testimonials,
    Contact,
}

impl Section {
    /// Top-to-bottom order of the landing page
    pub const PAGE_ORDER: [Self; 6] = [
        Self::Hero,
        Self::Features,
        Self::HowItWorks,
        Self::Pricing,
        Self::Testimonials,
        Self::Contact,
    ];

    /// Element id the section is tagged with
    pub const fn anchor_id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::HowItWorks => "how-it-works",
            Self::Pricing => "pricing",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    /// In-page link to the section
    pub fn href(self) -> String {
        format!("#{}", self.anchor_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_order() {
        assert_eq!(Section::PAGE_ORDER.first(), Some(&Section::Hero));
        assert_eq!(Section::PAGE_ORDER.last(), Some(&Section::Contact));
        let position = |s| Section::PAGE_ORDER.iter().position(|&p| p == s).unwrap();
        assert!(position(Section::HowItWorks) < position(Section::Pricing));
    }

    #[test]
    fn test_anchor_ids_unique() {
        let ids: HashSet<_> = Section::PAGE_ORDER.iter().map(|s| s.anchor_id()).collect();
        assert_eq!(ids.len(), Section::PAGE_ORDER.len());
    }

    #[test]
    fn test_scroll_targets() {
        assert_eq!(Section::Contact.anchor_id(), "contact");
        assert_eq!(Section::HowItWorks.href(), "#how-it-works");
    }
}
