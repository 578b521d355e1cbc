//! Routed pages and their document metadata

use serde::{Deserialize, Serialize};

/// A routed page of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    Dashboard,
}

impl Page {
    /// Document `<title>`
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Schoolpal AI",
            Self::Dashboard => "Dashboard - Schoolpal",
        }
    }

    /// Content of the `description` meta tag
    pub const fn description(self) -> &'static str {
        match self {
            Self::Home => "Home page for Schoolpal AI",
            Self::Dashboard => "Schoolpal user dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_metadata() {
        assert_eq!(Page::Home.title(), "Schoolpal AI");
        assert_eq!(Page::Home.description(), "Home page for Schoolpal AI");
        assert_eq!(Page::Dashboard.title(), "Dashboard - Schoolpal");
        assert_eq!(Page::Dashboard.description(), "Schoolpal user dashboard");
    }
}
