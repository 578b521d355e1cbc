//! Error Types

use thiserror::Error;

use crate::contact::Field;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
#[derive(Error, Debug)]
pub enum SiteError {
    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Icon reference does not name a known glyph
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    /// Two records in one catalog list share a key
    #[error("Duplicate id {id} in {list}")]
    DuplicateId { list: &'static str, id: u32 },

    /// Required contact field left blank
    #[error("Missing required field: {}", .0.name())]
    MissingField(Field),

    /// Contact field exceeds its length limit
    #[error("Field {} exceeds {max} characters", .field.name())]
    TooLong { field: Field, max: usize },

    /// Email address is malformed
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// A submission is already in flight
    #[error("Submission already in progress")]
    AlreadySubmitting,

    /// Sink rejected the submission
    #[error("Submission rejected: {0}")]
    Submission(String),

    /// Sink could not be reached
    #[error("Submission service unavailable: {0}")]
    Unavailable(String),
}

impl SiteError {
    /// Check if error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Convert to a message suitable for inline display in the form
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField(field) => format!("Please fill in the {} field.", field.label()),
            Self::TooLong { field, max } => {
                format!("The {} field is limited to {max} characters.", field.label())
            }
            Self::InvalidEmail(_) => "Please enter a valid email address.".into(),
            Self::AlreadySubmitting => "Your message is already on its way.".into(),
            Self::Submission(msg) => format!("We couldn't accept your message: {msg}"),
            Self::Unavailable(_) => {
                "We couldn't reach our servers. Please try again in a moment.".into()
            }
            _ => "An unexpected error occurred.".into(),
        }
    }
}
