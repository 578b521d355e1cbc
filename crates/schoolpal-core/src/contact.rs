//! Contact Form
//!
//! Field state and submission lifecycle for the "Join Our Community" form.
//!
//! ```text
//! Editing ──begin_submit──▶ Submitting ──complete(Ok)──▶ Succeeded (fields cleared)
//!    ▲            │                    └─complete(Err)─▶ Failed    (fields kept)
//!    │            └─invalid──────────────────────────▶ Failed
//!    └──────────────── set_field ◀──────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SiteError};
use crate::sink::SubmissionSink;

/// Shown once a submission has been accepted
pub const ACKNOWLEDGEMENT: &str =
    "Thank you for joining our mission! We'll keep you updated on Schoolpal AI's progress.";

/// Longest accepted message, in characters
pub const MAX_MESSAGE_LEN: usize = 5000;

/// Contact form input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Organization,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Organization, Self::Message];

    /// HTML `name` attribute
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Organization => "organization",
            Self::Message => "message",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Organization => "Organization",
            Self::Message => "How can we help?",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Organization => "School, NGO, or Organization",
            Self::Message => {
                "Tell us about your interest in Schoolpal AI, implementation needs, or partnership opportunities..."
            }
        }
    }

    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Organization)
    }

    /// Longest accepted value, in characters
    pub const fn max_len(self) -> usize {
        match self {
            Self::Name | Self::Organization => 200,
            Self::Email => 320,
            Self::Message => MAX_MESSAGE_LEN,
        }
    }
}

/// Captured form values
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub organization: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Organization => &self.organization,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Organization => &mut self.organization,
            Field::Message => &mut self.message,
        }
    }

    /// Required fields present, lengths bounded and email plausibly shaped
    pub fn validate(&self) -> Result<()> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| field.is_required() && self.get(*field).trim().is_empty())
        {
            return Err(SiteError::MissingField(field));
        }

        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| self.get(*field).chars().count() > field.max_len())
        {
            return Err(SiteError::TooLong {
                field,
                max: field.max_len(),
            });
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(SiteError::InvalidEmail(email.to_string())),
        }
    }
}

/// Proof of an accepted submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl ContactReceipt {
    /// Issue a receipt stamped now
    pub fn issue() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

/// Where the form is in its lifecycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Submitting,
    Succeeded(ContactReceipt),
    /// User-facing reason
    Failed(String),
}

/// Form state: four fields plus submission status
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactSubmission,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub const fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    /// Replace one field's value; other fields are untouched
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();

        // An in-flight submission keeps its status until it completes
        if !self.is_submitting() {
            self.status = SubmissionStatus::Editing;
        }
    }

    /// Validate and move to `Submitting`, yielding the values to deliver
    pub fn begin_submit(&mut self) -> Result<ContactSubmission> {
        if self.is_submitting() {
            return Err(SiteError::AlreadySubmitting);
        }

        if let Err(err) = self.fields.validate() {
            tracing::debug!(error = %err, "Contact form rejected before submission");
            self.status = SubmissionStatus::Failed(err.user_message());
            return Err(err);
        }

        self.status = SubmissionStatus::Submitting;
        Ok(self.fields.clone())
    }

    /// Apply the sink's outcome: clear on success, keep values on failure
    pub fn complete(&mut self, outcome: Result<ContactReceipt>) -> Result<ContactReceipt> {
        match outcome {
            Ok(receipt) => {
                tracing::info!(receipt = %receipt.id, "Contact submission accepted");
                self.fields = ContactSubmission::default();
                self.status = SubmissionStatus::Succeeded(receipt.clone());
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!(error = %err, retryable = err.is_retryable(), "Contact submission failed");
                self.status = SubmissionStatus::Failed(err.user_message());
                Err(err)
            }
        }
    }

    /// Validate, deliver to `sink`, and apply the outcome
    pub async fn submit<S>(&mut self, sink: &S) -> Result<ContactReceipt>
    where
        S: SubmissionSink + ?Sized,
    {
        let submission = self.begin_submit()?;
        let outcome = sink.submit(&submission).await;
        self.complete(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Sink that records what it receives
    #[derive(Default)]
    struct RecordingSink {
        received: Mutex<Vec<ContactSubmission>>,
        fail: bool,
    }

    impl RecordingSink {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn count(&self) -> usize {
            self.received.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SubmissionSink for RecordingSink {
        async fn submit(&self, submission: &ContactSubmission) -> Result<ContactReceipt> {
            self.received.lock().unwrap().push(submission.clone());
            if self.fail {
                Err(SiteError::Unavailable("connection refused".into()))
            } else {
                Ok(ContactReceipt::issue())
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada Lovelace");
        form.set_field(Field::Email, "ada@example.org");
        form.set_field(Field::Organization, "Analytical School");
        form.set_field(Field::Message, "We'd like to pilot this.");
        form
    }

    #[test]
    fn test_set_field_touches_only_that_field() {
        let mut form = filled_form();
        let before = form.fields().clone();

        form.set_field(Field::Name, "Grace Hopper");

        assert_eq!(form.value(Field::Name), "Grace Hopper");
        for field in [Field::Email, Field::Organization, Field::Message] {
            assert_eq!(form.value(field), before.get(field));
        }
    }

    #[tokio::test]
    async fn test_successful_submit_resets_fields() {
        let sink = RecordingSink::default();
        let mut form = filled_form();

        let receipt = form.submit(&sink).await.unwrap();

        assert_eq!(sink.count(), 1);
        assert_eq!(sink.received.lock().unwrap()[0].name, "Ada Lovelace");
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.status(), &SubmissionStatus::Succeeded(receipt));
    }

    #[tokio::test]
    async fn test_missing_required_field_skips_sink() {
        let sink = RecordingSink::default();
        let mut form = filled_form();
        form.set_field(Field::Email, "   ");

        let err = form.submit(&sink).await.unwrap_err();

        assert!(matches!(err, SiteError::MissingField(Field::Email)));
        assert_eq!(sink.count(), 0);
        assert!(matches!(form.status(), SubmissionStatus::Failed(_)));
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_organization_is_optional() {
        let sink = RecordingSink::default();
        let mut form = filled_form();
        form.set_field(Field::Organization, "");

        assert!(form.submit(&sink).await.is_ok());
        assert_eq!(sink.count(), 1);
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_fields() {
        let mut form = filled_form();

        let err = form.submit(&RecordingSink::failing()).await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(form.value(Field::Message), "We'd like to pilot this.");
        assert!(matches!(form.status(), SubmissionStatus::Failed(msg) if msg.contains("try again")));

        // Retrying against a healthy sink clears the form
        form.submit(&RecordingSink::default()).await.unwrap();
        assert_eq!(form.value(Field::Message), "");
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert!(form.is_submitting());

        assert!(matches!(form.begin_submit(), Err(SiteError::AlreadySubmitting)));

        // Edits while in flight do not reset the status
        form.set_field(Field::Name, "Someone else");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_edit_after_failure_returns_to_editing() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        assert!(matches!(form.status(), SubmissionStatus::Failed(_)));

        form.set_field(Field::Name, "A");
        assert_eq!(form.status(), &SubmissionStatus::Editing);
    }

    #[test]
    fn test_email_validation() {
        let mut submission = filled_form().fields().clone();
        for bad in ["ada", "@example.org", "ada@", "a@b@c"] {
            submission.email = bad.into();
            assert!(matches!(submission.validate(), Err(SiteError::InvalidEmail(_))), "{bad}");
        }
        submission.email = " ada@example.org ".into();
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_length_limits() {
        let mut submission = filled_form().fields().clone();
        submission.message = "a".repeat(MAX_MESSAGE_LEN);
        assert!(submission.validate().is_ok());

        submission.message.push('a');
        assert!(matches!(
            submission.validate(),
            Err(SiteError::TooLong { field: Field::Message, max: MAX_MESSAGE_LEN })
        ));

        // Counted in characters, not bytes
        submission.message = "é".repeat(MAX_MESSAGE_LEN);
        assert!(submission.validate().is_ok());

        submission.message = "ok".into();
        submission.organization = "x".repeat(Field::Organization.max_len() + 1);
        assert!(matches!(
            submission.validate(),
            Err(SiteError::TooLong { field: Field::Organization, .. })
        ));
    }

    #[test]
    fn test_submission_wire_format() {
        let json = serde_json::to_value(filled_form().fields()).unwrap();
        assert_eq!(json["email"], "ada@example.org");

        let parsed: ContactSubmission = serde_json::from_str(
            r#"{"name":"N","email":"n@example.org","message":"Hi"}"#,
        )
        .unwrap();
        assert_eq!(parsed.organization, "");
    }
}
