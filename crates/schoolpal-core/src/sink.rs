//! Submission Sink
//!
//! Receives contact form submissions. The browser posts them over HTTP;
//! the server records them in memory. Browser futures are not `Send`, so the
//! trait relaxes that bound on `wasm32`.

use async_trait::async_trait;

use crate::contact::{ContactReceipt, ContactSubmission};
use crate::error::Result;

/// Destination for captured contact form values
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SubmissionSink {
    /// Deliver a validated submission, returning the receipt on acceptance
    async fn submit(&self, submission: &ContactSubmission) -> Result<ContactReceipt>;
}
