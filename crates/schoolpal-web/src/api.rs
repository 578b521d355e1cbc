//! API Client

use async_trait::async_trait;
use schoolpal_core::{ContactReceipt, ContactSubmission, Result, SiteError, SubmissionSink};

/// Path of the contact endpoint on the serving origin
pub const CONTACT_ENDPOINT: &str = "/api/contact";

fn contact_url() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());
    format!("{origin}{CONTACT_ENDPOINT}")
}

/// Posts contact submissions to the backend
#[derive(Clone, Debug, Default)]
pub struct HttpSink {
    client: reqwest::Client,
}

impl HttpSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SubmissionSink for HttpSink {
    async fn submit(&self, submission: &ContactSubmission) -> Result<ContactReceipt> {
        let response = self
            .client
            .post(contact_url())
            .json(submission)
            .send()
            .await
            .map_err(|e| SiteError::Unavailable(e.to_string()))?;

        if response.status().is_success() {
            response
                .json::<ContactReceipt>()
                .await
                .map_err(|e| SiteError::Submission(e.to_string()))
        } else {
            let status = response.status();
            let data: serde_json::Value = response.json().await.unwrap_or_default();
            Err(SiteError::Submission(
                data["error"]
                    .as_str()
                    .map_or_else(|| format!("request failed ({status})"), str::to_string),
            ))
        }
    }
}
