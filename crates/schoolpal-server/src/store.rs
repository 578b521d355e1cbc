//! Contact Submission Store

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::RwLock;

use schoolpal_core::{ContactReceipt, ContactSubmission, Result, SiteError, SubmissionSink};

/// A submission together with the receipt it was acknowledged with
#[derive(Clone, Debug)]
pub struct StoredSubmission {
    pub receipt: ContactReceipt,
    pub submission: ContactSubmission,
}

/// Submissions kept before the oldest are evicted
pub const MAX_STORED: usize = 1000;

/// In-memory submission store (for development), bounded to `MAX_STORED`
#[derive(Default)]
pub struct MemoryContactStore {
    submissions: RwLock<VecDeque<StoredSubmission>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained submissions
    pub fn len(&self) -> usize {
        self.submissions.read().map_or(0, |s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recent submissions first
    #[cfg(test)]
    pub fn recent(&self, limit: usize) -> Vec<StoredSubmission> {
        self.submissions
            .read()
            .map(|s| s.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SubmissionSink for MemoryContactStore {
    async fn submit(&self, submission: &ContactSubmission) -> Result<ContactReceipt> {
        submission.validate()?;

        let receipt = ContactReceipt::issue();
        let evicted = {
            let mut submissions = self
                .submissions
                .write()
                .map_err(|_| SiteError::Unavailable("submission store lock poisoned".into()))?;
            submissions.push_back(StoredSubmission {
                receipt: receipt.clone(),
                submission: submission.clone(),
            });

            let mut evicted = 0;
            while submissions.len() > MAX_STORED {
                submissions.pop_front();
                evicted += 1;
            }
            evicted
        };

        if evicted > 0 {
            tracing::debug!(evicted, "Submission store full, dropped oldest");
        }
        tracing::info!(receipt = %receipt.id, "Contact submission received");

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolpal_core::Field;

    fn submission(name: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.into(),
            email: "teacher@school.example".into(),
            organization: String::new(),
            message: "Interested in a pilot".into(),
        }
    }

    #[tokio::test]
    async fn test_accepts_valid_submission() {
        let store = MemoryContactStore::new();
        assert!(store.is_empty());

        let receipt = store.submit(&submission("Ana")).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.recent(10)[0].receipt, receipt);
    }

    #[tokio::test]
    async fn test_rejects_invalid_submission() {
        let store = MemoryContactStore::new();

        let err = store.submit(&submission("")).await.unwrap_err();

        assert!(matches!(err, SiteError::MissingField(Field::Name)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let store = MemoryContactStore::new();
        for name in ["first", "second", "third"] {
            store.submit(&submission(name)).await.unwrap();
        }

        let recent = store.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].submission.name, "third");
        assert_eq!(recent[1].submission.name, "second");
    }

    #[tokio::test]
    async fn test_store_is_bounded() {
        let store = MemoryContactStore::new();
        let total = MAX_STORED + 5;
        for n in 0..total {
            store.submit(&submission(&format!("person-{n}"))).await.unwrap();
        }

        assert_eq!(store.len(), MAX_STORED);

        let all = store.recent(usize::MAX);
        assert_eq!(all.len(), MAX_STORED);
        assert_eq!(all[0].submission.name, format!("person-{}", total - 1));
        // The five oldest were evicted
        assert_eq!(all[MAX_STORED - 1].submission.name, "person-5");
    }
}
