//! Application State

use std::sync::Arc;

use crate::store::MemoryContactStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// Accepted contact submissions
    pub contacts: Arc<MemoryContactStore>,
}
