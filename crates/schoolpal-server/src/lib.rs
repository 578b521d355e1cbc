//! # schoolpal-server
//!
//! Serves the built Schoolpal AI frontend and accepts contact form
//! submissions on `POST /api/contact`.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use router::build_router;
pub use state::AppState;
pub use store::MemoryContactStore;
