//! # schoolpal-core
//!
//! Content and behavior behind the Schoolpal AI landing page, independent of
//! any rendering host.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   keyed entries   ┌──────────────────────┐
//! │   Catalog    │──────────────────▶│  Section renderers   │
//! │ (embedded    │                   │  (schoolpal-web)     │
//! │  JSON)       │                   └──────────┬───────────┘
//! └──────────────┘                              │ anchors
//!                                    ┌──────────▼───────────┐
//!                                    │ ContactForm          │──▶ SubmissionSink
//!                                    └──────────────────────┘    (HTTP / memory)
//! ```
//!
//! Sections are laid out in `Section::PAGE_ORDER`. Icon references are
//! resolved into the closed `Icon` set when the catalog loads.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod icon;
pub mod page;
pub mod section;
pub mod sink;

pub use catalog::{
    Catalog, CatalogEntry, Feature, KeyedBlock, LoadMode, PricingPlan, Step, Testimonial, keyed_blocks,
};
pub use contact::{
    ContactForm, ContactReceipt, ContactSubmission, Field, MAX_MESSAGE_LEN, SubmissionStatus,
};
pub use error::{Result, SiteError};
pub use icon::Icon;
pub use page::Page;
pub use section::Section;
pub use sink::SubmissionSink;
