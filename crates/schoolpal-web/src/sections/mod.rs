//! Landing Page Sections
//!
//! Each section is self-contained; the catalog-driven ones take their
//! records as props and emit one keyed block per record.

mod contact;
mod features;
mod hero;
mod how_it_works;
mod pricing;
mod testimonials;

pub use contact::Contact;
pub use features::Features;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
