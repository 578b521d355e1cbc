//! Content Catalog
//!
//! Typed records the landing page sections are generated from. The catalog
//! ships as embedded JSON, is parsed and checked once at startup, and is
//! read-only afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, SiteError};
use crate::icon::Icon;

/// Upper bound on rendered star glyphs per testimonial
pub const MAX_RATING: u8 = 5;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// How unresolved icon references are treated at load time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Unknown icons fail the load
    #[default]
    Strict,
    /// Unknown icons become `Icon::Placeholder` and are logged
    Lenient,
}

impl LoadMode {
    /// Strict in debug builds, lenient in release builds
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// A record that is rendered as one keyed block of a section
pub trait CatalogEntry {
    /// Name of the catalog list the record belongs to
    const LIST: &'static str;

    /// Stable identity key
    fn key(&self) -> u32;
}

/// Pair every entry with its key, preserving list order
pub fn keyed<T: CatalogEntry>(entries: &[T]) -> impl Iterator<Item = (u32, &T)> {
    entries.iter().map(|entry| (entry.key(), entry))
}

/// One rendered block: list position, identity key and the record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedBlock<T> {
    pub index: usize,
    pub key: u32,
    pub entry: T,
}

/// Owned blocks for keyed list rendering, one per entry in list order
pub fn keyed_blocks<T: CatalogEntry + Clone>(entries: &[T]) -> Vec<KeyedBlock<T>> {
    keyed(entries)
        .enumerate()
        .map(|(index, (key, entry))| KeyedBlock {
            index,
            key,
            entry: entry.clone(),
        })
        .collect()
}

/// Feature grid card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: u32,
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

/// "How it works" step; `id` doubles as the displayed ordinal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: u32,
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

/// Pricing tier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub period: String,
    #[serde(default)]
    pub popular: bool,
    pub features: Vec<String>,
}

impl PricingPlan {
    pub fn is_free(&self) -> bool {
        self.price == "Free"
    }

    /// Text shown after the price: `/month`, or `• forever` for free plans
    pub fn price_suffix(&self) -> String {
        if self.is_free() {
            format!("• {}", self.period)
        } else {
            format!("/{}", self.period)
        }
    }
}

/// Customer quote
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub content: String,
    pub rating: u8,
    pub name: String,
    pub role: String,
    pub location: String,
}

impl Testimonial {
    /// Number of star glyphs to draw, clamped to `MAX_RATING`
    pub fn star_count(&self) -> usize {
        usize::from(self.rating.min(MAX_RATING))
    }
}

impl CatalogEntry for Feature {
    const LIST: &'static str = "features";

    fn key(&self) -> u32 {
        self.id
    }
}

impl CatalogEntry for Step {
    const LIST: &'static str = "steps";

    fn key(&self) -> u32 {
        self.id
    }
}

impl CatalogEntry for PricingPlan {
    const LIST: &'static str = "pricing_plans";

    fn key(&self) -> u32 {
        self.id
    }
}

impl CatalogEntry for Testimonial {
    const LIST: &'static str = "testimonials";

    fn key(&self) -> u32 {
        self.id
    }
}

/// Wire shape of an icon-bearing record before the icon is resolved
#[derive(Deserialize)]
struct RawIconEntry {
    id: u32,
    icon: String,
    title: String,
    description: String,
}

/// Wire shape of a testimonial; ratings outside `0..=MAX_RATING` are clamped
#[derive(Deserialize)]
struct RawTestimonial {
    id: u32,
    content: String,
    rating: i64,
    name: String,
    role: String,
    location: String,
}

impl From<RawTestimonial> for Testimonial {
    fn from(raw: RawTestimonial) -> Self {
        let clamped = raw.rating.clamp(0, i64::from(MAX_RATING));
        if clamped != raw.rating {
            tracing::warn!(
                id = raw.id,
                rating = raw.rating,
                "Testimonial rating outside 0..={MAX_RATING}, clamping"
            );
        }

        Self {
            id: raw.id,
            content: raw.content,
            rating: u8::try_from(clamped).unwrap_or(MAX_RATING),
            name: raw.name,
            role: raw.role,
            location: raw.location,
        }
    }
}

#[derive(Deserialize)]
struct RawCatalog {
    features: Vec<RawIconEntry>,
    steps: Vec<RawIconEntry>,
    pricing_plans: Vec<PricingPlan>,
    testimonials: Vec<RawTestimonial>,
}

fn resolve_icon(name: &str, mode: LoadMode) -> Result<Icon> {
    match (name.parse::<Icon>(), mode) {
        (Ok(icon), _) => Ok(icon),
        (Err(err), LoadMode::Strict) => Err(err),
        (Err(_), LoadMode::Lenient) => {
            tracing::warn!(icon = name, "Unknown icon reference, drawing placeholder");
            Ok(Icon::Placeholder)
        }
    }
}

fn ensure_unique<T: CatalogEntry>(entries: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for (id, _) in keyed(entries) {
        if !seen.insert(id) {
            return Err(SiteError::DuplicateId { list: T::LIST, id });
        }
    }
    Ok(())
}

/// All content the landing page renders
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub features: Vec<Feature>,
    pub steps: Vec<Step>,
    pub pricing_plans: Vec<PricingPlan>,
    pub testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// Load the catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG, LoadMode::for_build())
    }

    /// Parse and check a catalog document
    pub fn from_json(json: &str, mode: LoadMode) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let features = raw
            .features
            .into_iter()
            .map(|entry| {
                Ok(Feature {
                    id: entry.id,
                    icon: resolve_icon(&entry.icon, mode)?,
                    title: entry.title,
                    description: entry.description,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let steps = raw
            .steps
            .into_iter()
            .map(|entry| {
                Ok(Step {
                    id: entry.id,
                    icon: resolve_icon(&entry.icon, mode)?,
                    title: entry.title,
                    description: entry.description,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let catalog = Self {
            features,
            steps,
            pricing_plans: raw.pricing_plans,
            testimonials: raw.testimonials.into_iter().map(Testimonial::from).collect(),
        };
        catalog.validate()?;

        tracing::debug!(
            features = catalog.features.len(),
            steps = catalog.steps.len(),
            plans = catalog.pricing_plans.len(),
            testimonials = catalog.testimonials.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Hard failures for duplicate keys; conventions are only logged
    fn validate(&self) -> Result<()> {
        ensure_unique(&self.features)?;
        ensure_unique(&self.steps)?;
        ensure_unique(&self.pricing_plans)?;
        ensure_unique(&self.testimonials)?;

        let popular = self.pricing_plans.iter().filter(|plan| plan.popular).count();
        if popular > 1 {
            tracing::warn!(popular, "More than one pricing plan marked popular");
        }

        for (position, step) in (1..).zip(&self.steps) {
            if step.id != position {
                tracing::warn!(id = step.id, position, "Step ordinal does not match its position");
            }
        }

        Ok(())
    }
}
