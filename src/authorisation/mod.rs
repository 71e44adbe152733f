//! Billboard Authorisation Engine
//!
//! This module decides whether billboard text extracted by OCR belongs to an
//! authorised advertiser, by matching it against a built-in brand catalog
//! and a registry of owner-registered billboard texts.

pub mod brand_match;
pub mod catalog;
pub mod normalize;
pub mod registry_match;
pub mod similarity;

use log::debug;

use crate::models::MatchResult;

pub use brand_match::{BRAND_SIMILARITY_THRESHOLD, brand_match};
pub use catalog::{BRAND_CATALOG, builtin_catalog};
pub use normalize::normalize;
pub use registry_match::{REGISTRY_SIMILARITY_THRESHOLD, TOKEN_OVERLAP_THRESHOLD, registry_match};
pub use similarity::{sequence_ratio, token_set_ratio};

/// Authorisation engine that orchestrates the decision pipeline.
///
/// The engine holds the brand catalog and decides billboard texts against it
/// and a snapshot of registered texts. Each stage tries matching strategies
/// in priority order (containment, token-set overlap, sequence similarity),
/// and the brand stage runs before the registry stage.
#[derive(Debug, Clone)]
pub struct AuthorisationEngine {
    catalog: Vec<String>,
}

impl AuthorisationEngine {
    /// Create an engine with the built-in brand catalog.
    pub fn new() -> Self {
        Self {
            catalog: catalog::builtin_catalog(),
        }
    }

    /// Create an engine with a custom brand catalog.
    pub fn with_catalog<I, S>(brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            catalog: brands.into_iter().map(Into::into).collect(),
        }
    }

    /// Decide whether billboard text is authorised.
    ///
    /// This runs the full decision pipeline:
    /// 1. Normalize the raw OCR text
    /// 2. Text that normalizes to nothing is unauthorised without matching
    /// 3. Brand catalog stage; an authorised brand match is final
    /// 4. Registry stage; its result is returned whole
    ///
    /// A brand-stage near miss does not carry into the outcome: when the
    /// brand stage fails to authorise, its candidate is dropped and the
    /// registry stage's result stands alone, including that stage's own
    /// near-miss evidence.
    pub fn decide(&self, raw_text: &str, registry_snapshot: &[String]) -> MatchResult {
        let normalized = normalize(raw_text);
        if normalized.is_empty() {
            debug!("Text normalizes to nothing, skipping matching");
            return MatchResult::no_match();
        }

        let brand = brand_match(&self.catalog, &normalized);
        if brand.authorised {
            return brand;
        }

        registry_match(registry_snapshot, &normalized)
    }

    /// Get a reference to the brand catalog.
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }
}

impl Default for AuthorisationEngine {
    fn default() -> Self {
        Self::new()
    }
}
