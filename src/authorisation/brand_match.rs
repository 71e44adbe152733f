//! First matching stage: the built-in brand catalog.
//!
//! Containment between the normalized billboard text and a normalized brand
//! authorises immediately with a full score. Otherwise the best sequence
//! ratio across the catalog decides against a deliberately permissive
//! threshold; brand names are short, so even partial overlap with a noisy
//! OCR transcript is a strong signal.

use log::debug;

use super::normalize::normalize;
use super::similarity::sequence_ratio;
use crate::models::{MATCH_CONTAINMENT, MATCH_SEQ, MatchResult, MatchSource};

/// Minimum sequence similarity for a brand to authorise a billboard.
pub const BRAND_SIMILARITY_THRESHOLD: f64 = 0.2;

/// Match normalized billboard text against the brand catalog.
///
/// Brands that normalize to an empty string are skipped; an empty pattern
/// is contained in everything.
pub fn brand_match(catalog: &[String], normalized_text: &str) -> MatchResult {
    if normalized_text.is_empty() {
        return MatchResult::no_match();
    }

    let mut best_score = 0.0;
    let mut best_brand: Option<&String> = None;

    for brand in catalog {
        let normalized_brand = normalize(brand);
        if normalized_brand.is_empty() {
            continue;
        }

        if normalized_text.contains(normalized_brand.as_str())
            || normalized_brand.contains(normalized_text)
        {
            debug!("Brand containment match: '{}'", brand);
            return MatchResult {
                authorised: true,
                matched_label: Some(brand.clone()),
                score: 1.0,
                matcher: Some(MATCH_CONTAINMENT),
                source: Some(MatchSource::Brand),
            };
        }

        let score = sequence_ratio(normalized_text, &normalized_brand);
        if score > best_score {
            best_score = score;
            best_brand = Some(brand);
        }
    }

    let authorised = best_score >= BRAND_SIMILARITY_THRESHOLD;
    if authorised {
        debug!(
            "Brand similarity match: '{}' at {:.3}",
            best_brand.map(String::as_str).unwrap_or_default(),
            best_score
        );
    }
    MatchResult {
        authorised,
        matched_label: best_brand.cloned(),
        score: best_score,
        matcher: best_brand.map(|_| MATCH_SEQ),
        source: best_brand.map(|_| MatchSource::Brand),
    }
}
