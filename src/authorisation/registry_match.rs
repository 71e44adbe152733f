//! Second matching stage: billboard texts registered by their owners.
//!
//! Registry entries are full billboard transcripts rather than short brand
//! names, so the bar is higher than for brands. Each entry is tried in
//! order: containment authorises outright, a token-set overlap of at least
//! half authorises with the overlap as the score (this is what tolerates
//! reordered multi-word phrases), and otherwise the entry competes on
//! sequence similarity against a strict threshold.

use log::debug;

use super::normalize::normalize;
use super::similarity::{sequence_ratio, token_set_ratio};
use crate::models::{MATCH_CONTAINMENT, MATCH_SEQ, MATCH_TOKEN_SET, MatchResult, MatchSource};

/// Minimum sequence similarity for a registry entry to authorise.
pub const REGISTRY_SIMILARITY_THRESHOLD: f64 = 0.75;
/// Minimum token-set overlap for the short-circuit match.
pub const TOKEN_OVERLAP_THRESHOLD: f64 = 0.5;

/// Match normalized billboard text against a snapshot of registry texts.
///
/// Entries that normalize to an empty string are skipped. The scan is
/// sequential: an earlier entry's containment or token-overlap match wins
/// before later entries are examined at all.
pub fn registry_match(snapshot: &[String], normalized_text: &str) -> MatchResult {
    if normalized_text.is_empty() {
        return MatchResult::no_match();
    }

    let mut best_score = 0.0;
    let mut best_entry: Option<&String> = None;

    for entry in snapshot {
        let normalized_entry = normalize(entry);
        if normalized_entry.is_empty() {
            continue;
        }

        if normalized_text.contains(normalized_entry.as_str())
            || normalized_entry.contains(normalized_text)
        {
            debug!("Registry containment match: '{}'", entry);
            return MatchResult {
                authorised: true,
                matched_label: Some(entry.clone()),
                score: 1.0,
                matcher: Some(MATCH_CONTAINMENT),
                source: Some(MatchSource::Registry),
            };
        }

        let overlap = token_set_ratio(normalized_text, &normalized_entry);
        if overlap >= TOKEN_OVERLAP_THRESHOLD {
            debug!("Registry token-set match: '{}' at {:.3}", entry, overlap);
            return MatchResult {
                authorised: true,
                matched_label: Some(entry.clone()),
                score: overlap,
                matcher: Some(MATCH_TOKEN_SET),
                source: Some(MatchSource::Registry),
            };
        }

        let score = sequence_ratio(normalized_text, &normalized_entry);
        if score > best_score {
            best_score = score;
            best_entry = Some(entry);
        }
    }

    let authorised = best_score >= REGISTRY_SIMILARITY_THRESHOLD;
    if authorised {
        debug!(
            "Registry similarity match: '{}' at {:.3}",
            best_entry.map(String::as_str).unwrap_or_default(),
            best_score
        );
    }
    MatchResult {
        authorised,
        matched_label: best_entry.cloned(),
        score: best_score,
        matcher: best_entry.map(|_| MATCH_SEQ),
        source: best_entry.map(|_| MatchSource::Registry),
    }
}
