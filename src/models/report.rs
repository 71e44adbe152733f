use serde::Serialize;

use super::{MatchResult, MatchSource};

/// Full verdict for one billboard text, ready for display or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionReport {
    pub extracted_text: String,
    pub authorised: bool,
    pub matched_label: Option<String>,
    pub score: f64,
    pub confidence: f64,
    pub matcher: Option<&'static str>,
    pub source: Option<MatchSource>,
    pub reason: String,
    pub message: String,
}

impl DecisionReport {
    pub fn new(extracted_text: &str, result: &MatchResult) -> Self {
        DecisionReport {
            extracted_text: extracted_text.to_string(),
            authorised: result.authorised,
            matched_label: result.matched_label.clone(),
            score: result.score,
            confidence: result.confidence(),
            matcher: result.matcher,
            source: result.source,
            reason: result.reason(),
            message: result.message().to_string(),
        }
    }
}
