use serde::Serialize;

/// Match found because one normalized text contained the other.
pub const MATCH_CONTAINMENT: &str = "1-contain";
/// Match found through token-set overlap.
pub const MATCH_TOKEN_SET: &str = "2-token-set";
/// Match found through character sequence similarity.
pub const MATCH_SEQ: &str = "3-seq";

/// Which matching stage produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Brand,
    Registry,
}

/// Outcome of matching a billboard text against one candidate pool.
///
/// `matched_label` carries the candidate's original (un-normalized) text.
/// For an unauthorised result it still names the closest candidate when one
/// scored above zero; `matcher` and `source` are present exactly when
/// `matched_label` is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub authorised: bool,
    pub matched_label: Option<String>,
    pub score: f64,
    pub matcher: Option<&'static str>,
    pub source: Option<MatchSource>,
}

impl MatchResult {
    /// Result for text that matched nothing at all.
    pub fn no_match() -> Self {
        MatchResult {
            authorised: false,
            matched_label: None,
            score: 0.0,
            matcher: None,
            source: None,
        }
    }

    /// The score as a percentage rounded to one decimal place.
    pub fn confidence(&self) -> f64 {
        (self.score * 1000.0).round() / 10.0
    }

    /// The one-line verdict for display.
    pub fn message(&self) -> &'static str {
        if self.authorised {
            "Billboard is authorised."
        } else {
            "Billboard is UNAUTHORISED!"
        }
    }

    /// A human-readable explanation of how the verdict came about.
    pub fn reason(&self) -> String {
        let confidence = self.confidence();
        match (self.authorised, &self.matched_label) {
            (true, Some(label)) => match self.source {
                Some(MatchSource::Brand) => {
                    format!("Matched known brand: '{}' (similarity {:.1}%)", label, confidence)
                }
                _ => format!(
                    "Matched authorised entry: '{}' (similarity {:.1}%)",
                    label, confidence
                ),
            },
            (true, None) => format!("Matched an authorised entry (similarity {:.1}%)", confidence),
            (false, Some(label)) => format!(
                "No authorised match; closest candidate '{}' (similarity {:.1}%)",
                label, confidence
            ),
            (false, None) => "No authorised match found".to_string(),
        }
    }
}
