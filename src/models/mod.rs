mod match_result;
mod report;

pub use match_result::{
    MATCH_CONTAINMENT, MATCH_SEQ, MATCH_TOKEN_SET, MatchResult, MatchSource,
};
pub use report::DecisionReport;
