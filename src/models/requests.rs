use serde::{Deserialize, Serialize};
use validator::Validate;

/// Optional query parameters for the matching endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchQuery {
    /// Keep at most this many mentors after ranking
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    /// Drop mentors scoring below this threshold
    #[validate(range(max = 100))]
    #[serde(default, alias = "min_score", rename = "minScore")]
    pub min_score: Option<u8>,
}
