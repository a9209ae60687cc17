// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{is_available, labels_match, shared_labels, terms_contained_in, text_contains};
pub use matcher::{MatchError, Matcher};
pub use scoring::{score_breakdown, score_compatibility, ScoreBreakdown};
