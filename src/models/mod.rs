// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Address, EntrepreneurProfile, Location, MatchResult, MentorProfile, ScoringWeights};
pub use requests::MatchQuery;
pub use responses::{ErrorResponse, HealthResponse};
