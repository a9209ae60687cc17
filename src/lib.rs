//! Mentor Match - mentor matching service for the AI For Her platform
//!
//! This library ranks available mentors against an entrepreneur profile
//! using a weighted compatibility score over industry, stage, skills,
//! language, location and mentor rating.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{score_compatibility, MatchError, Matcher};
pub use models::{EntrepreneurProfile, MatchResult, MentorProfile, ScoringWeights};
pub use services::{InMemoryProfileStore, ProfileStore, StoreError};
