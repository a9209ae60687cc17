use thiserror::Error;

use crate::core::scoring::score_compatibility;
use crate::models::{EntrepreneurProfile, MatchResult, MentorProfile, ScoringWeights};
use crate::services::{ProfileStore, StoreError};

/// Errors that can occur while finding matches
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Entrepreneur not found: {0}")]
    NotFound(String),

    #[error("Profile store error: {0}")]
    Store(#[from] StoreError),
}

/// Mentor matching orchestrator
///
/// # Pipeline Stages
/// 1. Load the entrepreneur and the available mentors
/// 2. Score every mentor against the entrepreneur
/// 3. Rank by score, keeping retrieval order for ties
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Find ranked mentor matches for an entrepreneur
    ///
    /// # Arguments
    /// * `store` - Profile store to read the entrepreneur and mentors from
    /// * `entrepreneur_id` - User id of the entrepreneur
    ///
    /// # Errors
    /// `MatchError::NotFound` if no entrepreneur has this user id, and
    /// `MatchError::Store` for any store failure, passed through unchanged.
    pub async fn find_matches(
        &self,
        store: &dyn ProfileStore,
        entrepreneur_id: &str,
    ) -> Result<Vec<MatchResult>, MatchError> {
        // Independent reads; the entrepreneur outcome is checked first.
        let (entrepreneur, mentors) = tokio::join!(
            store.get_entrepreneur_by_user_id(entrepreneur_id),
            store.list_available_mentors(),
        );

        let entrepreneur =
            entrepreneur?.ok_or_else(|| MatchError::NotFound(entrepreneur_id.to_string()))?;
        let mentors = mentors?;

        Ok(self.rank(&entrepreneur, mentors))
    }

    /// Score and rank mentors for an entrepreneur
    ///
    /// Sorting is stable, so mentors with equal scores keep the order they
    /// were given in.
    pub fn rank(
        &self,
        entrepreneur: &EntrepreneurProfile,
        mentors: Vec<MentorProfile>,
    ) -> Vec<MatchResult> {
        let mut matches: Vec<MatchResult> = mentors
            .into_iter()
            .map(|mentor| {
                let score = score_compatibility(entrepreneur, &mentor, &self.weights);
                MatchResult { mentor, score }
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));

        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
