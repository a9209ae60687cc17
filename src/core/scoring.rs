use crate::core::filters::{labels_match, shared_labels, terms_contained_in, text_contains};
use crate::models::{EntrepreneurProfile, MentorProfile, ScoringWeights};

/// Per-factor contributions to one entrepreneur/mentor score
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub primary_industry: f64,
    pub secondary_industries: f64,
    pub business_stage: f64,
    pub skills: f64,
    pub language: f64,
    pub location: f64,
    pub rating: f64,
}

impl ScoreBreakdown {
    /// Unclamped weighted sum
    pub fn total(&self) -> f64 {
        self.primary_industry
            + self.secondary_industries
            + self.business_stage
            + self.skills
            + self.language
            + self.location
            + self.rating
    }

    /// Sum capped at 100 and rounded half up
    pub fn score(&self) -> u8 {
        // All contributions are non-negative, so only the ceiling needs a clamp.
        self.total().clamp(0.0, 100.0).round() as u8
    }
}

/// Calculate the compatibility score (0-100) of a mentor for an entrepreneur
///
/// Scoring formula (default weights):
/// score = (
///     primary_industry      30   # entrepreneur industry == mentor sector
///     secondary_industries  20   # per industry found in expertise areas
///     business_stage        15   # stage mentioned in mentor experience
///     skills                15   # per skill found in specializations
///     language              10   # at least one shared language
///     location               5   # same city
///     rating                 5   # proportional to 0-5 star rating
/// )
pub fn score_compatibility(
    entrepreneur: &EntrepreneurProfile,
    mentor: &MentorProfile,
    weights: &ScoringWeights,
) -> u8 {
    score_breakdown(entrepreneur, mentor, weights).score()
}

/// Compute every factor contribution for one pair
pub fn score_breakdown(
    entrepreneur: &EntrepreneurProfile,
    mentor: &MentorProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let primary_industry = if labels_match(
        entrepreneur.primary_industry.as_deref(),
        mentor.sector.as_deref(),
    ) {
        weights.primary_industry
    } else {
        0.0
    };

    let secondary_industries = per_match_score(
        &entrepreneur.secondary_industries,
        &mentor.expertise_areas,
        weights.secondary_industries,
    );

    let business_stage = if text_contains(
        mentor.experience.as_deref(),
        entrepreneur.business_stage.as_deref(),
    ) {
        weights.business_stage
    } else {
        0.0
    };

    let skills = per_match_score(&entrepreneur.skills, &mentor.specializations, weights.skills);

    let language = if shared_labels(&entrepreneur.language, &mentor.languages).is_empty() {
        0.0
    } else {
        weights.language
    };

    let location = if labels_match(entrepreneur.city(), mentor.city()) {
        weights.location
    } else {
        0.0
    };

    let rating = (mentor.bounded_rating() / 5.0) * weights.rating;

    ScoreBreakdown {
        primary_industry,
        secondary_industries,
        business_stage,
        skills,
        language,
        location,
        rating,
    }
}

/// Credit each term found in `entries` with `weight / entries.len()`
///
/// The divisor is the size of the mentor's list, not the number of terms
/// being matched, and the factor is not capped at `weight`.
#[inline]
fn per_match_score(terms: &[String], entries: &[String], weight: f64) -> f64 {
    let matched = terms_contained_in(terms, entries).len();
    let divisor = entries.len().max(1) as f64;

    matched as f64 * (weight / divisor)
}
