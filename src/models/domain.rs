use serde::{Deserialize, Deserializer, Serialize};

/// Postal address attached to an entrepreneur profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Where a mentor is based, used for local matching
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Entrepreneur profile as read from the profile store
///
/// Only the fields the matcher reads are modelled. Every scoring field is
/// optional in stored documents, so absent lists deserialize as empty and
/// absent scalars as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrepreneurProfile {
    pub user_id: String,
    #[serde(default)]
    pub primary_industry: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secondary_industries: Vec<String>,
    #[serde(default)]
    pub business_stage: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: Vec<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl EntrepreneurProfile {
    /// City from the address, if both are present
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.city.as_deref())
    }
}

/// Mentor profile as read from the profile store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorProfile {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentor_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expertise_areas: Vec<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specializations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub availability: bool,
}

impl MentorProfile {
    /// Bare available mentor with no scoring attributes set
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            first_name: None,
            last_name: None,
            bio: None,
            mentor_type: None,
            years_of_experience: None,
            profile_photo: None,
            sector: None,
            expertise_areas: Vec::new(),
            experience: None,
            specializations: Vec::new(),
            languages: Vec::new(),
            location: None,
            rating: 0.0,
            availability: true,
        }
    }

    /// City from the location, if both are present
    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.city.as_deref())
    }

    /// Rating bounded to the 0-5 star scale, non-finite values count as 0
    pub fn bounded_rating(&self) -> f64 {
        if self.rating.is_finite() {
            self.rating.clamp(0.0, 5.0)
        } else {
            0.0
        }
    }
}

fn default_true() -> bool { true }

/// Stored documents may carry explicit `null`s where a value was never set
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// One ranked mentor for an entrepreneur
///
/// Computed per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub mentor: MentorProfile,
    pub score: u8,
}

/// Scoring weights
///
/// Each weight is the maximum contribution of its factor to the 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub primary_industry: f64,
    pub secondary_industries: f64,
    pub business_stage: f64,
    pub skills: f64,
    pub language: f64,
    pub location: f64,
    pub rating: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.primary_industry
            + self.secondary_industries
            + self.business_stage
            + self.skills
            + self.language
            + self.location
            + self.rating
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            primary_industry: 30.0,
            secondary_industries: 20.0,
            business_stage: 15.0,
            skills: 15.0,
            language: 10.0,
            location: 5.0,
            rating: 5.0,
        }
    }
}
