use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::core::filters::is_available;
use crate::models::{EntrepreneurProfile, MentorProfile};
use crate::services::store::{ProfileStore, StoreError};

/// Seed file layout: `{ "entrepreneurs": [...], "mentors": [...] }`
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub entrepreneurs: Vec<EntrepreneurProfile>,
    #[serde(default)]
    pub mentors: Vec<MentorProfile>,
}

/// Profile store held entirely in memory
///
/// Mentors are returned in insertion order. Used for local development and
/// tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProfileStore {
    entrepreneurs: Vec<EntrepreneurProfile>,
    mentors: Vec<MentorProfile>,
}

impl InMemoryProfileStore {
    pub fn new(entrepreneurs: Vec<EntrepreneurProfile>, mentors: Vec<MentorProfile>) -> Self {
        Self { entrepreneurs, mentors }
    }

    /// Load profiles from a JSON seed file
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let seed: SeedData = serde_json::from_str(&raw)?;

        tracing::info!(
            "Loaded {} entrepreneurs and {} mentors from {}",
            seed.entrepreneurs.len(),
            seed.mentors.len(),
            path.as_ref().display()
        );

        Ok(Self::new(seed.entrepreneurs, seed.mentors))
    }

    pub fn with_entrepreneur(mut self, entrepreneur: EntrepreneurProfile) -> Self {
        self.entrepreneurs.push(entrepreneur);
        self
    }

    pub fn with_mentor(mut self, mentor: MentorProfile) -> Self {
        self.mentors.push(mentor);
        self
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_entrepreneur_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<EntrepreneurProfile>, StoreError> {
        Ok(self
            .entrepreneurs
            .iter()
            .find(|e| e.user_id == user_id)
            .cloned())
    }

    async fn list_available_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        Ok(self
            .mentors
            .iter()
            .filter(|m| is_available(m))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_only_available_mentors_in_order() {
        let mut away = MentorProfile::new("m2");
        away.availability = false;

        let store = InMemoryProfileStore::default()
            .with_mentor(MentorProfile::new("m1"))
            .with_mentor(away)
            .with_mentor(MentorProfile::new("m3"));

        let ids: Vec<String> = store
            .list_available_mentors()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.user_id)
            .collect();

        assert_eq!(ids, vec!["m1", "m3"]);
    }

    #[tokio::test]
    async fn test_unknown_entrepreneur_is_none() {
        let store = InMemoryProfileStore::default().with_entrepreneur(EntrepreneurProfile {
            user_id: "E1".to_string(),
            ..Default::default()
        });

        assert!(store.get_entrepreneur_by_user_id("E1").await.unwrap().is_some());
        assert!(store.get_entrepreneur_by_user_id("E2").await.unwrap().is_none());
    }

    #[test]
    fn test_missing_seed_file_is_io_error() {
        let result = InMemoryProfileStore::from_seed_file("does/not/exist.json");
        assert!(matches!(result, Err(StoreError::IoError(_))));
    }

    #[test]
    fn test_bundled_seed_file_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/seed.json");
        let store = InMemoryProfileStore::from_seed_file(path).unwrap();

        assert!(!store.entrepreneurs.is_empty());
        assert!(!store.mentors.is_empty());
    }
}
