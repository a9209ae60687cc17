use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::models::{EntrepreneurProfile, MentorProfile};
use crate::services::store::{ProfileStore, StoreError};

const MENTORS_KEY: &str = "mentors:available";

/// Profile store decorator that caches the available-mentor catalog
///
/// Entrepreneur lookups always go to the inner store. Failed reads are
/// returned as-is and never cached, so a dead store is never papered over
/// with stale data.
pub struct CachedProfileStore {
    inner: Arc<dyn ProfileStore>,
    mentors: moka::future::Cache<&'static str, Arc<Vec<MentorProfile>>>,
}

impl CachedProfileStore {
    pub fn new(inner: Arc<dyn ProfileStore>, capacity: u64, ttl_secs: u64) -> Self {
        let mentors = moka::future::CacheBuilder::new(capacity.max(1))
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, mentors }
    }

    /// Drop the cached mentor catalog
    pub async fn invalidate(&self) {
        self.mentors.invalidate(MENTORS_KEY).await;
    }
}

#[async_trait]
impl ProfileStore for CachedProfileStore {
    async fn get_entrepreneur_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<EntrepreneurProfile>, StoreError> {
        self.inner.get_entrepreneur_by_user_id(user_id).await
    }

    async fn list_available_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        if let Some(mentors) = self.mentors.get(MENTORS_KEY).await {
            tracing::trace!("Mentor catalog cache hit");
            return Ok(mentors.as_ref().clone());
        }

        let mentors = self.inner.list_available_mentors().await?;
        self.mentors
            .insert(MENTORS_KEY, Arc::new(mentors.clone()))
            .await;

        tracing::trace!("Mentor catalog cached ({} mentors)", mentors.len());
        Ok(mentors)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        self.inner.health_check().await
    }
}
