use async_trait::async_trait;
use thiserror::Error;

use crate::models::{EntrepreneurProfile, MentorProfile};

/// Errors that can occur when reading from a profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid profile document: {0}")]
    InvalidDocument(String),

    #[error("Failed to read seed file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    SeedError(#[from] serde_json::Error),
}

/// Read-only access to entrepreneur and mentor profiles
///
/// The matcher never writes through this trait.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Look up one entrepreneur by user id, `None` if no such profile exists
    async fn get_entrepreneur_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<EntrepreneurProfile>, StoreError>;

    /// All mentors currently flagged available, in a stable retrieval order
    async fn list_available_mentors(&self) -> Result<Vec<MentorProfile>, StoreError>;

    /// Whether the backing store is reachable
    async fn health_check(&self) -> Result<bool, StoreError>;
}
