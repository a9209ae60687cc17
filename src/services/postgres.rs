use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::models::{EntrepreneurProfile, MentorProfile};
use crate::services::store::{ProfileStore, StoreError};

/// PostgreSQL-backed profile store
///
/// Profiles are kept as JSONB documents keyed by user id, one table per
/// role. Mentor availability is a generated column so the candidate query
/// can use an index instead of scanning documents.
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    /// Create a new store from a connection string and run migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL profile store");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    async fn get_entrepreneur_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<EntrepreneurProfile>, StoreError> {
        let query = r#"
            SELECT user_id, profile
            FROM entrepreneurs
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let profile = decode_document(row.get("user_id"), row.get("profile"))?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    async fn list_available_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        let query = r#"
            SELECT user_id, profile
            FROM mentors
            WHERE availability = TRUE
            ORDER BY created_at, user_id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        let total = rows.len();

        let mentors: Vec<MentorProfile> = rows
            .into_iter()
            .filter_map(|row| {
                match decode_document::<MentorProfile>(row.get("user_id"), row.get("profile")) {
                    Ok(mentor) => Some(mentor),
                    Err(e) => {
                        tracing::warn!("Skipping mentor document: {}", e);
                        None
                    }
                }
            })
            .collect();

        tracing::debug!("Loaded {} available mentors ({} rows)", mentors.len(), total);

        Ok(mentors)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Decode a stored JSONB document, filling `userId` from the key column
fn decode_document<T: DeserializeOwned>(user_id: String, mut document: Value) -> Result<T, StoreError> {
    if let Some(object) = document.as_object_mut() {
        object
            .entry("userId")
            .or_insert_with(|| Value::String(user_id.clone()));
    }

    serde_json::from_value(document)
        .map_err(|e| StoreError::InvalidDocument(format!("{}: {}", user_id, e)))
}
