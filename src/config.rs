use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub database: Option<DatabaseSettings>,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Which profile store backend to read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,
    /// JSON seed file for the in-memory backend
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// TTL of the cached mentor catalog; absent or 0 disables caching
    pub mentor_ttl_secs: Option<u64>,
    pub capacity: Option<u64>,
}

impl CacheSettings {
    pub fn enabled(&self) -> bool {
        self.mentor_ttl_secs.unwrap_or(0) > 0
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Per-factor weights; each must be a finite value in 0-100
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_finite_weights"))]
pub struct WeightsConfig {
    #[serde(default = "default_primary_industry_weight")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub primary_industry: f64,
    #[serde(default = "default_secondary_industries_weight")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub secondary_industries: f64,
    #[serde(default = "default_business_stage_weight")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub business_stage: f64,
    #[serde(default = "default_skills_weight")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub skills: f64,
    #[serde(default = "default_language_weight")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub language: f64,
    #[serde(default = "default_location_weight")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub location: f64,
    #[serde(default = "default_rating_weight")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub rating: f64,
}

// NaN slips through range comparisons
fn validate_finite_weights(weights: &WeightsConfig) -> Result<(), ValidationError> {
    let all_finite = [
        weights.primary_industry,
        weights.secondary_industries,
        weights.business_stage,
        weights.skills,
        weights.language,
        weights.location,
        weights.rating,
    ]
    .iter()
    .all(|w| w.is_finite());

    if all_finite {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite_weight"))
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            primary_industry: default_primary_industry_weight(),
            secondary_industries: default_secondary_industries_weight(),
            business_stage: default_business_stage_weight(),
            skills: default_skills_weight(),
            language: default_language_weight(),
            location: default_location_weight(),
            rating: default_rating_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            primary_industry: config.primary_industry,
            secondary_industries: config.secondary_industries,
            business_stage: config.business_stage,
            skills: config.skills,
            language: config.language,
            location: config.location,
            rating: config.rating,
        }
    }
}

fn default_primary_industry_weight() -> f64 { 30.0 }
fn default_secondary_industries_weight() -> f64 { 20.0 }
fn default_business_stage_weight() -> f64 { 15.0 }
fn default_skills_weight() -> f64 { 15.0 }
fn default_language_weight() -> f64 { 10.0 }
fn default_location_weight() -> f64 { 5.0 }
fn default_rating_weight() -> f64 { 5.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTOR_MATCH__)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR_MATCH__SERVER__PORT -> server.port
            .add_source(env_source());

        if let Ok(database_url) = std::env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would silently corrupt scoring
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring
            .weights
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid scoring.weights: {}", e)))
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MENTOR_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.primary_industry, 30.0);
        assert_eq!(weights.secondary_industries, 20.0);
        assert_eq!(weights.business_stage, 15.0);
        assert_eq!(weights.skills, 15.0);
        assert_eq!(weights.language, 10.0);
        assert_eq!(weights.location, 5.0);
        assert_eq!(weights.rating, 5.0);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    fn write_config(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mentor-match-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_rejects_negative_weight() {
        let path = write_config("[scoring.weights]\nskills = -15.0\n");

        let result = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("scoring.weights"), "{}", err);
    }

    #[test]
    fn test_non_finite_weights_are_rejected() {
        let mut weights = WeightsConfig::default();
        assert!(weights.validate().is_ok());

        weights.rating = f64::NAN;
        assert!(weights.validate().is_err());

        weights.rating = 5.0;
        weights.location = f64::INFINITY;
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("mentor-match-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9090

[store]
backend = "postgres"

[database]
url = "postgres://localhost/mentors"

[cache]
mentor_ttl_secs = 30

[scoring.weights]
rating = 10.0
"#
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.store.backend, StoreBackend::Postgres);
        assert_eq!(settings.database.unwrap().url, "postgres://localhost/mentors");
        assert!(settings.cache.enabled());
        assert_eq!(settings.scoring.weights.rating, 10.0);
        assert_eq!(settings.scoring.weights.primary_industry, 30.0);
    }
}
