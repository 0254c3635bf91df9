use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

use crate::models::MatchWeights;

/// Errors raised while loading or validating configuration
///
/// Scoring itself never fails; bad weights are the one way a caller can
/// misconfigure the matcher, so they are rejected here rather than
/// silently skewing every score.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid scoring weights: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("scoring weights must sum to 1.0, got {0}")]
    WeightSum(f64),
}

/// Library configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Configured scoring weights, each in [0, 1] and summing to 1.0
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeightsConfig {
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_education_weight")]
    pub education: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            education: default_education_weight(),
            experience: default_experience_weight(),
            interests: default_interests_weight(),
            location: default_location_weight(),
        }
    }
}

fn default_skills_weight() -> f64 { 0.35 }
fn default_education_weight() -> f64 { 0.25 }
fn default_experience_weight() -> f64 { 0.20 }
fn default_interests_weight() -> f64 { 0.15 }
fn default_location_weight() -> f64 { 0.05 }

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl WeightsConfig {
    /// Check the weights and convert them into runtime [`MatchWeights`]
    pub fn to_weights(&self) -> Result<MatchWeights, SettingsError> {
        self.validate()?;

        let weights = MatchWeights {
            skills: self.skills,
            education: self.education,
            experience: self.experience,
            interests: self.interests,
            location: self.location,
        };

        let total = weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SettingsError::WeightSum(total));
        }

        Ok(weights)
    }
}

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
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with CAREER_)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CAREER_)
            // e.g., CAREER_SCORING__WEIGHTS__SKILLS -> scoring.weights.skills
            .add_source(
                Environment::with_prefix("CAREER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.scoring.weights.to_weights()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CAREER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.scoring.weights.to_weights()?;
        Ok(settings)
    }
}
