use crate::models::{CompatibilityWeights, Thresholds};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration for the driver binary and test harnesses.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub context: ContextSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_compatibility")]
    pub min_compatibility: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_compatibility: default_min_compatibility(),
            max_results: default_max_results(),
        }
    }
}

fn default_min_compatibility() -> f64 { 40.0 }
fn default_max_results() -> usize { 20 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_composition_weight")]
    pub composition: f64,
    #[serde(default = "default_region_weight")]
    pub region: f64,
    #[serde(default = "default_schedule_weight")]
    pub schedule: f64,
    #[serde(default = "default_language_weight")]
    pub language: f64,
    /// Legacy criterion; leave unset for new deployments.
    #[serde(default)]
    pub size: Option<f64>,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            composition: default_composition_weight(),
            region: default_region_weight(),
            schedule: default_schedule_weight(),
            language: default_language_weight(),
            size: None,
        }
    }
}

fn default_skill_weight() -> f64 { 0.30 }
fn default_composition_weight() -> f64 { 0.30 }
fn default_region_weight() -> f64 { 0.15 }
fn default_schedule_weight() -> f64 { 0.15 }
fn default_language_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct ContextSettings {
    #[serde(default = "default_adjacent_schedule_score")]
    pub adjacent_schedule_score: f64,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            adjacent_schedule_score: default_adjacent_schedule_score(),
        }
    }
}

fn default_adjacent_schedule_score() -> f64 { 50.0 }

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
    /// 3. Environment variables (prefixed with SQUAD_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with SQUAD_)
            // e.g., SQUAD_MATCHING__MAX_RESULTS -> matching.max_results
            .add_source(
                Environment::with_prefix("SQUAD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SQUAD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Default weight vector built from the configured values, scoped
    /// globally.
    pub fn default_weights(&self) -> CompatibilityWeights {
        CompatibilityWeights {
            name: "default".to_string(),
            game_id: None,
            skill: self.scoring.weights.skill,
            composition: self.scoring.weights.composition,
            region: self.scoring.weights.region,
            schedule: self.scoring.weights.schedule,
            language: self.scoring.weights.language,
            size: self.scoring.weights.size,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_compatibility: self.matching.min_compatibility,
            max_results: self.matching.max_results,
        }
    }
}
