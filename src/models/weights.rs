use crate::error::MatchError;
use serde::{Deserialize, Serialize};

/// Tolerance on the weight sum. Configurations are validated at write
/// time by the admin layer; the scorer re-checks with the same epsilon.
pub const WEIGHT_SUM_EPSILON: f64 = 0.001;

/// Closed set of scoring criteria. `Size` survives only for legacy
/// configurations; new defaults omit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Skill,
    Composition,
    Region,
    Schedule,
    Language,
    Size,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Skill => "skill",
            Criterion::Composition => "composition",
            Criterion::Region => "region",
            Criterion::Schedule => "schedule",
            Criterion::Language => "language",
            Criterion::Size => "size",
        }
    }
}

/// Active weight vector for one scope (global or a single game).
///
/// The one-active-per-scope invariant is enforced by the configuration
/// store's write path; the engine only ever sees one resolved vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityWeights {
    pub name: String,
    /// None = global default scope.
    #[serde(rename = "gameId", default)]
    pub game_id: Option<String>,
    pub skill: f64,
    pub composition: f64,
    pub region: f64,
    pub schedule: f64,
    pub language: f64,
    /// Legacy criterion, zero-weighted or absent in new configurations.
    #[serde(default)]
    pub size: Option<f64>,
}

impl CompatibilityWeights {
    /// The criteria this configuration scores, in breakdown order.
    pub fn criteria(&self) -> Vec<(Criterion, f64)> {
        let mut out = vec![
            (Criterion::Skill, self.skill),
            (Criterion::Composition, self.composition),
            (Criterion::Region, self.region),
            (Criterion::Schedule, self.schedule),
            (Criterion::Language, self.language),
        ];
        if let Some(size) = self.size {
            out.push((Criterion::Size, size));
        }
        out
    }

    pub fn sum(&self) -> f64 {
        self.criteria().iter().map(|(_, w)| w).sum()
    }

    /// Reject weight vectors whose sum drifts outside 1.0 +/- epsilon.
    pub fn validate(&self) -> Result<(), MatchError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(MatchError::InvalidWeights {
                name: self.name.clone(),
                sum,
            });
        }
        Ok(())
    }
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            game_id: None,
            skill: 0.30,
            composition: 0.30,
            region: 0.15,
            schedule: 0.15,
            language: 0.10,
            size: None,
        }
    }
}

/// Ranking cutoffs resolved alongside the weight vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(rename = "minCompatibility")]
    pub min_compatibility: f64,
    #[serde(rename = "maxResults")]
    pub max_results: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_compatibility: 40.0,
            max_results: 20,
        }
    }
}
