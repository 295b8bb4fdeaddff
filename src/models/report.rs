use crate::models::weights::Criterion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scored compatibility of one team against one request.
///
/// Ephemeral engine output: constructed fresh per scoring call and handed
/// to the caller for ranking, display, or persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    #[serde(rename = "teamId")]
    pub team_id: String,
    /// Weighted total, 0-100 rounded to one decimal.
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    /// Per-criterion sub-scores. Keys exactly mirror the active
    /// configuration's criteria.
    pub breakdown: BTreeMap<Criterion, f64>,
    /// Human-readable explanations, skill first, then composition, then
    /// contextual factors.
    pub reasons: Vec<String>,
    /// Set when the requester had no rank and the neutral skill midpoint
    /// was applied.
    #[serde(rename = "unrankedNeutral")]
    pub unranked_neutral: bool,
}

/// Analytics record for one completed rank call. Reported to the caller
/// for logging; the engine never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAttempt {
    #[serde(rename = "configurationName")]
    pub configuration_name: String,
    pub success: bool,
    /// Breakdown of the top-ranked result, empty when nothing survived
    /// the threshold.
    pub breakdown: BTreeMap<Criterion, f64>,
    #[serde(rename = "responseTimeMs")]
    pub response_time_ms: u64,
}
