use crate::core::{context::ContextOptions, scoring::score_compatibility};
use crate::error::MatchError;
use crate::models::{
    CompatibilityResult, CompatibilityWeights, MatchAttempt, MatchRequest, TeamSnapshot,
    Thresholds,
};
use std::time::Instant;

/// Result of ranking a candidate set.
#[derive(Debug)]
pub struct RankOutcome {
    pub results: Vec<CompatibilityResult>,
    pub total_candidates: usize,
    /// Analytics record for the caller's logging sink.
    pub attempt: MatchAttempt,
}

/// Ranks candidate teams for a request: score, threshold-filter, sort,
/// truncate. Stateless per call; safe to share.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: CompatibilityWeights,
    thresholds: Thresholds,
    options: ContextOptions,
}

impl Ranker {
    pub fn new(weights: CompatibilityWeights, thresholds: Thresholds) -> Self {
        Self {
            weights,
            thresholds,
            options: ContextOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ContextOptions) -> Self {
        self.options = options;
        self
    }

    /// Rank candidate teams, best first.
    ///
    /// Ineligible teams (not recruiting, full) are skipped rather than
    /// raised. Results below the minimum compatibility threshold are
    /// dropped, the remainder sorted by total score descending with ties
    /// broken by team recency then id, and truncated to the configured
    /// maximum.
    pub fn rank(
        &self,
        request: &MatchRequest,
        candidates: Vec<TeamSnapshot>,
    ) -> Result<RankOutcome, MatchError> {
        let started = Instant::now();
        self.weights.validate()?;

        let total_candidates = candidates.len();
        let mut scored: Vec<(CompatibilityResult, chrono::DateTime<chrono::Utc>)> =
            Vec::with_capacity(total_candidates);

        for team in candidates {
            if !team.is_scoreable() {
                tracing::debug!(team_id = %team.team_id, "skipping ineligible team");
                continue;
            }
            match score_compatibility(&team, request, &self.weights, &self.options) {
                Ok(result) if result.total_score >= self.thresholds.min_compatibility => {
                    scored.push((result, team.updated_at));
                }
                Ok(result) => {
                    tracing::debug!(
                        team_id = %result.team_id,
                        total_score = result.total_score,
                        min = self.thresholds.min_compatibility,
                        "dropping below-threshold result"
                    );
                }
                // Eligibility raced between the gate and the scorer's own
                // check; batch mode excludes rather than fails.
                Err(MatchError::TeamNotEligible { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        // Descending by score, most recently updated team first on ties,
        // then id so ordering is fully deterministic.
        scored.sort_by(|(a, a_updated), (b, b_updated)| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b_updated.cmp(a_updated))
                .then_with(|| a.team_id.cmp(&b.team_id))
        });
        scored.truncate(self.thresholds.max_results);

        let results: Vec<CompatibilityResult> =
            scored.into_iter().map(|(result, _)| result).collect();

        let attempt = MatchAttempt {
            configuration_name: self.weights.name.clone(),
            success: !results.is_empty(),
            breakdown: results
                .first()
                .map(|r| r.breakdown.clone())
                .unwrap_or_default(),
            response_time_ms: started.elapsed().as_millis() as u64,
        };

        tracing::info!(
            user_id = %request.user_id,
            game_id = %request.game_id,
            total_candidates,
            returned = results.len(),
            configuration = %attempt.configuration_name,
            response_time_ms = attempt.response_time_ms,
            "ranked candidate teams"
        );

        Ok(RankOutcome {
            results,
            total_candidates,
            attempt,
        })
    }
}
