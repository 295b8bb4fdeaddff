use thiserror::Error;

/// Domain errors surfaced by the engine. All are non-retryable; the
/// caller's I/O layer owns retry/backoff for input fetching.
#[derive(Debug, Error)]
pub enum MatchError {
    /// No active weight configuration resolvable for the scope.
    #[error("no active weight configuration for game '{game_id}' and no global default")]
    ConfigurationMissing { game_id: String },

    /// Team is not recruiting or has no open slot. Raised for single-team
    /// scoring; batch ranking simply excludes the team.
    #[error("team '{team_id}' is not eligible for matchmaking: {reason}")]
    TeamNotEligible { team_id: String, reason: String },

    /// Weight vector sum is outside 1.0 +/- 0.001. Should be caught at
    /// configuration write time; rejected here rather than producing a
    /// misleading total.
    #[error("weight configuration '{name}' sums to {sum:.4}, expected 1.0 within 0.001")]
    InvalidWeights { name: String, sum: f64 },
}
