//! Squad Match - team/player compatibility matching engine for SquadUp
//!
//! This library computes weighted multi-criterion compatibility scores
//! (skill, role composition, region, schedule, language) between player
//! matchmaking requests and candidate teams, and ranks candidates with
//! threshold filtering and human-readable reasons. It is pure and
//! stateless per call; persistence, transport, and auth live in the
//! consuming web layer.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{score_compatibility, skill_score, ContextOptions, RankOutcome, Ranker};
pub use error::MatchError;
pub use models::{
    CompatibilityResult, CompatibilityWeights, Criterion, MatchAttempt, MatchRequest,
    RolePreference, SkillLabel, TeamSnapshot, TeamStatus, Thresholds,
};
pub use services::{InMemoryConfigStore, ResolvedConfig, WeightSource};
