// Model exports
pub mod domain;
pub mod report;
pub mod weights;

pub use domain::{MatchRequest, RolePreference, SkillLabel, TeamSnapshot, TeamStatus};
pub use report::{CompatibilityResult, MatchAttempt};
pub use weights::{CompatibilityWeights, Criterion, Thresholds, WEIGHT_SUM_EPSILON};
