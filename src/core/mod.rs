// Core algorithm exports
pub mod composition;
pub mod context;
pub mod ranker;
pub mod scoring;
pub mod skill;

pub use composition::{composition_score, default_roles, needed_roles};
pub use context::{language_score, region_score, schedule_score, ContextOptions};
pub use ranker::{RankOutcome, Ranker};
pub use scoring::score_compatibility;
pub use skill::skill_score;
