use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Skill tier attached to players and teams.
///
/// `Unranked` covers players without a calculated rank; the legacy wire
/// value `any` deserializes to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLabel {
    #[serde(alias = "any")]
    Unranked,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLabel {
    /// True when the label carries real ranking information.
    pub fn is_ranked(&self) -> bool {
        !matches!(self, SkillLabel::Unranked)
    }

    /// Ordinal position on the 1-4 tier scale. Unranked sits at the
    /// intermediate midpoint so distance math against it stays defined.
    pub fn fallback_ordinal(&self) -> i8 {
        match self {
            SkillLabel::Beginner => 1,
            SkillLabel::Unranked | SkillLabel::Intermediate => 2,
            SkillLabel::Advanced => 3,
            SkillLabel::Expert => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLabel::Unranked => "unranked",
            SkillLabel::Beginner => "beginner",
            SkillLabel::Intermediate => "intermediate",
            SkillLabel::Advanced => "advanced",
            SkillLabel::Expert => "expert",
        }
    }
}

/// A player's role intent: either open to anything, or a stated set of
/// role identifiers. On the wire this is a plain string array; an empty
/// array means flexible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum RolePreference {
    Flexible,
    Roles(Vec<String>),
}

impl RolePreference {
    pub fn is_flexible(&self) -> bool {
        matches!(self, RolePreference::Flexible)
    }

    pub fn roles(&self) -> &[String] {
        match self {
            RolePreference::Flexible => &[],
            RolePreference::Roles(roles) => roles,
        }
    }
}

impl Default for RolePreference {
    fn default() -> Self {
        RolePreference::Flexible
    }
}

impl From<Vec<String>> for RolePreference {
    fn from(roles: Vec<String>) -> Self {
        if roles.is_empty() {
            RolePreference::Flexible
        } else {
            RolePreference::Roles(roles)
        }
    }
}

impl From<RolePreference> for Vec<String> {
    fn from(pref: RolePreference) -> Self {
        match pref {
            RolePreference::Flexible => vec![],
            RolePreference::Roles(roles) => roles,
        }
    }
}

/// A player's matchmaking intent. Immutable once scored; cancel/expire is
/// the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub skill: SkillLabel,
    /// Calculated 0-100 skill score for ranked players. Informational
    /// only; the ordinal tiers drive scoring.
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(rename = "skillScore", default)]
    pub skill_score: Option<f64>,
    #[serde(rename = "preferredRoles", default)]
    pub roles: RolePreference,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Recruiting state of a team. Only `Recruiting` teams are scoreable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Recruiting,
    Full,
    Disbanded,
}

/// Read-model snapshot of a candidate team, materialized by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSnapshot {
    #[serde(rename = "teamId")]
    pub team_id: String,
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub skill: SkillLabel,
    #[serde(rename = "currentSize")]
    pub current_size: u8,
    #[serde(rename = "maxSize")]
    pub max_size: u8,
    pub status: TeamStatus,
    /// Roles held by active members, duplicates allowed.
    #[serde(rename = "filledRoles", default)]
    pub filled_roles: Vec<String>,
    /// Explicit role -> wanted-count map. When absent the per-game
    /// default template applies.
    #[serde(rename = "desiredRoles", default)]
    pub desired_roles: Option<BTreeMap<String, u8>>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl TeamSnapshot {
    pub fn has_capacity(&self) -> bool {
        self.current_size < self.max_size
    }

    /// Eligibility gate for the scorer: recruiting with an open slot.
    pub fn is_scoreable(&self) -> bool {
        self.status == TeamStatus::Recruiting && self.has_capacity()
    }
}
