use crate::models::SkillLabel;

/// Pinned tier percentages. The three-step falloff was tuned to separate
/// compatible tiers sharply; a linear falloff under-penalized two-tier
/// gaps.
pub const EXACT_TIER_SCORE: f64 = 100.0;
pub const ADJACENT_TIER_SCORE: f64 = 66.7;
pub const DISTANT_TIER_SCORE: f64 = 16.7;

/// Fixed midpoint applied when the requester has no calculated rank, so
/// new and unlinked players are neither penalized nor favored.
pub const NEUTRAL_SKILL_SCORE: f64 = 50.0;

/// Score skill compatibility between a request and a team (0-100).
///
/// Returns the score and whether the neutral unranked rule fired.
/// Symmetric in the ranked case: distance from A to B equals distance
/// from B to A. Numeric skill scores carried on the request are
/// informational and never alter this result.
pub fn skill_score(request: SkillLabel, team: SkillLabel) -> (f64, bool) {
    if !request.is_ranked() {
        return (NEUTRAL_SKILL_SCORE, true);
    }

    let distance = (request.fallback_ordinal() - team.fallback_ordinal()).abs();
    let score = match distance {
        0 => EXACT_TIER_SCORE,
        1 => ADJACENT_TIER_SCORE,
        _ => DISTANT_TIER_SCORE,
    };
    (score, false)
}
