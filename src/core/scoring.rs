use crate::core::{
    composition::composition_score,
    context::{language_score, region_score, schedule_score, ContextOptions},
    skill::skill_score,
};
use crate::error::MatchError;
use crate::models::{
    CompatibilityResult, CompatibilityWeights, Criterion, MatchRequest, TeamSnapshot,
};
use std::collections::BTreeMap;

/// Score a single candidate team against a matchmaking request.
///
/// Total = sum of weight * sub-score over the active configuration's
/// criteria, rounded to one decimal and clamped to 0-100. The breakdown
/// map carries exactly those criteria, so legacy configurations with a
/// `size` weight still get a `size` entry.
pub fn score_compatibility(
    team: &TeamSnapshot,
    request: &MatchRequest,
    weights: &CompatibilityWeights,
    options: &ContextOptions,
) -> Result<CompatibilityResult, MatchError> {
    weights.validate()?;

    if !team.is_scoreable() {
        let reason = if team.status != crate::models::TeamStatus::Recruiting {
            format!("status is {:?}", team.status).to_lowercase()
        } else {
            format!("already at capacity ({}/{})", team.current_size, team.max_size)
        };
        return Err(MatchError::TeamNotEligible {
            team_id: team.team_id.clone(),
            reason,
        });
    }

    let (skill, unranked_neutral) = skill_score(request.skill, team.skill);
    let (composition, composition_reasons) = composition_score(team, &request.roles);
    let region = region_score(&request.regions, team.region.as_deref());
    let schedule = schedule_score(&request.availability, &team.availability, options);
    let language = language_score(&request.languages, &team.languages);

    let mut breakdown: BTreeMap<Criterion, f64> = BTreeMap::new();
    let mut total = 0.0;
    for (criterion, weight) in weights.criteria() {
        let sub = match criterion {
            Criterion::Skill => skill,
            Criterion::Composition => composition,
            Criterion::Region => region,
            Criterion::Schedule => schedule,
            Criterion::Language => language,
            // Legacy criterion: open-slot ratio.
            Criterion::Size => {
                (team.max_size - team.current_size) as f64 / team.max_size as f64 * 100.0
            }
        };
        breakdown.insert(criterion, sub);
        total += weight * sub;
    }

    let total_score = ((total * 10.0).round() / 10.0).clamp(0.0, 100.0);

    // Skill first, then composition, then contextual factors. Neutral or
    // wildcard contributions stay silent; the unranked case is carried by
    // the flag instead.
    let mut reasons = Vec::new();
    if !unranked_neutral {
        let distance = (request.skill.fallback_ordinal() - team.skill.fallback_ordinal()).abs();
        reasons.push(match distance {
            0 => format!("Skill tier matches the team ({})", team.skill.as_str()),
            1 => "Within one skill tier of the team".to_string(),
            _ => format!(
                "Skill tier is far from the team's {} level",
                team.skill.as_str()
            ),
        });
    }
    reasons.extend(composition_reasons);
    if let Some(team_region) = team.region.as_deref() {
        if !request.regions.is_empty() && team_region != "any" {
            if region > 0.0 {
                reasons.push(format!("Plays in your region ({})", team_region));
            } else {
                reasons.push(format!("Team plays in {}, outside your regions", team_region));
            }
        }
    }
    if !request.availability.is_empty() && !team.availability.is_empty() {
        if schedule >= 100.0 {
            reasons.push("Availability windows overlap".to_string());
        } else if schedule > 0.0 {
            reasons.push("Availability windows are adjacent".to_string());
        }
    }
    if !request.languages.is_empty() && !team.languages.is_empty() && language > 0.0 {
        let shared: Vec<&str> = request
            .languages
            .iter()
            .filter(|l| team.languages.contains(l))
            .map(|l| l.as_str())
            .collect();
        if !shared.is_empty() {
            reasons.push(format!("Shares a language ({})", shared.join(", ")));
        }
    }

    tracing::debug!(
        team_id = %team.team_id,
        user_id = %request.user_id,
        total_score,
        unranked_neutral,
        "scored candidate team"
    );

    Ok(CompatibilityResult {
        team_id: team.team_id.clone(),
        total_score,
        breakdown,
        reasons,
        unranked_neutral,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RolePreference, SkillLabel, TeamStatus};
    use std::collections::BTreeMap as Map;

    fn test_team() -> TeamSnapshot {
        TeamSnapshot {
            team_id: "team-1".to_string(),
            game_id: "cs2".to_string(),
            skill: SkillLabel::Intermediate,
            current_size: 2,
            max_size: 5,
            status: TeamStatus::Recruiting,
            filled_roles: vec!["entry".to_string(), "igl".to_string()],
            desired_roles: Some(Map::from([("awper".to_string(), 1)])),
            region: Some("eu".to_string()),
            availability: vec!["evening".to_string()],
            languages: vec!["en".to_string()],
            updated_at: chrono::Utc::now(),
        }
    }

    fn test_request() -> MatchRequest {
        MatchRequest {
            user_id: "user-1".to_string(),
            game_id: "cs2".to_string(),
            skill: SkillLabel::Intermediate,
            skill_score: Some(50.0),
            roles: RolePreference::from(vec!["awper".to_string()]),
            regions: vec!["eu".to_string()],
            availability: vec!["evening".to_string()],
            languages: vec!["en".to_string()],
        }
    }

    #[test]
    fn test_perfect_match_scores_high() {
        let result = score_compatibility(
            &test_team(),
            &test_request(),
            &CompatibilityWeights::default(),
            &ContextOptions::default(),
        )
        .unwrap();

        assert!(result.total_score >= 80.0);
        assert_eq!(result.breakdown[&Criterion::Skill], 100.0);
        assert!(result.breakdown[&Criterion::Composition] >= 95.0);
        assert!(!result.unranked_neutral);
    }

    #[test]
    fn test_full_team_rejected() {
        let mut team = test_team();
        team.current_size = 5;

        let err = score_compatibility(
            &team,
            &test_request(),
            &CompatibilityWeights::default(),
            &ContextOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::TeamNotEligible { .. }));
    }

    #[test]
    fn test_disbanded_team_rejected() {
        let mut team = test_team();
        team.status = TeamStatus::Disbanded;

        let err = score_compatibility(
            &team,
            &test_request(),
            &CompatibilityWeights::default(),
            &ContextOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::TeamNotEligible { .. }));
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let weights = CompatibilityWeights {
            skill: 0.9,
            ..Default::default()
        };
        let err = score_compatibility(
            &test_team(),
            &test_request(),
            &weights,
            &ContextOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::InvalidWeights { .. }));
    }

    #[test]
    fn test_breakdown_keys_match_configuration() {
        let result = score_compatibility(
            &test_team(),
            &test_request(),
            &CompatibilityWeights::default(),
            &ContextOptions::default(),
        )
        .unwrap();
        assert!(!result.breakdown.contains_key(&Criterion::Size));
        assert_eq!(result.breakdown.len(), 5);

        let legacy = CompatibilityWeights {
            size: Some(0.0),
            ..Default::default()
        };
        let result = score_compatibility(
            &test_team(),
            &test_request(),
            &legacy,
            &ContextOptions::default(),
        )
        .unwrap();
        assert!(result.breakdown.contains_key(&Criterion::Size));
        assert_eq!(result.breakdown.len(), 6);
        // 3 open slots out of 5.
        assert_eq!(result.breakdown[&Criterion::Size], 60.0);
    }

    #[test]
    fn test_unranked_request_sets_flag_and_neutral_skill() {
        let mut request = test_request();
        request.skill = SkillLabel::Unranked;
        request.skill_score = None;

        let result = score_compatibility(
            &test_team(),
            &request,
            &CompatibilityWeights::default(),
            &ContextOptions::default(),
        )
        .unwrap();
        assert!(result.unranked_neutral);
        assert_eq!(result.breakdown[&Criterion::Skill], 50.0);
        // No skill reason when the neutral rule fired.
        assert!(!result.reasons.iter().any(|r| r.contains("Skill tier")));
    }

    #[test]
    fn test_numeric_skill_score_does_not_change_result() {
        let mut with_score = test_request();
        with_score.skill_score = Some(99.0);
        let mut without_score = test_request();
        without_score.skill_score = None;

        let weights = CompatibilityWeights::default();
        let opts = ContextOptions::default();
        let a = score_compatibility(&test_team(), &with_score, &weights, &opts).unwrap();
        let b = score_compatibility(&test_team(), &without_score, &weights, &opts).unwrap();
        assert_eq!(a.total_score, b.total_score);
    }

    #[test]
    fn test_reasons_ordered_skill_first() {
        let result = score_compatibility(
            &test_team(),
            &test_request(),
            &CompatibilityWeights::default(),
            &ContextOptions::default(),
        )
        .unwrap();
        assert!(result.reasons[0].contains("Skill tier"));
        assert!(result.reasons[1].contains("awper"));
    }
}
