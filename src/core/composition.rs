use crate::models::{RolePreference, TeamSnapshot};

/// Fixed score for a candidate with no stated role preference. Sits below
/// a perfect fill but above a wrong/redundant role.
pub const FLEXIBLE_SCORE: f64 = 70.0;

/// Score for a candidate whose stated roles match nothing the team needs.
/// Strictly below the flexible baseline.
pub const REDUNDANT_ROLE_SCORE: f64 = 65.0;

/// Gradient parameters: score = FILL_BASE + fill_ratio * FILL_SPAN,
/// clamped to FILL_CEILING. Empirically chosen constants preserved for
/// compatibility with downstream expectations.
pub const FILL_BASE: f64 = 70.0;
pub const FILL_SPAN: f64 = 25.0;
pub const FILL_CEILING: f64 = 95.0;

/// Five-role tactical-shooter template, also the fallback for games
/// without their own template.
const TACTICAL_ROLES: [&str; 5] = ["entry", "awper", "support", "lurker", "igl"];
const MOBA_ROLES: [&str; 5] = ["carry", "mid", "offlane", "support", "jungler"];

/// Default role requirement list for a game, used when a team has no
/// explicit desired-roles map.
pub fn default_roles(game_id: &str) -> &'static [&'static str] {
    match game_id {
        "cs2" | "csgo" | "valorant" => &TACTICAL_ROLES,
        "dota2" | "lol" => &MOBA_ROLES,
        _ => &TACTICAL_ROLES,
    }
}

/// Roles the team still needs filled.
///
/// With an explicit desired-roles map, a role is needed while its filled
/// count (duplicates included) is below the wanted count. Otherwise the
/// per-game default template minus already-filled roles applies.
pub fn needed_roles(team: &TeamSnapshot) -> Vec<String> {
    match &team.desired_roles {
        Some(desired) => desired
            .iter()
            .filter(|(role, wanted)| {
                let filled = team.filled_roles.iter().filter(|r| r == role).count();
                filled < **wanted as usize
            })
            .map(|(role, _)| role.clone())
            .collect(),
        None => default_roles(&team.game_id)
            .iter()
            .filter(|role| !team.filled_roles.iter().any(|r| r == *role))
            .map(|role| role.to_string())
            .collect(),
    }
}

/// Score how well a candidate's role intent fills the team's open slots
/// (0-100), with reasons for display.
pub fn composition_score(team: &TeamSnapshot, preference: &RolePreference) -> (f64, Vec<String>) {
    let needed = needed_roles(team);

    let preferred = match preference {
        RolePreference::Flexible => {
            return (
                FLEXIBLE_SCORE,
                vec!["Open to any role and can adapt to the team's needs".to_string()],
            );
        }
        RolePreference::Roles(roles) => roles,
    };

    let fills: Vec<&String> = preferred.iter().filter(|r| needed.contains(r)).collect();

    if fills.is_empty() {
        // Every stated role is already covered (or not wanted at all).
        let reasons = preferred
            .iter()
            .map(|role| {
                if team.filled_roles.iter().any(|r| r == role) {
                    format!("{} is already covered by a current member", role)
                } else {
                    format!("{} is not a role this team is looking for", role)
                }
            })
            .collect();
        return (REDUNDANT_ROLE_SCORE, reasons);
    }

    let fill_ratio = fills.len() as f64 / needed.len().max(1) as f64;
    let score = (FILL_BASE + fill_ratio * FILL_SPAN).clamp(0.0, FILL_CEILING);

    let mut reasons: Vec<String> = fills
        .iter()
        .map(|role| format!("Fills the team's need for {}", role))
        .collect();
    for role in preferred {
        if !needed.contains(role) && team.filled_roles.iter().any(|r| r == role) {
            reasons.push(format!("{} is already covered by a current member", role));
        }
    }

    (score, reasons)
}
