//! Contextual factor comparators: region, schedule, language.
//!
//! Each is an independent set-overlap check returning 0-100. An empty or
//! wildcard ("any") constraint on either side accepts anything and scores
//! 100 rather than 0.

use serde::{Deserialize, Serialize};

pub const FULL_OVERLAP_SCORE: f64 = 100.0;
pub const NO_OVERLAP_SCORE: f64 = 0.0;

/// Tunables for the contextual comparators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContextOptions {
    /// Partial credit when availability windows are adjacent rather than
    /// overlapping.
    pub adjacent_schedule_score: f64,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            adjacent_schedule_score: 50.0,
        }
    }
}

fn is_wildcard(values: &[String]) -> bool {
    values.is_empty() || values.iter().any(|v| v == "any")
}

/// Region compatibility: the team states one preferred region, the
/// request a set of acceptable ones.
pub fn region_score(request_regions: &[String], team_region: Option<&str>) -> f64 {
    let team_region = match team_region {
        None => return FULL_OVERLAP_SCORE,
        Some("any") => return FULL_OVERLAP_SCORE,
        Some(region) => region,
    };
    if is_wildcard(request_regions) {
        return FULL_OVERLAP_SCORE;
    }
    if request_regions.iter().any(|r| r == team_region) {
        FULL_OVERLAP_SCORE
    } else {
        NO_OVERLAP_SCORE
    }
}

/// Cyclic day order used for schedule adjacency.
const DAY_WINDOWS: [&str; 4] = ["morning", "afternoon", "evening", "night"];

fn windows_adjacent(a: &str, b: &str) -> bool {
    let pos = |w: &str| DAY_WINDOWS.iter().position(|d| *d == w);
    match (pos(a), pos(b)) {
        (Some(i), Some(j)) => {
            let len = DAY_WINDOWS.len();
            (i + 1) % len == j || (j + 1) % len == i
        }
        _ => false,
    }
}

/// Schedule compatibility over time-of-day availability buckets. A shared
/// bucket is a full match; an adjacent bucket earns partial credit.
pub fn schedule_score(
    request_windows: &[String],
    team_windows: &[String],
    options: &ContextOptions,
) -> f64 {
    if is_wildcard(request_windows) || is_wildcard(team_windows) {
        return FULL_OVERLAP_SCORE;
    }
    if request_windows.iter().any(|w| team_windows.contains(w)) {
        return FULL_OVERLAP_SCORE;
    }
    let adjacent = request_windows
        .iter()
        .any(|rw| team_windows.iter().any(|tw| windows_adjacent(rw, tw)));
    if adjacent {
        options.adjacent_schedule_score
    } else {
        NO_OVERLAP_SCORE
    }
}

/// Language compatibility: any shared language is a full match.
pub fn language_score(request_languages: &[String], team_languages: &[String]) -> f64 {
    if is_wildcard(request_languages) || is_wildcard(team_languages) {
        return FULL_OVERLAP_SCORE;
    }
    if request_languages.iter().any(|l| team_languages.contains(l)) {
        FULL_OVERLAP_SCORE
    } else {
        NO_OVERLAP_SCORE
    }
}
