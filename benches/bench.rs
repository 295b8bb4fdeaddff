// Criterion benchmarks for squad-match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use squad_match::core::composition::composition_score;
use squad_match::core::skill::skill_score;
use squad_match::{
    score_compatibility, CompatibilityWeights, ContextOptions, MatchRequest, Ranker,
    RolePreference, SkillLabel, TeamSnapshot, TeamStatus, Thresholds,
};
use chrono::Utc;
use std::collections::BTreeMap;

fn create_team(id: usize) -> TeamSnapshot {
    let skills = [
        SkillLabel::Beginner,
        SkillLabel::Intermediate,
        SkillLabel::Advanced,
        SkillLabel::Expert,
    ];
    TeamSnapshot {
        team_id: id.to_string(),
        game_id: "cs2".to_string(),
        skill: skills[id % skills.len()],
        current_size: (id % 4) as u8 + 1,
        max_size: 5,
        status: TeamStatus::Recruiting,
        filled_roles: vec!["entry".to_string()],
        desired_roles: Some(BTreeMap::from([
            ("awper".to_string(), 1),
            ("support".to_string(), 1),
        ])),
        region: Some(if id % 2 == 0 { "eu" } else { "na" }.to_string()),
        availability: vec!["evening".to_string()],
        languages: vec!["en".to_string()],
        updated_at: Utc::now(),
    }
}

fn create_request() -> MatchRequest {
    MatchRequest {
        user_id: "current_user".to_string(),
        game_id: "cs2".to_string(),
        skill: SkillLabel::Intermediate,
        skill_score: Some(55.0),
        roles: RolePreference::from(vec!["awper".to_string()]),
        regions: vec!["eu".to_string()],
        availability: vec!["evening".to_string()],
        languages: vec!["en".to_string()],
    }
}

fn bench_skill_score(c: &mut Criterion) {
    c.bench_function("skill_score", |b| {
        b.iter(|| {
            skill_score(
                black_box(SkillLabel::Intermediate),
                black_box(SkillLabel::Advanced),
            )
        });
    });
}

fn bench_composition_score(c: &mut Criterion) {
    let team = create_team(0);
    let roles = RolePreference::from(vec!["awper".to_string()]);

    c.bench_function("composition_score", |b| {
        b.iter(|| composition_score(black_box(&team), black_box(&roles)));
    });
}

fn bench_full_score(c: &mut Criterion) {
    let team = create_team(1);
    let request = create_request();
    let weights = CompatibilityWeights::default();
    let options = ContextOptions::default();

    c.bench_function("score_compatibility", |b| {
        b.iter(|| {
            score_compatibility(
                black_box(&team),
                black_box(&request),
                black_box(&weights),
                black_box(&options),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::new(CompatibilityWeights::default(), Thresholds::default());
    let request = create_request();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<TeamSnapshot> = (0..*candidate_count).map(create_team).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    ranker.rank(black_box(&request), black_box(candidates.clone()))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_skill_score,
    bench_composition_score,
    bench_full_score,
    bench_ranking
);

criterion_main!(benches);
