mod config;
mod core;
mod error;
mod models;
mod services;

use crate::config::Settings;
use crate::core::{ContextOptions, Ranker};
use crate::models::{MatchRequest, TeamSnapshot};
use crate::services::{InMemoryConfigStore, WeightSource};
use serde::Deserialize;
use tracing::{error, info};
use validator::Validate;

/// Input document for the driver: one request plus the candidate teams
/// materialized by the caller.
#[derive(Debug, Deserialize)]
struct RankInput {
    request: MatchRequest,
    teams: Vec<TeamSnapshot>,
}

fn main() -> std::process::ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting squad-match ranking driver...");

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            error!("Usage: squad-match <input.json>");
            return std::process::ExitCode::FAILURE;
        }
    };

    let input: RankInput = match std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str(&raw).map_err(|e| e.to_string()))
    {
        Ok(input) => input,
        Err(e) => {
            error!("Failed to read input from {}: {}", path, e);
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Err(e) = input.request.validate() {
        error!("Invalid matchmaking request: {}", e);
        return std::process::ExitCode::FAILURE;
    }

    // Seed the configuration store with the settings-derived defaults.
    // In production the admin layer owns these writes.
    let mut store = InMemoryConfigStore::new();
    if let Err(e) = store.activate_global(settings.default_weights(), settings.thresholds()) {
        error!("Invalid default weight configuration: {}", e);
        return std::process::ExitCode::FAILURE;
    }

    let resolved = match store.resolve(&input.request.game_id) {
        Ok(r) => r,
        Err(e) => {
            error!("{}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    let options = ContextOptions {
        adjacent_schedule_score: settings.context.adjacent_schedule_score,
    };
    let ranker = Ranker::new(resolved.weights, resolved.thresholds).with_options(options);

    match ranker.rank(&input.request, input.teams) {
        Ok(outcome) => {
            info!(
                configuration = %outcome.attempt.configuration_name,
                success = outcome.attempt.success,
                response_time_ms = outcome.attempt.response_time_ms,
                "match attempt completed"
            );
            match serde_json::to_string_pretty(&outcome.results) {
                Ok(json) => {
                    println!("{}", json);
                    std::process::ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("Failed to serialize results: {}", e);
                    std::process::ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("Ranking failed: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
