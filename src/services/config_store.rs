use crate::error::MatchError;
use crate::models::{CompatibilityWeights, Thresholds};
use std::collections::HashMap;

/// Weight configuration plus thresholds resolved for one scope.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub weights: CompatibilityWeights,
    pub thresholds: Thresholds,
}

/// Source of active weight configurations, keyed by game scope.
///
/// Implemented by whatever store the caller runs against; the engine only
/// needs resolution, never writes. Callers should cache resolved configs
/// (short TTL) and invalidate on activation; the engine tolerates a
/// stale-but-valid snapshot.
pub trait WeightSource {
    /// Active per-game configuration if one exists, else the active
    /// global default, else `ConfigurationMissing`.
    fn resolve(&self, game_id: &str) -> Result<ResolvedConfig, MatchError>;
}

/// In-memory configuration store. Activation replaces the previous active
/// configuration in the same scope, so at most one is active per scope.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    global: Option<ResolvedConfig>,
    per_game: HashMap<String, ResolvedConfig>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the global default configuration, deactivating any
    /// previous one. Weight-sum validity is enforced here, at write time.
    pub fn activate_global(
        &mut self,
        weights: CompatibilityWeights,
        thresholds: Thresholds,
    ) -> Result<(), MatchError> {
        weights.validate()?;
        tracing::info!(configuration = %weights.name, "activating global weight configuration");
        self.global = Some(ResolvedConfig {
            weights,
            thresholds,
        });
        Ok(())
    }

    /// Activate a per-game override, deactivating any previous one for
    /// the same game.
    pub fn activate_for_game(
        &mut self,
        game_id: &str,
        weights: CompatibilityWeights,
        thresholds: Thresholds,
    ) -> Result<(), MatchError> {
        weights.validate()?;
        tracing::info!(
            configuration = %weights.name,
            game_id,
            "activating per-game weight configuration"
        );
        self.per_game.insert(
            game_id.to_string(),
            ResolvedConfig {
                weights,
                thresholds,
            },
        );
        Ok(())
    }

    pub fn deactivate_for_game(&mut self, game_id: &str) {
        self.per_game.remove(game_id);
    }
}

impl WeightSource for InMemoryConfigStore {
    fn resolve(&self, game_id: &str) -> Result<ResolvedConfig, MatchError> {
        self.per_game
            .get(game_id)
            .or(self.global.as_ref())
            .cloned()
            .ok_or_else(|| MatchError::ConfigurationMissing {
                game_id: game_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CompatibilityWeights {
        CompatibilityWeights {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_configuration_is_an_error() {
        let store = InMemoryConfigStore::new();
        let err = store.resolve("cs2").unwrap_err();
        assert!(matches!(err, MatchError::ConfigurationMissing { .. }));
    }

    #[test]
    fn test_per_game_overrides_global() {
        let mut store = InMemoryConfigStore::new();
        store
            .activate_global(named("global"), Thresholds::default())
            .unwrap();
        store
            .activate_for_game("cs2", named("cs2-tuned"), Thresholds::default())
            .unwrap();

        assert_eq!(store.resolve("cs2").unwrap().weights.name, "cs2-tuned");
        assert_eq!(store.resolve("dota2").unwrap().weights.name, "global");
    }

    #[test]
    fn test_activation_replaces_previous_sibling() {
        let mut store = InMemoryConfigStore::new();
        store
            .activate_for_game("cs2", named("v1"), Thresholds::default())
            .unwrap();
        store
            .activate_for_game("cs2", named("v2"), Thresholds::default())
            .unwrap();
        assert_eq!(store.resolve("cs2").unwrap().weights.name, "v2");
    }

    #[test]
    fn test_write_path_rejects_invalid_weights() {
        let mut store = InMemoryConfigStore::new();
        let bad = CompatibilityWeights {
            skill: 0.9,
            ..Default::default()
        };
        assert!(store.activate_global(bad, Thresholds::default()).is_err());
    }

    #[test]
    fn test_deactivate_falls_back_to_global() {
        let mut store = InMemoryConfigStore::new();
        store
            .activate_global(named("global"), Thresholds::default())
            .unwrap();
        store
            .activate_for_game("cs2", named("cs2-tuned"), Thresholds::default())
            .unwrap();
        store.deactivate_for_game("cs2");
        assert_eq!(store.resolve("cs2").unwrap().weights.name, "global");
    }
}
