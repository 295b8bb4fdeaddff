// Collaborator-facing services
pub mod config_store;

pub use config_store::{InMemoryConfigStore, ResolvedConfig, WeightSource};
