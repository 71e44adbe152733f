pub mod authorisation;
pub mod cli;
pub mod models;
pub mod registry;

pub use authorisation::{AuthorisationEngine, normalize};
pub use models::{DecisionReport, MatchResult, MatchSource};
pub use registry::{Registry, RegistryEntry, load_registry_file};
