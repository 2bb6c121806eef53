pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::ZooConfig};

pub use crate::core::{
    inflector::Inflector,
    morphology::{Case, DictionaryAnalyzer},
    narration::Narrator,
    state_store::{SnapshotFormat, StateStore},
};
pub use domain::model::{Animal, AnimalKind, Employee, Role, Zoo};
pub use utils::error::{Result, ZooError};
