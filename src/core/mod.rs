pub mod inflector;
pub mod morphology;
pub mod narration;
pub mod state_store;

pub use crate::domain::model::{Animal, AnimalKind, Employee, Role, Zoo};
pub use crate::domain::ports::{MorphAnalyzer, Storage};
pub use crate::utils::error::Result;
