pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod sync;
pub mod tasks;

pub use errors::VerdantError;
pub use models::{FilterAttribute, FilterOptions, FilterState, PlantQuery, PlantRecord};
pub use state::BrowseState;
