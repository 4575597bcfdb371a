use crate::core::models::{
    FilterOptions,
    PlantRecord,
};

pub type PlantsResult = Result<Vec<PlantRecord>, String>;

/// Completed background work, delivered to the GUI thread via the
/// TaskManager channel and polled once per frame.
#[derive(Debug, Clone)]
pub enum TaskResult {
    FilterOptionsLoaded(Result<FilterOptions, String>),
    /// `seq` identifies the fetch cycle that issued this request; the app
    /// discards results whose sequence number is no longer current.
    PlantsFetched { seq: u64, result: PlantsResult },
}
