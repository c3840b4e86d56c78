use super::schedule::TierSchedule;
use crate::error::Result;

/// Source of the commission schedule the engine runs with.
///
/// Admin tooling owns the table; the engine only consumes it. Implementations
/// load it from wherever the deployment keeps it: the compiled-in default, a
/// JSON file, or whatever replaces them.
pub trait ScheduleSource: Send + Sync {
    fn load(&self) -> Result<TierSchedule>;
}

pub type ScheduleSourceBox = Box<dyn ScheduleSource>;
