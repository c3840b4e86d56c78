use crate::domain::ports::ScheduleSource;
use crate::domain::schedule::TierSchedule;
use crate::error::Result;

/// The compiled-in production schedule.
///
/// Used whenever a deployment has no admin-adjusted table of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSchedule;

impl ScheduleSource for BuiltinSchedule {
    fn load(&self) -> Result<TierSchedule> {
        Ok(TierSchedule::default())
    }
}
