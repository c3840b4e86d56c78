use crate::domain::ports::ScheduleSource;
use crate::domain::schedule::TierSchedule;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Loads the commission schedule from a JSON file written by admin tooling.
///
/// The parsed table is validated before it is handed out, so a malformed
/// file is reported at startup rather than producing wrong quotes.
#[derive(Debug, Clone)]
pub struct JsonScheduleFile {
    path: PathBuf,
}

impl JsonScheduleFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleSource for JsonScheduleFile {
    fn load(&self) -> Result<TierSchedule> {
        let raw = fs::read_to_string(&self.path)?;
        let schedule: TierSchedule = serde_json::from_str(&raw)?;
        schedule.validate()?;
        Ok(schedule)
    }
}
