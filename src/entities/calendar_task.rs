use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ModuleId;
use crate::constants::DEFAULT_TASK_COLOR;
use crate::utils::datetime;

/// A dated garden chore linked back to the catalog entry it came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarTask {
    pub id: String,
    /// Module the source entity lives in
    pub module: ModuleId,
    pub entity_id: String,
    /// Calendar day; any time component in the source data is dropped on load.
    #[serde(deserialize_with = "datetime::deserialize_calendar_day")]
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub task_type: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_TASK_COLOR.to_string()
}
