use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ModuleId;

/// One entry of the "recently viewed" history. The history is kept most-recent-first
/// and may mention the same item several times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentView {
    pub item_id: String,
    #[serde(default)]
    pub item_type: String,
    pub module: ModuleId,
    pub viewed_at: DateTime<Utc>,
}
