use serde::{Deserialize, Serialize};

use super::default_image_position;

/// A composting method in the Compost Corner catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompostingMethod {
    pub id: String,
    pub method_name: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub duration_weeks: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_image_position")]
    pub image_position: u8,
}
