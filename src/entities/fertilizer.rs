use serde::{Deserialize, Serialize};

use super::default_image_position;

/// A fertilizer entry in the Nutribase catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fertilizer {
    pub id: String,
    pub fertilizer_name: String,
    /// Nitrogen-phosphorus-potassium ratio, e.g. "10-10-10"
    #[serde(default)]
    pub npk_ratio: Option<String>,
    #[serde(default)]
    pub application_rate: Option<String>,
    #[serde(default)]
    pub is_organic: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_image_position")]
    pub image_position: u8,
}
