use serde::{Deserialize, Serialize};

use super::default_image_position;

/// A plant entry in the Florapedia catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub common_name: String,
    pub scientific_name: String,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub sunlight: Option<String>,
    #[serde(default)]
    pub watering: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Vertical crop position of the image, as a percentage.
    #[serde(default = "default_image_position")]
    pub image_position: u8,
}
