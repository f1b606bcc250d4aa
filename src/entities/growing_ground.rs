use serde::{Deserialize, Serialize};

use super::default_image_position;

/// A bed, plot, or container the user grows in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowingGround {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub area_sq_m: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_image_position")]
    pub image_position: u8,
}
