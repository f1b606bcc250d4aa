use serde::{Deserialize, Serialize};

use super::default_image_position;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonalTip {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_image_position")]
    pub image_position: u8,
}
