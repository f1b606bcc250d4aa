//! Domain data for the garden catalogs, the task calendar and the view history.

pub mod calendar_task;
pub mod composting_method;
pub mod fertilizer;
pub mod growing_ground;
pub mod item;
pub mod module;
pub mod plant;
pub mod recent_view;
pub mod seasonal_tip;

pub use calendar_task::CalendarTask;
pub use composting_method::CompostingMethod;
pub use fertilizer::Fertilizer;
pub use growing_ground::GrowingGround;
pub use item::{Collections, ItemRef};
pub use module::{ModuleId, ParseModuleError};
pub use plant::Plant;
pub use recent_view::RecentView;
pub use seasonal_tip::SeasonalTip;

use crate::constants::DEFAULT_IMAGE_POSITION;

pub(crate) fn default_image_position() -> u8 {
    DEFAULT_IMAGE_POSITION
}
