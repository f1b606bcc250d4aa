//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Dashboard Section Headers
pub const HEADER_TODAY: &str = "📅 Today";
pub const HEADER_THIS_WEEK: &str = "🗓 This week";
pub const HEADER_RECENT: &str = "🕘 Recently viewed";
pub const HEADER_CATALOGS: &str = "📚 Catalogs";

// Empty-state Messages
pub const EMPTY_NO_TASKS: &str = "Nothing due. Enjoy the garden!";
pub const EMPTY_NO_RECENT: &str = "No recently viewed items";
pub const EMPTY_NO_RESULTS: &str = "No matching items";
pub const EMPTY_SELECT_ITEM: &str = "Select an item to see its details";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_SNAPSHOT_LOADED: &str = "✅ Loaded garden snapshot";
pub const LOG_SNAPSHOT_MISSING: &str = "⚠️ No garden snapshot found, starting empty";

// Dashboard Defaults
/// Number of distinct items kept in the "recently viewed" strip
pub const DEFAULT_RECENT_LIMIT: usize = 4;
/// Maximum configurable recent items
pub const MAX_RECENT_LIMIT: usize = 50;
/// Days after today covered by the "this week" bucket
pub const DEFAULT_WEEK_DAYS: u32 = 6;
/// Maximum configurable week window
pub const MAX_WEEK_DAYS: u32 = 31;

// Item Defaults
/// Vertical crop position used when an item does not set one
pub const DEFAULT_IMAGE_POSITION: u8 = 50;
/// Upper bound of an image crop position (percent)
pub const MAX_IMAGE_POSITION: u8 = 100;
/// Color tag for calendar tasks that do not set one
pub const DEFAULT_TASK_COLOR: &str = "green";

// File Names
pub const APP_DIR_NAME: &str = "gardenist";
pub const LOCAL_CONFIG_FILE: &str = "gardenist.toml";
pub const CONFIG_FILE: &str = "config.toml";
pub const SNAPSHOT_FILE: &str = "garden.json";
pub const LOG_FILE: &str = "gardenist.log";
