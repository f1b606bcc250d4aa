//! Icon service for managing different icon themes
//!
//! Module icons head list panels and the empty detail state; task icons mark
//! calendar chores as pending or done. Each theme trades looks for terminal
//! compatibility.

use crate::entities::ModuleId;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Icons for calendar task state
#[derive(Debug, Clone)]
pub struct TaskIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// One icon per module, in [`ModuleId::ALL`] order
#[derive(Debug, Clone)]
pub struct ModuleIcons {
    pub home: &'static str,
    pub florapedia: &'static str,
    pub nutribase: &'static str,
    pub compostcorner: &'static str,
    pub growinggrounds: &'static str,
    pub seasonaltips: &'static str,
    pub calendar: &'static str,
    pub profile: &'static str,
    pub settings: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task: TaskIcons,
    pub modules: ModuleIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task: TaskIcons {
                pending: "🔳",
                completed: "✅",
            },
            modules: ModuleIcons {
                home: "🏡",
                florapedia: "🌿",
                nutribase: "🧪",
                compostcorner: "♻️",
                growinggrounds: "🪴",
                seasonaltips: "🍂",
                calendar: "📅",
                profile: "👤",
                settings: "⚙️",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task: TaskIcons {
                pending: "□",
                completed: "✓",
            },
            modules: ModuleIcons {
                home: "⌂",
                florapedia: "✿",
                nutribase: "⚗",
                compostcorner: "♻",
                growinggrounds: "▦",
                seasonaltips: "☀",
                calendar: "◷",
                profile: "☺",
                settings: "⚙",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task: TaskIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            modules: ModuleIcons {
                home: "H",
                florapedia: "P",
                nutribase: "F",
                compostcorner: "C",
                growinggrounds: "G",
                seasonaltips: "T",
                calendar: "@",
                profile: "U",
                settings: "S",
            },
        }
    }

    /// Icon shown next to a module's name in headers and empty states
    #[must_use]
    pub fn module(&self, module: ModuleId) -> &'static str {
        let icons = self.icons().modules;
        match module {
            ModuleId::Home => icons.home,
            ModuleId::Florapedia => icons.florapedia,
            ModuleId::Nutribase => icons.nutribase,
            ModuleId::CompostCorner => icons.compostcorner,
            ModuleId::GrowingGrounds => icons.growinggrounds,
            ModuleId::SeasonalTips => icons.seasonaltips,
            ModuleId::Calendar => icons.calendar,
            ModuleId::Profile => icons.profile,
            ModuleId::Settings => icons.settings,
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task.completed
    }
}
