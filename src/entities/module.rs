use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level view the user can browse. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    #[default]
    Home,
    /// Plants catalog
    Florapedia,
    /// Fertilizers catalog
    Nutribase,
    /// Composting methods catalog
    CompostCorner,
    GrowingGrounds,
    SeasonalTips,
    Calendar,
    Profile,
    Settings,
}

/// Raised when a string does not name a known module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown module: '{0}'")]
pub struct ParseModuleError(pub String);

impl ModuleId {
    pub const ALL: [ModuleId; 9] = [
        ModuleId::Home,
        ModuleId::Florapedia,
        ModuleId::Nutribase,
        ModuleId::CompostCorner,
        ModuleId::GrowingGrounds,
        ModuleId::SeasonalTips,
        ModuleId::Calendar,
        ModuleId::Profile,
        ModuleId::Settings,
    ];

    /// Modules backed by a domain collection, in sidebar order.
    pub const CATALOGS: [ModuleId; 5] = [
        ModuleId::Florapedia,
        ModuleId::Nutribase,
        ModuleId::CompostCorner,
        ModuleId::GrowingGrounds,
        ModuleId::SeasonalTips,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::Home => "home",
            ModuleId::Florapedia => "florapedia",
            ModuleId::Nutribase => "nutribase",
            ModuleId::CompostCorner => "compostcorner",
            ModuleId::GrowingGrounds => "growinggrounds",
            ModuleId::SeasonalTips => "seasonaltips",
            ModuleId::Calendar => "calendar",
            ModuleId::Profile => "profile",
            ModuleId::Settings => "settings",
        }
    }

    /// Whether this module owns one of the five domain collections.
    #[must_use]
    pub fn is_catalog(self) -> bool {
        Self::CATALOGS.contains(&self)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = ParseModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ModuleId::ALL
            .into_iter()
            .find(|module| module.as_str() == normalized)
            .ok_or_else(|| ParseModuleError(s.to_string()))
    }
}
