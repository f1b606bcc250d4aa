//! Static per-module configuration: display name, color tag and the actions a
//! module allows.

use crate::entities::ModuleId;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Something the user may do inside a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleAction {
    View,
    Search,
    AddNew,
    Edit,
    Delete,
}

impl ModuleAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleAction::View => "view",
            ModuleAction::Search => "search",
            ModuleAction::AddNew => "add_new",
            ModuleAction::Edit => "edit",
            ModuleAction::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleConfig {
    pub module: ModuleId,
    pub display_name: &'static str,
    pub color_tag: &'static str,
    pub allowed_actions: &'static [ModuleAction],
}

impl ModuleConfig {
    #[must_use]
    pub fn allows(&self, action: ModuleAction) -> bool {
        self.allowed_actions.contains(&action)
    }
}

const CATALOG_ACTIONS: &[ModuleAction] = &[
    ModuleAction::View,
    ModuleAction::Search,
    ModuleAction::AddNew,
    ModuleAction::Edit,
    ModuleAction::Delete,
];
const VIEW_ONLY: &[ModuleAction] = &[ModuleAction::View];
const ACCOUNT_ACTIONS: &[ModuleAction] = &[ModuleAction::View, ModuleAction::Edit];

static REGISTRY: Lazy<HashMap<ModuleId, ModuleConfig>> = Lazy::new(|| {
    let entries = [
        (ModuleId::Home, "Home", "green", VIEW_ONLY),
        (ModuleId::Florapedia, "Florapedia", "emerald", CATALOG_ACTIONS),
        (ModuleId::Nutribase, "NutriBase", "amber", CATALOG_ACTIONS),
        (ModuleId::CompostCorner, "Compost Corner", "brown", CATALOG_ACTIONS),
        (ModuleId::GrowingGrounds, "Growing Grounds", "lime", CATALOG_ACTIONS),
        (ModuleId::SeasonalTips, "Seasonal Tips", "orange", CATALOG_ACTIONS),
        (ModuleId::Calendar, "Calendar", "sky", VIEW_ONLY),
        (ModuleId::Profile, "Profile", "violet", ACCOUNT_ACTIONS),
        (ModuleId::Settings, "Settings", "slate", ACCOUNT_ACTIONS),
    ];

    entries
        .into_iter()
        .map(|(module, display_name, color_tag, allowed_actions)| {
            (
                module,
                ModuleConfig {
                    module,
                    display_name,
                    color_tag,
                    allowed_actions,
                },
            )
        })
        .collect()
});

/// Configuration for `module`. Every module is registered, and `home` backs
/// up anything that is not.
#[must_use]
pub fn resolve_module_config(module: ModuleId) -> &'static ModuleConfig {
    REGISTRY.get(&module).unwrap_or_else(home_config)
}

/// String-keyed lookup; unrecognized names get the home configuration.
#[must_use]
pub fn resolve_module_config_str(module: &str) -> &'static ModuleConfig {
    match module.parse::<ModuleId>() {
        Ok(module) => resolve_module_config(module),
        Err(err) => {
            log::debug!("{}, falling back to home", err);
            home_config()
        }
    }
}

/// Whether the module offers an "add new" entry point. Only the five catalogs do.
#[must_use]
pub fn can_add_new(module: ModuleId) -> bool {
    matches!(
        module,
        ModuleId::Florapedia
            | ModuleId::Nutribase
            | ModuleId::CompostCorner
            | ModuleId::GrowingGrounds
            | ModuleId::SeasonalTips
    )
}

#[must_use]
pub fn can_add_new_str(module: &str) -> bool {
    module.parse::<ModuleId>().map(can_add_new).unwrap_or(false)
}

/// Registry entries in sidebar order.
#[must_use]
pub fn all_module_configs() -> Vec<&'static ModuleConfig> {
    ModuleId::ALL.into_iter().map(resolve_module_config).collect()
}

fn home_config() -> &'static ModuleConfig {
    &REGISTRY[&ModuleId::Home]
}
