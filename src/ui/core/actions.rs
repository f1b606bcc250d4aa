use crate::entities::ModuleId;

/// State transitions the shell can request from the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    SwitchModule(ModuleId),

    // Search
    SetSearch(String),
    ClearSearch,

    // Selection
    SelectItem(String),
    ClearSelection,

    None,
}
