use super::actions::Action;
use crate::entities::ModuleId;

/// Everything the view derivations need to know about what the user is doing.
///
/// The shell owns this value and replaces it through [`ViewState::apply`];
/// derivations only ever read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_module: ModuleId,
    pub search_term: String,
    pub selected_item_id: Option<String>,
}

impl ViewState {
    #[must_use]
    pub fn new(active_module: ModuleId) -> Self {
        Self {
            active_module,
            ..Self::default()
        }
    }

    /// Produce the state that follows `action`.
    ///
    /// Moving to another module drops the selection and the search term.
    /// Switching to the module that is already active changes nothing.
    #[must_use]
    pub fn apply(&self, action: Action) -> ViewState {
        match action {
            Action::SwitchModule(module) if module == self.active_module => self.clone(),
            Action::SwitchModule(module) => ViewState::new(module),
            Action::SetSearch(term) => ViewState {
                search_term: term,
                ..self.clone()
            },
            Action::ClearSearch => ViewState {
                search_term: String::new(),
                ..self.clone()
            },
            Action::SelectItem(id) => ViewState {
                selected_item_id: Some(id),
                ..self.clone()
            },
            Action::ClearSelection => ViewState {
                selected_item_id: None,
                ..self.clone()
            },
            Action::None => self.clone(),
        }
    }
}
