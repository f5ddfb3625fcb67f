use super::{Action, AppState, Effect};

mod reducers;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    pub(crate) fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    pub(crate) fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

/// Owns the application state; `dispatch` is the only way to change it.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let result = match action {
            Action::ContextMenuOpen { .. }
            | Action::ContextMenuClose
            | Action::ContextMenuMoveSelection { .. }
            | Action::ContextMenuConfirm => self.reduce_context_menu_action(action),
            Action::SearchSetQuery(_) | Action::SearchAppend(_) | Action::SearchBackspace => {
                self.reduce_search_action(action)
            }
            other => self.reduce_explorer_action(other),
        };

        if result.state_changed {
            self.state.version = self.state.version.wrapping_add(1);
        }
        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
