use crate::kernel::state::{ContextMenuEntry, ContextMenuState, ExplorerMenuAction};
use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::Action;
use crate::models::NodeId;

fn first_selectable_index(items: &[ContextMenuEntry]) -> Option<usize> {
    items.iter().position(|entry| entry.enabled)
}

fn move_menu_selection(items: &[ContextMenuEntry], current: usize, delta: isize) -> Option<usize> {
    let enabled = items.iter().filter(|entry| entry.enabled).count();
    if items.is_empty() || delta == 0 || enabled == 0 {
        return None;
    }

    let len = items.len() as isize;
    let mut next = current.min(items.len() - 1) as isize;
    let step = if delta > 0 { 1 } else { -1 };
    // Positions repeat every `enabled` steps once on an enabled entry.
    let steps = (delta.unsigned_abs() - 1) % enabled + 1;

    for _ in 0..steps {
        loop {
            next = (next + step).rem_euclid(len);
            if items[next as usize].enabled {
                break;
            }
        }
    }

    Some(next as usize)
}

impl Store {
    fn build_context_menu_items(&self, target: &NodeId) -> Vec<ContextMenuEntry> {
        let is_folder = self.state.tree.is_folder(target);
        vec![
            ContextMenuEntry::action(ExplorerMenuAction::NewFile, is_folder),
            ContextMenuEntry::action(ExplorerMenuAction::NewFolder, is_folder),
            ContextMenuEntry::action(ExplorerMenuAction::Rename, true),
            ContextMenuEntry::action(ExplorerMenuAction::Delete, true),
        ]
    }

    pub(in crate::kernel::store) fn reduce_context_menu_action(
        &mut self,
        action: Action,
    ) -> DispatchResult {
        match action {
            Action::ContextMenuOpen { target, x, y } => {
                if !self.state.tree.contains(&target) {
                    tracing::debug!(target = %target, "context menu target not found");
                    return DispatchResult::unchanged();
                }

                let items = self.build_context_menu_items(&target);
                let next = ContextMenuState {
                    selected: first_selectable_index(&items).unwrap_or(0),
                    target: target.clone(),
                    anchor: (x, y),
                    items,
                };

                let mut state_changed = self.state.context_menu.as_ref() != Some(&next);
                self.state.context_menu = Some(next);
                if self.state.explorer.selected.as_ref() != Some(&target) {
                    self.state.explorer.selected = Some(target);
                    state_changed = true;
                }
                DispatchResult::changed(state_changed)
            }
            Action::ContextMenuClose => {
                DispatchResult::changed(self.state.context_menu.take().is_some())
            }
            Action::ContextMenuMoveSelection { delta } => {
                let Some(menu) = self.state.context_menu.as_mut() else {
                    return DispatchResult::unchanged();
                };
                let Some(next) = move_menu_selection(&menu.items, menu.selected, delta) else {
                    return DispatchResult::unchanged();
                };
                let changed = next != menu.selected;
                menu.selected = next;
                DispatchResult::changed(changed)
            }
            Action::ContextMenuConfirm => {
                let Some(menu) = self.state.context_menu.as_ref() else {
                    return DispatchResult::unchanged();
                };
                let Some(selected) = menu.selected_action() else {
                    return DispatchResult::unchanged();
                };

                let target = menu.target.clone();
                let action = match selected {
                    ExplorerMenuAction::NewFile => Action::ExplorerCreateFile { parent: target },
                    ExplorerMenuAction::NewFolder => {
                        Action::ExplorerCreateFolder { parent: target }
                    }
                    ExplorerMenuAction::Rename => Action::ExplorerRenameStart { id: target },
                    ExplorerMenuAction::Delete => Action::ExplorerDelete { id: target },
                };
                self.reduce_explorer_action(action)
            }
            _ => DispatchResult::unchanged(),
        }
    }
}
