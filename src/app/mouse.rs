use super::{App, Focus};
use crate::kernel::state::ContextMenuEntry;
use crate::kernel::Action;
use crate::views::{ExplorerRow, RowKind};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

const SCROLL_STEP: usize = 3;

/// Selection steps from `current` to the enabled entry at `index`.
pub(super) fn menu_delta(items: &[ContextMenuEntry], current: usize, index: usize) -> isize {
    if index > current {
        items[current + 1..=index].iter().filter(|e| e.enabled).count() as isize
    } else {
        -(items[index..current].iter().filter(|e| e.enabled).count() as isize)
    }
}

impl App {
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        // A press anywhere but the label being edited takes focus from it.
        let mut changed = false;
        if matches!(event.kind, MouseEventKind::Down(_)) && !self.on_editing_row(event) {
            changed = self.commit_pending_edit();
        }

        if self.store.state().context_menu.is_some() {
            return self.handle_menu_mouse(event) || changed;
        }

        if matches!(event.kind, MouseEventKind::Down(MouseButton::Left))
            && self
                .search_area
                .is_some_and(|a| super::render::rect_contains(a, event.column, event.row))
        {
            self.focus = Focus::Search;
            return true;
        }

        let handled = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.mouse_press(event),
            MouseEventKind::Down(MouseButton::Right) => {
                let Some((_, row)) = self.row_at(event) else {
                    return changed;
                };
                let Some(target) = row.node_id().cloned() else {
                    return changed;
                };
                self.dispatch(Action::ContextMenuOpen {
                    target,
                    x: event.column,
                    y: event.row,
                })
            }
            MouseEventKind::Drag(MouseButton::Left) => self.mouse_drag(event),
            MouseEventKind::Up(MouseButton::Left) => self.mouse_release(event),
            MouseEventKind::ScrollUp => {
                let before = self.scroll_offset;
                self.scroll_offset = self.scroll_offset.saturating_sub(SCROLL_STEP);
                before != self.scroll_offset
            }
            MouseEventKind::ScrollDown => {
                let before = self.scroll_offset;
                let max = self
                    .rows()
                    .len()
                    .saturating_sub(self.view.view_height().unwrap_or(0));
                self.scroll_offset = (self.scroll_offset + SCROLL_STEP).min(max);
                before != self.scroll_offset
            }
            _ => false,
        };
        handled || changed
    }

    fn on_editing_row(&self, event: &MouseEvent) -> bool {
        let Some(editing) = self.store.state().explorer.editing.as_ref() else {
            return false;
        };
        if self.store.state().context_menu.is_some()
            && self.view.hit_test_menu(event.column, event.row).is_some()
        {
            return false;
        }
        self.row_at(event)
            .is_some_and(|(_, row)| row.node_id() == Some(editing))
    }

    fn handle_menu_mouse(&mut self, event: &MouseEvent) -> bool {
        if !matches!(event.kind, MouseEventKind::Down(_)) {
            return false;
        }

        let Some(index) = self.view.hit_test_menu(event.column, event.row) else {
            return self.dispatch(Action::ContextMenuClose);
        };
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        let Some(menu) = self.store.state().context_menu.as_ref() else {
            return false;
        };
        if !menu.items.get(index).is_some_and(|entry| entry.enabled) {
            return false;
        }
        let delta = menu_delta(&menu.items, menu.selected, index);
        let mut changed = self.dispatch(Action::ContextMenuMoveSelection { delta });
        changed |= self.dispatch(Action::ContextMenuConfirm);
        changed
    }

    fn row_at(&self, event: &MouseEvent) -> Option<(usize, ExplorerRow)> {
        let index = self
            .view
            .hit_test_row(event.column, event.row, self.scroll_offset)?;
        let row = self.rows().into_iter().nth(index)?;
        Some((index, row))
    }

    fn mouse_press(&mut self, event: &MouseEvent) -> bool {
        self.press = None;
        self.focus = Focus::Tree;

        let Some((_, row)) = self.row_at(event) else {
            return false;
        };
        let RowKind::Entry(entry) = &row.kind else {
            return false;
        };
        if self.store.state().explorer.is_editing(&entry.id) {
            return false;
        }

        let mut changed = false;
        self.press = Some(entry.id.clone());

        let indent = self.store.state().config.indent(row.depth).len() as u16;
        let chevron_start = self.view.left().unwrap_or(0).saturating_add(indent);
        let on_chevron = entry.chevron.is_some()
            && event.column >= chevron_start
            && event.column < chevron_start.saturating_add(2);

        if on_chevron {
            changed |= self.dispatch(Action::ExplorerSelect {
                id: entry.id.clone(),
            });
            changed |= self.dispatch(Action::ExplorerToggleExpand {
                id: entry.id.clone(),
            });
        } else if entry.is_selected {
            changed |= self.dispatch(Action::ExplorerEditStart {
                id: entry.id.clone(),
            });
        } else {
            changed |= self.dispatch(Action::ExplorerSelect {
                id: entry.id.clone(),
            });
        }
        changed
    }

    fn mouse_drag(&mut self, event: &MouseEvent) -> bool {
        let mut changed = false;
        if self.store.state().explorer.drag_source.is_none() {
            let Some(id) = self.press.take() else {
                return false;
            };
            changed |= self.dispatch(Action::ExplorerDragStart { id });
        }

        if let Some(target) = self
            .row_at(event)
            .and_then(|(_, row)| row.drop_target().cloned())
        {
            changed |= self.dispatch(Action::ExplorerDragOver { target });
        }
        changed
    }

    fn mouse_release(&mut self, event: &MouseEvent) -> bool {
        self.press = None;
        if self.store.state().explorer.drag_source.is_none() {
            return false;
        }

        match self
            .row_at(event)
            .and_then(|(_, row)| row.drop_target().cloned())
        {
            Some(target) => self.drop_onto(target),
            None => self.dispatch(Action::ExplorerDragCancel),
        }
    }

    fn commit_pending_edit(&mut self) -> bool {
        if self.store.state().explorer.editing.is_none() {
            return false;
        }
        self.dispatch(Action::ExplorerEditCommit)
    }
}
