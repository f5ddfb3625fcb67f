use super::{App, Focus};
use crate::kernel::Action;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

impl App {
    /// Returns true when the screen needs a redraw.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => true,
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        if self.store.state().context_menu.is_some() {
            return self.handle_menu_key(key);
        }
        if self.store.state().explorer.editing.is_some() {
            return self.handle_edit_key(key);
        }
        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Tree => self.handle_tree_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => self.dispatch(Action::ContextMenuMoveSelection { delta: -1 }),
            KeyCode::Down | KeyCode::Tab => {
                self.dispatch(Action::ContextMenuMoveSelection { delta: 1 })
            }
            KeyCode::Enter => self.dispatch(Action::ContextMenuConfirm),
            KeyCode::Esc => self.dispatch(Action::ContextMenuClose),
            _ => false,
        }
    }

    fn handle_edit_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => self.dispatch(Action::ExplorerEditCommit),
            KeyCode::Esc => self.dispatch(Action::ExplorerEditCancel),
            KeyCode::Backspace => self.dispatch(Action::ExplorerEditBackspace),
            KeyCode::Char(ch) => self.dispatch(Action::ExplorerEditAppend(ch)),
            _ => false,
        }
    }

    fn handle_search_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
                self.focus = Focus::Tree;
                true
            }
            KeyCode::Esc => {
                self.focus = Focus::Tree;
                self.dispatch(Action::SearchSetQuery(String::new()));
                true
            }
            KeyCode::Backspace => self.dispatch(Action::SearchBackspace),
            KeyCode::Char(ch) => self.dispatch(Action::SearchAppend(ch)),
            _ => false,
        }
    }

    fn handle_tree_key(&mut self, key: &KeyEvent) -> bool {
        let selected = self.store.state().explorer.selected.clone();

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Up => self.dispatch(Action::ExplorerMoveSelection { delta: -1 }),
            KeyCode::Down => self.dispatch(Action::ExplorerMoveSelection { delta: 1 }),
            KeyCode::PageUp => self.page_selection(-1),
            KeyCode::PageDown => self.page_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::ExplorerActivate),
            KeyCode::Left | KeyCode::Right => {
                let Some(id) = selected else {
                    return false;
                };
                let expanded = self.store.state().explorer.is_expanded(&id);
                if expanded == (key.code == KeyCode::Right) {
                    return false;
                }
                self.dispatch(Action::ExplorerToggleExpand { id })
            }
            KeyCode::F(2) | KeyCode::Char('r') => match selected {
                Some(id) => self.dispatch(Action::ExplorerRenameStart { id }),
                None => false,
            },
            KeyCode::Char('a') => match selected {
                Some(parent) => self.dispatch(Action::ExplorerCreateFile { parent }),
                None => false,
            },
            KeyCode::Char('A') => match selected {
                Some(parent) => self.dispatch(Action::ExplorerCreateFolder { parent }),
                None => false,
            },
            KeyCode::Char('N') => self.dispatch(Action::ExplorerCreateRootFolder),
            KeyCode::Delete | KeyCode::Char('d') => match selected {
                Some(id) => self.dispatch(Action::ExplorerDelete { id }),
                None => false,
            },
            KeyCode::Char('m') => match selected {
                Some(id) => self.dispatch(Action::ExplorerDragStart { id }),
                None => false,
            },
            KeyCode::Char('p') => {
                let rows = self.rows();
                let target = self
                    .selected_index(&rows)
                    .and_then(|index| rows[index].drop_target().cloned());
                match target {
                    Some(target) => self.drop_onto(target),
                    None => false,
                }
            }
            KeyCode::Char('c') | KeyCode::Menu => self.open_menu_at_selection(),
            KeyCode::Char('/') => {
                self.focus = Focus::Search;
                true
            }
            KeyCode::Esc => {
                if self.store.state().explorer.drag_source.is_some() {
                    self.dispatch(Action::ExplorerDragCancel)
                } else if !self.store.state().explorer.search_query.is_empty() {
                    self.dispatch(Action::SearchSetQuery(String::new()))
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn page_selection(&mut self, direction: isize) -> bool {
        let page = self.view.view_height().unwrap_or(1).max(1) as isize;
        self.dispatch(Action::ExplorerMoveSelection {
            delta: direction * page,
        })
    }

    fn open_menu_at_selection(&mut self) -> bool {
        let rows = self.rows();
        let Some(index) = self.selected_index(&rows) else {
            return false;
        };
        let Some(target) = rows[index].node_id().cloned() else {
            return false;
        };
        let (x, y) = self
            .view
            .row_origin(index, self.scroll_offset)
            .map(|(x, y)| (x.saturating_add(2), y.saturating_add(1)))
            .unwrap_or((0, 0));
        self.dispatch(Action::ContextMenuOpen { target, x, y })
    }
}
