use crate::kernel::drag::{decode_drag_payload, encode_drag_payload};
use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::{Action, Effect};
use crate::models::{tree_ops, Node, NodeId, NodeKind};

impl Store {
    pub(in crate::kernel::store) fn reduce_explorer_action(
        &mut self,
        action: Action,
    ) -> DispatchResult {
        match action {
            Action::ExplorerCreateFile { parent } => self.create_node(parent, NodeKind::File),
            Action::ExplorerCreateFolder { parent } => self.create_node(parent, NodeKind::Folder),
            Action::ExplorerCreateRootFolder => self.create_root_folder(),
            Action::ExplorerRenameStart { id } => {
                let menu_closed = self.state.context_menu.take().is_some();
                let edit_started = self.begin_edit(id);
                DispatchResult::changed(menu_closed || edit_started)
            }
            Action::ExplorerEditStart { id } => DispatchResult::changed(self.begin_edit(id)),
            Action::ExplorerEditChange(text) => {
                DispatchResult::changed(self.state.explorer.set_pending_name(text))
            }
            Action::ExplorerEditAppend(ch) => {
                DispatchResult::changed(self.state.explorer.append_pending_char(ch))
            }
            Action::ExplorerEditBackspace => {
                DispatchResult::changed(self.state.explorer.backspace_pending())
            }
            Action::ExplorerEditCommit => self.commit_edit(),
            Action::ExplorerEditCancel => {
                if self.state.explorer.editing.is_none() {
                    return DispatchResult::unchanged();
                }
                self.state.explorer.end_edit();
                DispatchResult::changed(true)
            }
            Action::ExplorerDelete { id } => {
                let menu_closed = self.state.context_menu.take().is_some();
                let next = tree_ops::delete(&self.state.tree, &id);
                if next == self.state.tree {
                    tracing::debug!(id = %id, "delete target not found");
                    return DispatchResult::changed(menu_closed);
                }
                self.state.tree = next;
                self.state.explorer.retain_existing(&self.state.tree);
                DispatchResult::changed(true)
            }
            Action::ExplorerToggleExpand { id } => {
                if !self.state.tree.is_folder(&id) {
                    return DispatchResult::unchanged();
                }
                self.state.explorer.toggle_expanded(&id);
                DispatchResult::changed(true)
            }
            Action::ExplorerDragStart { id } => self.start_drag(id),
            // Drops are always allowed to land; validity is decided on drop.
            Action::ExplorerDragOver { .. } => DispatchResult::unchanged(),
            Action::ExplorerDrop { target, payload } => self.drop_on(target, &payload),
            Action::ExplorerDragCancel => {
                if self.state.explorer.drag_source.take().is_none() {
                    return DispatchResult::unchanged();
                }
                DispatchResult {
                    effects: vec![Effect::ClearDragData],
                    state_changed: true,
                }
            }
            Action::ExplorerMoveSelection { delta } => {
                DispatchResult::changed(self.move_selection(delta))
            }
            Action::ExplorerSelect { id } => {
                if !self.state.tree.contains(&id) || self.state.explorer.selected.as_ref() == Some(&id)
                {
                    return DispatchResult::unchanged();
                }
                self.state.explorer.selected = Some(id);
                DispatchResult::changed(true)
            }
            Action::ExplorerActivate => self.activate_selected(),
            _ => DispatchResult::unchanged(),
        }
    }

    fn create_node(&mut self, parent: NodeId, kind: NodeKind) -> DispatchResult {
        let menu_closed = self.state.context_menu.take().is_some();

        let id = self.state.ids.mint_unique(&self.state.tree);
        let node = match kind {
            NodeKind::File => Node::file(id.clone(), self.state.config.new_file_name.clone()),
            NodeKind::Folder => Node::folder(
                id.clone(),
                self.state.config.new_folder_name.clone(),
                Vec::new(),
            ),
        };

        let next = tree_ops::insert(&self.state.tree, &parent, node);
        if next == self.state.tree {
            tracing::debug!(parent = %parent, "create ignored: parent is not a folder");
            return DispatchResult::changed(menu_closed);
        }

        self.state.tree = next;
        self.state.explorer.expanded.insert(parent);
        self.state.explorer.selected = Some(id);
        DispatchResult::changed(true)
    }

    fn create_root_folder(&mut self) -> DispatchResult {
        let menu_closed = self.state.context_menu.take().is_some();

        let id = self.state.ids.mint_unique(&self.state.tree);
        let node = Node::folder(
            id.clone(),
            self.state.config.root_folder_name.clone(),
            Vec::new(),
        );
        let next = tree_ops::insert_root(&self.state.tree, node);
        if next == self.state.tree {
            return DispatchResult::changed(menu_closed);
        }

        self.state.tree = next;
        self.state.explorer.selected = Some(id);
        DispatchResult::changed(true)
    }

    /// Starts editing `id`. An edit already open on another node is
    /// committed first so its buffer is not lost.
    fn begin_edit(&mut self, id: NodeId) -> bool {
        let Some(name) = self.state.tree.find(&id).map(|n| n.name().to_string()) else {
            tracing::debug!(id = %id, "edit target not found");
            return false;
        };
        if self.state.explorer.is_editing(&id) {
            return false;
        }

        self.commit_edit();
        self.state.explorer.begin_edit(id, &name);
        true
    }

    fn commit_edit(&mut self) -> DispatchResult {
        let Some(id) = self.state.explorer.editing.clone() else {
            return DispatchResult::unchanged();
        };
        let name = std::mem::take(&mut self.state.explorer.pending_name);
        self.state.explorer.end_edit();

        if name.trim().is_empty() && !self.state.config.allow_empty_names {
            tracing::debug!(id = %id, "blank rename dropped");
            return DispatchResult::changed(true);
        }

        self.state.tree = tree_ops::rename(&self.state.tree, &id, &name);
        DispatchResult::changed(true)
    }

    fn start_drag(&mut self, id: NodeId) -> DispatchResult {
        let Some(node) = self.state.tree.find(&id) else {
            tracing::debug!(id = %id, "drag source not found");
            return DispatchResult::unchanged();
        };

        match encode_drag_payload(node) {
            Ok(payload) => {
                self.state.explorer.drag_source = Some(id);
                DispatchResult {
                    effects: vec![Effect::SetDragData(payload)],
                    state_changed: true,
                }
            }
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "drag start aborted");
                DispatchResult::unchanged()
            }
        }
    }

    fn drop_on(&mut self, target: NodeId, payload: &str) -> DispatchResult {
        let dropped = match decode_drag_payload(payload) {
            Ok(node) => node,
            Err(err) => {
                tracing::warn!(target = %target, error = %err, "drop ignored");
                return DispatchResult::unchanged();
            }
        };

        let dragged = dropped.id();
        if let Err(reason) = tree_ops::check_move(&self.state.tree, dragged, &target) {
            tracing::debug!(dragged = %dragged, target = %target, ?reason, "drop refused");
            return DispatchResult::unchanged();
        }

        self.state.tree = tree_ops::move_node(&self.state.tree, dragged, &target);
        self.state.explorer.drag_source = None;
        DispatchResult {
            effects: vec![Effect::ClearDragData],
            state_changed: true,
        }
    }

    fn move_selection(&mut self, delta: isize) -> bool {
        let rows = self.state.visible_ids();
        if rows.is_empty() || delta == 0 {
            return false;
        }

        let current = self
            .state
            .explorer
            .selected
            .as_ref()
            .and_then(|id| rows.iter().position(|row| row == id));

        let next = match current {
            Some(index) if delta < 0 => index.saturating_sub(delta.unsigned_abs()),
            Some(index) => (index + delta as usize).min(rows.len() - 1),
            None if delta < 0 => rows.len() - 1,
            None => 0,
        };

        if current == Some(next) {
            return false;
        }
        self.state.explorer.selected = Some(rows[next].clone());
        true
    }

    fn activate_selected(&mut self) -> DispatchResult {
        let Some(id) = self.state.explorer.selected.clone() else {
            return DispatchResult::unchanged();
        };
        if self.state.tree.is_folder(&id) {
            self.state.explorer.toggle_expanded(&id);
            return DispatchResult::changed(true);
        }
        DispatchResult::changed(self.begin_edit(id))
    }
}
