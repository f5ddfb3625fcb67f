use rustc_hash::FxHashSet;

use crate::kernel::services::ports::ExplorerConfig;
use crate::models::{tree_ops, FileTree, Node, NodeId, NodeIdGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerMenuAction {
    NewFile,
    NewFolder,
    Rename,
    Delete,
}

impl ExplorerMenuAction {
    pub fn label(self) -> &'static str {
        match self {
            ExplorerMenuAction::NewFile => "Create File",
            ExplorerMenuAction::NewFolder => "Create Folder",
            ExplorerMenuAction::Rename => "Rename",
            ExplorerMenuAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuEntry {
    pub label: &'static str,
    pub action: ExplorerMenuAction,
    pub enabled: bool,
}

impl ContextMenuEntry {
    pub fn action(action: ExplorerMenuAction, enabled: bool) -> Self {
        Self {
            label: action.label(),
            action,
            enabled,
        }
    }
}

/// An open context menu, anchored to a node and a screen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuState {
    pub target: NodeId,
    pub anchor: (u16, u16),
    pub selected: usize,
    pub items: Vec<ContextMenuEntry>,
}

impl ContextMenuState {
    pub fn selected_action(&self) -> Option<ExplorerMenuAction> {
        self.items
            .get(self.selected)
            .filter(|entry| entry.enabled)
            .map(|entry| entry.action)
    }
}

/// Transient explorer interaction state. Nodes are referenced by id only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerState {
    pub editing: Option<NodeId>,
    pub pending_name: String,
    pub expanded: FxHashSet<NodeId>,
    pub drag_source: Option<NodeId>,
    pub search_query: String,
    pub selected: Option<NodeId>,
}

impl ExplorerState {
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.contains(id)
    }

    pub fn is_editing(&self, id: &NodeId) -> bool {
        self.editing.as_ref() == Some(id)
    }

    pub fn is_drag_source(&self, id: &NodeId) -> bool {
        self.drag_source.as_ref() == Some(id)
    }

    pub fn toggle_expanded(&mut self, id: &NodeId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn begin_edit(&mut self, id: NodeId, current_name: &str) {
        self.editing = Some(id);
        self.pending_name = current_name.to_string();
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
        self.pending_name.clear();
    }

    pub fn set_pending_name(&mut self, text: String) -> bool {
        if self.editing.is_none() || self.pending_name == text {
            return false;
        }
        self.pending_name = text;
        true
    }

    pub fn append_pending_char(&mut self, ch: char) -> bool {
        if self.editing.is_none() || ch.is_control() {
            return false;
        }
        self.pending_name.push(ch);
        true
    }

    pub fn backspace_pending(&mut self) -> bool {
        self.editing.is_some() && self.pending_name.pop().is_some()
    }

    pub fn set_search_query(&mut self, query: String) -> bool {
        if self.search_query == query {
            return false;
        }
        self.search_query = query;
        true
    }

    pub fn append_query_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.search_query.push(ch);
        true
    }

    pub fn backspace_query(&mut self) -> bool {
        self.search_query.pop().is_some()
    }

    /// Drops references to ids that no longer exist in `tree`.
    pub fn retain_existing(&mut self, tree: &FileTree) {
        self.expanded.retain(|id| tree.contains(id));
        if self.editing.as_ref().is_some_and(|id| !tree.contains(id)) {
            self.end_edit();
        }
        if self.drag_source.as_ref().is_some_and(|id| !tree.contains(id)) {
            self.drag_source = None;
        }
        if self.selected.as_ref().is_some_and(|id| !tree.contains(id)) {
            self.selected = None;
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub tree: FileTree,
    pub explorer: ExplorerState,
    pub context_menu: Option<ContextMenuState>,
    pub config: ExplorerConfig,
    pub ids: NodeIdGenerator,
    /// Bumped by the store on every state change.
    pub version: u64,
}

impl AppState {
    pub fn new(tree: FileTree, config: ExplorerConfig) -> Self {
        Self {
            tree,
            explorer: ExplorerState::default(),
            context_menu: None,
            config,
            ids: NodeIdGenerator::new(),
            version: 0,
        }
    }

    pub fn seeded(config: ExplorerConfig) -> Self {
        Self::new(FileTree::seed(), config)
    }

    /// The search view of the tree. Never stored back into `tree`.
    pub fn filtered_tree(&self) -> FileTree {
        tree_ops::filter_by_query(
            &self.tree,
            &self.explorer.search_query,
            self.config.case_sensitive_search,
        )
    }

    /// Ids of the rows a renderer would show, top to bottom.
    pub fn visible_ids(&self) -> Vec<NodeId> {
        fn walk(nodes: &[Node], expanded: &FxHashSet<NodeId>, out: &mut Vec<NodeId>) {
            for node in nodes {
                out.push(node.id().clone());
                if let Some(children) = node.children() {
                    if expanded.contains(node.id()) {
                        walk(children, expanded, out);
                    }
                }
            }
        }

        let view = self.filtered_tree();
        let mut out = Vec::new();
        walk(view.roots(), &self.explorer.expanded, &mut out);
        out
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded(ExplorerConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
