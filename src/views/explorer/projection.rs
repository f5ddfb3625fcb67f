//! Row directives for a renderer: what to draw for each visible node.
//!
//! Works on the search view of the tree and only reads state. Renderers
//! report interaction back as `Action`s.

use crate::kernel::services::ports::ExplorerConfig;
use crate::kernel::state::ExplorerState;
use crate::models::{tree_ops, FileTree, Node, NodeId, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Expanded,
    Collapsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLabel {
    Text(String),
    Editing { buffer: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: RowLabel,
    /// `None` for files.
    pub chevron: Option<Chevron>,
    pub is_drag_source: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Entry(EntryRow),
    /// Placeholder under an expanded folder with nothing to show.
    EmptyFolder { parent: NodeId, label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerRow {
    pub depth: u16,
    pub kind: RowKind,
}

impl ExplorerRow {
    pub fn node_id(&self) -> Option<&NodeId> {
        match &self.kind {
            RowKind::Entry(entry) => Some(&entry.id),
            RowKind::EmptyFolder { .. } => None,
        }
    }

    /// Folder a drop on this row would land in.
    pub fn drop_target(&self) -> Option<&NodeId> {
        match &self.kind {
            RowKind::Entry(entry) if entry.kind == NodeKind::Folder => Some(&entry.id),
            RowKind::Entry(_) => None,
            RowKind::EmptyFolder { parent, .. } => Some(parent),
        }
    }
}

pub fn project(tree: &FileTree, explorer: &ExplorerState, config: &ExplorerConfig) -> Vec<ExplorerRow> {
    let view = tree_ops::filter_by_query(tree, &explorer.search_query, config.case_sensitive_search);
    let mut rows = Vec::new();
    project_nodes(view.roots(), 0, explorer, config, &mut rows);
    rows
}

fn project_nodes(
    nodes: &[Node],
    depth: u16,
    explorer: &ExplorerState,
    config: &ExplorerConfig,
    rows: &mut Vec<ExplorerRow>,
) {
    for node in nodes {
        let id = node.id();
        let label = if explorer.is_editing(id) {
            RowLabel::Editing {
                buffer: explorer.pending_name.clone(),
            }
        } else {
            RowLabel::Text(node.name().to_string())
        };

        let expanded = explorer.is_expanded(id);
        let chevron = node.is_folder().then_some(if expanded {
            Chevron::Expanded
        } else {
            Chevron::Collapsed
        });

        rows.push(ExplorerRow {
            depth,
            kind: RowKind::Entry(EntryRow {
                id: id.clone(),
                kind: node.kind(),
                label,
                chevron,
                is_drag_source: explorer.is_drag_source(id),
                is_selected: explorer.selected.as_ref() == Some(id),
            }),
        });

        let Some(children) = node.children() else {
            continue;
        };
        if !expanded {
            continue;
        }
        if children.is_empty() {
            rows.push(ExplorerRow {
                depth: depth.saturating_add(1),
                kind: RowKind::EmptyFolder {
                    parent: id.clone(),
                    label: config.empty_folder_label.clone(),
                },
            });
        } else {
            project_nodes(children, depth.saturating_add(1), explorer, config, rows);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/explorer/projection.rs"]
mod tests;
