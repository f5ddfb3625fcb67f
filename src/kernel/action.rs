use crate::models::NodeId;

/// Decoded user intents. Every state change goes through `Store::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ContextMenuOpen {
        target: NodeId,
        x: u16,
        y: u16,
    },
    ContextMenuClose,
    ContextMenuMoveSelection {
        delta: isize,
    },
    ContextMenuConfirm,
    ExplorerCreateFile {
        parent: NodeId,
    },
    ExplorerCreateFolder {
        parent: NodeId,
    },
    /// Appends an empty folder after the last root.
    ExplorerCreateRootFolder,
    ExplorerRenameStart {
        id: NodeId,
    },
    ExplorerDelete {
        id: NodeId,
    },
    ExplorerEditStart {
        id: NodeId,
    },
    ExplorerEditChange(String),
    ExplorerEditAppend(char),
    ExplorerEditBackspace,
    ExplorerEditCommit,
    ExplorerEditCancel,
    ExplorerToggleExpand {
        id: NodeId,
    },
    ExplorerDragStart {
        id: NodeId,
    },
    ExplorerDragOver {
        target: NodeId,
    },
    ExplorerDrop {
        target: NodeId,
        payload: String,
    },
    ExplorerDragCancel,
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerSelect {
        id: NodeId,
    },
    ExplorerActivate,
    SearchSetQuery(String),
    SearchAppend(char),
    SearchBackspace,
}
