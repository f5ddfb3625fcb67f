//! 文件树数据模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// A folder or file entry. Only folders carry children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder {
        id: NodeId,
        name: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    File {
        id: NodeId,
        name: String,
    },
}

impl Node {
    pub fn file(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Node::File {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn folder(id: impl Into<NodeId>, name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Folder {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    pub fn id(&self) -> &NodeId {
        match self {
            Node::Folder { id, .. } | Node::File { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Folder { name, .. } | Node::File { name, .. } => name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Folder { .. } => NodeKind::Folder,
            Node::File { .. } => NodeKind::File,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// `None` for files, the (possibly empty) child list for folders.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Folder { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub fn with_name(&self, new_name: &str) -> Node {
        match self {
            Node::Folder { id, children, .. } => Node::Folder {
                id: id.clone(),
                name: new_name.to_string(),
                children: children.clone(),
            },
            Node::File { id, .. } => Node::File {
                id: id.clone(),
                name: new_name.to_string(),
            },
        }
    }

    pub fn with_children(&self, children: Vec<Node>) -> Node {
        match self {
            Node::Folder { id, name, .. } => Node::Folder {
                id: id.clone(),
                name: name.clone(),
                children,
            },
            Node::File { .. } => self.clone(),
        }
    }

    fn count(&self) -> usize {
        1 + self
            .children()
            .map(|children| children.iter().map(Node::count).sum())
            .unwrap_or(0)
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a NodeId>) {
        out.push(self.id());
        if let Some(children) = self.children() {
            for child in children {
                child.collect_ids(out);
            }
        }
    }
}

/// The ordered forest of root-level nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTree {
    roots: Vec<Node>,
}

impl FileTree {
    pub fn from_roots(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    /// The initial session tree: `Documents/Resume.pdf` and an empty `Images`.
    pub fn seed() -> Self {
        Self::from_roots(vec![
            Node::folder("1", "Documents", vec![Node::file("2", "Resume.pdf")]),
            Node::folder("3", "Images", Vec::new()),
        ])
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    pub fn is_folder(&self, id: &NodeId) -> bool {
        self.find(id).is_some_and(Node::is_folder)
    }

    pub fn count_nodes(&self) -> usize {
        self.roots.iter().map(Node::count).sum()
    }

    /// Every id in depth-first pre-order.
    pub fn ids(&self) -> Vec<&NodeId> {
        let mut out = Vec::new();
        for node in &self.roots {
            node.collect_ids(&mut out);
        }
        out
    }
}

fn find_in<'a>(nodes: &'a [Node], id: &NodeId) -> Option<&'a Node> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = node.children().and_then(|children| find_in(children, id)) {
            return Some(found);
        }
    }
    None
}

/// Mints decimal string ids from a counter seeded with the wall clock.
#[derive(Debug, Clone)]
pub struct NodeIdGenerator {
    next: u64,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self::starting_at(millis)
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn mint(&mut self) -> NodeId {
        let id = NodeId(self.next.to_string());
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Like `mint`, but skips candidates already present in `tree`.
    pub fn mint_unique(&mut self, tree: &FileTree) -> NodeId {
        loop {
            let id = self.mint();
            if !tree.contains(&id) {
                return id;
            }
        }
    }
}

impl Default for NodeIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
