//! Pure tree transforms.
//!
//! Every operation takes the current tree by reference and returns a new one
//! built bottom-up; the input is never touched. An operation whose target id
//! does not resolve returns a tree equal to its input.

use super::file_tree::{FileTree, Node, NodeId};

pub fn rename(tree: &FileTree, id: &NodeId, new_name: &str) -> FileTree {
    FileTree::from_roots(rename_in(tree.roots(), id, new_name))
}

fn rename_in(nodes: &[Node], id: &NodeId, new_name: &str) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| {
            if node.id() == id {
                return node.with_name(new_name);
            }
            match node {
                Node::Folder { children, .. } => {
                    node.with_children(rename_in(children, id, new_name))
                }
                Node::File { .. } => node.clone(),
            }
        })
        .collect()
}

/// Removes `id` and, for folders, its whole subtree.
pub fn delete(tree: &FileTree, id: &NodeId) -> FileTree {
    FileTree::from_roots(delete_in(tree.roots(), id))
}

fn delete_in(nodes: &[Node], id: &NodeId) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| node.id() != id)
        .map(|node| match node {
            Node::Folder { children, .. } => node.with_children(delete_in(children, id)),
            Node::File { .. } => node.clone(),
        })
        .collect()
}

/// Appends `new_node` to the children of folder `parent_id`.
///
/// No-op when `parent_id` is missing or names a file, and when any id in
/// `new_node`'s subtree is already in use.
pub fn insert(tree: &FileTree, parent_id: &NodeId, new_node: Node) -> FileTree {
    if !tree.is_folder(parent_id) {
        tracing::debug!(parent = %parent_id, "insert target is not a folder");
        return tree.clone();
    }

    if shares_ids(tree, &new_node) {
        tracing::debug!(parent = %parent_id, "insert would duplicate an existing id");
        return tree.clone();
    }
    FileTree::from_roots(insert_in(tree.roots(), parent_id, &new_node))
}

/// Appends `new_node` after the last root. Same duplicate-id guard as `insert`.
pub fn insert_root(tree: &FileTree, new_node: Node) -> FileTree {
    if shares_ids(tree, &new_node) {
        tracing::debug!(id = %new_node.id(), "root insert would duplicate an existing id");
        return tree.clone();
    }
    let mut roots = tree.roots().to_vec();
    roots.push(new_node);
    FileTree::from_roots(roots)
}

fn shares_ids(tree: &FileTree, node: &Node) -> bool {
    tree.contains(node.id())
        || node
            .children()
            .is_some_and(|children| children.iter().any(|child| shares_ids(tree, child)))
}

fn insert_in(nodes: &[Node], parent_id: &NodeId, new_node: &Node) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| match node {
            Node::Folder { id, children, .. } if id == parent_id => {
                let mut next = children.clone();
                next.push(new_node.clone());
                node.with_children(next)
            }
            Node::Folder { children, .. } => {
                node.with_children(insert_in(children, parent_id, new_node))
            }
            Node::File { .. } => node.clone(),
        })
        .collect()
}

/// True when `candidate` lies strictly inside the subtree rooted at `ancestor`.
pub fn is_descendant(tree: &FileTree, ancestor: &NodeId, candidate: &NodeId) -> bool {
    tree.find(ancestor)
        .and_then(Node::children)
        .is_some_and(|children| subtree_contains(children, candidate))
}

fn subtree_contains(nodes: &[Node], id: &NodeId) -> bool {
    nodes.iter().any(|node| {
        node.id() == id || node.children().is_some_and(|c| subtree_contains(c, id))
    })
}

/// Why a drop was refused. `move_node` swallows these; the store only logs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    SameNode,
    MissingSource,
    TargetNotFolder,
    IntoDescendant,
}

pub fn check_move(
    tree: &FileTree,
    dragged_id: &NodeId,
    target_folder_id: &NodeId,
) -> Result<(), MoveRejection> {
    if dragged_id == target_folder_id {
        return Err(MoveRejection::SameNode);
    }
    if !tree.contains(dragged_id) {
        return Err(MoveRejection::MissingSource);
    }
    if !tree.is_folder(target_folder_id) {
        return Err(MoveRejection::TargetNotFolder);
    }
    if is_descendant(tree, dragged_id, target_folder_id) {
        return Err(MoveRejection::IntoDescendant);
    }
    Ok(())
}

/// Detaches `dragged_id` and appends it to folder `target_folder_id`.
///
/// Dropping into the current parent moves the node to the end of that folder.
pub fn move_node(tree: &FileTree, dragged_id: &NodeId, target_folder_id: &NodeId) -> FileTree {
    if let Err(reason) = check_move(tree, dragged_id, target_folder_id) {
        tracing::debug!(
            dragged = %dragged_id,
            target = %target_folder_id,
            ?reason,
            "move refused"
        );
        return tree.clone();
    }

    let Some(node) = tree.find(dragged_id).cloned() else {
        return tree.clone();
    };
    let detached = delete(tree, dragged_id);
    insert(&detached, target_folder_id, node)
}

/// Keeps nodes whose name satisfies `predicate`, plus folders that still have
/// children after filtering. Sibling order is preserved.
pub fn filter<P>(tree: &FileTree, predicate: P) -> FileTree
where
    P: Fn(&str) -> bool,
{
    FileTree::from_roots(filter_in(tree.roots(), &predicate))
}

fn filter_in<P>(nodes: &[Node], predicate: &P) -> Vec<Node>
where
    P: Fn(&str) -> bool,
{
    nodes
        .iter()
        .filter_map(|node| {
            let matches = predicate(node.name());
            match node {
                Node::Folder { children, .. } => {
                    let kept = filter_in(children, predicate);
                    (matches || !kept.is_empty()).then(|| node.with_children(kept))
                }
                Node::File { .. } => matches.then(|| node.clone()),
            }
        })
        .collect()
}

pub fn name_matches(name: &str, query: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        name.contains(query)
    } else {
        name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Substring search view. An empty query keeps the whole tree.
pub fn filter_by_query(tree: &FileTree, query: &str, case_sensitive: bool) -> FileTree {
    if query.is_empty() {
        return tree.clone();
    }
    filter(tree, |name| name_matches(name, query, case_sensitive))
}

#[cfg(test)]
#[path = "../../tests/unit/models/tree_ops.rs"]
mod tests;
