//! 数据模型层

pub mod file_tree;
pub mod tree_ops;

pub use file_tree::{FileTree, Node, NodeId, NodeIdGenerator, NodeKind};
pub use tree_ops::{
    check_move, delete, filter, filter_by_query, insert, insert_root, is_descendant, move_node,
    name_matches, rename, MoveRejection,
};
