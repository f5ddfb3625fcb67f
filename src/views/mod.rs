//! 视图层模块
//!
//! - projection: 树 + 交互状态 → 行指令（只读）
//! - ExplorerView: 文件浏览器（ratatui 渲染 + 命中测试）

pub mod explorer;

#[cfg(feature = "tui")]
pub use explorer::{ExplorerTheme, ExplorerView};
pub use explorer::{project, Chevron, EntryRow, ExplorerRow, RowKind, RowLabel};
