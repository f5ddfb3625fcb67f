//! fexplorer - 内存文件树浏览器库
//!
//! 模块结构：
//! - models: 数据模型（FileTree, Node）与纯函数树操作
//! - kernel: 交互状态机（State, Action, Effect, Store）
//! - views: 视图投影与终端渲染
//! - tui: 终端生命周期
//! - app: 输入分发与整屏绘制

#[cfg(feature = "tui")]
pub mod app;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
pub mod views;
