//! 应用层：把终端输入翻译成 `Action`，并负责整屏绘制
//!
//! 职责：
//! - 持有 Store 与 ExplorerView
//! - 按焦点分发键盘事件（菜单 > 编辑 > 搜索 > 树）
//! - 处理鼠标点击、拖放与右键菜单
//! - 执行 Store 返回的 Effect（拖放数据槽）

mod input;
mod mouse;
mod render;

use crate::kernel::{Action, AppState, Effect, Store};
use crate::models::NodeId;
use crate::views::{project, ExplorerRow, ExplorerTheme, ExplorerView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    Search,
}

pub struct App {
    store: Store,
    view: ExplorerView,
    theme: ExplorerTheme,
    focus: Focus,
    /// Host-side drag data slot, written only through effects.
    drag_data: Option<String>,
    scroll_offset: usize,
    should_quit: bool,
    /// Node under the last left-button press; a drag starts from it.
    press: Option<NodeId>,
    search_area: Option<ratatui::layout::Rect>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            store: Store::new(state),
            view: ExplorerView::new(),
            theme: ExplorerTheme::default(),
            focus: Focus::Tree,
            drag_data: None,
            scroll_offset: 0,
            should_quit: false,
            press: None,
            search_area: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn drag_data(&self) -> Option<&str> {
        self.drag_data.as_deref()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs `action` through the store and applies its effects.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SetDragData(payload) => self.drag_data = Some(payload),
            Effect::ClearDragData => self.drag_data = None,
        }
    }

    fn rows(&self) -> Vec<ExplorerRow> {
        let state = self.store.state();
        project(&state.tree, &state.explorer, &state.config)
    }

    fn selected_index(&self, rows: &[ExplorerRow]) -> Option<usize> {
        let selected = self.store.state().explorer.selected.as_ref()?;
        rows.iter().position(|row| row.node_id() == Some(selected))
    }

    /// Drops the current drag payload on `target`. A refused drop ends the drag.
    fn drop_onto(&mut self, target: NodeId) -> bool {
        let Some(payload) = self.drag_data.clone() else {
            return false;
        };
        let mut changed = self.dispatch(Action::ExplorerDragOver {
            target: target.clone(),
        });
        changed |= self.dispatch(Action::ExplorerDrop { target, payload });
        if self.store.state().explorer.drag_source.is_some() {
            changed |= self.dispatch(Action::ExplorerDragCancel);
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/mod.rs"]
mod tests;
