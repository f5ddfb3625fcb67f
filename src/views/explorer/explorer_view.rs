//! 文件浏览器视图（纯渲染 + 命中测试）

use super::projection::{Chevron, ExplorerRow, RowKind, RowLabel};
use crate::kernel::services::ports::ExplorerConfig;
use crate::kernel::state::ContextMenuState;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy)]
pub struct ExplorerTheme {
    pub folder_fg: Color,
    pub file_fg: Color,
    pub muted_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub drag_bg: Color,
    pub menu_border: Color,
}

impl Default for ExplorerTheme {
    fn default() -> Self {
        Self {
            folder_fg: Color::Yellow,
            file_fg: Color::White,
            muted_fg: Color::DarkGray,
            selected_bg: Color::DarkGray,
            selected_fg: Color::White,
            drag_bg: Color::Blue,
            menu_border: Color::Cyan,
        }
    }
}

pub struct ExplorerView {
    area: Option<Rect>,
    menu_area: Option<Rect>,
}

impl ExplorerView {
    pub fn new() -> Self {
        Self {
            area: None,
            menu_area: None,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.is_some_and(|a| rect_contains(a, x, y))
    }

    pub fn view_height(&self) -> Option<usize> {
        let area = self.area?;
        Some(area.height as usize)
    }

    pub fn hit_test_row(&self, column: u16, row: u16, scroll_offset: usize) -> Option<usize> {
        let area = self.area?;
        if !rect_contains(area, column, row) {
            return None;
        }
        Some((row - area.y) as usize + scroll_offset)
    }

    /// Screen cell where row `index` starts, if it is on screen.
    pub fn row_origin(&self, index: usize, scroll_offset: usize) -> Option<(u16, u16)> {
        let area = self.area?;
        let offset = index.checked_sub(scroll_offset)?;
        if offset >= area.height as usize {
            return None;
        }
        Some((area.x, area.y + offset as u16))
    }

    /// Column of the view's left edge.
    pub fn left(&self) -> Option<u16> {
        self.area.map(|a| a.x)
    }

    /// Index of the menu entry under (`column`, `row`), if a menu was painted.
    pub fn hit_test_menu(&self, column: u16, row: u16) -> Option<usize> {
        let menu = self.menu_area?;
        let inner = Rect::new(
            menu.x.saturating_add(1),
            menu.y.saturating_add(1),
            menu.width.saturating_sub(2),
            menu.height.saturating_sub(2),
        );
        if !rect_contains(inner, column, row) {
            return None;
        }
        Some((row - inner.y) as usize)
    }

    fn render_row(&self, row: &ExplorerRow, config: &ExplorerConfig, theme: &ExplorerTheme) -> Line<'static> {
        let indent = config.indent(row.depth);

        let entry = match &row.kind {
            RowKind::EmptyFolder { label, .. } => {
                let style = Style::default()
                    .fg(theme.muted_fg)
                    .add_modifier(Modifier::ITALIC);
                return Line::from(Span::styled(format!("{indent}  {label}"), style));
            }
            RowKind::Entry(entry) => entry,
        };

        let icon = match entry.chevron {
            Some(Chevron::Expanded) => "▼ ",
            Some(Chevron::Collapsed) => "▶ ",
            None => "  ",
        };

        let mut style = if entry.chevron.is_some() {
            Style::default().fg(theme.folder_fg)
        } else {
            Style::default().fg(theme.file_fg)
        };
        if entry.is_drag_source {
            style = style.bg(theme.drag_bg);
        }
        if entry.is_selected {
            style = style.bg(theme.selected_bg).fg(theme.selected_fg);
        }

        match &entry.label {
            RowLabel::Text(name) => Line::from(Span::styled(format!("{indent}{icon}{name}"), style)),
            RowLabel::Editing { buffer } => Line::from(vec![
                Span::styled(format!("{indent}{icon}"), style),
                Span::styled(
                    format!("{buffer}▏"),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
            ]),
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        rows: &[ExplorerRow],
        scroll_offset: usize,
        config: &ExplorerConfig,
        theme: &ExplorerTheme,
    ) {
        self.area = Some(area);

        let visible_height = area.height as usize;
        let start = scroll_offset.min(rows.len());
        let visible_end = (start + visible_height).min(rows.len());

        let lines: Vec<Line> = rows[start..visible_end]
            .iter()
            .map(|row| self.render_row(row, config, theme))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    pub fn render_context_menu(
        &mut self,
        frame: &mut Frame,
        screen: Rect,
        menu: &ContextMenuState,
        theme: &ExplorerTheme,
    ) {
        let labels: Vec<&str> = menu.items.iter().map(|entry| entry.label).collect();
        let Some(popup) = menu_rect(screen, menu.anchor, &labels) else {
            self.menu_area = None;
            return;
        };
        self.menu_area = Some(popup);

        let pad_to = popup.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = menu
            .items
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let is_selected = idx == menu.selected;
                let prefix = if is_selected { "▸ " } else { "  " };
                let mut text = format!("{prefix}{}", entry.label);
                let width = text.width();
                if width < pad_to {
                    text.push_str(&" ".repeat(pad_to - width));
                }

                let style = if !entry.enabled {
                    Style::default().fg(theme.muted_fg)
                } else if is_selected {
                    Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(text, style))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.menu_border));
        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }

    pub fn clear_context_menu(&mut self) {
        self.menu_area = None;
    }
}

impl Default for ExplorerView {
    fn default() -> Self {
        Self::new()
    }
}

fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Popup rectangle at `anchor`, shifted to stay inside `screen`.
pub(crate) fn menu_rect(screen: Rect, anchor: (u16, u16), labels: &[&str]) -> Option<Rect> {
    if labels.is_empty() || screen.width < 3 || screen.height < 3 {
        return None;
    }

    let max_label_w = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let inner_w = max_label_w.saturating_add(4).min(u16::MAX as usize) as u16;
    let inner_h = labels.len().min(u16::MAX as usize) as u16;
    let width = inner_w.saturating_add(2).min(screen.width).max(3);
    let height = inner_h.saturating_add(2).min(screen.height).max(3);

    let right = screen.x + screen.width;
    let bottom = screen.y + screen.height;

    let mut x = anchor.0.max(screen.x);
    let mut y = anchor.1.max(screen.y);
    if x.saturating_add(width) > right {
        x = right.saturating_sub(width);
    }
    if y.saturating_add(height) > bottom {
        y = bottom.saturating_sub(height);
    }

    Some(Rect::new(x, y, width, height))
}

#[cfg(test)]
#[path = "../../../tests/unit/views/explorer/explorer_view.rs"]
mod tests;
