use super::{App, Focus};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const SEARCH_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

pub(super) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let screen = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(screen);

        self.render_search(frame, chunks[0]);
        self.render_tree(frame, chunks[1]);
        self.render_status(frame, chunks[2]);

        match self.store.state().context_menu.as_ref() {
            Some(menu) => self.view.render_context_menu(frame, screen, menu, &self.theme),
            None => self.view.clear_context_menu(),
        }
    }

    fn focus_style(&self, focus: Focus) -> Style {
        if self.focus == focus {
            Style::default().fg(self.theme.menu_border)
        } else {
            Style::default().fg(self.theme.muted_fg)
        }
    }

    fn render_search(&mut self, frame: &mut Frame, area: Rect) {
        self.search_area = Some(area);

        let query = &self.store.state().explorer.search_query;
        let mut spans = vec![Span::raw(query.clone())];
        if self.focus == Focus::Search {
            spans.push(Span::styled("▏", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        } else if query.is_empty() {
            spans.push(Span::styled(
                "press / to filter",
                Style::default().fg(self.theme.muted_fg),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(self.focus_style(Focus::Search));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_tree(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Explorer ")
            .border_style(self.focus_style(Focus::Tree));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = self.rows();
        self.scroll_offset = clamp_scroll(
            self.scroll_offset,
            self.selected_index(&rows),
            rows.len(),
            inner.height as usize,
        );

        let state = self.store.state();
        self.view
            .render(frame, inner, &rows, self.scroll_offset, &state.config, &self.theme);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let text = if let Some(name) = state
            .explorer
            .drag_source
            .as_ref()
            .and_then(|id| state.tree.find(id))
            .map(|node| node.name().to_string())
        {
            format!(" moving {name}: select a folder and press p, Esc to cancel")
        } else if state.tree.is_empty() {
            " empty: press N to create a root folder".to_string()
        } else if state.explorer.editing.is_some() {
            " Enter commit  Esc cancel".to_string()
        } else {
            " ↑↓ move  Enter open  r rename  a/A new  d delete  m move  c menu  / search  q quit"
                .to_string()
        };
        let style = Style::default().fg(Color::Black).bg(Color::Gray);
        frame.render_widget(Paragraph::new(text).style(style), area);
    }
}

/// Smallest scroll change that keeps `selected` inside a `height`-row window.
pub(super) fn clamp_scroll(
    scroll: usize,
    selected: Option<usize>,
    total: usize,
    height: usize,
) -> usize {
    if height == 0 {
        return 0;
    }
    let mut scroll = scroll.min(total.saturating_sub(height));
    if let Some(selected) = selected {
        if selected < scroll {
            scroll = selected;
        } else if selected >= scroll + height {
            scroll = selected + 1 - height;
        }
    }
    scroll
}
