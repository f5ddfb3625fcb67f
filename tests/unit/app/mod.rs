use super::render::clamp_scroll;
use super::*;
use crate::kernel::services::ports::ExplorerConfig;
use crate::models::NodeId;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

fn app() -> App {
    App::new(AppState::seeded(ExplorerConfig::default()))
}

fn key(app: &mut App, code: KeyCode) -> bool {
    app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn keys(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        key(app, *code);
    }
}

fn typed(app: &mut App, text: &str) {
    for ch in text.chars() {
        key(app, KeyCode::Char(ch));
    }
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) -> bool {
    app.handle_event(&Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

// 40x12 screen: search box rows 0..3, tree rows start at y=4, x=1.
fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn child_names(app: &App, parent: &str) -> Vec<String> {
    app.state()
        .tree
        .find(&id(parent))
        .and_then(|node| node.children())
        .map(|children| children.iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn test_app_new() {
    let app = app();
    assert_eq!(app.focus(), Focus::Tree);
    assert!(app.drag_data().is_none());
    assert!(!app.should_quit());
    assert_eq!(app.scroll_offset(), 0);
}

#[test]
fn arrows_select_and_enter_toggles_folder() {
    let mut app = app();

    key(&mut app, KeyCode::Down);
    assert_eq!(app.state().explorer.selected, Some(id("1")));

    key(&mut app, KeyCode::Enter);
    assert!(app.state().explorer.is_expanded(&id("1")));

    key(&mut app, KeyCode::Down);
    assert_eq!(app.state().explorer.selected, Some(id("2")));

    keys(&mut app, &[KeyCode::Up, KeyCode::Left]);
    assert!(!app.state().explorer.is_expanded(&id("1")));
    assert!(!key(&mut app, KeyCode::Left));
}

#[test]
fn rename_through_keys() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Down, KeyCode::Char('r')]);
    assert_eq!(app.state().explorer.editing, Some(id("1")));
    assert_eq!(app.state().explorer.pending_name, "Documents");

    for _ in 0.."uments".len() {
        key(&mut app, KeyCode::Backspace);
    }
    typed(&mut app, "s");
    key(&mut app, KeyCode::Enter);

    assert!(app.state().explorer.editing.is_none());
    assert_eq!(app.state().tree.find(&id("1")).unwrap().name(), "Docs");
}

#[test]
fn escape_cancels_rename() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Down, KeyCode::F(2)]);
    typed(&mut app, "zzz");
    key(&mut app, KeyCode::Esc);

    assert!(app.state().explorer.editing.is_none());
    assert_eq!(app.state().tree.find(&id("1")).unwrap().name(), "Documents");
}

#[test]
fn create_file_and_folder_under_selection() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Char('a')]);
    assert_eq!(child_names(&app, "3"), vec!["NewFile.txt"]);
    assert!(app.state().explorer.is_expanded(&id("3")));

    key(&mut app, KeyCode::Down);
    assert!(app.state().explorer.selected.is_some());
    keys(&mut app, &[KeyCode::Up, KeyCode::Char('A')]);
    assert_eq!(child_names(&app, "3"), vec!["NewFile.txt", "New Folder"]);
}

#[test]
fn delete_key_removes_selection() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Down, KeyCode::Char('d')]);
    assert!(!app.state().tree.contains(&id("1")));
    assert!(!app.state().tree.contains(&id("2")));
    assert!(app.state().explorer.selected.is_none());
}

#[test]
fn keyboard_move_into_folder() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Down, KeyCode::Char('m')]);
    assert_eq!(app.state().explorer.drag_source, Some(id("2")));
    assert!(app.drag_data().is_some());

    keys(&mut app, &[KeyCode::Down, KeyCode::Char('p')]);
    assert_eq!(child_names(&app, "3"), vec!["Resume.pdf"]);
    assert!(child_names(&app, "1").is_empty());
    assert!(app.state().explorer.drag_source.is_none());
    assert!(app.drag_data().is_none());
}

#[test]
fn refused_drop_ends_the_drag() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Down, KeyCode::Char('m'), KeyCode::Char('p')]);

    assert_eq!(child_names(&app, "1"), vec!["Resume.pdf"]);
    assert!(app.state().explorer.drag_source.is_none());
    assert!(app.drag_data().is_none());
}

#[test]
fn escape_cancels_drag() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Down, KeyCode::Char('m')]);
    assert!(app.drag_data().is_some());

    key(&mut app, KeyCode::Esc);
    assert!(app.state().explorer.drag_source.is_none());
    assert!(app.drag_data().is_none());
}

#[test]
fn search_focus_typing_and_escape() {
    let mut app = app();
    key(&mut app, KeyCode::Char('/'));
    assert_eq!(app.focus(), Focus::Search);

    typed(&mut app, "resq");
    key(&mut app, KeyCode::Backspace);
    assert_eq!(app.state().explorer.search_query, "res");

    key(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Tree);
    assert!(app.state().explorer.search_query.is_empty());
}

#[test]
fn quit_keys() {
    let mut app = app();
    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    app.handle_event(&Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(app.should_quit());
}

#[test]
fn menu_keys_navigate_and_confirm() {
    let mut app = app();
    draw(&mut app);
    keys(&mut app, &[KeyCode::Down, KeyCode::Char('c')]);
    let menu = app.state().context_menu.clone().unwrap();
    assert_eq!(menu.target, id("1"));
    assert_eq!(menu.anchor, (3, 5));

    // Create File, Create Folder, Rename
    keys(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
    assert!(app.state().context_menu.is_none());
    assert_eq!(app.state().explorer.editing, Some(id("1")));
}

#[test]
fn right_click_opens_menu_and_click_runs_entry() {
    let mut app = app();
    draw(&mut app);

    assert!(mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 3, 4));
    let menu = app.state().context_menu.clone().unwrap();
    assert_eq!(menu.target, id("1"));
    assert_eq!(app.state().explorer.selected, Some(id("1")));

    draw(&mut app);
    // Menu at (3,4) with four entries; "Delete" is the fourth inner row.
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 5, 8);
    assert!(app.state().context_menu.is_none());
    assert!(!app.state().tree.contains(&id("1")));
}

#[test]
fn click_outside_menu_closes_it() {
    let mut app = app();
    draw(&mut app);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 3, 4);
    draw(&mut app);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 38, 1);
    assert!(app.state().context_menu.is_none());
    assert!(app.state().tree.contains(&id("1")));
}

#[test]
fn menu_delta_skips_disabled_entries() {
    use crate::kernel::state::{ContextMenuEntry, ExplorerMenuAction};
    let items = vec![
        ContextMenuEntry::action(ExplorerMenuAction::NewFile, false),
        ContextMenuEntry::action(ExplorerMenuAction::NewFolder, false),
        ContextMenuEntry::action(ExplorerMenuAction::Rename, true),
        ContextMenuEntry::action(ExplorerMenuAction::Delete, true),
    ];
    assert_eq!(super::mouse::menu_delta(&items, 2, 3), 1);
    assert_eq!(super::mouse::menu_delta(&items, 3, 2), -1);
    assert_eq!(super::mouse::menu_delta(&items, 2, 2), 0);
}

#[test]
fn chevron_click_toggles_and_label_click_edits() {
    let mut app = app();
    draw(&mut app);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 1, 4);
    assert!(app.state().explorer.is_expanded(&id("1")));
    assert_eq!(app.state().explorer.selected, Some(id("1")));

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 6, 4);
    assert_eq!(app.state().explorer.editing, Some(id("1")));

    // Rows: Documents, Resume.pdf, Images. Clicking away commits the edit.
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 6, 6);
    assert!(app.state().explorer.editing.is_none());
    assert_eq!(app.state().explorer.selected, Some(id("3")));
    assert_eq!(app.state().tree.find(&id("1")).unwrap().name(), "Documents");
}

#[test]
fn mouse_drag_moves_node_into_folder() {
    let mut app = app();
    draw(&mut app);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 1, 4);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 6, 5);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 6, 6);
    assert_eq!(app.state().explorer.drag_source, Some(id("2")));
    assert!(app.drag_data().is_some());

    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 6, 6);
    assert_eq!(child_names(&app, "3"), vec!["Resume.pdf"]);
    assert!(app.drag_data().is_none());
}

#[test]
fn mouse_release_off_rows_cancels_drag() {
    let mut app = app();
    draw(&mut app);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 6, 5);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 6, 6);
    assert_eq!(app.state().explorer.drag_source, Some(id("3")));

    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 6, 9);
    assert!(app.state().explorer.drag_source.is_none());
    assert!(app.drag_data().is_none());
    assert_eq!(app.state().tree.roots().len(), 2);
}

#[test]
fn clicking_search_box_focuses_search() {
    let mut app = app();
    draw(&mut app);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 5, 1);
    assert_eq!(app.focus(), Focus::Search);
}

#[test]
fn render_shows_rows_and_filter() {
    let mut app = app();
    let screen = draw(&mut app);
    assert!(screen.contains("Documents"));
    assert!(screen.contains("Images"));

    key(&mut app, KeyCode::Char('/'));
    typed(&mut app, "ima");
    let screen = draw(&mut app);
    assert!(screen.contains("Images"));
    assert!(!screen.contains("Documents"));
}

#[test]
fn clamp_scroll_keeps_selection_visible() {
    assert_eq!(clamp_scroll(0, Some(2), 10, 5), 0);
    assert_eq!(clamp_scroll(0, Some(7), 10, 5), 3);
    assert_eq!(clamp_scroll(6, Some(2), 10, 5), 2);
    assert_eq!(clamp_scroll(9, None, 10, 5), 5);
    assert_eq!(clamp_scroll(3, Some(1), 10, 0), 0);
}

#[test]
fn clicking_search_box_commits_open_edit() {
    let mut app = app();
    draw(&mut app);
    keys(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Char('r')]);
    assert_eq!(app.state().explorer.editing, Some(id("3")));
    for _ in 0.."Images".len() {
        key(&mut app, KeyCode::Backspace);
    }
    typed(&mut app, "Pics");

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 5, 1);
    assert_eq!(app.focus(), Focus::Search);
    assert!(app.state().explorer.editing.is_none());
    assert_eq!(app.state().tree.find(&id("3")).unwrap().name(), "Pics");

    typed(&mut app, "res");
    assert_eq!(app.state().explorer.search_query, "res");
}

#[test]
fn right_click_elsewhere_commits_open_edit() {
    let mut app = app();
    draw(&mut app);
    keys(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Down, KeyCode::F(2)]);
    app.dispatch(Action::ExplorerEditChange("CV.pdf".into()));

    // Rows: Documents, Resume.pdf, Images.
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 6, 6);
    assert!(app.state().explorer.editing.is_none());
    assert_eq!(child_names(&app, "1"), vec!["CV.pdf"]);
    assert_eq!(
        app.state().context_menu.as_ref().map(|menu| menu.target.clone()),
        Some(id("3"))
    );
}

#[test]
fn clicking_the_row_being_edited_keeps_editing() {
    let mut app = app();
    draw(&mut app);
    keys(&mut app, &[KeyCode::Down, KeyCode::Char('r')]);
    typed(&mut app, "!");

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 6, 4);
    assert_eq!(app.state().explorer.editing, Some(id("1")));
    assert_eq!(app.state().explorer.pending_name, "Documents!");
}

#[test]
fn empty_tree_grows_from_root_folder_key() {
    let mut app = app();
    keys(&mut app, &[KeyCode::Down, KeyCode::Char('d'), KeyCode::Down, KeyCode::Char('d')]);
    assert!(app.state().tree.is_empty());
    assert!(draw(&mut app).contains("press N"));

    key(&mut app, KeyCode::Char('N'));
    assert_eq!(app.state().tree.roots().len(), 1);

    key(&mut app, KeyCode::Char('a'));
    let root = app.state().tree.roots()[0].id().as_str().to_string();
    assert_eq!(child_names(&app, &root), vec!["NewFile.txt"]);
}
