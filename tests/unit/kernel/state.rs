use super::*;
use crate::models::NodeId;

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

#[test]
fn toggle_expanded_flips_membership() {
    let mut explorer = ExplorerState::default();
    explorer.toggle_expanded(&id("1"));
    assert!(explorer.is_expanded(&id("1")));
    explorer.toggle_expanded(&id("1"));
    assert!(!explorer.is_expanded(&id("1")));
}

#[test]
fn pending_name_edits_require_an_active_edit() {
    let mut explorer = ExplorerState::default();
    assert!(!explorer.set_pending_name("x".into()));
    assert!(!explorer.append_pending_char('x'));
    assert!(!explorer.backspace_pending());
    assert!(explorer.pending_name.is_empty());

    explorer.begin_edit(id("2"), "Resume.pdf");
    assert!(explorer.is_editing(&id("2")));
    assert!(explorer.backspace_pending());
    assert!(!explorer.append_pending_char('\n'));
    assert!(explorer.append_pending_char('x'));
    assert_eq!(explorer.pending_name, "Resume.pdx");
    assert!(!explorer.set_pending_name("Resume.pdx".into()));

    explorer.end_edit();
    assert!(explorer.editing.is_none());
    assert!(explorer.pending_name.is_empty());
}

#[test]
fn query_edits_report_changes() {
    let mut explorer = ExplorerState::default();
    assert!(!explorer.backspace_query());
    assert!(explorer.append_query_char('R'));
    assert!(!explorer.append_query_char('\t'));
    assert!(!explorer.set_search_query("R".into()));
    assert!(explorer.set_search_query(String::new()));
}

#[test]
fn retain_existing_prunes_stale_ids() {
    let tree = FileTree::from_roots(vec![Node::folder("3", "Images", Vec::new())]);
    let mut explorer = ExplorerState::default();
    explorer.toggle_expanded(&id("1"));
    explorer.toggle_expanded(&id("3"));
    explorer.begin_edit(id("2"), "Resume.pdf");
    explorer.drag_source = Some(id("1"));
    explorer.selected = Some(id("3"));

    explorer.retain_existing(&tree);

    assert!(explorer.is_expanded(&id("3")));
    assert!(!explorer.is_expanded(&id("1")));
    assert!(explorer.editing.is_none());
    assert!(explorer.drag_source.is_none());
    assert_eq!(explorer.selected, Some(id("3")));
}

#[test]
fn visible_ids_follow_expansion_and_query() {
    let mut state = AppState::default();
    assert_eq!(state.visible_ids(), vec![id("1"), id("3")]);

    state.explorer.toggle_expanded(&id("1"));
    assert_eq!(state.visible_ids(), vec![id("1"), id("2"), id("3")]);

    state.explorer.search_query = "resume".into();
    assert_eq!(state.visible_ids(), vec![id("1"), id("2")]);
    assert_eq!(state.tree, FileTree::seed());
}

#[test]
fn menu_selected_action_skips_disabled_entry() {
    let menu = ContextMenuState {
        target: id("2"),
        anchor: (0, 0),
        selected: 0,
        items: vec![
            ContextMenuEntry::action(ExplorerMenuAction::NewFile, false),
            ContextMenuEntry::action(ExplorerMenuAction::Delete, true),
        ],
    };
    assert_eq!(menu.selected_action(), None);
    assert_eq!(
        ContextMenuState { selected: 1, ..menu }.selected_action(),
        Some(ExplorerMenuAction::Delete)
    );
}
