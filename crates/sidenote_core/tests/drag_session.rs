use sidenote_core::host::memory::MemorySidebar;
use sidenote_core::{
    ContextKey, DragState, DragTarget, InsertEdge, Item, ItemKind, SessionError, SidebarService,
};
use std::time::{Duration, Instant};

fn sidebar_with_folders() -> MemorySidebar {
    let mut host = MemorySidebar::new();
    host.add_folder("F1", None);
    host.add_folder("F2", None);
    host.add_note("N", Some("F1".to_string()));
    host.add_note("U", None);
    host
}

fn start_note_drag(service: &mut SidebarService, host: &mut MemorySidebar, note: &str) {
    let origin = ContextKey::folder_notes("F1");
    service
        .on_drag_start(host, &note.to_string(), ItemKind::Note, origin)
        .unwrap();
}

#[test]
fn drag_start_on_unselected_item_clears_selection_and_drags_alone() {
    let mut host = sidebar_with_folders();
    host.select(ItemKind::Note, &["U"]);
    let mut service = SidebarService::new();

    start_note_drag(&mut service, &mut host, "N");

    match service.drag_state() {
        DragState::Armed(payload) => {
            assert_eq!(payload.ids, ["N"]);
            assert_eq!(payload.kind, ItemKind::Note);
        }
        other => panic!("expected Armed, got {other:?}"),
    }
    use sidenote_core::host::SelectionView;
    assert!(host.selected_ids().is_empty());
}

#[test]
fn drag_start_on_selected_item_carries_the_whole_selection() {
    let mut host = sidebar_with_folders();
    host.add_note("N2", Some("F1".to_string()));
    host.select(ItemKind::Note, &["N", "N2"]);
    let mut service = SidebarService::new();

    start_note_drag(&mut service, &mut host, "N");

    match service.drag_state() {
        DragState::Armed(payload) => assert_eq!(payload.ids, ["N", "N2"]),
        other => panic!("expected Armed, got {other:?}"),
    }
}

#[test]
fn second_drag_start_is_rejected_while_armed() {
    let mut host = sidebar_with_folders();
    let mut service = SidebarService::new();
    start_note_drag(&mut service, &mut host, "N");

    let err = service
        .on_drag_start(
            &mut host,
            &"U".to_string(),
            ItemKind::Note,
            ContextKey::uncategorized_notes(),
        )
        .unwrap_err();
    assert_eq!(err, SessionError::DragInProgress);
}

#[test]
fn collapsed_folder_suppresses_reorder_but_accepts_center_drop() {
    let mut host = sidebar_with_folders();
    host.set_expanded("F2", false);
    let mut service = SidebarService::new();
    start_note_drag(&mut service, &mut host, "N");

    let folder_item = Item::new("F2", ItemKind::Folder);
    let root = ContextKey::root_folders();

    // Edge zone over the collapsed folder: no targeting, no indicator.
    assert!(!service.on_drag_over_item(&host, &folder_item, 0.1, &root));
    assert!(matches!(service.drag_state(), DragState::Armed(_)));

    // Center zone still targets the container itself.
    assert!(service.on_drag_over_item(&host, &folder_item, 0.5, &root));
    match service.drag_state() {
        DragState::Targeting { target, .. } => {
            assert_eq!(
                target,
                &DragTarget::Into {
                    container_id: "F2".to_string()
                }
            );
        }
        other => panic!("expected Targeting, got {other:?}"),
    }

    // Dropping there reassigns the note's folder.
    let outcome = service.on_drop(&mut host);
    assert_eq!(outcome.applied, ["N"]);
    assert_eq!(host.note_folder("N"), Some("F2".to_string()));
    assert!(matches!(service.drag_state(), DragState::Idle));
}

#[test]
fn reorder_hover_into_expanded_folder_notes_is_accepted() {
    let mut host = sidebar_with_folders();
    host.add_note("M", Some("F2".to_string()));
    let mut service = SidebarService::new();
    start_note_drag(&mut service, &mut host, "N");

    let ctx = ContextKey::folder_notes("F2");
    assert!(service.on_drag_over_reorder_zone(
        &host,
        &"M".to_string(),
        InsertEdge::Before,
        &ctx
    ));
    match service.drag_state() {
        DragState::Targeting { target, .. } => {
            assert_eq!(
                target,
                &DragTarget::Reorder {
                    target_id: "M".to_string(),
                    edge: InsertEdge::Before,
                    context: ctx,
                }
            );
        }
        other => panic!("expected Targeting, got {other:?}"),
    }
}

#[test]
fn reorder_hover_is_ignored_for_multi_item_drags() {
    let mut host = sidebar_with_folders();
    host.add_note("N2", Some("F1".to_string()));
    host.select(ItemKind::Note, &["N", "N2"]);
    let mut service = SidebarService::new();
    start_note_drag(&mut service, &mut host, "N");

    let ctx = ContextKey::folder_notes("F1");
    assert!(!service.on_drag_over_reorder_zone(
        &host,
        &"U".to_string(),
        InsertEdge::After,
        &ctx
    ));
    assert!(matches!(service.drag_state(), DragState::Armed(_)));

    // Container hovers still work for the batch.
    assert!(service.on_drag_over_container(&"F2".to_string()));
}

#[test]
fn tag_drags_never_target_containers() {
    let mut host = sidebar_with_folders();
    host.add_tag("work");
    let mut service = SidebarService::new();
    service
        .on_drag_start(
            &mut host,
            &"work".to_string(),
            ItemKind::Tag,
            ContextKey::tag_list(),
        )
        .unwrap();

    assert!(!service.on_drag_over_container(&"F1".to_string()));
    assert!(matches!(service.drag_state(), DragState::Armed(_)));
}

#[test]
fn leave_clears_target_only_after_the_debounce_window() {
    let mut host = sidebar_with_folders();
    let mut service = SidebarService::new();
    start_note_drag(&mut service, &mut host, "N");
    assert!(service.on_drag_over_container(&"F2".to_string()));

    let t0 = Instant::now();
    service.on_drag_leave(t0);

    assert!(!service.poll(t0 + Duration::from_millis(30)));
    assert!(matches!(service.drag_state(), DragState::Targeting { .. }));

    assert!(service.poll(t0 + Duration::from_millis(50)));
    assert!(matches!(service.drag_state(), DragState::Armed(_)));
}

#[test]
fn re_hover_within_the_window_cancels_the_pending_clear() {
    let mut host = sidebar_with_folders();
    let mut service = SidebarService::new();
    start_note_drag(&mut service, &mut host, "N");
    assert!(service.on_drag_over_container(&"F2".to_string()));

    let t0 = Instant::now();
    service.on_drag_leave(t0);
    // Pointer crosses onto the adjacent row before the timer fires.
    assert!(service.on_drag_over_container(&"F1".to_string()));

    assert!(!service.poll(t0 + Duration::from_secs(1)));
    match service.drag_state() {
        DragState::Targeting { target, .. } => {
            assert_eq!(
                target,
                &DragTarget::Into {
                    container_id: "F1".to_string()
                }
            );
        }
        other => panic!("expected Targeting, got {other:?}"),
    }
}

#[test]
fn drop_without_target_is_a_noop_and_resets() {
    let mut host = sidebar_with_folders();
    let mut service = SidebarService::new();
    start_note_drag(&mut service, &mut host, "N");

    let outcome = service.on_drop(&mut host);
    assert!(outcome.is_noop());
    assert!(matches!(service.drag_state(), DragState::Idle));
}

#[test]
fn cancel_returns_to_idle_without_mutation() {
    let mut host = sidebar_with_folders();
    let mut service = SidebarService::new();
    start_note_drag(&mut service, &mut host, "N");
    assert!(service.on_drag_over_container(&"F2".to_string()));

    service.on_cancel();
    assert!(matches!(service.drag_state(), DragState::Idle));
    assert_eq!(host.note_folder("N"), Some("F1".to_string()));
}
