use planmark_core::DesignerError;
use planmark_designer::{CanvasPoint, DragState, ItemId, PointerOutcome, ScreenPoint, SurfaceRect};

use super::ready_session;

/// Surface where screen pixels equal canvas percent.
fn unit_surface() -> SurfaceRect {
    SurfaceRect::new(0.0, 0.0, 100.0, 100.0)
}

#[test]
fn test_drag_records_single_entry() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    assert_eq!(session.undo_depth(), 1);

    session.begin_drag(&id).unwrap();
    for step in 1..=10 {
        let v = 10.0 + step as f64 * 3.0;
        session.drag_to_point(CanvasPoint::new(v, v)).unwrap();
    }
    assert_eq!(session.end_drag(), Some(id.clone()));

    assert_eq!(session.undo_depth(), 2);
    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(40.0, 40.0));

    assert!(session.undo());
    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(10.0, 10.0));
}

#[test]
fn test_drag_snaps_when_enabled() {
    let mut session = ready_session();
    session.set_snap_to_grid(true);
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();

    session.begin_drag(&id).unwrap();
    session.drag_to_point(CanvasPoint::new(53.3, 47.1)).unwrap();
    session.end_drag();

    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(54.0, 48.0));
}

#[test]
fn test_press_without_move_only_selects() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();

    let outcome = session
        .pointer_down(Some(&unit_surface()), ScreenPoint::new(10.5, 10.0))
        .unwrap();
    assert_eq!(outcome, PointerOutcome::Selected(id.clone()));
    assert_eq!(session.selected_item_id(), Some(&id));
    assert_eq!(session.drag_state(), &DragState::Armed { item_id: id.clone() });
    assert!(!session.is_dragging());

    assert_eq!(session.pointer_up(), None);
    assert_eq!(session.drag_state(), &DragState::Idle);
    assert_eq!(session.undo_depth(), 1);
    assert_eq!(session.items().len(), 1);
}

#[test]
fn test_press_and_move_drags() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    let surface = unit_surface();

    session.pointer_down(Some(&surface), ScreenPoint::new(10.0, 10.0)).unwrap();
    session.drag_to(Some(&surface), ScreenPoint::new(30.0, 40.0)).unwrap();
    assert!(session.is_dragging());

    // A click during the drag is ignored
    let outcome = session.click(Some(&surface), ScreenPoint::new(30.0, 40.0)).unwrap();
    assert_eq!(outcome, PointerOutcome::Suppressed);

    assert_eq!(session.pointer_up(), Some(id.clone()));
    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(30.0, 40.0));
    assert_eq!(session.undo_depth(), 2);
}

#[test]
fn test_click_after_drag_release_is_suppressed() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    let surface = unit_surface();

    // Browser order: pointerdown, pointermove, pointerup, click
    session.pointer_down(Some(&surface), ScreenPoint::new(10.0, 10.0)).unwrap();
    session.drag_to(Some(&surface), ScreenPoint::new(50.0, 50.0)).unwrap();
    session.pointer_up();
    let outcome = session.click(Some(&surface), ScreenPoint::new(50.0, 50.0)).unwrap();

    assert_eq!(outcome, PointerOutcome::Suppressed);
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(50.0, 50.0));
}

#[test]
fn test_click_after_select_release_is_suppressed() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    let surface = unit_surface();

    session.pointer_down(Some(&surface), ScreenPoint::new(10.0, 10.0)).unwrap();
    session.pointer_up();
    let outcome = session.click(Some(&surface), ScreenPoint::new(10.0, 10.0)).unwrap();

    assert_eq!(outcome, PointerOutcome::Suppressed);
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.selected_item_id(), Some(&id));
}

#[test]
fn test_click_after_placing_press_is_suppressed() {
    let mut session = ready_session();
    let surface = unit_surface();

    let outcome = session
        .pointer_down(Some(&surface), ScreenPoint::new(60.0, 60.0))
        .unwrap();
    assert!(matches!(outcome, PointerOutcome::Placed(_)));
    session.pointer_up();

    let outcome = session.click(Some(&surface), ScreenPoint::new(60.0, 60.0)).unwrap();
    assert_eq!(outcome, PointerOutcome::Suppressed);
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.undo_depth(), 1);
}

#[test]
fn test_suppression_is_one_shot() {
    let mut session = ready_session();
    let surface = unit_surface();
    session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();

    session.pointer_down(Some(&surface), ScreenPoint::new(10.0, 10.0)).unwrap();
    session.pointer_up();
    session.click(Some(&surface), ScreenPoint::new(10.0, 10.0)).unwrap();

    // A later click-only placement goes through
    let outcome = session.click(Some(&surface), ScreenPoint::new(70.0, 70.0)).unwrap();
    assert!(matches!(outcome, PointerOutcome::Placed(_)));
    assert_eq!(session.items().len(), 2);
}

#[test]
fn test_undo_does_not_swallow_next_click() {
    let mut session = ready_session();
    let surface = unit_surface();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    session.begin_drag(&id).unwrap();
    session.drag_to_point(CanvasPoint::new(40.0, 40.0)).unwrap();

    assert!(session.undo());
    let outcome = session.click(Some(&surface), ScreenPoint::new(70.0, 70.0)).unwrap();
    assert!(matches!(outcome, PointerOutcome::Placed(_)));
}

#[test]
fn test_drop_in_place_leaves_no_undo_entry() {
    let mut session = ready_session();
    let first = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    session.place_at(CanvasPoint::new(20.0, 20.0)).unwrap();
    assert_eq!(session.undo_depth(), 2);

    session.begin_drag(&first).unwrap();
    session.drag_to_point(CanvasPoint::new(60.0, 60.0)).unwrap();
    session.drag_to_point(CanvasPoint::new(10.0, 10.0)).unwrap();
    assert_eq!(session.undo_depth(), 3);

    assert_eq!(session.end_drag(), Some(first.clone()));
    assert_eq!(session.undo_depth(), 2);

    // Undo now reverts the second placement, not the empty drag
    assert!(session.undo());
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.items()[0].id, first);
}

#[test]
fn test_drag_without_surface_keeps_position() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    session.begin_drag(&id).unwrap();
    session.drag_to_point(CanvasPoint::new(20.0, 20.0)).unwrap();

    let result = session.drag_to(None, ScreenPoint::new(90.0, 90.0));
    assert_eq!(result, Err(DesignerError::NoSurface));
    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(20.0, 20.0));
    assert!(session.is_dragging());
}

#[test]
fn test_drag_clamps_to_canvas() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(50.0, 50.0)).unwrap();
    session.begin_drag(&id).unwrap();
    session.drag_to_point(CanvasPoint::new(-20.0, 250.0)).unwrap();

    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(0.0, 100.0));
}

#[test]
fn test_move_without_drag_is_noop() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();

    session.drag_to_point(CanvasPoint::new(70.0, 70.0)).unwrap();
    session
        .drag_to(Some(&unit_surface()), ScreenPoint::new(70.0, 70.0))
        .unwrap();

    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(10.0, 10.0));
    assert_eq!(session.undo_depth(), 1);
}

#[test]
fn test_begin_drag_unknown_item() {
    let mut session = ready_session();
    let result = session.begin_drag(&ItemId::from("missing"));
    assert!(matches!(result, Err(DesignerError::UnknownItem { .. })));
    assert_eq!(session.drag_state(), &DragState::Idle);
}

#[test]
fn test_begin_drag_twice_records_once() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();

    session.begin_drag(&id).unwrap();
    session.begin_drag(&id).unwrap();
    assert_eq!(session.undo_depth(), 2);
}

#[test]
fn test_undo_during_drag_ends_it() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    session.begin_drag(&id).unwrap();
    session.drag_to_point(CanvasPoint::new(50.0, 50.0)).unwrap();

    assert!(session.undo());
    assert_eq!(session.drag_state(), &DragState::Idle);
    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(10.0, 10.0));
    assert!(session.can_redo());

    assert!(session.redo());
    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(50.0, 50.0));
}

#[test]
fn test_remove_during_drag_ends_it() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    session.begin_drag(&id).unwrap();

    session.remove_item(&id).unwrap();
    assert_eq!(session.drag_state(), &DragState::Idle);
    assert!(session.items().is_empty());
    assert_eq!(session.selected_item_id(), None);
}
