use planmark_core::{Classification, DesignerError, Symbol, SymbolCatalog, SymbolId};
use planmark_designer::{
    CanvasPoint, DesignerSession, ItemId, PlacementMode, PointerOutcome, ScreenPoint, SurfaceRect,
};
use planmark_settings::Config;

use super::ready_session;

#[test]
fn test_place_requires_background() {
    let mut session = DesignerSession::new(Classification::Electrical);
    session.select_symbol(&SymbolId::from("el-outlet")).unwrap();

    let result = session.place_at(CanvasPoint::new(10.0, 10.0));
    assert_eq!(result, Err(DesignerError::MissingBackground));
    assert!(session.items().is_empty());
    assert!(!session.can_undo());
}

#[test]
fn test_place_symbol_requires_selection() {
    let mut session = ready_session();
    session.clear_symbol_selection();

    let result = session.place_at(CanvasPoint::new(10.0, 10.0));
    assert_eq!(result, Err(DesignerError::NoSymbolSelected));
    assert!(session.items().is_empty());
}

#[test]
fn test_place_annotation_rejects_blank_text() {
    let mut session = ready_session();
    session.set_mode(PlacementMode::Annotation);
    session.set_annotation_draft("   ");

    let result = session.place_at(CanvasPoint::new(10.0, 10.0));
    assert_eq!(result, Err(DesignerError::EmptyAnnotation));
    assert!(session.items().is_empty());
    assert!(!session.can_undo());
}

#[test]
fn test_annotation_text_trimmed_and_draft_cleared() {
    let mut session = ready_session();
    session.set_mode(PlacementMode::Annotation);
    session.set_annotation_draft("  Check panel \n");

    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    assert_eq!(session.item(&id).unwrap().text(), Some("Check panel"));
    assert_eq!(session.annotation_draft(), "");
}

#[test]
fn test_placed_symbol_copies_catalog_fields() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();

    let symbol_ref = session.item(&id).unwrap().symbol_ref().unwrap();
    assert_eq!(symbol_ref.label, "Outlet");
    assert_eq!(symbol_ref.code, "E-101");
    assert_eq!(symbol_ref.category, "Receptacles");
}

#[test]
fn test_ids_are_unique() {
    let mut session = ready_session();
    let a = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    let b = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_edit_after_undo_clears_redo() {
    let mut session = ready_session();
    session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    session.place_at(CanvasPoint::new(20.0, 20.0)).unwrap();

    assert!(session.undo());
    assert!(session.can_redo());

    session.place_at(CanvasPoint::new(30.0, 30.0)).unwrap();
    assert!(!session.can_redo());
    assert!(!session.redo());
    assert_eq!(session.items().len(), 2);
}

#[test]
fn test_undo_with_empty_history_is_noop() {
    let mut session = ready_session();
    assert!(!session.undo());
    assert!(!session.redo());
}

#[test]
fn test_select_and_remove_selected() {
    let mut session = ready_session();
    let a = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    let b = session.place_at(CanvasPoint::new(20.0, 20.0)).unwrap();

    assert!(!session.remove_selected());

    session.select_item(&a).unwrap();
    assert!(session.remove_selected());
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.items()[0].id, b);
    assert_eq!(session.selected_item_id(), None);

    assert!(session.undo());
    assert!(session.item(&a).is_some());
}

#[test]
fn test_unknown_item_errors() {
    let mut session = ready_session();
    let missing = ItemId::from("missing");
    assert!(matches!(session.select_item(&missing), Err(DesignerError::UnknownItem { .. })));
    assert!(matches!(session.remove_item(&missing), Err(DesignerError::UnknownItem { .. })));
    assert!(!session.can_undo());
}

#[test]
fn test_undo_drops_stale_selection() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    session.select_item(&id).unwrap();

    assert!(session.undo());
    assert_eq!(session.selected_item_id(), None);
}

#[test]
fn test_clear_all_on_empty_canvas() {
    let mut session = ready_session();
    assert!(!session.clear_all());
    assert!(!session.can_undo());
}

#[test]
fn test_click_places_with_mapping() {
    let mut session = ready_session();
    let surface = SurfaceRect::new(100.0, 50.0, 400.0, 200.0);

    let outcome = session.click(Some(&surface), ScreenPoint::new(300.0, 150.0)).unwrap();
    let id = match outcome {
        PointerOutcome::Placed(id) => id,
        other => panic!("expected a placement, got {:?}", other),
    };
    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(50.0, 50.0));
}

#[test]
fn test_click_without_surface() {
    let mut session = ready_session();
    let result = session.click(None, ScreenPoint::new(1.0, 1.0));
    assert_eq!(result, Err(DesignerError::NoSurface));
    assert!(session.items().is_empty());
}

#[test]
fn test_pointer_down_on_empty_canvas_places() {
    let mut session = ready_session();
    let surface = SurfaceRect::new(0.0, 0.0, 100.0, 100.0);
    session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();

    let outcome = session
        .pointer_down(Some(&surface), ScreenPoint::new(60.0, 60.0))
        .unwrap();
    assert!(matches!(outcome, PointerOutcome::Placed(_)));
    assert_eq!(session.items().len(), 2);
}

#[test]
fn test_select_symbol_switches_mode() {
    let mut session = ready_session();
    session.set_mode(PlacementMode::Annotation);
    session.select_symbol(&SymbolId::from("el-switch")).unwrap();

    assert_eq!(session.mode(), PlacementMode::Symbol);
    assert_eq!(session.selected_symbol().map(|s| s.label.as_str()), Some("Switch"));
}

#[test]
fn test_select_symbol_outside_classification() {
    let mut session = DesignerSession::new(Classification::FireAlarm);
    let result = session.select_symbol(&SymbolId::from("el-outlet"));
    assert!(matches!(result, Err(DesignerError::UnknownSymbol { .. })));
}

#[test]
fn test_classification_change_keeps_items() {
    let mut session = ready_session();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();

    session.set_classification(Classification::Security);
    assert_eq!(session.selected_symbol(), None);
    assert_eq!(session.item(&id).unwrap().display_label(), "Outlet");
    assert!(session
        .available_symbols()
        .iter()
        .all(|s| s.classification == Classification::Security));
}

#[test]
fn test_search_symbols_in_active_classification() {
    let session = ready_session();
    assert_eq!(session.search_symbols("").len(), session.available_symbols().len());

    let hits = session.search_symbols("OUTLET");
    assert!(hits.iter().any(|s| s.id == SymbolId::from("el-outlet")));
    assert!(session.search_symbols("no such symbol").is_empty());
}

#[test]
fn test_background_change_keeps_items_and_history() {
    let mut session = ready_session();
    session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    session.set_background(planmark_designer::Background::new(
        "https://files/other.pdf",
        "other.pdf",
    ));

    assert_eq!(session.items().len(), 1);
    assert_eq!(session.undo_depth(), 1);
}

#[test]
fn test_with_config() {
    let mut config = Config::default();
    config.designer.grid_step = 5.0;
    config.designer.history_limit = 3;
    config.designer.snap_to_grid = true;
    config.designer.default_classification = Classification::Electrical;

    let mut session = DesignerSession::with_config(&config);
    assert_eq!(session.classification(), Classification::Electrical);
    assert_eq!(session.history_limit(), 3);
    assert!(session.snap_to_grid());
    assert_eq!(session.mapper().grid_step(), 5.0);

    session.set_background(planmark_designer::Background::new("u", "plan.png"));
    session.select_symbol(&SymbolId::from("el-outlet")).unwrap();
    let id = session.place_at(CanvasPoint::new(12.4, 88.0)).unwrap();
    assert_eq!(session.item(&id).unwrap().position(), CanvasPoint::new(10.0, 90.0));

    for _ in 0..5 {
        session.place_at(CanvasPoint::new(1.0, 1.0)).unwrap();
    }
    assert_eq!(session.undo_depth(), 3);
}

#[test]
fn test_modified_flag() {
    let mut session = DesignerSession::new(Classification::Electrical);
    assert!(!session.is_modified());

    session.set_background(planmark_designer::Background::new("u", "plan.png"));
    assert!(session.is_modified());

    session.new_layout();
    assert!(!session.is_modified());
    assert!(session.background().is_none());
}

#[test]
fn test_with_config_huge_history_limit() {
    let mut config = Config::default();
    config.designer.history_limit = i64::MAX as usize;

    let mut session = DesignerSession::with_config(&config);
    assert_eq!(session.history_limit(), i64::MAX as usize);

    session.set_background(planmark_designer::Background::new("u", "plan.png"));
    session.set_mode(PlacementMode::Annotation);
    session.set_annotation_draft("still works");
    session.place_at(CanvasPoint::new(5.0, 5.0)).unwrap();
    assert_eq!(session.undo_depth(), 1);
}

#[test]
fn test_with_catalog() {
    let mut catalog = SymbolCatalog::new();
    catalog.add_symbol(Symbol::new(
        "el-panel",
        "Panelboard",
        "PB",
        "Distribution",
        "E-300",
        Classification::Electrical,
    ));

    let mut session = ready_session().with_catalog(catalog);
    // The outlet is not in the replacement catalog
    assert_eq!(session.selected_symbol(), None);
    assert_eq!(session.available_symbols().len(), 1);

    session.select_symbol(&SymbolId::from("el-panel")).unwrap();
    let id = session.place_at(CanvasPoint::new(10.0, 10.0)).unwrap();
    assert_eq!(session.item(&id).unwrap().display_label(), "Panelboard");
}
