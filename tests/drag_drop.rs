//! Drag and drop tests
//!
//! Reordering within a slot, moving between slots, detaching into floating
//! windows, cancelled drags and malformed drops.

mod common;

use common::{
    button_center, button_labels, button_rect, checked_labels, click, manager_with, slot_names,
    start_drag, test_manager, type_id,
};
use context_sidebar::config::{ButtonMetrics, SidebarConfig};
use context_sidebar::geometry::{Point, Rect};
use context_sidebar::host::StaticHost;
use context_sidebar::messages::{LifecycleMsg, SidebarMsg};
use context_sidebar::sidebar::{
    DragPayload, MouseButton, Orientation, PanePosition, Side, SidebarButton, SidebarPos,
};
use context_sidebar::tracing::LayoutSnapshot;
use context_sidebar::update::update;
use context_sidebar::widget::{BuiltinWidgetKind, IconPair, WidgetTypeId};

// ========================================================================
// Drag start
// ========================================================================

#[test]
fn test_drag_start_moves_button_into_payload() {
    let mut manager = test_manager();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);

    let start = start_drag(&mut manager, strings);
    assert_eq!(start.widget_type, strings);
    assert_eq!(start.mime_text, "Strings");

    let payload = manager.drag().expect("payload recorded");
    assert_eq!(payload.origin, SidebarPos::TopLeft);
    assert_eq!(payload.nearest, Some(SidebarPos::TopLeft));
    assert!(!payload.button.is_visible());

    // The type stays docked until the drop resolves; only its button left
    assert!(slot_names(&manager, SidebarPos::TopLeft).contains(&"Strings".to_string()));
    assert_eq!(
        button_labels(&manager, SidebarPos::TopLeft),
        vec!["Component Tree", "Types"]
    );
    manager.assert_invariants();
}

#[test]
fn test_no_second_drag_while_one_is_in_flight() {
    let mut manager = test_manager();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    let types = type_id(&manager, BuiltinWidgetKind::TypeView);

    start_drag(&mut manager, strings);
    let at = button_center(&manager, types);
    assert!(!manager.press_button(types, at, MouseButton::Left));
    assert!(manager.move_button(types, at.offset(0.0, 50.0), true).is_none());
    assert_eq!(manager.drag().map(|p| p.widget_type()), Some(strings));
}

#[test]
fn test_right_button_never_starts_a_drag() {
    let mut manager = test_manager();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    let at = button_center(&manager, strings);

    manager.press_button(strings, at, MouseButton::Right);
    assert!(manager.move_button(strings, at.offset(0.0, 40.0), true).is_none());
    assert!(manager.drag().is_none());
    assert!(manager.release_button(strings).is_none());
}

// ========================================================================
// Drop onto a slot
// ========================================================================

#[test]
fn test_reorder_within_slot_keeps_pane() {
    let mut manager = test_manager();
    let types = type_id(&manager, BuiltinWidgetKind::TypeView);
    click(&mut manager, types);
    assert_eq!(manager.content_view(Side::Left).top_type(), Some(types));
    let instance = manager
        .content_view(Side::Left)
        .pane(PanePosition::Top)
        .instance();

    start_drag(&mut manager, types);
    let origin = manager.slot(SidebarPos::TopLeft).unwrap().origin();
    assert!(manager.drop_on_slot(SidebarPos::TopLeft, origin.offset(5.0, 1.0), "text/plain"));

    let expected = vec!["Types", "Component Tree", "Strings"];
    assert_eq!(slot_names(&manager, SidebarPos::TopLeft), expected);
    assert_eq!(button_labels(&manager, SidebarPos::TopLeft), expected);
    assert_eq!(manager.content_view(Side::Left).top_type(), Some(types));
    assert_eq!(
        manager.content_view(Side::Left).pane(PanePosition::Top).instance(),
        instance
    );
    assert_eq!(checked_labels(&manager, SidebarPos::TopLeft), vec!["Types"]);
    assert!(manager.drag().is_none());
    manager.assert_invariants();
}

#[test]
fn test_drop_into_other_slot_carries_active_state() {
    let mut manager = test_manager();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    click(&mut manager, strings);
    let instance = manager
        .content_view(Side::Left)
        .pane(PanePosition::Top)
        .instance();

    start_drag(&mut manager, strings);
    let below_everything = Point::new(1590.0, manager.window().bottom() + 100.0);
    assert!(manager.drop_on_slot(SidebarPos::BottomRight, below_everything, "text/plain"));

    assert!(!slot_names(&manager, SidebarPos::TopLeft).contains(&"Strings".to_string()));
    assert_eq!(slot_names(&manager, SidebarPos::BottomRight), vec!["Tags", "Strings"]);
    assert!(manager.content_view(Side::Left).is_empty());
    assert_eq!(manager.content_view(Side::Right).bottom_type(), Some(strings));
    assert_eq!(
        manager.content_view(Side::Right).pane(PanePosition::Bottom).instance(),
        instance
    );
    assert_eq!(checked_labels(&manager, SidebarPos::BottomRight), vec!["Strings"]);
    assert_eq!(manager.slot_containing(strings), Some(SidebarPos::BottomRight));
    manager.assert_invariants();
}

#[test]
fn test_drop_of_inactive_type_stays_inactive() {
    let mut manager = test_manager();
    let tags = type_id(&manager, BuiltinWidgetKind::TagList);

    start_drag(&mut manager, tags);
    assert!(manager.drop_on_slot(SidebarPos::TopLeft, Point::new(5.0, 1.0), "text/plain"));

    assert_eq!(slot_names(&manager, SidebarPos::TopLeft)[0], "Tags");
    assert!(slot_names(&manager, SidebarPos::BottomRight).is_empty());
    assert!(manager.content_view(Side::Left).is_empty());
    assert!(manager.cache().is_empty());
}

#[test]
fn test_drop_rebuilds_every_slot() {
    let mut manager = test_manager();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    let before: Vec<u64> = manager.slots().map(|s| s.generation()).collect();

    start_drag(&mut manager, strings);
    assert!(manager.drop_on_slot(SidebarPos::TopLeft, Point::new(5.0, 1.0), "text/plain"));

    let after: Vec<u64> = manager.slots().map(|s| s.generation()).collect();
    for (b, a) in before.iter().zip(&after) {
        assert!(a > b, "slot generation did not advance: {} -> {}", b, a);
    }
}

#[test]
fn test_rebuild_mid_drag_keeps_dragged_button_out() {
    let mut manager = test_manager();
    let component_tree = type_id(&manager, BuiltinWidgetKind::ComponentTree);
    let types = type_id(&manager, BuiltinWidgetKind::TypeView);
    let first_bottom = button_rect(&manager, component_tree).bottom();

    start_drag(&mut manager, types);
    update(&mut manager, SidebarMsg::Lifecycle(LifecycleMsg::Rebuild));

    assert_eq!(
        button_labels(&manager, SidebarPos::TopLeft),
        vec!["Component Tree", "Strings"]
    );
    assert_eq!(
        slot_names(&manager, SidebarPos::TopLeft),
        vec!["Component Tree", "Types", "Strings"]
    );
    assert_eq!(manager.drag().map(|p| p.widget_type()), Some(types));
    manager.assert_invariants();

    // Inside Strings, which sits right below Component Tree while Types is out
    let at = Point::new(5.0, first_bottom + 80.0);
    assert!(manager.drop_on_slot(SidebarPos::TopLeft, at, "text/plain"));
    let expected = vec!["Component Tree", "Types", "Strings"];
    assert_eq!(slot_names(&manager, SidebarPos::TopLeft), expected);
    assert_eq!(button_labels(&manager, SidebarPos::TopLeft), expected);
    manager.assert_invariants();
}

// ========================================================================
// Drag-over feedback
// ========================================================================

#[test]
fn test_drag_over_shows_and_leave_removes_placeholder() {
    let mut manager = test_manager();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    start_drag(&mut manager, strings);

    assert!(manager.drag_enter(SidebarPos::TopRight, "text/plain"));
    assert!(manager.drag_move(SidebarPos::TopRight, Point::new(1590.0, 1.0), "text/plain"));
    let placeholder = *manager
        .slot(SidebarPos::TopRight)
        .unwrap()
        .placeholder()
        .expect("placeholder shown");
    assert_eq!(placeholder.index, 0);
    assert_eq!(placeholder.size, manager.drag().unwrap().button.size_hint());

    // Leaving never touches membership
    let names = slot_names(&manager, SidebarPos::TopRight);
    manager.drag_leave(SidebarPos::TopRight);
    assert!(manager.slot(SidebarPos::TopRight).unwrap().placeholder().is_none());
    assert_eq!(slot_names(&manager, SidebarPos::TopRight), names);
}

#[test]
fn test_drop_clears_placeholder() {
    let mut manager = test_manager();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    start_drag(&mut manager, strings);

    manager.drag_move(SidebarPos::TopRight, Point::new(1590.0, 1.0), "text/plain");
    assert!(manager.drop_on_slot(SidebarPos::TopRight, Point::new(1590.0, 1.0), "text/plain"));
    assert!(manager.slots().all(|s| s.placeholder().is_none()));
    assert_eq!(slot_names(&manager, SidebarPos::TopRight)[0], "Strings");
}

#[test]
fn test_drag_enter_rejects_other_formats() {
    let manager = test_manager();
    assert!(!manager.drag_enter(SidebarPos::TopLeft, "application/x-binary"));
    assert!(manager.drag_enter(SidebarPos::TopLeft, "text/plain"));
}

// ========================================================================
// Malformed drops
// ========================================================================

#[test]
fn test_drop_without_payload_is_ignored() {
    let mut manager = test_manager();
    let before = LayoutSnapshot::from_manager(&manager);
    assert!(!manager.drop_on_slot(SidebarPos::TopLeft, Point::new(5.0, 1.0), "text/plain"));
    assert!(manager.drop_on_splitter(Point::new(600.0, 300.0), "text/plain").is_none());
    assert!(!manager.drag_move(SidebarPos::TopLeft, Point::new(5.0, 1.0), "text/plain"));
    assert_eq!(LayoutSnapshot::from_manager(&manager), before);
}

#[test]
fn test_drop_of_unregistered_type_is_ignored() {
    let mut manager = test_manager();
    let ghost = SidebarButton::new(
        WidgetTypeId(99),
        "Ghost",
        IconPair::single("?"),
        Orientation::VerticalTopToBottom,
        &ButtonMetrics::default(),
    );
    manager.drag_started_with_target(DragPayload::new(ghost, SidebarPos::TopLeft));
    let before = LayoutSnapshot::from_manager(&manager);

    assert!(!manager.drop_on_slot(SidebarPos::TopRight, Point::new(1590.0, 1.0), "text/plain"));
    assert!(manager
        .drop_on_splitter(Point::new(600.0, 300.0), "text/plain")
        .is_none());
    assert_eq!(LayoutSnapshot::from_manager(&manager), before);
    assert!(manager.floating_windows().is_empty());
    assert!(manager.slots().all(|slot| !slot.contains(WidgetTypeId(99))));
}

#[test]
fn test_drop_with_wrong_format_keeps_drag_in_flight() {
    let mut manager = test_manager();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    start_drag(&mut manager, strings);
    let before = LayoutSnapshot::from_manager(&manager);

    assert!(!manager.drop_on_slot(SidebarPos::TopRight, Point::new(1590.0, 1.0), "text/uri-list"));
    assert!(manager
        .drop_on_splitter(Point::new(600.0, 300.0), "text/uri-list")
        .is_none());
    assert_eq!(LayoutSnapshot::from_manager(&manager), before);
    assert!(manager.drag().is_some());

    assert!(manager.cancel_drag());
    assert!(manager.drag().is_none());
}

// ========================================================================
// Floating windows
// ========================================================================

#[test]
fn test_drop_on_splitter_detaches_into_floating_window() {
    let mut manager = test_manager();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    click(&mut manager, strings);
    assert_eq!(manager.cache().len(), 1);

    start_drag(&mut manager, strings);
    let id = manager
        .drop_on_splitter(Point::new(600.0, 300.0), "text/plain")
        .expect("floating window created");

    let window = &manager.floating_windows()[0];
    assert_eq!(window.id, id);
    assert_eq!(window.widget_type, strings);
    assert_eq!(window.instance.title(), "Strings");
    assert_eq!(window.geometry, Rect::new(600.0, 300.0, 350.0, 1000.0));

    // The instance left the cache and the panes; the type stays docked
    assert!(manager.cache().is_empty());
    assert!(manager.content_view(Side::Left).is_empty());
    assert_eq!(
        slot_names(&manager, SidebarPos::TopLeft),
        vec!["Component Tree", "Types", "Strings"]
    );
    assert_eq!(button_labels(&manager, SidebarPos::TopLeft).len(), 3);
    assert!(manager.drag().is_none());
    manager.assert_invariants();

    assert!(manager.close_floating(id));
    assert!(manager.floating_windows().is_empty());
    assert!(!manager.close_floating(id));
}

#[test]
fn test_floating_window_without_view_is_invalid_context() {
    let mut manager = common::test_manager_without_view();
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    start_drag(&mut manager, strings);
    manager
        .drop_on_splitter(Point::new(10.0, 10.0), "text/plain")
        .expect("floating window created");
    assert!(manager.floating_windows()[0].instance.is_invalid_context());
}

// ========================================================================
// Cancelled drags
// ========================================================================

#[test]
fn test_cancel_returns_button_to_origin() {
    let mut manager = test_manager();
    let types = type_id(&manager, BuiltinWidgetKind::TypeView);
    start_drag(&mut manager, types);

    assert!(manager.cancel_drag());
    assert_eq!(
        button_labels(&manager, SidebarPos::TopLeft),
        vec!["Component Tree", "Types", "Strings"]
    );
    assert!(!manager.cancel_drag());
    manager.assert_invariants();
}

#[test]
fn test_cancel_reattaches_to_nearest_slot() {
    let host = StaticHost::new(Rect::new(0.0, 0.0, 1600.0, 400.0)).with_view(common::FRAME, common::DATA_TYPE);
    let mut manager = manager_with(host, SidebarConfig::default());
    let strings = type_id(&manager, BuiltinWidgetKind::Strings);
    click(&mut manager, strings);

    let at = button_center(&manager, strings);
    assert_eq!(
        manager.sidebar_for_global_pos(at),
        Some(SidebarPos::BottomLeft),
        "the bottom-left slot anchor should be nearest in a short window"
    );

    start_drag(&mut manager, strings);
    assert_eq!(manager.drag().unwrap().nearest, Some(SidebarPos::BottomLeft));
    assert!(manager.cancel_drag());

    assert_eq!(manager.slot_containing(strings), Some(SidebarPos::BottomLeft));
    assert_eq!(
        slot_names(&manager, SidebarPos::BottomLeft),
        vec!["Cross References", "Mini Graph", "Strings"]
    );
    assert_eq!(manager.content_view(Side::Left).bottom_type(), Some(strings));
    assert_eq!(manager.content_view(Side::Left).top_type(), None);
    manager.assert_invariants();
}
