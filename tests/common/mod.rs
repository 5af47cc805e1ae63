//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use context_sidebar::config::SidebarConfig;
use context_sidebar::geometry::{Point, Rect};
use context_sidebar::host::{CentralWidgetId, StaticHost, ViewFrameId};
use context_sidebar::manager::{ContextSidebarManager, DragStart};
use context_sidebar::sidebar::{MouseButton, SidebarPos, SlotItem};
use context_sidebar::widget::{BuiltinWidgetKind, WidgetTypeId, WidgetTypeRegistry};

pub type TestManager = ContextSidebarManager<StaticHost>;

pub const FRAME: ViewFrameId = ViewFrameId(1);
pub const DATA_TYPE: &str = "Linear:ELF";

/// Manager with the built-in types, default config and a current view,
/// already set up
pub fn test_manager() -> TestManager {
    let host = StaticHost::default().with_view(FRAME, DATA_TYPE);
    manager_with(host, SidebarConfig::default())
}

/// Same as [`test_manager`] but with no view in front
pub fn test_manager_without_view() -> TestManager {
    manager_with(StaticHost::default(), SidebarConfig::default())
}

pub fn manager_with(host: StaticHost, config: SidebarConfig) -> TestManager {
    let mut manager = ContextSidebarManager::new(host, config, WidgetTypeRegistry::with_builtins());
    manager.setup_sidebars(CentralWidgetId(1));
    manager
}

pub fn type_id(manager: &TestManager, kind: BuiltinWidgetKind) -> WidgetTypeId {
    manager
        .registry()
        .find_by_name(kind.display_name())
        .expect("builtin type registered")
}

/// Display names of the types docked at `pos`, in order
pub fn slot_names(manager: &TestManager, pos: SidebarPos) -> Vec<String> {
    let slot = manager.slot(pos).expect("slot exists");
    slot.contained_types()
        .iter()
        .map(|&t| manager.registry().name(t).to_string())
        .collect()
}

/// Labels of the buttons at `pos`, in order
pub fn button_labels(manager: &TestManager, pos: SidebarPos) -> Vec<String> {
    let slot = manager.slot(pos).expect("slot exists");
    slot.buttons().iter().map(|b| b.label().to_string()).collect()
}

/// Labels of the checked buttons at `pos`
pub fn checked_labels(manager: &TestManager, pos: SidebarPos) -> Vec<String> {
    let slot = manager.slot(pos).expect("slot exists");
    slot.buttons()
        .iter()
        .filter(|b| b.is_checked())
        .map(|b| b.label().to_string())
        .collect()
}

/// Screen rectangle of the button for `widget_type`
pub fn button_rect(manager: &TestManager, widget_type: WidgetTypeId) -> Rect {
    manager
        .slots()
        .flat_map(|slot| slot.layout())
        .find_map(|item| match item {
            SlotItem::Button { widget_type: t, rect } if t == widget_type => Some(rect),
            _ => None,
        })
        .expect("button is laid out")
}

pub fn button_center(manager: &TestManager, widget_type: WidgetTypeId) -> Point {
    let rect = button_rect(manager, widget_type);
    Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

/// Click (press and release without moving) the button for `widget_type`
pub fn click(manager: &mut TestManager, widget_type: WidgetTypeId) {
    let at = button_center(manager, widget_type);
    assert!(manager.press_button(widget_type, at, MouseButton::Left));
    manager.release_button(widget_type);
}

/// Press the button for `widget_type` and move far enough to start a drag
pub fn start_drag(manager: &mut TestManager, widget_type: WidgetTypeId) -> DragStart {
    let at = button_center(manager, widget_type);
    assert!(manager.press_button(widget_type, at, MouseButton::Left));
    assert!(manager.move_button(widget_type, at.offset(0.0, 3.0), true).is_none());
    manager
        .move_button(widget_type, at.offset(0.0, 8.0), true)
        .expect("drag starts past the threshold")
}
