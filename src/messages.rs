//! Message types for the Elm-style architecture
//!
//! Every input the sidebars react to arrives as a [`SidebarMsg`]. Messages
//! deserialize from YAML so recorded sessions can be replayed.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::geometry::{Point, Rect};
use crate::host::{CentralWidgetId, ViewFrameId};
use crate::sidebar::{FloatingId, MouseButton, Side, SidebarPos, DRAG_MIME_FORMAT};
use crate::widget::WidgetTypeId;

fn default_format() -> String {
    DRAG_MIME_FORMAT.to_string()
}

fn default_button() -> MouseButton {
    MouseButton::Left
}

fn default_left_down() -> bool {
    true
}

/// Slot construction and geometry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum LifecycleMsg {
    /// Build the slots around the host's central widget
    Setup { central: CentralWidgetId },
    /// Rebuild every slot from its contained types
    Rebuild,
    /// Main window moved or resized
    Resize { window: Rect },
}

/// Mouse input on a slot button
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum ButtonMsg {
    Press {
        widget_type: WidgetTypeId,
        at: Point,
        #[serde(default = "default_button")]
        button: MouseButton,
    },
    Move {
        widget_type: WidgetTypeId,
        at: Point,
        #[serde(default = "default_left_down")]
        left_down: bool,
    },
    Release { widget_type: WidgetTypeId },
}

/// Platform drag events over slots and the central splitter
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum DragMsg {
    Enter {
        slot: SidebarPos,
        #[serde(default = "default_format")]
        format: String,
    },
    Move {
        slot: SidebarPos,
        at: Point,
        #[serde(default = "default_format")]
        format: String,
    },
    Leave { slot: SidebarPos },
    DropOnSlot {
        slot: SidebarPos,
        at: Point,
        #[serde(default = "default_format")]
        format: String,
    },
    DropOnSplitter {
        at: Point,
        #[serde(default = "default_format")]
        format: String,
    },
    /// The platform drag ended without a drop
    Cancel,
}

/// Content view panes and detached windows
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum PanelMsg {
    Activate {
        side: Side,
        widget_type: WidgetTypeId,
        top: bool,
        #[serde(default)]
        reset: bool,
    },
    Deactivate { widget_type: WidgetTypeId },
    ViewFrameClosed { frame: ViewFrameId },
    CloseFloating { id: FloatingId },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum SidebarMsg {
    Lifecycle(LifecycleMsg),
    Button(ButtonMsg),
    Drag(DragMsg),
    Panel(PanelMsg),
}

impl SidebarMsg {
    /// Messages that fire continuously during a gesture
    pub fn is_noisy(&self) -> bool {
        matches!(
            self,
            SidebarMsg::Button(ButtonMsg::Move { .. }) | SidebarMsg::Drag(DragMsg::Move { .. })
        )
    }
}

/// Parse YAML written with single-key maps for enum variants, e.g.
/// `- Drag: Cancel` or `- Button: { Release: { widget_type: 2 } }`
pub fn from_yaml<T: DeserializeOwned>(content: &str) -> Result<T, serde_yaml::Error> {
    serde_yaml::with::singleton_map_recursive::deserialize(serde_yaml::Deserializer::from_str(content))
}
