//! Capabilities consumed from the hosting shell
//!
//! The sidebar never reaches into the main window directly. Everything it
//! needs from the host (current view, theme, window geometry) comes through
//! [`HostContext`].

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::theme::Color;

/// Identity of a view frame in the host (one per open binary view tab)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewFrameId(pub u64);

/// Opaque handle to the host's central editing widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CentralWidgetId(pub u64);

/// The view currently in front: its frame and the data type it displays
/// (e.g. "Linear:ELF", "Graph:Mapped")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewContext {
    pub frame: ViewFrameId,
    pub data_type: String,
}

impl ViewContext {
    pub fn new(frame: ViewFrameId, data_type: impl Into<String>) -> Self {
        Self {
            frame,
            data_type: data_type.into(),
        }
    }
}

/// Services the sidebar consumes from the hosting shell
pub trait HostContext {
    /// The current view frame and its data type, if any view is open
    fn current_view(&self) -> Option<ViewContext>;

    /// Background colour for sidebar slots and buttons
    fn sidebar_background(&self) -> Color {
        Color::rgb(0x2a, 0x2a, 0x2a)
    }

    /// Main window geometry in screen coordinates
    fn main_window_geometry(&self) -> Rect;

    /// Show or hide the host's built-in, non-dockable sidebar
    fn set_legacy_sidebar_visible(&mut self, visible: bool);
}

/// A host with fixed, directly settable state
///
/// Used by the demo binary and tests; real shells implement [`HostContext`]
/// on their main window wrapper.
#[derive(Debug, Clone)]
pub struct StaticHost {
    pub view: Option<ViewContext>,
    pub background: Color,
    pub window: Rect,
    pub legacy_sidebar_visible: bool,
}

impl StaticHost {
    pub fn new(window: Rect) -> Self {
        Self {
            view: None,
            background: Color::rgb(0x2a, 0x2a, 0x2a),
            window,
            legacy_sidebar_visible: true,
        }
    }

    pub fn with_view(mut self, frame: ViewFrameId, data_type: impl Into<String>) -> Self {
        self.view = Some(ViewContext::new(frame, data_type));
        self
    }

    pub fn set_view(&mut self, view: Option<ViewContext>) {
        self.view = view;
    }
}

impl Default for StaticHost {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 1600.0, 1000.0))
    }
}

impl HostContext for StaticHost {
    fn current_view(&self) -> Option<ViewContext> {
        self.view.clone()
    }

    fn sidebar_background(&self) -> Color {
        self.background
    }

    fn main_window_geometry(&self) -> Rect {
        self.window
    }

    fn set_legacy_sidebar_visible(&mut self, visible: bool) {
        self.legacy_sidebar_visible = visible;
    }
}
