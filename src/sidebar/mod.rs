//! Dockable sidebar building blocks
//!
//! Four slots (top-left, bottom-left, top-right, bottom-right) hold toggle
//! buttons for widget types. Each side has a content view with a top and a
//! bottom pane: top slots feed the top pane, bottom slots the bottom pane.
//!
//! ## Architecture
//!
//! - `SidebarPos` / `Side`: where a slot or content view sits
//! - `SidebarButton`: rotated toggle with a click-or-drag gesture machine
//! - `SidebarSlot`: ordered widget types, their buttons, drop placeholder
//! - `ContentView`: the two panes and their width constraints
//! - `DragPayload`: the button in flight between press and drop
//! - `CentralSplitter` / `FloatingWindow`: drops outside every slot
//! - `DeferredRelease`: keeps replaced slots alive until a rebuild finishes
//!
//! The `ContextSidebarManager` in `crate::manager` wires these together.

mod button;
mod content_view;
mod deferred;
mod drag;
mod position;
mod slot;
mod splitter;

pub use button::{
    ButtonStyle, DragGesture, MouseButton, MoveOutcome, Orientation, PaintTransform,
    ReleaseOutcome, SidebarButton,
};
pub use content_view::{
    Activation, ActivationEnv, ContentView, Pane, PanePosition, WidthConstraints,
};
pub use deferred::DeferredRelease;
pub use drag::{accepts_mime, DragPayload, DRAG_MIME_FORMAT};
pub use position::{Side, SidebarPos};
pub use slot::{Placeholder, SidebarSlot, SlotItem};
pub use splitter::{CentralSplitter, FloatingId, FloatingWindow, SplitterChild};
