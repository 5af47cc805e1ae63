//! Update functions for the Elm-style architecture
//!
//! All sidebar state transformations flow through these functions.

mod button;
mod drag;
mod lifecycle;
mod panel;

use crate::commands::Cmd;
use crate::host::HostContext;
use crate::manager::ContextSidebarManager;
use crate::messages::SidebarMsg;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use button::update_button;
pub use drag::update_drag;
pub use lifecycle::update_lifecycle;
pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update<H: HostContext>(manager: &mut ContextSidebarManager<H>, msg: SidebarMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(manager, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(manager, msg)
    }
}

fn update_inner<H: HostContext>(manager: &mut ContextSidebarManager<H>, msg: SidebarMsg) -> Option<Cmd> {
    match msg {
        SidebarMsg::Lifecycle(m) => lifecycle::update_lifecycle(manager, m),
        SidebarMsg::Button(m) => button::update_button(manager, m),
        SidebarMsg::Drag(m) => drag::update_drag(manager, m),
        SidebarMsg::Panel(m) => panel::update_panel(manager, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout and logs the difference, then checks the
/// manager's invariants. Pointer-move messages are not logged.
#[cfg(debug_assertions)]
fn update_traced<H: HostContext>(manager: &mut ContextSidebarManager<H>, msg: SidebarMsg) -> Option<Cmd> {
    let is_noisy = msg.is_noisy();
    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_manager(manager);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(manager, msg);

    let after = LayoutSnapshot::from_manager(manager);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    manager.assert_invariants();
    result
}

/// Display name for a message, e.g. `Drag::Cancel`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &SidebarMsg) -> String {
    match msg {
        SidebarMsg::Lifecycle(m) => format!("Lifecycle::{:?}", m),
        SidebarMsg::Button(m) => format!("Button::{:?}", m),
        SidebarMsg::Drag(m) => format!("Drag::{:?}", m),
        SidebarMsg::Panel(m) => format!("Panel::{:?}", m),
    }
}
