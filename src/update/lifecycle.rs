//! Lifecycle update handlers
//!
//! Slot construction, rebuilds and window geometry changes.

use crate::commands::Cmd;
use crate::host::HostContext;
use crate::manager::ContextSidebarManager;
use crate::messages::LifecycleMsg;

pub fn update_lifecycle<H: HostContext>(
    manager: &mut ContextSidebarManager<H>,
    msg: LifecycleMsg,
) -> Option<Cmd> {
    match msg {
        LifecycleMsg::Setup { central } => {
            if manager.setup_sidebars(central) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        LifecycleMsg::Rebuild => {
            manager.update_types();
            Some(Cmd::Redraw)
        }

        LifecycleMsg::Resize { window } => {
            manager.layout(window);
            Some(Cmd::Redraw)
        }
    }
}
