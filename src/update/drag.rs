//! Drag update handlers
//!
//! Drag-over feedback and drops. Malformed drops are logged by the manager
//! and produce no command.

use crate::commands::Cmd;
use crate::host::HostContext;
use crate::manager::ContextSidebarManager;
use crate::messages::DragMsg;

pub fn update_drag<H: HostContext>(manager: &mut ContextSidebarManager<H>, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Enter { slot, format } => {
            if !manager.drag_enter(slot, &format) {
                tracing::debug!(?slot, %format, "drag enter rejected");
            }
            None
        }

        DragMsg::Move { slot, at, format } => {
            if manager.drag_move(slot, at, &format) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        DragMsg::Leave { slot } => {
            manager.drag_leave(slot);
            Some(Cmd::Redraw)
        }

        DragMsg::DropOnSlot { slot, at, format } => {
            if manager.drop_on_slot(slot, at, &format) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        DragMsg::DropOnSplitter { at, format } => {
            let id = manager.drop_on_splitter(at, &format)?;
            let window = manager.floating_windows().iter().find(|w| w.id == id)?;
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::ShowFloating {
                    id,
                    title: window.instance.title().to_string(),
                    geometry: window.geometry,
                },
            ]))
        }

        DragMsg::Cancel => {
            if manager.cancel_drag() {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
