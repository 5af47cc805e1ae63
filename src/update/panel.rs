//! Panel update handlers
//!
//! Programmatic activation, view frame teardown and floating windows.

use crate::commands::Cmd;
use crate::host::HostContext;
use crate::manager::ContextSidebarManager;
use crate::messages::PanelMsg;
use crate::sidebar::Activation;

pub fn update_panel<H: HostContext>(manager: &mut ContextSidebarManager<H>, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Activate {
            side,
            widget_type,
            top,
            reset,
        } => match manager.activate_widget_type(side, widget_type, top, reset) {
            Activation::Ignored => None,
            _ => Some(Cmd::Redraw),
        },

        PanelMsg::Deactivate { widget_type } => {
            if manager.deactivate_widget_type(widget_type) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        PanelMsg::ViewFrameClosed { frame } => {
            if manager.view_frame_closed(frame) > 0 {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        PanelMsg::CloseFloating { id } => {
            manager.close_floating(id);
            None
        }
    }
}
