//! Button update handlers
//!
//! Press, move and release on a slot button. A release without a drag is a
//! click and toggles the button's pane; enough movement turns the press into
//! a drag instead.

use crate::commands::Cmd;
use crate::host::HostContext;
use crate::manager::ContextSidebarManager;
use crate::messages::ButtonMsg;
use crate::sidebar::Activation;

pub fn update_button<H: HostContext>(manager: &mut ContextSidebarManager<H>, msg: ButtonMsg) -> Option<Cmd> {
    match msg {
        ButtonMsg::Press {
            widget_type,
            at,
            button,
        } => {
            manager.press_button(widget_type, at, button);
            None
        }

        ButtonMsg::Move {
            widget_type,
            at,
            left_down,
        } => {
            let start = manager.move_button(widget_type, at, left_down)?;
            Some(Cmd::start_drag(start.widget_type, start.mime_text, start.size))
        }

        ButtonMsg::Release { widget_type } => match manager.release_button(widget_type)? {
            Activation::Ignored => None,
            Activation::Closed | Activation::Shown { .. } => Some(Cmd::Redraw),
        },
    }
}
