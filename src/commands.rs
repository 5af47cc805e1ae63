//! Command types for the Elm-style architecture
//!
//! Commands are the side effects the host performs after an update: a
//! repaint, starting a platform drag, or showing a floating window.

use serde::Serialize;

use crate::geometry::{Rect, Size};
use crate::sidebar::{FloatingId, DRAG_MIME_FORMAT};
use crate::widget::WidgetTypeId;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint slots and content views
    Redraw,
    /// Begin a platform drag for a button that just left its slot
    StartDrag {
        widget_type: WidgetTypeId,
        mime_format: &'static str,
        mime_text: String,
        pixmap_size: Size,
    },
    /// Show a newly detached floating window
    ShowFloating {
        id: FloatingId,
        title: String,
        geometry: Rect,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn start_drag(widget_type: WidgetTypeId, mime_text: impl Into<String>, pixmap_size: Size) -> Self {
        Cmd::StartDrag {
            widget_type,
            mime_format: DRAG_MIME_FORMAT,
            mime_text: mime_text.into(),
            pixmap_size,
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // The slot lost a button
            Cmd::StartDrag { .. } => true,
            // The floating window paints itself
            Cmd::ShowFloating { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a single list, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        let floating = Cmd::ShowFloating {
            id: FloatingId(0),
            title: "Strings".to_string(),
            geometry: Rect::default(),
        };
        assert!(!floating.needs_redraw());
        assert!(Cmd::batch(vec![floating, Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_flatten() {
        let cmd = Cmd::batch(vec![
            Cmd::None,
            Cmd::batch(vec![Cmd::Redraw]),
            Cmd::start_drag(WidgetTypeId(2), "Strings", Size::new(24.0, 80.0)),
        ]);
        let flat = cmd.flatten();
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0], Cmd::Redraw);
        assert!(matches!(
            &flat[1],
            Cmd::StartDrag { mime_format: "text/plain", .. }
        ));
    }
}
