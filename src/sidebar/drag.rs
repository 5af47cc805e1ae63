//! In-flight drag state

use crate::widget::WidgetTypeId;

use super::button::SidebarButton;
use super::SidebarPos;

/// MIME format of the drag data handed to the host toolkit
pub const DRAG_MIME_FORMAT: &str = "text/plain";

/// Whether a drag carrying `format` can be dropped on a slot or the splitter
pub fn accepts_mime(format: &str) -> bool {
    format == DRAG_MIME_FORMAT
}

/// A button on its way from one slot to another
///
/// The origin slot hands the button over when the drag starts; the payload
/// is consumed by exactly one of drop-on-slot, drop-on-splitter or cancel.
#[derive(Debug, Clone)]
pub struct DragPayload {
    pub button: SidebarButton,
    pub origin: SidebarPos,
    /// Slot nearest to the press point; reattachment target on cancel
    pub nearest: Option<SidebarPos>,
}

impl DragPayload {
    pub fn new(button: SidebarButton, origin: SidebarPos) -> Self {
        let nearest = button.gesture().nearest();
        Self {
            button,
            origin,
            nearest,
        }
    }

    pub fn widget_type(&self) -> WidgetTypeId {
        self.button.widget_type()
    }

    /// Whether the widget was on display when the drag began
    pub fn was_checked(&self) -> bool {
        self.button.is_checked()
    }

    /// Text carried as the drag's MIME data. Display only: drops resolve
    /// through [`DragPayload::widget_type`].
    pub fn mime_text(&self) -> &str {
        self.button.label()
    }
}
