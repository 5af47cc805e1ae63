//! Stand-in widgets
//!
//! [`PlaceholderWidget`] is the content of the built-in types (their real
//! views live in the host). [`InvalidContextWidget`] is shown whenever a type
//! cannot build its content for the current context.

use crate::host::ViewFrameId;

use super::SidebarWidget;

/// Generic content stand-in that remembers which frame it follows
#[derive(Debug, Clone)]
pub struct PlaceholderWidget {
    pub title: String,
    pub message: String,
    /// Frame last reported through `notify_view_changed`
    pub frame: Option<ViewFrameId>,
    /// Number of view-change notifications received
    pub notifications: usize,
}

impl PlaceholderWidget {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            frame: None,
            notifications: 0,
        }
    }
}

impl SidebarWidget for PlaceholderWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn notify_view_changed(&mut self, frame: ViewFrameId) {
        self.frame = Some(frame);
        self.notifications += 1;
    }
}

/// Shown when a widget type was requested without the data it needs
#[derive(Debug, Clone)]
pub struct InvalidContextWidget {
    title: String,
}

impl InvalidContextWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn message(&self) -> &'static str {
        "Invalid context: no view is open"
    }
}

impl SidebarWidget for InvalidContextWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn is_invalid_context(&self) -> bool {
        true
    }
}
