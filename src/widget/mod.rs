//! Widget types and the instances they produce
//!
//! A [`WidgetType`] is an immutable descriptor: a name, an icon pair, a
//! view-sensitivity flag and a factory. The factory produces a
//! [`SidebarWidget`], the content actually shown in a content view pane.
//!
//! Types are registered once in a [`WidgetTypeRegistry`] and referred to
//! everywhere else by their stable [`WidgetTypeId`]. Two types may share a
//! display name without being confused for each other.

mod builtin;
mod placeholder;

pub use builtin::{BuiltinWidgetKind, BuiltinWidgetType};
pub use placeholder::{InvalidContextWidget, PlaceholderWidget};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::host::{ViewContext, ViewFrameId};

/// Stable identity of a registered widget type (its registry index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetTypeId(pub usize);

/// Icon glyphs for the toggle button: shown when checked / unchecked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconPair {
    pub active: String,
    pub inactive: String,
}

impl IconPair {
    pub fn new(active: impl Into<String>, inactive: impl Into<String>) -> Self {
        Self {
            active: active.into(),
            inactive: inactive.into(),
        }
    }

    /// Same glyph for both states
    pub fn single(glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        Self {
            active: glyph.clone(),
            inactive: glyph,
        }
    }
}

/// Content hosted in a content view pane or floating window
pub trait SidebarWidget: fmt::Debug {
    /// Header title
    fn title(&self) -> &str;

    /// The view frame the widget follows has changed (or was first set)
    fn notify_view_changed(&mut self, _frame: ViewFrameId) {}

    /// True for the stand-in shown when the widget's data is missing
    fn is_invalid_context(&self) -> bool {
        false
    }
}

/// Descriptor and factory for one kind of sidebar content
pub trait WidgetType: fmt::Debug {
    fn name(&self) -> &str;

    fn icon(&self) -> IconPair;

    /// Whether the content depends on the current view frame and data type
    fn view_sensitive(&self) -> bool {
        true
    }

    /// Build an instance. `view` is `None` for view-insensitive types.
    /// Returning `None` means the required data is absent.
    fn create_widget(&self, view: Option<&ViewContext>) -> Option<Box<dyn SidebarWidget>>;

    fn create_invalid_context_widget(&self) -> Box<dyn SidebarWidget> {
        Box::new(InvalidContextWidget::new(self.name()))
    }
}

/// Build an instance of `widget_type` for the given view, never failing:
/// a view-sensitive type without a view, or a factory that yields nothing,
/// produces the invalid-context placeholder.
pub fn instantiate(widget_type: &dyn WidgetType, view: Option<&ViewContext>) -> Box<dyn SidebarWidget> {
    let created = if widget_type.view_sensitive() {
        match view {
            Some(view) => widget_type.create_widget(Some(view)),
            None => None,
        }
    } else {
        widget_type.create_widget(None)
    };

    created.unwrap_or_else(|| {
        tracing::debug!(
            widget_type = widget_type.name(),
            "factory produced nothing, using invalid-context widget"
        );
        widget_type.create_invalid_context_widget()
    })
}

/// Owning registry of widget types
#[derive(Debug, Default)]
pub struct WidgetTypeRegistry {
    types: Vec<Box<dyn WidgetType>>,
}

impl WidgetTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in widget type, in [`BuiltinWidgetKind::ALL`] order
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in BuiltinWidgetKind::ALL {
            registry.register(Box::new(BuiltinWidgetType::new(kind)));
        }
        registry
    }

    pub fn register(&mut self, widget_type: Box<dyn WidgetType>) -> WidgetTypeId {
        let id = WidgetTypeId(self.types.len());
        tracing::debug!(?id, name = widget_type.name(), "registered widget type");
        self.types.push(widget_type);
        id
    }

    pub fn get(&self, id: WidgetTypeId) -> Option<&dyn WidgetType> {
        self.types.get(id.0).map(|t| t.as_ref())
    }

    pub fn contains(&self, id: WidgetTypeId) -> bool {
        id.0 < self.types.len()
    }

    /// Display name, or an empty string for an unknown id
    pub fn name(&self, id: WidgetTypeId) -> &str {
        self.get(id).map(|t| t.name()).unwrap_or("")
    }

    /// First type registered under `name`
    pub fn find_by_name(&self, name: &str) -> Option<WidgetTypeId> {
        self.types
            .iter()
            .position(|t| t.name() == name)
            .map(WidgetTypeId)
    }

    pub fn ids(&self) -> impl Iterator<Item = WidgetTypeId> + '_ {
        (0..self.types.len()).map(WidgetTypeId)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
