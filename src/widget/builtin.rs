//! Built-in widget types
//!
//! Descriptors for the stock analysis panels. Their contents are provided by
//! the host; here each one produces a [`PlaceholderWidget`] so the docking
//! machinery is fully usable on its own.

use crate::host::ViewContext;
use crate::sidebar::SidebarPos;

use super::{IconPair, PlaceholderWidget, SidebarWidget, WidgetType};

/// The stock panels a disassembler shell ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinWidgetKind {
    ComponentTree,
    TypeView,
    Strings,
    CrossReferences,
    MiniGraph,
    Variables,
    StackView,
    MemoryMap,
    TagList,
}

impl BuiltinWidgetKind {
    pub const ALL: [BuiltinWidgetKind; 9] = [
        BuiltinWidgetKind::ComponentTree,
        BuiltinWidgetKind::TypeView,
        BuiltinWidgetKind::Strings,
        BuiltinWidgetKind::CrossReferences,
        BuiltinWidgetKind::MiniGraph,
        BuiltinWidgetKind::Variables,
        BuiltinWidgetKind::StackView,
        BuiltinWidgetKind::MemoryMap,
        BuiltinWidgetKind::TagList,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BuiltinWidgetKind::ComponentTree => "Component Tree",
            BuiltinWidgetKind::TypeView => "Types",
            BuiltinWidgetKind::Strings => "Strings",
            BuiltinWidgetKind::CrossReferences => "Cross References",
            BuiltinWidgetKind::MiniGraph => "Mini Graph",
            BuiltinWidgetKind::Variables => "Variables",
            BuiltinWidgetKind::StackView => "Stack",
            BuiltinWidgetKind::MemoryMap => "Memory Map",
            BuiltinWidgetKind::TagList => "Tags",
        }
    }

    /// Nerd Font glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            BuiltinWidgetKind::ComponentTree => "󰙅",
            BuiltinWidgetKind::TypeView => "",
            BuiltinWidgetKind::Strings => "",
            BuiltinWidgetKind::CrossReferences => "",
            BuiltinWidgetKind::MiniGraph => "󰙀",
            BuiltinWidgetKind::Variables => "",
            BuiltinWidgetKind::StackView => "",
            BuiltinWidgetKind::MemoryMap => "",
            BuiltinWidgetKind::TagList => "",
        }
    }

    /// Slot the panel docks into on a fresh layout
    pub fn default_slot(&self) -> SidebarPos {
        match self {
            BuiltinWidgetKind::ComponentTree
            | BuiltinWidgetKind::TypeView
            | BuiltinWidgetKind::Strings => SidebarPos::TopLeft,
            BuiltinWidgetKind::CrossReferences | BuiltinWidgetKind::MiniGraph => {
                SidebarPos::BottomLeft
            }
            BuiltinWidgetKind::Variables
            | BuiltinWidgetKind::StackView
            | BuiltinWidgetKind::MemoryMap => SidebarPos::TopRight,
            BuiltinWidgetKind::TagList => SidebarPos::BottomRight,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            BuiltinWidgetKind::ComponentTree => "Components of the current binary",
            BuiltinWidgetKind::TypeView => "Types defined in the current binary",
            BuiltinWidgetKind::Strings => "Strings found in the current binary",
            BuiltinWidgetKind::CrossReferences => "References to the current selection",
            BuiltinWidgetKind::MiniGraph => "Overview of the current function graph",
            BuiltinWidgetKind::Variables => "Variables of the current function",
            BuiltinWidgetKind::StackView => "Stack layout of the current function",
            BuiltinWidgetKind::MemoryMap => "Segments and sections",
            BuiltinWidgetKind::TagList => "Tags in the current binary",
        }
    }
}

/// [`WidgetType`] implementation for a [`BuiltinWidgetKind`]
#[derive(Debug, Clone)]
pub struct BuiltinWidgetType {
    kind: BuiltinWidgetKind,
}

impl BuiltinWidgetType {
    pub fn new(kind: BuiltinWidgetKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> BuiltinWidgetKind {
        self.kind
    }
}

impl WidgetType for BuiltinWidgetType {
    fn name(&self) -> &str {
        self.kind.display_name()
    }

    fn icon(&self) -> IconPair {
        IconPair::single(self.kind.glyph())
    }

    fn create_widget(&self, view: Option<&ViewContext>) -> Option<Box<dyn SidebarWidget>> {
        // Every stock panel reads from the open binary view
        if view.is_none() {
            return None;
        }
        Some(Box::new(PlaceholderWidget::new(
            self.kind.display_name(),
            self.kind.message(),
        )))
    }
}
