//! Central splitter and floating windows
//!
//! The splitter lays out [left content view | host central widget | right
//! content view] and accepts drops that land outside every slot. Such a drop
//! detaches the widget into a [`FloatingWindow`].

use serde::{Deserialize, Serialize};

use crate::cache::WidgetInstance;
use crate::geometry::Rect;
use crate::host::CentralWidgetId;
use crate::widget::WidgetTypeId;

use super::drag::accepts_mime;

/// A child of the central splitter, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SplitterChild {
    LeftContent,
    Central(CentralWidgetId),
    RightContent,
}

/// Horizontal splitter hosting the editor between the two content views
#[derive(Debug, Clone)]
pub struct CentralSplitter {
    central: CentralWidgetId,
}

impl CentralSplitter {
    /// The central widget is handed over by its owner; the splitter never
    /// searches the host's widget tree for it
    pub fn new(central: CentralWidgetId) -> Self {
        Self { central }
    }

    pub fn children(&self) -> [SplitterChild; 3] {
        [
            SplitterChild::LeftContent,
            SplitterChild::Central(self.central),
            SplitterChild::RightContent,
        ]
    }

    pub fn central(&self) -> CentralWidgetId {
        self.central
    }

    pub fn accepts_drag(&self, format: &str) -> bool {
        accepts_mime(format)
    }
}

/// Identity of a floating window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FloatingId(pub u64);

/// A widget detached from the sidebars into its own top-level window
///
/// Owns its instance outright: the instance has left the cache, so closing
/// the window destroys it.
#[derive(Debug)]
pub struct FloatingWindow {
    pub id: FloatingId,
    pub widget_type: WidgetTypeId,
    pub instance: WidgetInstance,
    pub geometry: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_order() {
        let splitter = CentralSplitter::new(CentralWidgetId(9));
        assert_eq!(
            splitter.children(),
            [
                SplitterChild::LeftContent,
                SplitterChild::Central(CentralWidgetId(9)),
                SplitterChild::RightContent,
            ]
        );
        assert_eq!(splitter.central(), CentralWidgetId(9));
        assert!(splitter.accepts_drag("text/plain"));
        assert!(!splitter.accepts_drag("application/octet-stream"));
    }
}
