//! Docking positions

use serde::{Deserialize, Serialize};

use super::button::Orientation;

/// One of the four fixed docking slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SidebarPos {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

impl SidebarPos {
    /// All positions, in slot-array order
    pub const ALL: [SidebarPos; 4] = [
        SidebarPos::TopLeft,
        SidebarPos::BottomLeft,
        SidebarPos::TopRight,
        SidebarPos::BottomRight,
    ];

    pub fn index(&self) -> usize {
        match self {
            SidebarPos::TopLeft => 0,
            SidebarPos::BottomLeft => 1,
            SidebarPos::TopRight => 2,
            SidebarPos::BottomRight => 3,
        }
    }

    /// Top slots feed the top pane of their content view
    pub fn is_top(&self) -> bool {
        matches!(self, SidebarPos::TopLeft | SidebarPos::TopRight)
    }

    pub fn side(&self) -> Side {
        match self {
            SidebarPos::TopLeft | SidebarPos::BottomLeft => Side::Left,
            SidebarPos::TopRight | SidebarPos::BottomRight => Side::Right,
        }
    }

    /// Left slots read bottom-to-top, right slots top-to-bottom
    pub fn orientation(&self) -> Orientation {
        match self.side() {
            Side::Left => Orientation::VerticalBottomToTop,
            Side::Right => Orientation::VerticalTopToBottom,
        }
    }
}

/// Which side of the central editor a slot or content view sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// The (top, bottom) slots feeding this side's content view
    pub fn slots(&self) -> [SidebarPos; 2] {
        match self {
            Side::Left => [SidebarPos::TopLeft, SidebarPos::BottomLeft],
            Side::Right => [SidebarPos::TopRight, SidebarPos::BottomRight],
        }
    }
}
