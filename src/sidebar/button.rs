//! Sidebar toggle buttons
//!
//! A button shows one widget type. It renders its label rotated to match the
//! slot's side and runs a small gesture state machine that decides between a
//! click (toggle the widget) and a drag (move the button to another slot).
//!
//! No painting happens here: the host reads [`SidebarButton::size_hint`],
//! [`Orientation::paint_transform`] and [`SidebarButton::style`] and paints
//! with its own primitives.

use serde::{Deserialize, Serialize};

use crate::config::ButtonMetrics;
use crate::geometry::{Point, Size};
use crate::sidebar::SidebarPos;
use crate::theme::{Color, SidebarTheme};
use crate::widget::{IconPair, WidgetTypeId};

/// Text direction of a button label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Horizontal,
    /// Rotated +90°, reads downwards (right-hand slots)
    VerticalTopToBottom,
    /// Rotated -90°, reads upwards (left-hand slots)
    VerticalBottomToTop,
}

/// Rotation and translation to apply before painting an unrotated button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintTransform {
    pub rotation_degrees: f32,
    pub translate: Point,
}

impl Orientation {
    pub fn is_vertical(&self) -> bool {
        !matches!(self, Orientation::Horizontal)
    }

    /// Transform for a button occupying `size` on screen (already transposed)
    pub fn paint_transform(&self, size: Size) -> PaintTransform {
        match self {
            Orientation::Horizontal => PaintTransform {
                rotation_degrees: 0.0,
                translate: Point::new(0.0, 0.0),
            },
            Orientation::VerticalTopToBottom => PaintTransform {
                rotation_degrees: 90.0,
                translate: Point::new(0.0, -size.width),
            },
            Orientation::VerticalBottomToTop => PaintTransform {
                rotation_degrees: -90.0,
                translate: Point::new(-size.height, 0.0),
            },
        }
    }
}

/// Pointer buttons the gesture machine distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Visual style, resolved against the sidebar theme by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ButtonStyle {
    #[default]
    Normal,
    Highlighted,
}

impl ButtonStyle {
    pub fn background(&self, theme: &SidebarTheme) -> Color {
        match self {
            ButtonStyle::Normal => theme.background,
            ButtonStyle::Highlighted => theme.highlight,
        }
    }
}

/// What a pointer move did to the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing pressed, or the drag already left this button
    Idle,
    /// Still inside the debounce distance
    Debouncing,
    /// Threshold crossed: the caller must start the drag now
    DragStarted,
}

/// What a pointer release did to the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// A plain click: toggle the widget type
    Toggle,
    /// No left press pending, or the press became a drag
    Ignored,
}

/// Press/move/release bookkeeping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragGesture {
    pressed_at: Option<Point>,
    last_pos: Point,
    travelled: f32,
    maybe_drag: bool,
    being_dragged: bool,
    nearest: Option<SidebarPos>,
}

impl DragGesture {
    pub fn press(&mut self, pos: Point, button: MouseButton, nearest: Option<SidebarPos>) {
        if button != MouseButton::Left {
            return;
        }
        self.pressed_at = Some(pos);
        self.last_pos = pos;
        self.travelled = 0.0;
        self.maybe_drag = true;
        self.nearest = nearest;
    }

    pub fn move_to(&mut self, pos: Point, left_down: bool, threshold: f32) -> MoveOutcome {
        if !left_down || self.being_dragged || self.pressed_at.is_none() {
            return MoveOutcome::Idle;
        }
        self.travelled += self.last_pos.distance_to(pos);
        self.last_pos = pos;
        if self.travelled < threshold {
            return MoveOutcome::Debouncing;
        }
        if self.maybe_drag {
            self.maybe_drag = false;
            self.being_dragged = true;
            return MoveOutcome::DragStarted;
        }
        MoveOutcome::Idle
    }

    pub fn release(&mut self) -> ReleaseOutcome {
        let was_pressed = self.pressed_at.take().is_some();
        self.travelled = 0.0;
        self.maybe_drag = false;
        if was_pressed && !self.being_dragged {
            ReleaseOutcome::Toggle
        } else {
            ReleaseOutcome::Ignored
        }
    }

    pub fn being_dragged(&self) -> bool {
        self.being_dragged
    }

    /// Slot nearest to the press point, the fallback drop target
    pub fn nearest(&self) -> Option<SidebarPos> {
        self.nearest
    }
}

/// A checkable button standing for one widget type in a slot
#[derive(Debug, Clone)]
pub struct SidebarButton {
    widget_type: WidgetTypeId,
    label: String,
    icons: IconPair,
    orientation: Orientation,
    checked: bool,
    style: ButtonStyle,
    visible: bool,
    horizontal_size: Size,
    gesture: DragGesture,
}

impl SidebarButton {
    pub fn new(
        widget_type: WidgetTypeId,
        label: impl Into<String>,
        icons: IconPair,
        orientation: Orientation,
        metrics: &ButtonMetrics,
    ) -> Self {
        let label = label.into();
        let horizontal_size = Self::measure(&label, metrics);
        Self {
            widget_type,
            label,
            icons,
            orientation,
            checked: false,
            style: ButtonStyle::Normal,
            visible: true,
            horizontal_size,
            gesture: DragGesture::default(),
        }
    }

    /// Unrotated size: icon, gap, label, padding on both axes
    fn measure(label: &str, metrics: &ButtonMetrics) -> Size {
        let text_w = label.chars().count() as f32 * metrics.char_width;
        let width = metrics.icon_size + metrics.padding_h + text_w + metrics.padding_h * 2.0;
        let height = metrics.line_height.max(metrics.icon_size) + metrics.padding_v * 2.0;
        Size::new(width.round(), height.round())
    }

    pub fn widget_type(&self) -> WidgetTypeId {
        self.widget_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Active glyph while checked, inactive otherwise
    pub fn icon(&self) -> &str {
        if self.checked {
            &self.icons.active
        } else {
            &self.icons.inactive
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// On-screen size; width and height swap for vertical labels
    pub fn size_hint(&self) -> Size {
        if self.orientation.is_vertical() {
            self.horizontal_size.transposed()
        } else {
            self.horizontal_size
        }
    }

    pub fn height(&self) -> f32 {
        self.size_hint().height
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Checked buttons are painted highlighted, unchecked ones normal
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        self.style = if checked {
            ButtonStyle::Highlighted
        } else {
            ButtonStyle::Normal
        };
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    pub fn press(&mut self, pos: Point, button: MouseButton, nearest: Option<SidebarPos>) {
        self.gesture.press(pos, button, nearest);
    }

    pub fn move_to(&mut self, pos: Point, left_down: bool, threshold: f32) -> MoveOutcome {
        self.gesture.move_to(pos, left_down, threshold)
    }

    pub fn release(&mut self) -> ReleaseOutcome {
        self.gesture.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(orientation: Orientation) -> SidebarButton {
        SidebarButton::new(
            WidgetTypeId(0),
            "Strings",
            IconPair::new("S*", "S"),
            orientation,
            &ButtonMetrics::default(),
        )
    }

    #[test]
    fn test_size_hint_transposes_when_vertical() {
        let h = button(Orientation::Horizontal).size_hint();
        let v = button(Orientation::VerticalBottomToTop).size_hint();
        assert_eq!(v, h.transposed());
        assert!(v.height > v.width);
    }

    #[test]
    fn test_paint_transform() {
        let size = Size::new(24.0, 90.0);
        let down = Orientation::VerticalTopToBottom.paint_transform(size);
        assert_eq!(down.rotation_degrees, 90.0);
        assert_eq!(down.translate, Point::new(0.0, -24.0));

        let up = Orientation::VerticalBottomToTop.paint_transform(size);
        assert_eq!(up.rotation_degrees, -90.0);
        assert_eq!(up.translate, Point::new(-90.0, 0.0));
    }

    #[test]
    fn test_click_without_movement_toggles() {
        let mut b = button(Orientation::VerticalBottomToTop);
        b.press(Point::new(10.0, 10.0), MouseButton::Left, None);
        assert_eq!(b.release(), ReleaseOutcome::Toggle);
        // Release without a press does nothing
        assert_eq!(b.release(), ReleaseOutcome::Ignored);
    }

    #[test]
    fn test_small_jitter_is_debounced() {
        let mut b = button(Orientation::VerticalBottomToTop);
        b.press(Point::new(10.0, 10.0), MouseButton::Left, None);
        assert_eq!(
            b.move_to(Point::new(12.0, 10.0), true, 6.0),
            MoveOutcome::Debouncing
        );
        assert_eq!(
            b.move_to(Point::new(14.0, 10.0), true, 6.0),
            MoveOutcome::Debouncing
        );
        assert_eq!(b.release(), ReleaseOutcome::Toggle);
    }

    #[test]
    fn test_drag_starts_once_past_threshold() {
        let mut b = button(Orientation::VerticalBottomToTop);
        b.press(Point::new(10.0, 10.0), MouseButton::Left, Some(SidebarPos::TopLeft));
        assert_eq!(
            b.move_to(Point::new(10.0, 13.0), true, 6.0),
            MoveOutcome::Debouncing
        );
        assert_eq!(
            b.move_to(Point::new(10.0, 16.0), true, 6.0),
            MoveOutcome::DragStarted
        );
        assert!(b.gesture().being_dragged());
        assert_eq!(b.gesture().nearest(), Some(SidebarPos::TopLeft));
        assert_eq!(b.move_to(Point::new(10.0, 40.0), true, 6.0), MoveOutcome::Idle);
        assert_eq!(b.release(), ReleaseOutcome::Ignored);
    }

    #[test]
    fn test_right_button_never_drags() {
        let mut b = button(Orientation::VerticalTopToBottom);
        b.press(Point::new(0.0, 0.0), MouseButton::Right, None);
        assert_eq!(b.move_to(Point::new(0.0, 50.0), true, 6.0), MoveOutcome::Idle);
        assert_eq!(b.release(), ReleaseOutcome::Ignored);
    }

    #[test]
    fn test_release_resets_debounce() {
        let mut b = button(Orientation::VerticalTopToBottom);
        b.press(Point::new(0.0, 0.0), MouseButton::Left, None);
        b.move_to(Point::new(0.0, 5.0), true, 6.0);
        b.release();

        b.press(Point::new(0.0, 5.0), MouseButton::Left, None);
        assert_eq!(
            b.move_to(Point::new(0.0, 10.0), true, 6.0),
            MoveOutcome::Debouncing
        );
    }

    #[test]
    fn test_checked_sets_style() {
        let mut b = button(Orientation::Horizontal);
        b.set_checked(true);
        assert_eq!(b.style(), ButtonStyle::Highlighted);
        assert_eq!(b.icon(), "S*");
        b.set_checked(false);
        assert_eq!(b.style(), ButtonStyle::Normal);
        assert_eq!(b.icon(), "S");
    }
}
