//! A single docking slot
//!
//! A slot keeps an ordered list of the widget types docked in it and one
//! button per type, stacked vertically from the slot's screen origin. The
//! button list is always rebuilt from the type list, so the two stay
//! index-aligned; the only exception is the button of an in-flight drag,
//! which has already been handed to the drag payload.

use crate::config::ButtonMetrics;
use crate::geometry::{Point, Rect, Size};
use crate::widget::{WidgetTypeId, WidgetTypeRegistry};

use super::button::SidebarButton;
use super::{SidebarPos, Side};

/// Gap shown where a dragged button would land
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placeholder {
    pub index: usize,
    pub size: Size,
}

/// One laid-out entry of a slot, top to bottom
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotItem {
    Button { widget_type: WidgetTypeId, rect: Rect },
    Placeholder { rect: Rect },
}

#[derive(Debug, Clone)]
pub struct SidebarSlot {
    pos: SidebarPos,
    generation: u64,
    origin: Point,
    metrics: ButtonMetrics,
    contained: Vec<WidgetTypeId>,
    buttons: Vec<SidebarButton>,
    placeholder: Option<Placeholder>,
}

impl SidebarSlot {
    pub fn new(pos: SidebarPos, metrics: ButtonMetrics, generation: u64) -> Self {
        Self {
            pos,
            generation,
            origin: Point::default(),
            metrics,
            contained: Vec::new(),
            buttons: Vec::new(),
            placeholder: None,
        }
    }

    /// A fresh slot at the same position and origin with the same types,
    /// its buttons built from scratch. `in_flight` keeps its type docked but
    /// gets no button, since the drag payload already holds it.
    pub fn rebuilt(
        &self,
        generation: u64,
        registry: &WidgetTypeRegistry,
        in_flight: Option<WidgetTypeId>,
    ) -> Self {
        let mut replacement = Self::new(self.pos, self.metrics, generation);
        replacement.origin = self.origin;
        for &widget_type in &self.contained {
            replacement.add_type(widget_type, None);
        }
        replacement.update_for_types(registry);
        if let Some(dragged) = in_flight {
            replacement.buttons.retain(|b| b.widget_type() != dragged);
        }
        replacement
    }

    pub fn pos(&self) -> SidebarPos {
        self.pos
    }

    /// Side of the content view this slot feeds
    pub fn side(&self) -> Side {
        self.pos.side()
    }

    pub fn is_top(&self) -> bool {
        self.pos.is_top()
    }

    /// Incremented each time the manager swaps in a rebuilt slot
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn contained_types(&self) -> &[WidgetTypeId] {
        &self.contained
    }

    pub fn contains(&self, widget_type: WidgetTypeId) -> bool {
        self.contained.contains(&widget_type)
    }

    pub fn buttons(&self) -> &[SidebarButton] {
        &self.buttons
    }

    pub fn button(&self, widget_type: WidgetTypeId) -> Option<&SidebarButton> {
        self.buttons.iter().find(|b| b.widget_type() == widget_type)
    }

    pub fn button_mut(&mut self, widget_type: WidgetTypeId) -> Option<&mut SidebarButton> {
        self.buttons.iter_mut().find(|b| b.widget_type() == widget_type)
    }

    /// Insert `widget_type` at `index` (clamped; `None` appends). A type
    /// already present is moved rather than duplicated. Returns the index it
    /// ended up at.
    pub fn add_type(&mut self, widget_type: WidgetTypeId, index: Option<usize>) -> usize {
        self.contained.retain(|&t| t != widget_type);
        let index = index
            .unwrap_or(self.contained.len())
            .min(self.contained.len());
        self.contained.insert(index, widget_type);
        index
    }

    /// Returns false when the type was not docked here
    pub fn remove_type(&mut self, widget_type: WidgetTypeId) -> bool {
        let before = self.contained.len();
        self.contained.retain(|&t| t != widget_type);
        self.contained.len() != before
    }

    /// Throw away every button and build one per contained type, in order
    pub fn update_for_types(&mut self, registry: &WidgetTypeRegistry) {
        self.placeholder = None;
        self.buttons = self
            .contained
            .iter()
            .filter_map(|&id| {
                let descriptor = registry.get(id)?;
                Some(SidebarButton::new(
                    id,
                    descriptor.name(),
                    descriptor.icon(),
                    self.pos.orientation(),
                    &self.metrics,
                ))
            })
            .collect();
    }

    /// Detach the button for `widget_type` from the layout as its drag
    /// begins. The type stays in the contained list until the drop resolves.
    pub fn button_moving_out(&mut self, widget_type: WidgetTypeId) -> Option<SidebarButton> {
        let index = self
            .buttons
            .iter()
            .position(|b| b.widget_type() == widget_type)?;
        let mut button = self.buttons.remove(index);
        button.hide();
        Some(button)
    }

    /// Insertion index for a drop at `point`, from cumulative button heights
    /// starting at the slot origin. Anything above the first button's bottom
    /// edge maps to 0, anything past the last button to the button count.
    pub fn idx_for_global_pos(&self, point: Point) -> usize {
        let mut start = self.origin.y;
        for (idx, button) in self.buttons.iter().enumerate() {
            let end = start + button.height();
            if idx == 0 && point.y < end {
                return 0;
            }
            if start <= point.y && point.y <= end {
                return idx;
            }
            start = end;
        }
        self.buttons.len()
    }

    /// Show (or move) the drop gap for a dragged button of `size`
    pub fn show_drop_placeholder(&mut self, size: Size, index: usize) {
        let index = index.min(self.buttons.len());
        self.placeholder = Some(Placeholder { index, size });
    }

    pub fn remove_placeholder(&mut self) {
        self.placeholder = None;
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    /// Check exactly the buttons whose type is shown in the content view
    pub fn highlight_active_buttons(&mut self, top: Option<WidgetTypeId>, bottom: Option<WidgetTypeId>) {
        for button in &mut self.buttons {
            let id = Some(button.widget_type());
            button.set_checked(id == top || id == bottom);
        }
    }

    /// Buttons and placeholder stacked from the origin
    pub fn layout(&self) -> Vec<SlotItem> {
        let mut items = Vec::with_capacity(self.buttons.len() + 1);
        let mut y = self.origin.y;
        let x = self.origin.x;
        for (idx, button) in self.buttons.iter().enumerate() {
            if let Some(placeholder) = self.placeholder.filter(|p| p.index == idx) {
                items.push(SlotItem::Placeholder {
                    rect: Rect::from_origin_size(Point::new(x, y), placeholder.size),
                });
                y += placeholder.size.height;
            }
            let size = button.size_hint();
            items.push(SlotItem::Button {
                widget_type: button.widget_type(),
                rect: Rect::from_origin_size(Point::new(x, y), size),
            });
            y += size.height;
        }
        if let Some(placeholder) = self.placeholder.filter(|p| p.index >= self.buttons.len()) {
            items.push(SlotItem::Placeholder {
                rect: Rect::from_origin_size(Point::new(x, y), placeholder.size),
            });
        }
        items
    }

    /// Total height of buttons plus any placeholder
    pub fn content_height(&self) -> f32 {
        let buttons: f32 = self.buttons.iter().map(|b| b.height()).sum();
        buttons + self.placeholder.map(|p| p.size.height).unwrap_or(0.0)
    }

    /// Widest button, or the unrotated button height for an empty slot
    pub fn content_width(&self) -> f32 {
        self.buttons
            .iter()
            .map(|b| b.size_hint().width)
            .fold(0.0, f32::max)
            .max(self.metrics.line_height.max(self.metrics.icon_size) + self.metrics.padding_v * 2.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.content_width(),
            self.content_height(),
        )
    }
}
