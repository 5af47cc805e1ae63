//! Context sidebar manager
//!
//! Owns the four docking slots, both content views, the instance cache and
//! the in-flight drag. Every cross-slot operation goes through here: button
//! gestures, drag-over feedback, drops onto slots or the central splitter,
//! and the rebuild that follows any membership change.

use std::collections::HashSet;

use crate::cache::{CacheKey, InstanceCache};
use crate::config::SidebarConfig;
use crate::geometry::{Point, Rect, Size};
use crate::host::{CentralWidgetId, HostContext, ViewFrameId};
use crate::sidebar::{
    accepts_mime, Activation, ActivationEnv, CentralSplitter, ContentView, DeferredRelease,
    DragPayload, FloatingId, FloatingWindow, MouseButton, MoveOutcome, ReleaseOutcome, Side,
    SidebarPos, SidebarSlot,
};
use crate::theme::SidebarTheme;
use crate::widget::{WidgetTypeId, WidgetTypeRegistry};

/// What the host needs to begin a platform drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragStart {
    pub widget_type: WidgetTypeId,
    /// Display name, carried as `text/plain`
    pub mime_text: String,
    /// Size of the dragged button, for the drag pixmap
    pub size: Size,
}

pub struct ContextSidebarManager<H: HostContext> {
    host: H,
    config: SidebarConfig,
    registry: WidgetTypeRegistry,
    theme: SidebarTheme,
    /// Indexed by [`SidebarPos::index`]; empty until `setup_sidebars`
    slots: [Option<SidebarSlot>; 4],
    left: ContentView,
    right: ContentView,
    cache: InstanceCache,
    drag: Option<DragPayload>,
    splitter: Option<CentralSplitter>,
    floating: Vec<FloatingWindow>,
    window: Rect,
    next_generation: u64,
    next_floating_id: u64,
}

impl<H: HostContext> ContextSidebarManager<H> {
    pub fn new(host: H, config: SidebarConfig, registry: WidgetTypeRegistry) -> Self {
        let theme = SidebarTheme::from_background(host.sidebar_background());
        let window = host.main_window_geometry();
        let left = ContentView::new(Side::Left, config.content_min_width, config.content_size_hint);
        let right = ContentView::new(Side::Right, config.content_min_width, config.content_size_hint);
        Self {
            host,
            config,
            registry,
            theme,
            slots: [None, None, None, None],
            left,
            right,
            cache: InstanceCache::new(),
            drag: None,
            splitter: None,
            floating: Vec::new(),
            window,
            next_generation: 0,
            next_floating_id: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub fn registry(&self) -> &WidgetTypeRegistry {
        &self.registry
    }

    pub fn theme(&self) -> &SidebarTheme {
        &self.theme
    }

    pub fn cache(&self) -> &InstanceCache {
        &self.cache
    }

    pub fn is_setup(&self) -> bool {
        self.splitter.is_some()
    }

    pub fn slot(&self, pos: SidebarPos) -> Option<&SidebarSlot> {
        self.slots[pos.index()].as_ref()
    }

    pub fn slots(&self) -> impl Iterator<Item = &SidebarSlot> {
        self.slots.iter().flatten()
    }

    pub fn content_view(&self, side: Side) -> &ContentView {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn drag(&self) -> Option<&DragPayload> {
        self.drag.as_ref()
    }

    pub fn splitter(&self) -> Option<&CentralSplitter> {
        self.splitter.as_ref()
    }

    pub fn floating_windows(&self) -> &[FloatingWindow] {
        &self.floating
    }

    pub fn window(&self) -> Rect {
        self.window
    }

    /// Slot whose contained types include `widget_type`
    pub fn slot_containing(&self, widget_type: WidgetTypeId) -> Option<SidebarPos> {
        self.slots()
            .find(|slot| slot.contains(widget_type))
            .map(|slot| slot.pos())
    }

    fn slot_with_button(&self, widget_type: WidgetTypeId) -> Option<SidebarPos> {
        self.slots()
            .find(|slot| slot.button(widget_type).is_some())
            .map(|slot| slot.pos())
    }

    fn take_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }

    // ========================================================================
    // Setup and rebuild
    // ========================================================================

    /// Build the slots and the central splitter, seed the default types and
    /// hide the host's legacy sidebar. Returns false if already set up.
    pub fn setup_sidebars(&mut self, central: CentralWidgetId) -> bool {
        if self.is_setup() {
            tracing::warn!("setup_sidebars called twice, ignoring");
            return false;
        }

        self.splitter = Some(CentralSplitter::new(central));

        let mut seeded = HashSet::new();
        for pos in SidebarPos::ALL {
            let generation = self.take_generation();
            let mut slot = SidebarSlot::new(pos, self.config.button, generation);
            for name in self.config.default_slots.for_pos(pos) {
                match self.registry.find_by_name(name) {
                    None => {
                        tracing::warn!(%name, ?pos, "unknown widget type in default slots, skipping");
                    }
                    Some(id) if !seeded.insert(id) => {
                        tracing::warn!(%name, ?pos, "widget type already seeded in another slot, skipping");
                    }
                    Some(id) => {
                        slot.add_type(id, None);
                    }
                }
            }
            self.slots[pos.index()] = Some(slot);
        }

        self.host.set_legacy_sidebar_visible(false);
        self.update_types();
        tracing::info!(types = seeded.len(), "sidebars set up");
        true
    }

    /// Replace every slot with a freshly built one holding the same types.
    /// The old slots are released together once all swaps are done. A type
    /// being dragged stays without a button until its drag resolves.
    pub fn update_types(&mut self) {
        let in_flight = self.drag.as_ref().map(|p| p.widget_type());
        let mut retired = DeferredRelease::new("sidebar slots");
        for pos in SidebarPos::ALL {
            let Some(old) = self.slots[pos.index()].take() else {
                continue;
            };
            let generation = self.take_generation();
            self.slots[pos.index()] = Some(old.rebuilt(generation, &self.registry, in_flight));
            retired.retire(old);
        }
        self.apply_layout();
        self.highlight_all();
        tracing::debug!(retired = retired.len(), "slots rebuilt");
    }

    /// Re-check buttons in every slot against its side's content view
    pub fn highlight_all(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            let view = match slot.side() {
                Side::Left => &self.left,
                Side::Right => &self.right,
            };
            slot.highlight_active_buttons(view.top_type(), view.bottom_type());
        }
    }

    /// Position the slots against the edges of `window`
    pub fn layout(&mut self, window: Rect) {
        self.window = window;
        self.apply_layout();
    }

    fn apply_layout(&mut self) {
        let window = self.window;
        for slot in self.slots.iter_mut().flatten() {
            let x = match slot.side() {
                Side::Left => window.x,
                Side::Right => window.right() - slot.content_width(),
            };
            let y = if slot.is_top() {
                window.y
            } else {
                window.bottom() - slot.content_height()
            };
            slot.set_origin(Point::new(x, y));
        }
    }

    /// Slot whose anchor is nearest to `point`; ties go to the earlier slot
    pub fn sidebar_for_global_pos(&self, point: Point) -> Option<SidebarPos> {
        let mut nearest: Option<(SidebarPos, f32)> = None;
        for slot in self.slots() {
            let distance = slot.origin().distance_to(point);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((slot.pos(), distance));
            }
        }
        nearest.map(|(pos, _)| pos)
    }

    // ========================================================================
    // Button gestures
    // ========================================================================

    /// Mouse press on the button for `widget_type`. Returns false when no
    /// such button is docked or a drag is already in flight.
    pub fn press_button(&mut self, widget_type: WidgetTypeId, at: Point, mouse: MouseButton) -> bool {
        if self.drag.is_some() {
            tracing::debug!(?widget_type, "press ignored while a drag is in flight");
            return false;
        }
        let nearest = self.sidebar_for_global_pos(at);
        let Some(button) = self
            .slots
            .iter_mut()
            .flatten()
            .find_map(|slot| slot.button_mut(widget_type))
        else {
            tracing::debug!(?widget_type, "press on a button that is not docked");
            return false;
        };
        button.press(at, mouse, nearest);
        true
    }

    /// Mouse move over a pressed button. Once the drag threshold is crossed
    /// the button leaves its slot and becomes the drag payload.
    pub fn move_button(&mut self, widget_type: WidgetTypeId, at: Point, left_down: bool) -> Option<DragStart> {
        if self.drag.is_some() {
            return None;
        }
        let threshold = self.config.drag_threshold_px;
        let pos = self.slot_with_button(widget_type)?;
        let slot = self.slots[pos.index()].as_mut()?;
        if slot.button_mut(widget_type)?.move_to(at, left_down, threshold) != MoveOutcome::DragStarted {
            return None;
        }

        let button = slot.button_moving_out(widget_type)?;
        let payload = DragPayload::new(button, pos);
        let start = DragStart {
            widget_type,
            mime_text: payload.mime_text().to_string(),
            size: payload.button.size_hint(),
        };
        self.drag_started_with_target(payload);
        Some(start)
    }

    /// Record the in-flight drag
    pub fn drag_started_with_target(&mut self, payload: DragPayload) {
        tracing::info!(
            widget_type = ?payload.widget_type(),
            origin = ?payload.origin,
            nearest = ?payload.nearest,
            "drag started"
        );
        self.drag = Some(payload);
    }

    /// Mouse release on a button. A release that ends a click (no drag)
    /// toggles the type in its side's top or bottom pane.
    pub fn release_button(&mut self, widget_type: WidgetTypeId) -> Option<Activation> {
        let pos = self.slot_with_button(widget_type)?;
        let outcome = self.slots[pos.index()]
            .as_mut()?
            .button_mut(widget_type)?
            .release();
        if outcome != ReleaseOutcome::Toggle {
            return None;
        }
        let activation = self.activate_in(pos.side(), widget_type, pos.is_top(), false);
        self.highlight_all();
        Some(activation)
    }

    // ========================================================================
    // Drag and drop
    // ========================================================================

    /// Whether a drag carrying `format` may enter the slot at `pos`
    pub fn drag_enter(&self, pos: SidebarPos, format: &str) -> bool {
        self.slot(pos).is_some() && accepts_mime(format)
    }

    /// Drag over a slot: show the placeholder where the button would land
    pub fn drag_move(&mut self, pos: SidebarPos, at: Point, format: &str) -> bool {
        if !accepts_mime(format) {
            tracing::warn!(%format, "drag over slot with unaccepted format ignored");
            return false;
        }
        let Some(payload) = self.drag.as_ref() else {
            tracing::warn!(?pos, "drag over slot without a drag in flight ignored");
            return false;
        };
        let size = payload.button.size_hint();
        let Some(slot) = self.slots[pos.index()].as_mut() else {
            return false;
        };
        let index = slot.idx_for_global_pos(at);
        slot.show_drop_placeholder(size, index);
        true
    }

    pub fn drag_leave(&mut self, pos: SidebarPos) {
        if let Some(slot) = self.slots[pos.index()].as_mut() {
            slot.remove_placeholder();
        }
    }

    /// Widget type of the in-flight drag, if it is one we can resolve
    fn resolve_drop(&self) -> Option<WidgetTypeId> {
        let Some(payload) = self.drag.as_ref() else {
            tracing::warn!("drop without a drag in flight ignored");
            return None;
        };
        let widget_type = payload.widget_type();
        if !self.registry.contains(widget_type) {
            tracing::warn!(?widget_type, "drop of unknown widget type ignored");
            return None;
        }
        Some(widget_type)
    }

    fn remove_placeholders(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            slot.remove_placeholder();
        }
    }

    /// Move `widget_type` from `origin` into `target` at `index`, carrying
    /// its active state to the target's side and pane
    fn move_type(
        &mut self,
        widget_type: WidgetTypeId,
        origin: SidebarPos,
        target: SidebarPos,
        index: Option<usize>,
        was_checked: bool,
    ) {
        if let Some(slot) = self.slots[origin.index()].as_mut() {
            slot.remove_type(widget_type);
        }
        if let Some(slot) = self.slots[target.index()].as_mut() {
            slot.add_type(widget_type, index);
        }
        if was_checked {
            self.left.deactivate_widget_type(widget_type);
            self.right.deactivate_widget_type(widget_type);
            self.activate_in(target.side(), widget_type, target.is_top(), false);
        }
    }

    /// Drop onto the slot at `pos`. Malformed drops change nothing.
    pub fn drop_on_slot(&mut self, pos: SidebarPos, at: Point, format: &str) -> bool {
        if !accepts_mime(format) {
            tracing::warn!(%format, ?pos, "drop with unaccepted format ignored");
            return false;
        }
        let Some(widget_type) = self.resolve_drop() else {
            return false;
        };
        let Some(index) = self.slot(pos).map(|slot| slot.idx_for_global_pos(at)) else {
            tracing::warn!(?pos, "drop onto a slot that does not exist ignored");
            return false;
        };
        let Some(payload) = self.drag.take() else {
            return false;
        };

        self.remove_placeholders();
        self.move_type(widget_type, payload.origin, pos, Some(index), payload.was_checked());
        self.update_types();
        tracing::info!(?widget_type, from = ?payload.origin, to = ?pos, index, "dropped on slot");
        true
    }

    /// Drop outside every slot: detach the widget into a floating window at
    /// the drop point. The type stays docked in its origin slot.
    pub fn drop_on_splitter(&mut self, at: Point, format: &str) -> Option<FloatingId> {
        let accepted = self
            .splitter
            .as_ref()
            .is_some_and(|splitter| splitter.accepts_drag(format));
        if !accepted {
            tracing::warn!(%format, "drop on splitter not accepted");
            return None;
        }
        let widget_type = self.resolve_drop()?;
        self.drag = None;

        self.remove_placeholders();
        self.left.deactivate_widget_type(widget_type);
        self.right.deactivate_widget_type(widget_type);
        self.update_types();

        let view = self.host.current_view();
        let descriptor = self.registry.get(widget_type)?;
        let key = CacheKey::for_view(widget_type, descriptor, view.as_ref());
        self.cache.acquire(&self.registry, widget_type, view.as_ref())?;
        let instance = self.cache.take(&key)?;

        let id = FloatingId(self.next_floating_id);
        self.next_floating_id += 1;
        let geometry = Rect::new(
            at.x,
            at.y,
            self.config.floating_width,
            self.host.main_window_geometry().height,
        );
        tracing::info!(?id, ?widget_type, title = instance.title(), "widget detached into floating window");
        self.floating.push(FloatingWindow {
            id,
            widget_type,
            instance,
            geometry,
        });
        Some(id)
    }

    /// The drag ended without a drop. The type returns to the nearest slot
    /// recorded at press time, or stays in its origin slot.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(payload) = self.drag.take() else {
            return false;
        };
        self.remove_placeholders();

        let widget_type = payload.widget_type();
        let target = payload
            .nearest
            .filter(|pos| self.slot(*pos).is_some())
            .unwrap_or(payload.origin);
        if target != payload.origin {
            self.move_type(widget_type, payload.origin, target, None, payload.was_checked());
        }
        self.update_types();
        tracing::info!(?widget_type, ?target, "drag cancelled");
        true
    }

    // ========================================================================
    // Content views
    // ========================================================================

    fn activate_in(&mut self, side: Side, widget_type: WidgetTypeId, top: bool, reset: bool) -> Activation {
        let view = self.host.current_view();
        let mut env = ActivationEnv {
            cache: &mut self.cache,
            registry: &self.registry,
            view: view.as_ref(),
        };
        let content_view = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        content_view.activate_widget_type(&mut env, widget_type, top, reset)
    }

    /// Show (or with `reset` false, toggle) `widget_type` in a pane
    pub fn activate_widget_type(
        &mut self,
        side: Side,
        widget_type: WidgetTypeId,
        top: bool,
        reset: bool,
    ) -> Activation {
        let activation = self.activate_in(side, widget_type, top, reset);
        self.highlight_all();
        activation
    }

    /// Close `widget_type` wherever it is shown. Returns true if it was.
    pub fn deactivate_widget_type(&mut self, widget_type: WidgetTypeId) -> bool {
        let left = self.left.deactivate_widget_type(widget_type);
        let right = self.right.deactivate_widget_type(widget_type);
        self.highlight_all();
        left || right
    }

    /// Drop every instance built for `frame` and close the panes showing them
    pub fn view_frame_closed(&mut self, frame: ViewFrameId) -> usize {
        let evicted = self.cache.evict_frame(frame);
        if evicted.is_empty() {
            return 0;
        }
        self.left.deactivate_instances(&evicted);
        self.right.deactivate_instances(&evicted);
        self.highlight_all();
        tracing::debug!(?frame, evicted = evicted.len(), "view frame closed");
        evicted.len()
    }

    /// Close a floating window, destroying its instance
    pub fn close_floating(&mut self, id: FloatingId) -> bool {
        let Some(index) = self.floating.iter().position(|w| w.id == id) else {
            return false;
        };
        let window = self.floating.remove(index);
        tracing::debug!(?id, widget_type = ?window.widget_type, "floating window closed");
        true
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Panics if the slot, pane or cache bookkeeping has gone inconsistent
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let dragged = self.drag.as_ref().map(|p| p.widget_type());
        let mut docked = HashSet::new();

        for slot in self.slots() {
            let buttons: Vec<WidgetTypeId> = slot.buttons().iter().map(|b| b.widget_type()).collect();
            let expected: Vec<WidgetTypeId> = slot
                .contained_types()
                .iter()
                .copied()
                .filter(|t| Some(*t) != dragged)
                .collect();
            assert_eq!(
                buttons,
                expected,
                "slot {:?} buttons out of order with its types",
                slot.pos()
            );
            for &t in slot.contained_types() {
                assert!(docked.insert(t), "widget type {:?} docked twice", t);
            }
            assert!(
                self.drag.is_some() || slot.placeholder().is_none(),
                "slot {:?} shows a placeholder with no drag in flight",
                slot.pos()
            );
        }

        for view in [&self.left, &self.right] {
            if let (Some(top), Some(bottom)) = (view.top_type(), view.bottom_type()) {
                assert_ne!(top, bottom, "{:?} content view shows {:?} twice", view.side(), top);
            }
            for (_, _, instance) in view.visible_panes() {
                assert!(
                    self.cache.contains(instance),
                    "{:?} content view shows evicted instance {:?}",
                    view.side(),
                    instance
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self) {}
}
