//! Content view: the top/bottom split showing active widgets for one side
//!
//! Each pane is either inactive or showing one widget instance. Clicking the
//! button of the type a pane already shows closes that pane; the instance
//! itself stays in the cache, so reopening it is cheap and keeps its state.

use serde::Serialize;

use crate::cache::{InstanceCache, InstanceId};
use crate::host::ViewContext;
use crate::widget::{WidgetTypeId, WidgetTypeRegistry};

use super::Side;

/// Upper or lower half of a content view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PanePosition {
    Top,
    Bottom,
}

impl PanePosition {
    pub fn from_top(top: bool) -> Self {
        if top {
            PanePosition::Top
        } else {
            PanePosition::Bottom
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Pane {
    #[default]
    Inactive,
    Active {
        widget_type: WidgetTypeId,
        instance: InstanceId,
    },
}

impl Pane {
    pub fn widget_type(&self) -> Option<WidgetTypeId> {
        match self {
            Pane::Inactive => None,
            Pane::Active { widget_type, .. } => Some(*widget_type),
        }
    }

    pub fn instance(&self) -> Option<InstanceId> {
        match self {
            Pane::Inactive => None,
            Pane::Active { instance, .. } => Some(*instance),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Pane::Active { .. })
    }
}

/// Width limits the host applies to the content view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WidthConstraints {
    pub min: f32,
    /// `f32::INFINITY` when unbounded
    pub max: f32,
    pub hint: f32,
}

impl WidthConstraints {
    pub const COLLAPSED: WidthConstraints = WidthConstraints {
        min: 0.0,
        max: 0.0,
        hint: 0.0,
    };
}

/// Everything activation needs besides the view itself
pub struct ActivationEnv<'a> {
    pub cache: &'a mut InstanceCache,
    pub registry: &'a WidgetTypeRegistry,
    pub view: Option<&'a ViewContext>,
}

/// Result of [`ContentView::activate_widget_type`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The pane already showed the type and was closed
    Closed,
    /// The pane now shows `instance`
    Shown { instance: InstanceId, created: bool },
    /// Unknown widget type; nothing changed
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ContentView {
    side: Side,
    top: Pane,
    bottom: Pane,
    min_width: f32,
    size_hint: f32,
    constraints: WidthConstraints,
}

impl ContentView {
    pub fn new(side: Side, min_width: f32, size_hint: f32) -> Self {
        Self {
            side,
            top: Pane::Inactive,
            bottom: Pane::Inactive,
            min_width,
            size_hint,
            constraints: WidthConstraints::COLLAPSED,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn pane(&self, position: PanePosition) -> Pane {
        match position {
            PanePosition::Top => self.top,
            PanePosition::Bottom => self.bottom,
        }
    }

    fn pane_mut(&mut self, position: PanePosition) -> &mut Pane {
        match position {
            PanePosition::Top => &mut self.top,
            PanePosition::Bottom => &mut self.bottom,
        }
    }

    pub fn top_type(&self) -> Option<WidgetTypeId> {
        self.top.widget_type()
    }

    pub fn bottom_type(&self) -> Option<WidgetTypeId> {
        self.bottom.widget_type()
    }

    pub fn is_empty(&self) -> bool {
        !self.top.is_active() && !self.bottom.is_active()
    }

    pub fn shows(&self, widget_type: WidgetTypeId) -> bool {
        self.top_type() == Some(widget_type) || self.bottom_type() == Some(widget_type)
    }

    pub fn constraints(&self) -> WidthConstraints {
        self.constraints
    }

    /// Active panes in splitter order (top above bottom)
    pub fn visible_panes(&self) -> Vec<(PanePosition, WidgetTypeId, InstanceId)> {
        [PanePosition::Top, PanePosition::Bottom]
            .into_iter()
            .filter_map(|pos| match self.pane(pos) {
                Pane::Active {
                    widget_type,
                    instance,
                } => Some((pos, widget_type, instance)),
                Pane::Inactive => None,
            })
            .collect()
    }

    /// Index of `position` inside the vertical splitter, if shown
    pub fn splitter_index(&self, position: PanePosition) -> Option<usize> {
        self.visible_panes().iter().position(|(p, _, _)| *p == position)
    }

    /// Show `widget_type` in the top or bottom pane.
    ///
    /// Without `reset`, asking a pane for the type it already shows closes
    /// the pane. Otherwise the instance comes from the cache, built on first
    /// use. The other pane only changes when it was showing the same type.
    pub fn activate_widget_type(
        &mut self,
        env: &mut ActivationEnv<'_>,
        widget_type: WidgetTypeId,
        top: bool,
        reset: bool,
    ) -> Activation {
        let position = PanePosition::from_top(top);

        if !reset && self.pane(position).widget_type() == Some(widget_type) {
            *self.pane_mut(position) = Pane::Inactive;
            self.size_check();
            tracing::debug!(side = ?self.side, ?position, ?widget_type, "pane closed");
            return Activation::Closed;
        }

        let Some(acquired) = env.cache.acquire(env.registry, widget_type, env.view) else {
            tracing::warn!(?widget_type, "activation of unregistered widget type ignored");
            return Activation::Ignored;
        };

        // One instance, one pane
        let other = match position {
            PanePosition::Top => PanePosition::Bottom,
            PanePosition::Bottom => PanePosition::Top,
        };
        if self.pane(other).widget_type() == Some(widget_type) {
            *self.pane_mut(other) = Pane::Inactive;
        }

        *self.pane_mut(position) = Pane::Active {
            widget_type,
            instance: acquired.id,
        };
        self.size_check();
        tracing::debug!(
            side = ?self.side,
            ?position,
            ?widget_type,
            instance = ?acquired.id,
            created = acquired.created,
            "pane shown"
        );
        Activation::Shown {
            instance: acquired.id,
            created: acquired.created,
        }
    }

    /// Close whichever pane shows `widget_type`. Returns true if one did.
    pub fn deactivate_widget_type(&mut self, widget_type: WidgetTypeId) -> bool {
        let mut changed = false;
        for position in [PanePosition::Top, PanePosition::Bottom] {
            if self.pane(position).widget_type() == Some(widget_type) {
                *self.pane_mut(position) = Pane::Inactive;
                changed = true;
            }
        }
        if changed {
            self.size_check();
        }
        changed
    }

    /// Close panes showing any of `instances` (their cache entries are gone)
    pub fn deactivate_instances(&mut self, instances: &[InstanceId]) -> bool {
        let mut changed = false;
        for position in [PanePosition::Top, PanePosition::Bottom] {
            if let Some(instance) = self.pane(position).instance() {
                if instances.contains(&instance) {
                    *self.pane_mut(position) = Pane::Inactive;
                    changed = true;
                }
            }
        }
        if changed {
            self.size_check();
        }
        changed
    }

    fn size_check(&mut self) {
        self.constraints = if self.is_empty() {
            WidthConstraints::COLLAPSED
        } else {
            WidthConstraints {
                min: self.min_width,
                max: f32::INFINITY,
                hint: self.size_hint,
            }
        };
    }
}
