//! Widget instance cache
//!
//! Instances are keyed by (view frame, data type, widget type). View-insensitive
//! types always use the null frame and the empty data type, so there is a
//! single shared instance of each. The cache owns every instance; content
//! views only hold [`InstanceId`] handles, so an instance survives being
//! toggled off, re-docked, or having its slot rebuilt.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::host::{ViewContext, ViewFrameId};
use crate::widget::{instantiate, SidebarWidget, WidgetType, WidgetTypeId, WidgetTypeRegistry};

/// Handle to an instance owned by the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

/// Cache key: which frame/data type the instance was built for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub frame: Option<ViewFrameId>,
    pub data_type: String,
    pub widget_type: WidgetTypeId,
}

impl CacheKey {
    /// Key for `widget_type` in the given view, collapsing to the null key
    /// for view-insensitive types
    pub fn for_view(id: WidgetTypeId, widget_type: &dyn WidgetType, view: Option<&ViewContext>) -> Self {
        match view {
            Some(view) if widget_type.view_sensitive() => Self {
                frame: Some(view.frame),
                data_type: view.data_type.clone(),
                widget_type: id,
            },
            _ => Self {
                frame: None,
                data_type: String::new(),
                widget_type: id,
            },
        }
    }
}

/// A live widget plus its bookkeeping
#[derive(Debug)]
pub struct WidgetInstance {
    pub id: InstanceId,
    pub key: CacheKey,
    pub widget: Box<dyn SidebarWidget>,
}

impl WidgetInstance {
    pub fn widget_type(&self) -> WidgetTypeId {
        self.key.widget_type
    }

    pub fn title(&self) -> &str {
        self.widget.title()
    }

    pub fn is_invalid_context(&self) -> bool {
        self.widget.is_invalid_context()
    }
}

/// Result of [`InstanceCache::acquire`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquired {
    pub id: InstanceId,
    /// False when an existing instance was reused
    pub created: bool,
}

#[derive(Debug, Default)]
pub struct InstanceCache {
    instances: HashMap<InstanceId, WidgetInstance>,
    keys: HashMap<CacheKey, InstanceId>,
    next_id: u64,
}

impl InstanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &CacheKey) -> Option<InstanceId> {
        self.keys.get(key).copied()
    }

    pub fn get(&self, id: InstanceId) -> Option<&WidgetInstance> {
        self.instances.get(&id)
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.instances.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Cached instance for `widget_type` in `view`, building and registering
    /// one when absent. Fresh instances are told about the current frame.
    ///
    /// Returns `None` only when `widget_type` is not registered.
    pub fn acquire(
        &mut self,
        registry: &WidgetTypeRegistry,
        widget_type: WidgetTypeId,
        view: Option<&ViewContext>,
    ) -> Option<Acquired> {
        let descriptor = registry.get(widget_type)?;
        let key = CacheKey::for_view(widget_type, descriptor, view);

        if let Some(id) = self.lookup(&key) {
            tracing::trace!(?id, name = descriptor.name(), "reusing cached instance");
            return Some(Acquired { id, created: false });
        }

        let mut widget = instantiate(descriptor, view);
        if let Some(view) = view {
            if descriptor.view_sensitive() {
                widget.notify_view_changed(view.frame);
            }
        }
        let id = self.insert(key, widget);
        tracing::debug!(?id, name = descriptor.name(), "created instance");
        Some(Acquired { id, created: true })
    }

    /// Register `widget` under `key`, dropping any instance the key held
    pub fn insert(&mut self, key: CacheKey, widget: Box<dyn SidebarWidget>) -> InstanceId {
        if let Some(old) = self.keys.remove(&key) {
            self.instances.remove(&old);
        }
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.keys.insert(key.clone(), id);
        self.instances.insert(id, WidgetInstance { id, key, widget });
        id
    }

    /// Remove and return the instance cached under `key`
    pub fn take(&mut self, key: &CacheKey) -> Option<WidgetInstance> {
        let id = self.keys.remove(key)?;
        self.instances.remove(&id)
    }

    /// Drop every instance built for `frame`, returning their ids
    pub fn evict_frame(&mut self, frame: ViewFrameId) -> Vec<InstanceId> {
        let evicted: Vec<InstanceId> = self
            .instances
            .values()
            .filter(|inst| inst.key.frame == Some(frame))
            .map(|inst| inst.id)
            .collect();
        for id in &evicted {
            if let Some(inst) = self.instances.remove(id) {
                self.keys.remove(&inst.key);
            }
        }
        evicted
    }
}
