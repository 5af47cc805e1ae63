//! Logging setup and layout snapshots
//!
//! The console shows `RUST_LOG` (default `warn`); the daily `sidebar.log`
//! under the config directory's `logs/` keeps this crate's debug output and
//! the `message`/`layout` traces from the update loop, e.g.
//! `RUST_LOG=layout=debug` to watch slot changes live.

use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::host::HostContext;
use crate::manager::ContextSidebarManager;
use crate::sidebar::{ContentView, Side, SidebarPos, WidthConstraints};
use crate::widget::{WidgetTypeId, WidgetTypeRegistry};

const FILE_DIRECTIVES: &str = "warn,context_sidebar=debug,message=debug,layout=debug";

/// Install the console and file subscribers. File logging is skipped with
/// a warning when the logs directory cannot be created.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, "sidebar.log"))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new(FILE_DIRECTIVES)),
        ),
        Err(e) => {
            eprintln!("Warning: sidebar.log disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Serializable picture of the sidebars, used for debug diffs and `dump`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub slots: Vec<SlotSnapshot>,
    pub left: ContentSnapshot,
    pub right: ContentSnapshot,
    pub cached_instances: usize,
    pub dragging: Option<String>,
    pub floating: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSnapshot {
    pub pos: SidebarPos,
    pub generation: u64,
    pub types: Vec<String>,
    pub checked: Vec<String>,
    pub placeholder: Option<usize>,
    pub origin: (f32, f32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentSnapshot {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub constraints: WidthConstraints,
}

fn name_of(registry: &WidgetTypeRegistry, id: WidgetTypeId) -> String {
    registry.name(id).to_string()
}

impl ContentSnapshot {
    fn from_view(view: &ContentView, registry: &WidgetTypeRegistry) -> Self {
        Self {
            top: view.top_type().map(|t| name_of(registry, t)),
            bottom: view.bottom_type().map(|t| name_of(registry, t)),
            constraints: view.constraints(),
        }
    }

    fn describe(pane: &Option<String>) -> &str {
        pane.as_deref().unwrap_or("-")
    }
}

impl LayoutSnapshot {
    pub fn from_manager<H: HostContext>(manager: &ContextSidebarManager<H>) -> Self {
        let registry = manager.registry();
        Self {
            slots: manager
                .slots()
                .map(|slot| SlotSnapshot {
                    pos: slot.pos(),
                    generation: slot.generation(),
                    types: slot
                        .contained_types()
                        .iter()
                        .map(|&t| name_of(registry, t))
                        .collect(),
                    checked: slot
                        .buttons()
                        .iter()
                        .filter(|b| b.is_checked())
                        .map(|b| b.label().to_string())
                        .collect(),
                    placeholder: slot.placeholder().map(|p| p.index),
                    origin: (slot.origin().x, slot.origin().y),
                })
                .collect(),
            left: ContentSnapshot::from_view(manager.content_view(Side::Left), registry),
            right: ContentSnapshot::from_view(manager.content_view(Side::Right), registry),
            cached_instances: manager.cache().len(),
            dragging: manager.drag().map(|p| p.mime_text().to_string()),
            floating: manager
                .floating_windows()
                .iter()
                .map(|w| w.instance.title().to_string())
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots. Generation
    /// numbers and origins are ignored; membership and panes are not.
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        for after in &other.slots {
            let before = self.slots.iter().find(|s| s.pos == after.pos);
            let before_types = before.map(|s| s.types.as_slice()).unwrap_or(&[]);
            if before_types != after.types.as_slice() {
                changes.push(format!(
                    "{:?}: [{}] → [{}]",
                    after.pos,
                    before_types.join(", "),
                    after.types.join(", ")
                ));
            }
            let before_placeholder = before.and_then(|s| s.placeholder);
            if before_placeholder != after.placeholder {
                changes.push(format!(
                    "{:?}: placeholder {:?} → {:?}",
                    after.pos, before_placeholder, after.placeholder
                ));
            }
        }

        for (label, before, after) in [
            ("left", &self.left, &other.left),
            ("right", &self.right, &other.right),
        ] {
            if before.top != after.top || before.bottom != after.bottom {
                changes.push(format!(
                    "{}: {}/{} → {}/{}",
                    label,
                    ContentSnapshot::describe(&before.top),
                    ContentSnapshot::describe(&before.bottom),
                    ContentSnapshot::describe(&after.top),
                    ContentSnapshot::describe(&after.bottom)
                ));
            }
        }

        if self.dragging != other.dragging {
            changes.push(format!("drag: {:?} → {:?}", self.dragging, other.dragging));
        }
        if self.floating.len() != other.floating.len() {
            changes.push(format!(
                "floating windows: {} → {}",
                self.floating.len(),
                other.floating.len()
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
