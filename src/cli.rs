//! Command-line interface for the sidebar demo
//!
//! Supports:
//! - Dumping the default layout, theme shades and registered widget types
//! - Replaying a YAML message script against a static host
//! - Writing a default configuration file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use context_sidebar::commands::Cmd;
use context_sidebar::config::SidebarConfig;
use context_sidebar::config_paths;
use context_sidebar::geometry::Rect;
use context_sidebar::host::{CentralWidgetId, StaticHost, ViewContext};
use context_sidebar::manager::ContextSidebarManager;
use context_sidebar::messages::{self, SidebarMsg};
use context_sidebar::tracing::LayoutSnapshot;
use context_sidebar::theme::SidebarTheme;
use context_sidebar::update::update;
use context_sidebar::widget::WidgetTypeRegistry;

/// Dockable context sidebars for a disassembler shell
#[derive(Parser, Debug)]
#[command(name = "context-sidebar", version, about = "Dockable context sidebars")]
pub struct CliArgs {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the default layout and widget type ids as JSON
    Dump,
    /// Replay a YAML message script and print the resulting layout
    Run {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
    /// Write the default configuration to --config or the user config file
    InitConfig,
}

impl CliArgs {
    pub fn load_config(&self) -> SidebarConfig {
        match &self.config {
            Some(path) => SidebarConfig::load_from(path),
            None => SidebarConfig::load(),
        }
    }
}

fn default_central() -> CentralWidgetId {
    CentralWidgetId(1)
}

/// A recorded session: the host state to start from and the messages to replay
#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub view: Option<ViewContext>,
    #[serde(default)]
    pub window: Option<Rect>,
    #[serde(default = "default_central")]
    pub central: CentralWidgetId,
    #[serde(default)]
    pub messages: Vec<SidebarMsg>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        messages::from_yaml(&content)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }
}

#[derive(Debug, Serialize)]
pub struct WidgetTypeEntry {
    pub id: usize,
    pub name: String,
}

/// Theme shades as `#rrggbb`
#[derive(Debug, Serialize)]
pub struct ThemeEntry {
    pub background: String,
    pub highlight: String,
    pub placeholder: String,
}

impl From<&SidebarTheme> for ThemeEntry {
    fn from(theme: &SidebarTheme) -> Self {
        Self {
            background: theme.background.to_hex(),
            highlight: theme.highlight.to_hex(),
            placeholder: theme.placeholder.to_hex(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DumpReport {
    pub widget_types: Vec<WidgetTypeEntry>,
    pub theme: ThemeEntry,
    pub layout: LayoutSnapshot,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub commands: Vec<Cmd>,
    pub layout: LayoutSnapshot,
}

fn build_manager(
    config: SidebarConfig,
    view: Option<ViewContext>,
    window: Option<Rect>,
    central: CentralWidgetId,
) -> ContextSidebarManager<StaticHost> {
    let mut host = StaticHost::default();
    if let Some(window) = window {
        host.window = window;
    }
    host.set_view(view);
    let mut manager = ContextSidebarManager::new(host, config, WidgetTypeRegistry::with_builtins());
    manager.setup_sidebars(central);
    manager
}

pub fn dump(config: SidebarConfig) -> DumpReport {
    let manager = build_manager(config, None, None, default_central());
    let registry = manager.registry();
    DumpReport {
        widget_types: registry
            .ids()
            .map(|id| WidgetTypeEntry {
                id: id.0,
                name: registry.name(id).to_string(),
            })
            .collect(),
        theme: ThemeEntry::from(manager.theme()),
        layout: LayoutSnapshot::from_manager(&manager),
    }
}

pub fn run_script(config: SidebarConfig, script: Script) -> RunReport {
    let mut manager = build_manager(config, script.view, script.window, script.central);
    let mut commands = Vec::new();
    for msg in script.messages {
        if let Some(cmd) = update(&mut manager, msg) {
            commands.extend(cmd.flatten());
        }
    }
    RunReport {
        commands,
        layout: LayoutSnapshot::from_manager(&manager),
    }
}

/// Write the default configuration, returning where it went
pub fn init_config(target: Option<&Path>) -> Result<PathBuf> {
    let config = SidebarConfig::default();
    match target {
        Some(path) => {
            config.save_to(path).map_err(anyhow::Error::msg)?;
            Ok(path.to_path_buf())
        }
        None => {
            config.save().map_err(anyhow::Error::msg)?;
            config_paths::config_file().context("No config directory available")
        }
    }
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize report")
}
