//! Sidebar configuration
//!
//! Stored in `~/.config/context-sidebar/config.yaml`. Every field has a
//! default, so a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sidebar::SidebarPos;
use crate::widget::BuiltinWidgetKind;

/// Sidebar configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Pointer travel (logical px) before a button press turns into a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold_px: f32,

    /// Minimum width of a content view showing at least one pane
    #[serde(default = "default_content_min_width")]
    pub content_min_width: f32,

    /// Preferred width of a content view showing at least one pane
    #[serde(default = "default_content_size_hint")]
    pub content_size_hint: f32,

    /// Width of a floating window spawned by a drop outside every slot
    #[serde(default = "default_floating_width")]
    pub floating_width: f32,

    /// Button text and padding metrics
    #[serde(default)]
    pub button: ButtonMetrics,

    /// Widget type names seeded into each slot by `setup_sidebars`
    #[serde(default)]
    pub default_slots: DefaultSlots,
}

fn default_drag_threshold() -> f32 {
    6.0
}

fn default_content_min_width() -> f32 {
    350.0
}

fn default_content_size_hint() -> f32 {
    400.0
}

fn default_floating_width() -> f32 {
    350.0
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: default_drag_threshold(),
            content_min_width: default_content_min_width(),
            content_size_hint: default_content_size_hint(),
            floating_width: default_floating_width(),
            button: ButtonMetrics::default(),
            default_slots: DefaultSlots::default(),
        }
    }
}

/// Metrics used to size sidebar buttons (before rotation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonMetrics {
    pub char_width: f32,
    pub line_height: f32,
    pub padding_h: f32,
    pub padding_v: f32,
    pub icon_size: f32,
}

impl Default for ButtonMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 16.0,
            padding_h: 8.0,
            padding_v: 4.0,
            icon_size: 16.0,
        }
    }
}

/// Per-slot lists of widget type names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSlots {
    pub top_left: Vec<String>,
    pub bottom_left: Vec<String>,
    pub top_right: Vec<String>,
    pub bottom_right: Vec<String>,
}

impl DefaultSlots {
    pub fn for_pos(&self, pos: SidebarPos) -> &[String] {
        match pos {
            SidebarPos::TopLeft => &self.top_left,
            SidebarPos::BottomLeft => &self.bottom_left,
            SidebarPos::TopRight => &self.top_right,
            SidebarPos::BottomRight => &self.bottom_right,
        }
    }

    pub fn for_pos_mut(&mut self, pos: SidebarPos) -> &mut Vec<String> {
        match pos {
            SidebarPos::TopLeft => &mut self.top_left,
            SidebarPos::BottomLeft => &mut self.bottom_left,
            SidebarPos::TopRight => &mut self.top_right,
            SidebarPos::BottomRight => &mut self.bottom_right,
        }
    }

    /// No slot seeds anything
    pub fn empty() -> Self {
        Self {
            top_left: Vec::new(),
            bottom_left: Vec::new(),
            top_right: Vec::new(),
            bottom_right: Vec::new(),
        }
    }
}

impl Default for DefaultSlots {
    fn default() -> Self {
        let mut slots = Self::empty();
        for kind in BuiltinWidgetKind::ALL {
            slots
                .for_pos_mut(kind.default_slot())
                .push(kind.display_name().to_string());
        }
        slots
    }
}

impl SidebarConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating its parent directory
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
