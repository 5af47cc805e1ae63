//! Context Sidebar - dockable sidebars for a disassembler shell
//!
//! Four docking slots hold toggle buttons for pluggable widget types; two
//! content views show the active widgets; a cache keeps one instance per
//! (view frame, data type, widget type). State changes flow through the
//! Elm-style `update` function.

pub mod cache;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod host;
pub mod manager;
pub mod messages;
pub mod sidebar;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod widget;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SidebarConfig;
pub use manager::ContextSidebarManager;
pub use messages::SidebarMsg;
pub use theme::SidebarTheme;
