// Wave Tab Bar Library
// A tab bar whose selected button rises out of a wave-shaped notch

// Core infrastructure - geometry, animation and the selection state machine
pub mod core;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Render - animated layer state the controller drives
pub mod render;

// UI - TUI components and views
pub mod ui;

// Utilities - helper functions and tools
pub mod utilities;

// Re-export commonly used items for convenience
pub use core::{App, AppConfig, RenderLayer, SelectionController, TabItem, WaveGeometry, WaveOutline};
pub use config_validation::{load_and_validate_config, ConfigError, ValidatedConfig};
pub use render::TerminalLayer;
