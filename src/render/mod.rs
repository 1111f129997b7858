// Render module - animated presentation state behind the selection controller

pub mod wave_layer;

pub use wave_layer::{ButtonFrame, TerminalLayer};
