//! MotifKit Settings Crate
//!
//! Handles render configuration: canvas size, stroke and fill style, and
//! output defaults.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, OutputSettings, StyleSettings};
pub use error::{SettingsError, SettingsResult};
