//! PlanMark Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;

pub use config::{Config, DesignerSettings, ExportSettings, LoggingSettings, MAX_HISTORY_LIMIT};
