// Shipmate - release automation with a persisted project status badge

pub mod cli;
pub mod context;
pub mod models;
pub mod parser;
pub mod services;
pub mod state;
pub mod ui;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use context::ReleaseContext;
pub use models::{BadgeState, ReleaseConfig};
pub use state::{FileStatusStore, StatusStore};
pub use ui::{StatusHandle, StatusIndicator};
