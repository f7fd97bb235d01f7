//! Configuration module for budget-setup
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SetupPaths;
pub use settings::Settings;
