//! CLI command handlers
//!
//! Bridges clap argument parsing in the binary with the wizard core.

pub mod replay;
pub mod wizard;

pub use replay::{handle_replay, ReplayOptions};
pub use wizard::{run_wizard, WizardOutcome};
