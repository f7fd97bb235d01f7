//! budget-setup - first-run budget setup wizard
//!
//! The user picks expense categories from a standard catalog (or adds their
//! own), assigns a budget to each and records one opening transaction per
//! category before the wizard lets them proceed.
//!
//! # Architecture
//!
//! - `setup`: the wizard state model, date picker and intents
//! - `models`: categories and transaction entries
//! - `display`: terminal rendering of wizard snapshots
//! - `export`: JSON/YAML snapshot export and intent scripts
//! - `cli`: interactive shell and script replay
//! - `config`: paths and user settings
//! - `error`: custom error types
//! - `logging`: tracing setup
//!
//! # Example
//!
//! ```rust
//! use budget_setup::models::CategoryId;
//! use budget_setup::setup::BudgetSetupModel;
//!
//! let mut model = BudgetSetupModel::new();
//! let food = CategoryId::from("1");
//! model.toggle_category(&food);
//! model.update_budget(&food, "500");
//! model.add_transaction(&food);
//! assert!(model.is_form_complete());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod setup;

pub use error::{SetupError, SetupResult};
pub use setup::{BudgetSetupModel, Intent, SetupSnapshot};
