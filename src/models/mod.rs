//! Core data models for budget-setup
//!
//! Categories (standard and custom) and the transaction entries recorded
//! against them while the wizard runs.

pub mod category;
pub mod ids;
pub mod transaction;

pub use category::{standard_categories, Category, CategoryOrigin, StandardCategory};
pub use ids::CategoryId;
pub use transaction::{TransactionEntry, TransactionField, MAX_TRANSACTIONS_PER_CATEGORY};
