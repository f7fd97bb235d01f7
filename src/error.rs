//! Custom error types for budget-setup
//!
//! The wizard core has no I/O, so most of these are precondition failures
//! raised when intents arrive out of order. The I/O flavoured variants belong
//! to the configuration, export and CLI layers.

use thiserror::Error;

use crate::models::CategoryId;

/// The main error type for budget-setup operations
#[derive(Error, Debug)]
pub enum SetupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Malformed input coming from the shell (dates, commands, scripts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A transaction field was edited before a slot was added for it
    #[error("No transaction {index} for category '{category_id}'")]
    MissingTransaction { category_id: CategoryId, index: usize },

    /// A date picker intent arrived while the picker was closed
    #[error("Date picker is not open")]
    DatePickerClosed,

    /// Proceed was requested before every selected category was complete
    #[error("Setup incomplete for categories: {}", join_ids(missing))]
    Incomplete { missing: Vec<CategoryId> },
}

impl SetupError {
    /// Create a "missing transaction" error
    pub fn missing_transaction(category_id: &CategoryId, index: usize) -> Self {
        Self::MissingTransaction {
            category_id: category_id.clone(),
            index,
        }
    }

    /// Check if this is a sequencing/precondition error from the wizard core
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::MissingTransaction { .. } | Self::DatePickerClosed | Self::Incomplete { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SetupError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

fn join_ids(ids: &[CategoryId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for budget-setup operations
pub type SetupResult<T> = Result<T, SetupError>;
