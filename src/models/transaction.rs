//! Initial transaction entries
//!
//! During setup every selected category records one opening transaction.
//! Fields are kept as the raw text the user typed; only the date is ever
//! written by the wizard itself (through the date picker, as `YYYY-MM-DD`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SetupError;

/// Maximum number of transactions a category may hold during setup
pub const MAX_TRANSACTIONS_PER_CATEGORY: usize = 1;

/// Editable field of a transaction entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionField {
    Date,
    Amount,
    Note,
}

impl TransactionField {
    /// Get all fields in form order
    pub fn all() -> &'static [Self] {
        &[Self::Date, Self::Amount, Self::Note]
    }

    /// Lowercase field name as used by scripts and the shell
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for TransactionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionField {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "note" | "memo" => Ok(Self::Note),
            other => Err(SetupError::Validation(format!(
                "Unknown transaction field '{}'",
                other
            ))),
        }
    }
}

/// A transaction as entered in the setup form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    /// ISO date (`YYYY-MM-DD`) or empty until picked
    #[serde(default)]
    pub date: String,

    /// Amount as typed
    #[serde(default)]
    pub amount: String,

    /// Free-form note
    #[serde(default)]
    pub note: String,
}

impl TransactionEntry {
    /// Create an empty entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field
    pub fn get(&self, field: TransactionField) -> &str {
        match field {
            TransactionField::Date => &self.date,
            TransactionField::Amount => &self.amount,
            TransactionField::Note => &self.note,
        }
    }

    /// Replace a single field, leaving the others untouched
    pub fn set(&mut self, field: TransactionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TransactionField::Date => self.date = value,
            TransactionField::Amount => self.amount = value,
            TransactionField::Note => self.note = value,
        }
    }

    /// Check if every field is still empty
    pub fn is_blank(&self) -> bool {
        TransactionField::all().iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_blank() {
        let entry = TransactionEntry::new();
        assert!(entry.is_blank());
        assert_eq!(entry.date, "");
    }

    #[test]
    fn test_set_only_touches_one_field() {
        let mut entry = TransactionEntry::new();
        entry.set(TransactionField::Amount, "20");
        entry.set(TransactionField::Note, "groceries");

        assert_eq!(entry.amount, "20");
        assert_eq!(entry.note, "groceries");
        assert_eq!(entry.date, "");
        assert!(!entry.is_blank());
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("Amount".parse::<TransactionField>().unwrap(), TransactionField::Amount);
        assert_eq!("memo".parse::<TransactionField>().unwrap(), TransactionField::Note);
        assert!("payee".parse::<TransactionField>().unwrap_err().is_validation());
    }

    #[test]
    fn test_field_serialization() {
        let json = serde_json::to_string(&TransactionField::Date).unwrap();
        assert_eq!(json, "\"date\"");
    }
}
