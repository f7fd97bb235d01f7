//! Inbound intents
//!
//! Everything the shell can ask of the wizard, as data. The interactive shell
//! builds these from typed commands and `replay` reads them from a script.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CategoryId, TransactionField};

/// A single user intent forwarded by the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    ToggleCategory {
        category_id: CategoryId,
    },
    AddCustomCategory {
        name: String,
    },
    RemoveCustomCategory {
        category_id: CategoryId,
    },
    UpdateBudget {
        category_id: CategoryId,
        amount: String,
    },
    AddTransaction {
        category_id: CategoryId,
    },
    UpdateTransaction {
        category_id: CategoryId,
        #[serde(default)]
        index: usize,
        field: TransactionField,
        value: String,
    },
    OpenDatePicker {
        category_id: CategoryId,
        #[serde(default)]
        index: usize,
    },
    SetDraftDate {
        date: NaiveDate,
    },
    ConfirmDate,
    CancelDatePicker,
}

impl Intent {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleCategory { .. } => "toggle_category",
            Self::AddCustomCategory { .. } => "add_custom_category",
            Self::RemoveCustomCategory { .. } => "remove_custom_category",
            Self::UpdateBudget { .. } => "update_budget",
            Self::AddTransaction { .. } => "add_transaction",
            Self::UpdateTransaction { .. } => "update_transaction",
            Self::OpenDatePicker { .. } => "open_date_picker",
            Self::SetDraftDate { .. } => "set_draft_date",
            Self::ConfirmDate => "confirm_date",
            Self::CancelDatePicker => "cancel_date_picker",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_intents() {
        let json = r#"[
            {"intent": "toggle_category", "category_id": "1"},
            {"intent": "update_transaction", "category_id": "1", "field": "amount", "value": "20"},
            {"intent": "set_draft_date", "date": "2025-04-17"},
            {"intent": "confirm_date"}
        ]"#;
        let intents: Vec<Intent> = serde_json::from_str(json).unwrap();

        assert_eq!(intents.len(), 4);
        assert_eq!(
            intents[1],
            Intent::UpdateTransaction {
                category_id: CategoryId::from("1"),
                index: 0,
                field: TransactionField::Amount,
                value: "20".into(),
            }
        );
        assert_eq!(intents[3], Intent::ConfirmDate);
        assert_eq!(intents[2].name(), "set_draft_date");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let json = r#"{"intent": "update_transaction", "category_id": "1", "field": "payee", "value": "x"}"#;
        assert!(serde_json::from_str::<Intent>(json).is_err());
    }
}
