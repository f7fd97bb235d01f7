//! Outbound snapshot
//!
//! Everything the shell needs to re-render after an intent, detached from the
//! model so it can be printed, exported or compared freely.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::date_picker::DatePickerView;
use crate::models::{Category, CategoryId, TransactionEntry};

/// Read-only copy of the wizard state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSnapshot {
    pub standard_categories: Vec<Category>,
    pub custom_categories: Vec<Category>,
    /// Selected ids in the order they were selected
    pub selected_ids: Vec<CategoryId>,
    pub budgets: BTreeMap<CategoryId, String>,
    pub transactions: BTreeMap<CategoryId, Vec<TransactionEntry>>,
    pub date_picker: DatePickerView,
    pub form_complete: bool,
    /// Selected ids still lacking a budget or their transaction
    #[serde(default)]
    pub incomplete: Vec<CategoryId>,
}

impl SetupSnapshot {
    /// Standard followed by custom categories
    pub fn all_categories(&self) -> impl Iterator<Item = &Category> {
        self.standard_categories
            .iter()
            .chain(self.custom_categories.iter())
    }

    /// Look up a category by id in either list
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.all_categories().find(|c| &c.id == id)
    }

    /// Check if a category is selected
    pub fn is_selected(&self, id: &CategoryId) -> bool {
        self.selected_ids.contains(id)
    }

    /// Budget text for a category, empty if never set
    pub fn budget(&self, id: &CategoryId) -> &str {
        self.budgets.get(id).map(String::as_str).unwrap_or("")
    }

    /// Transactions recorded for a category
    pub fn transactions(&self, id: &CategoryId) -> &[TransactionEntry] {
        self.transactions.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
