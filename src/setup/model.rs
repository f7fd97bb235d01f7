//! Budget setup state model
//!
//! Owns the whole wizard state: category selection, custom categories,
//! budgets, the one opening transaction per category and the date picker.
//! The shell only dispatches intents and reads snapshots.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::date_picker::DatePickerSession;
use super::intent::Intent;
use super::snapshot::SetupSnapshot;
use crate::error::{SetupError, SetupResult};
use crate::models::category::DEFAULT_CUSTOM_ICON;
use crate::models::{
    standard_categories, Category, CategoryId, TransactionEntry, TransactionField,
    MAX_TRANSACTIONS_PER_CATEGORY,
};

/// Stored date format for transaction entries
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// In-memory state of one budget setup session
#[derive(Debug)]
pub struct BudgetSetupModel {
    standard: Vec<Category>,
    custom: Vec<Category>,
    selected: Vec<CategoryId>,
    budgets: BTreeMap<CategoryId, String>,
    transactions: BTreeMap<CategoryId, Vec<TransactionEntry>>,
    date_picker: DatePickerSession,
    custom_icon: String,
    last_custom_stamp: Option<i64>,
    clock: Box<dyn Clock>,
}

impl Default for BudgetSetupModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetSetupModel {
    /// Create an empty model on the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty model on a specific clock
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            standard: standard_categories(),
            custom: Vec::new(),
            selected: Vec::new(),
            budgets: BTreeMap::new(),
            transactions: BTreeMap::new(),
            date_picker: DatePickerSession::new(),
            custom_icon: DEFAULT_CUSTOM_ICON.to_string(),
            last_custom_stamp: None,
            clock: Box::new(clock),
        }
    }

    /// Use a different icon for categories created from now on
    pub fn with_custom_icon(mut self, icon: impl Into<String>) -> Self {
        self.custom_icon = icon.into();
        self
    }

    // === Categories ===

    /// Select or deselect a category. Returns whether it is now selected.
    ///
    /// Budget and transaction data is kept on deselect, so re-selecting
    /// brings it back.
    pub fn toggle_category(&mut self, category_id: &CategoryId) -> bool {
        if let Some(pos) = self.selected.iter().position(|id| id == category_id) {
            self.selected.remove(pos);
            info!(category = %category_id, "category deselected");
            false
        } else {
            self.selected.push(category_id.clone());
            info!(category = %category_id, "category selected");
            true
        }
    }

    /// Add a custom category. Blank names are ignored.
    pub fn add_custom_category(&mut self, name: &str) -> Option<CategoryId> {
        let name = name.trim();
        if name.is_empty() {
            warn!("ignoring custom category with empty name");
            return None;
        }

        let id = CategoryId::custom(self.next_custom_stamp());
        self.custom
            .push(Category::custom(id.clone(), name, self.custom_icon.clone()));
        info!(category = %id, name, "custom category added");
        Some(id)
    }

    /// Remove a custom category from the list. Returns whether it existed.
    ///
    /// Selection, budget and transaction entries for it are left in place.
    pub fn remove_custom_category(&mut self, category_id: &CategoryId) -> bool {
        let before = self.custom.len();
        self.custom.retain(|c| &c.id != category_id);
        let removed = self.custom.len() != before;
        if removed {
            info!(category = %category_id, "custom category removed");
        } else {
            debug!(category = %category_id, "no custom category to remove");
        }
        removed
    }

    // Strictly increasing even if the clock repeats or steps back.
    fn next_custom_stamp(&mut self) -> i64 {
        let now = self.clock.now_millis();
        let stamp = match self.last_custom_stamp {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_custom_stamp = Some(stamp);
        stamp
    }

    // === Budgets ===

    /// Set the budget text for a category, overwriting any previous value
    pub fn update_budget(&mut self, category_id: &CategoryId, amount: impl Into<String>) {
        let amount = amount.into();
        debug!(category = %category_id, amount = %amount, "budget updated");
        self.budgets.insert(category_id.clone(), amount);
    }

    // === Transactions ===

    /// Add an empty transaction slot. Returns false once the category
    /// already holds its one transaction.
    pub fn add_transaction(&mut self, category_id: &CategoryId) -> bool {
        let entries = self.transactions.entry(category_id.clone()).or_default();
        if entries.len() >= MAX_TRANSACTIONS_PER_CATEGORY {
            warn!(category = %category_id, "transaction limit reached");
            return false;
        }
        entries.push(TransactionEntry::new());
        info!(category = %category_id, "transaction added");
        true
    }

    /// Replace one field of an existing transaction
    pub fn update_transaction(
        &mut self,
        category_id: &CategoryId,
        index: usize,
        field: TransactionField,
        value: impl Into<String>,
    ) -> SetupResult<()> {
        let entry = self
            .transactions
            .get_mut(category_id)
            .and_then(|entries| entries.get_mut(index))
            .ok_or_else(|| SetupError::missing_transaction(category_id, index))?;

        let value = value.into();
        debug!(category = %category_id, index, %field, value = %value, "transaction updated");
        entry.set(field, value);
        Ok(())
    }

    fn has_transaction(&self, category_id: &CategoryId, index: usize) -> bool {
        self.transactions
            .get(category_id)
            .is_some_and(|entries| index < entries.len())
    }

    // === Date picker ===

    /// Open the picker on a transaction slot
    pub fn open_date_picker(&mut self, category_id: &CategoryId, index: usize) {
        let today = self.clock.today();
        self.date_picker.open(category_id.clone(), index, today);
        debug!(category = %category_id, index, "date picker opened");
    }

    /// Move the picker's draft date
    pub fn set_draft_date(&mut self, date: NaiveDate) -> SetupResult<()> {
        self.date_picker.set_draft(date)?;
        debug!(%date, "draft date changed");
        Ok(())
    }

    /// Commit the draft date into the target transaction and close the picker.
    ///
    /// If the target slot does not exist the picker stays open and nothing
    /// is committed.
    pub fn confirm_date(&mut self) -> SetupResult<NaiveDate> {
        let target = self
            .date_picker
            .target()
            .ok_or(SetupError::DatePickerClosed)?;
        if !self.has_transaction(&target.category_id, target.index) {
            return Err(SetupError::missing_transaction(
                &target.category_id,
                target.index,
            ));
        }

        let (target, date) = self.date_picker.confirm()?;
        let formatted = date.format(ISO_DATE_FORMAT).to_string();
        self.update_transaction(
            &target.category_id,
            target.index,
            TransactionField::Date,
            formatted,
        )?;
        info!(category = %target.category_id, %date, "transaction date confirmed");
        Ok(date)
    }

    /// Close the picker, discarding the draft
    pub fn cancel_date_picker(&mut self) -> SetupResult<()> {
        self.date_picker.cancel()?;
        debug!("date picker cancelled");
        Ok(())
    }

    // === Dispatch ===

    /// Apply a shell intent
    pub fn dispatch(&mut self, intent: Intent) -> SetupResult<()> {
        debug!(intent = intent.name(), "dispatching intent");
        match intent {
            Intent::ToggleCategory { category_id } => {
                self.toggle_category(&category_id);
            }
            Intent::AddCustomCategory { name } => {
                self.add_custom_category(&name);
            }
            Intent::RemoveCustomCategory { category_id } => {
                self.remove_custom_category(&category_id);
            }
            Intent::UpdateBudget {
                category_id,
                amount,
            } => self.update_budget(&category_id, amount),
            Intent::AddTransaction { category_id } => {
                self.add_transaction(&category_id);
            }
            Intent::UpdateTransaction {
                category_id,
                index,
                field,
                value,
            } => self.update_transaction(&category_id, index, field, value)?,
            Intent::OpenDatePicker { category_id, index } => {
                self.open_date_picker(&category_id, index)
            }
            Intent::SetDraftDate { date } => self.set_draft_date(date)?,
            Intent::ConfirmDate => {
                self.confirm_date()?;
            }
            Intent::CancelDatePicker => self.cancel_date_picker()?,
        }
        Ok(())
    }

    // === Reads ===

    /// The standard catalog
    pub fn standard_categories(&self) -> &[Category] {
        &self.standard
    }

    /// User-created categories in creation order
    pub fn custom_categories(&self) -> &[Category] {
        &self.custom
    }

    /// Standard followed by custom categories
    pub fn all_categories(&self) -> impl Iterator<Item = &Category> {
        self.standard.iter().chain(self.custom.iter())
    }

    /// Selected ids in selection order
    pub fn selected_ids(&self) -> &[CategoryId] {
        &self.selected
    }

    /// Check if a category is currently selected
    pub fn is_selected(&self, category_id: &CategoryId) -> bool {
        self.selected.contains(category_id)
    }

    /// Budget text for a category, if one was ever entered
    pub fn budget(&self, category_id: &CategoryId) -> Option<&str> {
        self.budgets.get(category_id).map(String::as_str)
    }

    /// Transactions for a category (at most one)
    pub fn transactions(&self, category_id: &CategoryId) -> &[TransactionEntry] {
        self.transactions
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the shell should still offer "add transaction"
    pub fn can_add_transaction(&self, category_id: &CategoryId) -> bool {
        self.transactions(category_id).len() < MAX_TRANSACTIONS_PER_CATEGORY
    }

    /// The date picker session
    pub fn date_picker(&self) -> &DatePickerSession {
        &self.date_picker
    }

    /// Selected categories still lacking a budget or their transaction
    pub fn incomplete_categories(&self) -> Vec<CategoryId> {
        self.selected
            .iter()
            .filter(|id| !self.is_category_complete(id))
            .cloned()
            .collect()
    }

    // Only presence of the single transaction is checked, not its fields.
    fn is_category_complete(&self, category_id: &CategoryId) -> bool {
        let has_budget = self.budget(category_id).is_some_and(|b| !b.is_empty());
        let has_transaction =
            self.transactions(category_id).len() == MAX_TRANSACTIONS_PER_CATEGORY;
        has_budget && has_transaction
    }

    /// True when every selected category has a budget and one transaction
    pub fn is_form_complete(&self) -> bool {
        self.selected.iter().all(|id| self.is_category_complete(id))
    }

    /// Capture the current state for rendering
    pub fn snapshot(&self) -> SetupSnapshot {
        SetupSnapshot {
            standard_categories: self.standard.clone(),
            custom_categories: self.custom.clone(),
            selected_ids: self.selected.clone(),
            budgets: self.budgets.clone(),
            transactions: self.transactions.clone(),
            date_picker: (&self.date_picker).into(),
            form_complete: self.is_form_complete(),
            incomplete: self.incomplete_categories(),
        }
    }

    /// Gate for the "next" action: the final snapshot if complete
    pub fn proceed(&self) -> SetupResult<SetupSnapshot> {
        let missing = self.incomplete_categories();
        if !missing.is_empty() {
            return Err(SetupError::Incomplete { missing });
        }
        info!(selected = self.selected.len(), "setup complete");
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryOrigin;
    use crate::setup::clock::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 17).unwrap()
    }

    fn model() -> BudgetSetupModel {
        BudgetSetupModel::with_clock(FixedClock::at(today()))
    }

    fn id(s: &str) -> CategoryId {
        CategoryId::from(s)
    }

    fn complete(model: &mut BudgetSetupModel, cat: &CategoryId) {
        model.update_budget(cat, "500");
        model.add_transaction(cat);
    }

    #[test]
    fn test_new_model_is_empty() {
        let model = model();
        assert_eq!(model.standard_categories().len(), 8);
        assert!(model.custom_categories().is_empty());
        assert!(model.selected_ids().is_empty());
        assert!(!model.date_picker().is_open());
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut model = model();
        model.toggle_category(&id("2"));
        let before = model.selected_ids().to_vec();

        assert!(model.toggle_category(&id("5")));
        assert!(!model.toggle_category(&id("5")));
        assert_eq!(model.selected_ids(), before.as_slice());
    }

    #[test]
    fn test_toggle_accepts_unknown_ids() {
        let mut model = model();
        assert!(model.toggle_category(&id("not-in-catalog")));
        assert!(model.is_selected(&id("not-in-catalog")));
    }

    #[test]
    fn test_deselect_keeps_data() {
        let mut model = model();
        let food = id("1");
        model.toggle_category(&food);
        complete(&mut model, &food);

        model.toggle_category(&food);
        assert_eq!(model.budget(&food), Some("500"));
        assert_eq!(model.transactions(&food).len(), 1);

        model.toggle_category(&food);
        assert!(model.is_form_complete());
    }

    #[test]
    fn test_empty_selection_is_complete() {
        assert!(model().is_form_complete());
    }

    #[test]
    fn test_food_scenario_completes() {
        let mut model = model();
        let food = id("1");
        model.toggle_category(&food);
        model.update_budget(&food, "500");
        assert!(!model.is_form_complete());

        model.add_transaction(&food);
        model
            .update_transaction(&food, 0, TransactionField::Amount, "20")
            .unwrap();
        assert!(model.is_form_complete());
        assert!(model.proceed().is_ok());
    }

    #[test]
    fn test_partially_complete_selection() {
        let mut model = model();
        model.toggle_category(&id("1"));
        model.toggle_category(&id("2"));
        complete(&mut model, &id("1"));

        assert!(!model.is_form_complete());
        assert_eq!(model.incomplete_categories(), vec![id("2")]);
        match model.proceed() {
            Err(SetupError::Incomplete { missing }) => assert_eq!(missing, vec![id("2")]),
            other => panic!("expected incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_budget_is_incomplete() {
        let mut model = model();
        let food = id("1");
        model.toggle_category(&food);
        complete(&mut model, &food);
        model.update_budget(&food, "");

        assert!(!model.is_form_complete());
    }

    #[test]
    fn test_blank_transaction_still_counts() {
        let mut model = model();
        let food = id("1");
        model.toggle_category(&food);
        complete(&mut model, &food);

        assert!(model.transactions(&food)[0].is_blank());
        assert!(model.is_form_complete());
    }

    #[test]
    fn test_second_add_transaction_is_noop() {
        let mut model = model();
        let food = id("1");
        assert!(model.can_add_transaction(&food));
        assert!(model.add_transaction(&food));
        assert!(!model.add_transaction(&food));

        assert_eq!(model.transactions(&food).len(), 1);
        assert!(!model.can_add_transaction(&food));
    }

    #[test]
    fn test_update_transaction_without_slot_fails() {
        let mut model = model();
        let err = model
            .update_transaction(&id("1"), 0, TransactionField::Note, "x")
            .unwrap_err();
        assert!(matches!(err, SetupError::MissingTransaction { index: 0, .. }));

        model.add_transaction(&id("1"));
        assert!(model
            .update_transaction(&id("1"), 1, TransactionField::Note, "x")
            .is_err());
    }

    #[test]
    fn test_update_transaction_changes_one_field() {
        let mut model = model();
        let food = id("1");
        model.add_transaction(&food);
        model
            .update_transaction(&food, 0, TransactionField::Note, "lunch")
            .unwrap();
        model
            .update_transaction(&food, 0, TransactionField::Amount, "12")
            .unwrap();

        let entry = &model.transactions(&food)[0];
        assert_eq!(entry.note, "lunch");
        assert_eq!(entry.amount, "12");
        assert_eq!(entry.date, "");
    }

    #[test]
    fn test_whitespace_custom_name_is_ignored() {
        let mut model = model();
        assert!(model.add_custom_category("  ").is_none());
        assert!(model.custom_categories().is_empty());
    }

    #[test]
    fn test_duplicate_custom_names_get_distinct_ids() {
        let mut model = model();
        let first = model.add_custom_category("Pets").unwrap();
        let second = model.add_custom_category("Pets").unwrap();

        assert_ne!(first, second);
        let custom = model.custom_categories();
        assert_eq!(custom.len(), 2);
        assert!(custom.iter().all(|c| c.name == "Pets"));
        assert!(custom.iter().all(|c| c.origin == CategoryOrigin::Custom));
        assert!(model
            .standard_categories()
            .iter()
            .all(|s| s.id != first && s.id != second));
    }

    #[test]
    fn test_custom_category_is_trimmed_and_not_selected() {
        let mut model = model().with_custom_icon("🐾");
        let pets = model.add_custom_category("  Pets ").unwrap();

        assert!(!model.is_selected(&pets));
        assert_eq!(model.custom_categories()[0].name, "Pets");
        assert_eq!(model.custom_categories()[0].icon, "🐾");
        assert_eq!(model.all_categories().count(), 9);
    }

    #[test]
    fn test_remove_custom_category_leaves_orphans() {
        let mut model = model();
        let pets = model.add_custom_category("Pets").unwrap();
        model.toggle_category(&pets);
        model.update_budget(&pets, "40");

        assert!(model.remove_custom_category(&pets));
        assert!(!model.remove_custom_category(&pets));
        assert!(model.custom_categories().is_empty());
        assert!(model.is_selected(&pets));
        assert_eq!(model.budget(&pets), Some("40"));
    }

    #[test]
    fn test_confirm_date_writes_iso_date() {
        let mut model = model();
        let food = id("1");
        model.add_transaction(&food);
        model.open_date_picker(&food, 0);
        model
            .set_draft_date(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
            .unwrap();

        let date = model.confirm_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(model.transactions(&food)[0].date, "2025-03-09");
        assert!(!model.date_picker().is_open());
    }

    #[test]
    fn test_confirm_without_edit_uses_today() {
        let mut model = model();
        let food = id("1");
        model.add_transaction(&food);
        model.open_date_picker(&food, 0);
        model.confirm_date().unwrap();

        assert_eq!(model.transactions(&food)[0].date, "2025-04-17");
    }

    #[test]
    fn test_cancel_never_touches_transactions() {
        let mut model = model();
        let food = id("1");
        model.add_transaction(&food);
        model
            .update_transaction(&food, 0, TransactionField::Date, "2024-12-31")
            .unwrap();
        let before = model.transactions(&food).to_vec();

        model.open_date_picker(&food, 0);
        model
            .set_draft_date(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap())
            .unwrap();
        model.cancel_date_picker().unwrap();

        assert_eq!(model.transactions(&food), before.as_slice());
        assert!(model.date_picker().committed().is_none());
    }

    #[test]
    fn test_confirm_on_missing_slot_keeps_picker_open() {
        let mut model = model();
        model.open_date_picker(&id("3"), 0);

        assert!(matches!(
            model.confirm_date(),
            Err(SetupError::MissingTransaction { .. })
        ));
        assert!(model.date_picker().is_open());
        assert!(model.date_picker().committed().is_none());
    }

    #[test]
    fn test_closed_picker_rejects_confirm() {
        let mut model = model();
        assert!(matches!(model.confirm_date(), Err(SetupError::DatePickerClosed)));
        assert!(matches!(
            model.cancel_date_picker(),
            Err(SetupError::DatePickerClosed)
        ));
    }

    #[test]
    fn test_dispatch_runs_food_scenario() {
        let mut model = model();
        let food = id("1");
        let intents = vec![
            Intent::ToggleCategory {
                category_id: food.clone(),
            },
            Intent::UpdateBudget {
                category_id: food.clone(),
                amount: "500".into(),
            },
            Intent::AddTransaction {
                category_id: food.clone(),
            },
            Intent::UpdateTransaction {
                category_id: food.clone(),
                index: 0,
                field: TransactionField::Amount,
                value: "20".into(),
            },
            Intent::OpenDatePicker {
                category_id: food.clone(),
                index: 0,
            },
            Intent::ConfirmDate,
        ];
        for intent in intents {
            model.dispatch(intent).unwrap();
        }

        let snapshot = model.snapshot();
        assert!(snapshot.form_complete);
        assert_eq!(snapshot.transactions(&food)[0].amount, "20");
        assert_eq!(snapshot.transactions(&food)[0].date, "2025-04-17");
        assert_eq!(snapshot.date_picker.committed_date, Some(today()));
    }

    #[test]
    fn test_snapshot_tracks_latest_intent() {
        let mut model = model();
        model.toggle_category(&id("4"));
        let snapshot = model.snapshot();

        assert!(!snapshot.form_complete);
        assert!(snapshot.is_selected(&id("4")));
        assert_eq!(snapshot.budget(&id("4")), "");
        assert_eq!(snapshot.category(&id("4")).unwrap().name, "Utilities");
    }
}
