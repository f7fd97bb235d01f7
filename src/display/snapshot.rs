//! Snapshot display formatting
//!
//! Renders the wizard state for the terminal shell: both category lists with
//! selection marks, the budget and transaction of each selected category, the
//! date picker when it is open, and whether the user may proceed.

use chrono::NaiveDate;
use std::fmt::Write;

use crate::models::{Category, CategoryId, TransactionEntry};
use crate::setup::model::ISO_DATE_FORMAT;
use crate::setup::SetupSnapshot;

/// Format the standard catalog (or any category list) as a simple table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let id_width = categories
        .iter()
        .map(|c| c.id.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut output = String::new();
    output.push_str(&format!("{:<id_width$}  {}\n", "ID", "Name"));
    output.push_str(&format!("{}\n", "-".repeat(id_width + 20)));

    for category in categories {
        output.push_str(&format!(
            "{:<id_width$}  {}\n",
            category.id.as_str(),
            category
        ));
    }

    output
}

/// Format the full wizard state
pub fn format_snapshot(snapshot: &SetupSnapshot, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str("Standard Categories\n");
    for category in &snapshot.standard_categories {
        push_category(&mut output, snapshot, category, date_format);
    }

    output.push('\n');
    output.push_str("Custom Categories\n");
    if snapshot.custom_categories.is_empty() {
        output.push_str("  (none - use 'add <name>')\n");
    }
    for category in &snapshot.custom_categories {
        push_category(&mut output, snapshot, category, date_format);
    }

    let orphans: Vec<&CategoryId> = snapshot
        .selected_ids
        .iter()
        .filter(|id| snapshot.category(id).is_none())
        .collect();
    if !orphans.is_empty() {
        output.push('\n');
        output.push_str("Selected but not in any list\n");
        for id in orphans {
            output.push_str(&format!("  [x] {}\n", id));
        }
    }

    if snapshot.date_picker.visible {
        output.push('\n');
        if let (Some(target), Some(draft)) =
            (&snapshot.date_picker.target, snapshot.date_picker.draft_date)
        {
            output.push_str(&format!(
                "Date picker open for {} #{}: {}  ('pick <YYYY-MM-DD>', 'confirm', 'cancel')\n",
                target.category_id,
                target.index,
                format_date(draft, date_format)
            ));
        }
    }

    output.push('\n');
    output.push_str(&format_status(snapshot));
    output
}

/// One-line completion status
pub fn format_status(snapshot: &SetupSnapshot) -> String {
    if snapshot.form_complete {
        return "Ready to proceed - type 'next' to continue.\n".to_string();
    }

    let missing: Vec<String> = snapshot
        .incomplete
        .iter()
        .map(|id| {
            snapshot
                .category(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect();

    format!(
        "Not ready: {} need a budget and a transaction.\n",
        missing.join(", ")
    )
}

fn push_category(
    output: &mut String,
    snapshot: &SetupSnapshot,
    category: &Category,
    date_format: &str,
) {
    let selected = snapshot.is_selected(&category.id);
    let mark = if selected { "[x]" } else { "[ ]" };
    output.push_str(&format!("  {} {:<4} {}\n", mark, category.id.as_str(), category));

    if !selected {
        return;
    }

    let budget = snapshot.budget(&category.id);
    let budget = if budget.is_empty() { "(not set)" } else { budget };
    output.push_str(&format!("        Budget: {}\n", budget));

    match snapshot.transactions(&category.id).first() {
        Some(txn) => output.push_str(&format!(
            "        Transaction: {}\n",
            format_transaction(txn, date_format)
        )),
        None => output.push_str(&format!(
            "        Transaction: (none - use 'txn {}')\n",
            category.id
        )),
    }
}

/// Format a date with a user-supplied strftime string, falling back to ISO
/// when the string is malformed
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(date_format)) {
        Ok(()) => out,
        Err(_) => date.format(ISO_DATE_FORMAT).to_string(),
    }
}

fn format_transaction(txn: &TransactionEntry, date_format: &str) -> String {
    let date = if txn.date.is_empty() {
        "Select Date (YYYY-MM-DD)".to_string()
    } else {
        NaiveDate::parse_from_str(&txn.date, ISO_DATE_FORMAT)
            .map(|d| format_date(d, date_format))
            .unwrap_or_else(|_| txn.date.clone())
    };
    let amount = if txn.amount.is_empty() { "-" } else { txn.amount.as_str() };

    if txn.note.is_empty() {
        format!("{}  amount {}", date, amount)
    } else {
        format!("{}  amount {}  note {}", date, amount, txn.note)
    }
}
