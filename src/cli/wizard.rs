//! Interactive setup wizard shell
//!
//! Reads one command per line, turns it into an intent for the model and
//! re-renders the wizard state after every applied intent.

use chrono::NaiveDate;
use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_category_list, format_snapshot, format_status};
use crate::error::{SetupError, SetupResult};
use crate::models::{CategoryId, TransactionField};
use crate::setup::model::ISO_DATE_FORMAT;
use crate::setup::{BudgetSetupModel, Intent, SetupSnapshot};

const HELP: &str = "\
Commands:
  list                     Show all categories and their details
  toggle <id>              Select or deselect a category
  add <name>               Add a custom category
  remove <id>              Remove a custom category
  budget <id> <amount>     Set the budget for a category
  txn <id>                 Add the opening transaction for a category
  amount <id> <value>      Set the transaction amount
  note <id> <text>         Set the transaction note
  date <id>                Open the date picker for the transaction
  pick <YYYY-MM-DD>        Move the date picker's draft date
  confirm                  Use the picked date
  cancel                   Close the date picker
  status                   Show whether setup can proceed
  next                     Finish setup (only when complete)
  quit                     Leave without finishing
";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Apply(Intent),
    List,
    Status,
    Help,
    Next,
    Quit,
}

/// How a wizard session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// The user finished with every selected category complete
    Completed(SetupSnapshot),
    /// The user quit or input ended first
    Abandoned,
}

/// Parse one line of shell input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> SetupResult<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = split_first(line);
    let command = match word.to_lowercase().as_str() {
        "list" | "ls" => ShellCommand::List,
        "status" => ShellCommand::Status,
        "help" | "?" => ShellCommand::Help,
        "next" => ShellCommand::Next,
        "quit" | "exit" => ShellCommand::Quit,
        "toggle" => ShellCommand::Apply(Intent::ToggleCategory {
            category_id: required_id(word, rest)?,
        }),
        "add" => ShellCommand::Apply(Intent::AddCustomCategory {
            name: rest.to_string(),
        }),
        "remove" | "rm" => ShellCommand::Apply(Intent::RemoveCustomCategory {
            category_id: required_id(word, rest)?,
        }),
        "budget" => {
            let (id, amount) = split_first(rest);
            ShellCommand::Apply(Intent::UpdateBudget {
                category_id: required_id(word, id)?,
                amount: amount.to_string(),
            })
        }
        "txn" => ShellCommand::Apply(Intent::AddTransaction {
            category_id: required_id(word, rest)?,
        }),
        "amount" | "note" => {
            let (id, value) = split_first(rest);
            ShellCommand::Apply(Intent::UpdateTransaction {
                category_id: required_id(word, id)?,
                index: 0,
                field: word.parse::<TransactionField>()?,
                value: value.to_string(),
            })
        }
        "date" => ShellCommand::Apply(Intent::OpenDatePicker {
            category_id: required_id(word, rest)?,
            index: 0,
        }),
        "pick" => ShellCommand::Apply(Intent::SetDraftDate {
            date: parse_date(rest)?,
        }),
        "confirm" => ShellCommand::Apply(Intent::ConfirmDate),
        "cancel" => ShellCommand::Apply(Intent::CancelDatePicker),
        other => {
            return Err(SetupError::Validation(format!(
                "Unknown command '{}' (type 'help')",
                other
            )))
        }
    };

    Ok(Some(command))
}

/// Parse an ISO date typed into the picker
pub fn parse_date(s: &str) -> SetupResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
        .map_err(|e| SetupError::Validation(format!("Invalid date '{}': {}", s.trim(), e)))
}

fn split_first(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim()),
        None => (s, ""),
    }
}

fn required_id(command: &str, id: &str) -> SetupResult<CategoryId> {
    let id = id.trim();
    if id.is_empty() {
        return Err(SetupError::Validation(format!(
            "'{}' needs a category id",
            command
        )));
    }
    Ok(CategoryId::from(id))
}

/// Run the wizard over the given input until the user finishes or quits
pub fn run_wizard<R: BufRead, W: Write>(
    model: &mut BudgetSetupModel,
    settings: &Settings,
    input: R,
    output: &mut W,
) -> SetupResult<WizardOutcome> {
    writeln!(output, "===========================================")?;
    writeln!(output, "  Budget Setup")?;
    writeln!(output, "===========================================")?;
    writeln!(output)?;
    writeln!(output, "Select your expense categories, give each a budget")?;
    writeln!(output, "and record one transaction before moving on.")?;
    writeln!(output, "Type 'help' for commands.")?;
    writeln!(output)?;
    write!(output, "{}", format_category_list(model.standard_categories()))?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            writeln!(output, "Setup cancelled.")?;
            return Ok(WizardOutcome::Abandoned);
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                continue;
            }
        };

        match command {
            ShellCommand::Apply(intent) => match model.dispatch(intent) {
                Ok(()) => write!(
                    output,
                    "{}",
                    format_snapshot(&model.snapshot(), &settings.date_format)
                )?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            ShellCommand::List => write!(
                output,
                "{}",
                format_snapshot(&model.snapshot(), &settings.date_format)
            )?,
            ShellCommand::Status => write!(output, "{}", format_status(&model.snapshot()))?,
            ShellCommand::Help => write!(output, "{}", HELP)?,
            ShellCommand::Next => match model.proceed() {
                Ok(snapshot) => {
                    writeln!(output, "Setup complete!")?;
                    return Ok(WizardOutcome::Completed(snapshot));
                }
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            ShellCommand::Quit => {
                writeln!(output, "Setup cancelled.")?;
                return Ok(WizardOutcome::Abandoned);
            }
        }
    }
}
