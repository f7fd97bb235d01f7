//! Script replay
//!
//! Applies a recorded list of intents to a fresh model and reports the final
//! state. Useful for scripted setups and for checking a flow end to end.

use chrono::NaiveDate;
use std::path::Path;
use tracing::info;

use crate::config::Settings;
use crate::error::SetupResult;
use crate::export::{read_intent_script, ExportFormat};
use crate::setup::{BudgetSetupModel, FixedClock, Intent, SetupSnapshot};

/// Options for a replay run
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    /// Script format; guessed from the extension when unset
    pub script_format: Option<ExportFormat>,
    /// Freeze the clock at this date for reproducible ids and dates
    pub today: Option<NaiveDate>,
    /// Fail unless the final state may proceed
    pub require_complete: bool,
}

/// Build the model a replay runs against
pub fn replay_model(settings: &Settings, today: Option<NaiveDate>) -> BudgetSetupModel {
    let model = match today {
        Some(date) => BudgetSetupModel::with_clock(FixedClock::at(date)),
        None => BudgetSetupModel::new(),
    };
    model.with_custom_icon(settings.custom_category_icon.clone())
}

/// Apply intents in order, stopping at the first precondition error
pub fn apply_intents(
    model: &mut BudgetSetupModel,
    intents: impl IntoIterator<Item = Intent>,
) -> SetupResult<usize> {
    let mut applied = 0;
    for intent in intents {
        model.dispatch(intent)?;
        applied += 1;
    }
    Ok(applied)
}

/// Replay a script file and return the resulting snapshot
pub fn handle_replay(
    path: &Path,
    settings: &Settings,
    options: &ReplayOptions,
) -> SetupResult<SetupSnapshot> {
    let intents = read_intent_script(path, options.script_format)?;
    let mut model = replay_model(settings, options.today);

    let applied = apply_intents(&mut model, intents)?;
    info!(applied, script = %path.display(), "replay finished");

    if options.require_complete {
        model.proceed()
    } else {
        Ok(model.snapshot())
    }
}
