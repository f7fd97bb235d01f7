//! Budget setup wizard core
//!
//! The state model behind the setup flow: which categories the user picked,
//! the budget for each, one opening transaction per category, and the date
//! picker used to date that transaction.

pub mod clock;
pub mod date_picker;
pub mod intent;
pub mod model;
pub mod snapshot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_picker::{DatePickerSession, DatePickerView, PickerTarget};
pub use intent::Intent;
pub use model::BudgetSetupModel;
pub use snapshot::SetupSnapshot;
