//! Display formatting for terminal output

pub mod snapshot;

pub use snapshot::{format_category_list, format_snapshot, format_status};
