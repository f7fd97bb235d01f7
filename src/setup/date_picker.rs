//! Date picker session
//!
//! A picker is either closed or open on one transaction slot. While open the
//! user edits a draft date; only confirming turns the draft into the
//! committed date. The committed date outlives individual sessions and seeds
//! the draft the next time the picker opens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SetupError, SetupResult};
use crate::models::CategoryId;

/// The slot a picker session writes into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerTarget {
    pub category_id: CategoryId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PickerState {
    Closed,
    Open { target: PickerTarget, draft: NaiveDate },
}

/// Date picker session state machine (Closed -> Open -> Closed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerSession {
    state: PickerState,
    committed: Option<NaiveDate>,
}

impl Default for DatePickerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePickerSession {
    /// Create a closed session with nothing committed yet
    pub fn new() -> Self {
        Self {
            state: PickerState::Closed,
            committed: None,
        }
    }

    /// Check if the picker is showing
    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Open { .. })
    }

    /// The slot the open session will write to
    pub fn target(&self) -> Option<&PickerTarget> {
        match &self.state {
            PickerState::Open { target, .. } => Some(target),
            PickerState::Closed => None,
        }
    }

    /// Current draft date, only while open
    pub fn draft(&self) -> Option<NaiveDate> {
        match &self.state {
            PickerState::Open { draft, .. } => Some(*draft),
            PickerState::Closed => None,
        }
    }

    /// Last confirmed date
    pub fn committed(&self) -> Option<NaiveDate> {
        self.committed
    }

    /// Open on a slot. Re-opening while open simply retargets the session.
    pub fn open(&mut self, category_id: CategoryId, index: usize, today: NaiveDate) {
        let draft = self.committed.unwrap_or(today);
        self.state = PickerState::Open {
            target: PickerTarget { category_id, index },
            draft,
        };
    }

    /// Replace the draft date
    pub fn set_draft(&mut self, date: NaiveDate) -> SetupResult<()> {
        match &mut self.state {
            PickerState::Open { draft, .. } => {
                *draft = date;
                Ok(())
            }
            PickerState::Closed => Err(SetupError::DatePickerClosed),
        }
    }

    /// Close without touching the committed date
    pub fn cancel(&mut self) -> SetupResult<()> {
        if !self.is_open() {
            return Err(SetupError::DatePickerClosed);
        }
        self.state = PickerState::Closed;
        Ok(())
    }

    /// Close and commit the draft, handing back where it should be written
    pub fn confirm(&mut self) -> SetupResult<(PickerTarget, NaiveDate)> {
        match std::mem::replace(&mut self.state, PickerState::Closed) {
            PickerState::Open { target, draft } => {
                self.committed = Some(draft);
                Ok((target, draft))
            }
            PickerState::Closed => Err(SetupError::DatePickerClosed),
        }
    }
}

/// Read-only view of the session for snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePickerView {
    pub visible: bool,
    pub target: Option<PickerTarget>,
    pub committed_date: Option<NaiveDate>,
    pub draft_date: Option<NaiveDate>,
}

impl From<&DatePickerSession> for DatePickerView {
    fn from(session: &DatePickerSession) -> Self {
        Self {
            visible: session.is_open(),
            target: session.target().cloned(),
            committed_date: session.committed(),
            draft_date: session.draft(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_starts_closed() {
        let session = DatePickerSession::new();
        assert!(!session.is_open());
        assert!(session.target().is_none());
        assert!(session.committed().is_none());
    }

    #[test]
    fn test_first_open_seeds_today() {
        let mut session = DatePickerSession::new();
        session.open(CategoryId::from("1"), 0, date(2025, 4, 17));

        assert!(session.is_open());
        assert_eq!(session.draft(), Some(date(2025, 4, 17)));
        assert_eq!(session.target().unwrap().category_id.as_str(), "1");
    }

    #[test]
    fn test_confirm_commits_and_reseeds_next_open() {
        let mut session = DatePickerSession::new();
        session.open(CategoryId::from("1"), 0, date(2025, 4, 17));
        session.set_draft(date(2025, 3, 1)).unwrap();

        let (target, picked) = session.confirm().unwrap();
        assert_eq!(target.index, 0);
        assert_eq!(picked, date(2025, 3, 1));
        assert!(!session.is_open());
        assert_eq!(session.committed(), Some(date(2025, 3, 1)));

        session.open(CategoryId::from("2"), 0, date(2025, 4, 17));
        assert_eq!(session.draft(), Some(date(2025, 3, 1)));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut session = DatePickerSession::new();
        session.open(CategoryId::from("1"), 0, date(2025, 4, 17));
        session.set_draft(date(2020, 1, 1)).unwrap();
        session.cancel().unwrap();

        assert!(!session.is_open());
        assert!(session.committed().is_none());
        assert!(session.draft().is_none());
    }

    #[test]
    fn test_closed_transitions_are_rejected() {
        let mut session = DatePickerSession::new();
        assert!(matches!(session.cancel(), Err(SetupError::DatePickerClosed)));
        assert!(matches!(session.confirm(), Err(SetupError::DatePickerClosed)));
        assert!(matches!(
            session.set_draft(date(2025, 1, 1)),
            Err(SetupError::DatePickerClosed)
        ));
    }

    #[test]
    fn test_reopen_retargets() {
        let mut session = DatePickerSession::new();
        session.open(CategoryId::from("1"), 0, date(2025, 4, 17));
        session.set_draft(date(2025, 1, 5)).unwrap();
        session.open(CategoryId::from("3"), 0, date(2025, 4, 17));

        assert_eq!(session.target().unwrap().category_id.as_str(), "3");
        assert_eq!(session.draft(), Some(date(2025, 4, 17)));
    }

    #[test]
    fn test_view() {
        let mut session = DatePickerSession::new();
        session.open(CategoryId::from("1"), 0, date(2025, 4, 17));
        let view = DatePickerView::from(&session);
        assert!(view.visible);
        assert_eq!(view.draft_date, Some(date(2025, 4, 17)));
        assert_eq!(view.committed_date, None);
    }
}
