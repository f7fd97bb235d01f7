//! Time source for the wizard
//!
//! Custom category ids are stamped from the clock and the date picker seeds
//! its first draft from "today", so both readings go through this trait.

use chrono::{Local, NaiveDate, NaiveTime, Utc};
use std::fmt;

/// Source of the current instant and calendar date
pub trait Clock: fmt::Debug {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// The user's current calendar date
    fn today(&self) -> NaiveDate;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at a given date, used for deterministic replays and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    millis: i64,
    today: NaiveDate,
}

impl FixedClock {
    /// Freeze the clock at midnight UTC of `today`
    pub fn at(today: NaiveDate) -> Self {
        let millis = today.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
        Self { millis, today }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
