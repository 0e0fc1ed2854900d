//! Calendar mapping the simulation day counter onto dates
//!
//! Day 0 is 2020-01-01. The model itself only ever sees whole days; the
//! calendar exists for display and news headlines.

use chrono::{Datelike, Days, NaiveDate};

/// Simulated day counter
pub type Day = u64;

pub const EPOCH_YEAR: i32 = 2020;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    epoch: NaiveDate,
}

impl Calendar {
    pub fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Date of the given day, saturating at chrono's maximum date
    pub fn date_for_day(&self, day: Day) -> NaiveDate {
        self.epoch
            .checked_add_days(Days::new(day))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn year_of(&self, day: Day) -> i32 {
        self.date_for_day(day).year()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(NaiveDate::from_ymd_opt(EPOCH_YEAR, 1, 1).unwrap_or(NaiveDate::MIN))
    }
}
