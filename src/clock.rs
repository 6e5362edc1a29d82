//! Source of "today" for due-date classification.
//!
//! Every classification reads the clock at call time; nothing caches the
//! date between calls.

use chrono::{Local, NaiveDate};
use std::fmt::Debug;

/// Supplies the current calendar date
pub trait Clock: Debug {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date from the system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
