// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Days, Local, Months, NaiveDate};

use crate::MonthKey;

/// Holds the date whose month is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNavigator {
    current: NaiveDate,
}

impl DateNavigator {
    pub fn new(current: NaiveDate) -> Self {
        Self { current }
    }

    /// Starts at the local date of today.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// The current date, including its day of month.
    pub fn current(&self) -> NaiveDate {
        self.current
    }

    /// The displayed month.
    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.current)
    }

    /// Jumps to `date`.
    pub fn go_to(&mut self, date: NaiveDate) {
        self.current = date;
    }

    pub fn previous_month(&mut self) {
        self.shift_months(-1);
    }

    pub fn next_month(&mut self) {
        self.shift_months(1);
    }

    /// Moves by `delta` months keeping the day of month. A day that does not
    /// exist in the target month overflows into the month after it, so
    /// January 31 plus one month lands on March 2 or 3.
    pub fn shift_months(&mut self, delta: i32) {
        match shift_months(self.current, delta) {
            Some(date) => {
                tracing::debug!(from = %self.current, to = %date, "navigating months");
                self.current = date;
            }
            None => tracing::warn!(current = %self.current, delta, "month out of range"),
        }
    }
}

impl Default for DateNavigator {
    fn default() -> Self {
        Self::today()
    }
}

fn shift_months(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    let months = Months::new(delta.unsigned_abs());
    let target = if delta >= 0 {
        first.checked_add_months(months)?
    } else {
        first.checked_sub_months(months)?
    };
    target.checked_add_days(Days::new(u64::from(date.day() - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn moves_one_month_forward_and_back() {
        let mut nav = DateNavigator::new(date(2024, 5, 15));
        nav.next_month();
        assert_eq!(nav.current(), date(2024, 6, 15));
        nav.previous_month();
        assert_eq!(nav.current(), date(2024, 5, 15));
    }

    #[test]
    fn crosses_year_boundaries() {
        let mut nav = DateNavigator::new(date(2024, 12, 10));
        nav.next_month();
        assert_eq!(nav.month(), MonthKey::new(2025, 1).unwrap());
        nav.previous_month();
        nav.previous_month();
        assert_eq!(nav.month(), MonthKey::new(2024, 11).unwrap());
    }

    #[test]
    fn rolls_over_missing_days() {
        let mut nav = DateNavigator::new(date(2024, 1, 31));
        nav.next_month();
        // February 2024 has 29 days, the two extra days spill into March
        assert_eq!(nav.current(), date(2024, 3, 2));

        let mut nav = DateNavigator::new(date(2023, 3, 31));
        nav.previous_month();
        assert_eq!(nav.current(), date(2023, 3, 3));
    }

    #[test]
    fn round_trips_when_day_exists_in_every_month() {
        for month in 1..=12 {
            let start = date(2024, month, 28);
            let mut nav = DateNavigator::new(start);
            nav.next_month();
            nav.previous_month();
            assert_eq!(nav.current(), start);
        }
    }

    #[test]
    fn shifts_several_months() {
        let mut nav = DateNavigator::new(date(2024, 2, 10));
        nav.shift_months(-14);
        assert_eq!(nav.current(), date(2022, 12, 10));
        nav.shift_months(0);
        assert_eq!(nav.current(), date(2022, 12, 10));
    }
}
