// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::CalendarError;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Abbreviated weekday names for the grid header, Monday first.
pub const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A calendar month, the key events are partitioned by.
///
/// Keys are ordered by year and then by month. Internally the key keeps the
/// first day of the month so that date arithmetic never has to re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    first_day: NaiveDate,
}

impl MonthKey {
    /// Creates a key from a year and a one-based month.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or(CalendarError::InvalidMonth { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The one-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The English name of the month.
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.first_day.month0() as usize]
    }

    /// Heading text such as "February 2024".
    pub fn title(&self) -> String {
        format!("{} {}", self.name(), self.year())
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Number of blank cells before day 1 in a Monday-first week.
    pub fn leading_blanks(&self) -> u32 {
        weekday_index(self.first_day.weekday())
    }

    /// Whether `day` is a valid day of this month.
    pub fn contains(&self, day: u32) -> bool {
        (1..=self.days_in_month()).contains(&day)
    }

    /// The date of `day` in this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        self.first_day.with_day(day)
    }

    /// Checks `day` against the month length.
    pub fn check_day(&self, day: u32) -> Result<NaiveDate, CalendarError> {
        self.date(day)
            .ok_or(CalendarError::InvalidDay { month: *self, day })
    }

    /// The following month.
    pub fn succ(&self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    /// The preceding month.
    pub fn pred(&self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    /// Iterates over the days of the month with their dates.
    pub fn days(&self) -> impl Iterator<Item = (u32, NaiveDate)> + use<> {
        let first_day = self.first_day;
        (1..=self.days_in_month()).filter_map(move |day| first_day.with_day(day).map(|d| (day, d)))
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = String;

    /// Parses "YYYY-MM".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid month '{s}'. Expected YYYY-MM");
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|e| e.to_string())
    }
}

/// Column of `weekday` in a Monday-first week: Monday is 0, Sunday is 6.
pub fn weekday_index(weekday: Weekday) -> u32 {
    // Sunday-first index 0 wraps around to the last column
    match weekday.num_days_from_sunday() {
        0 => 6,
        n => n - 1,
    }
}

/// Saturday and Sunday.
pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
