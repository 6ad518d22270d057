// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::NaiveDate;
use moncal_core::{Calendar, Config, Event, EventField, StoreMode};

/// Creates a configuration with the given store mode and default previews.
#[must_use]
pub fn test_config(mode: StoreMode) -> Config {
    Config {
        mode,
        ..Config::default()
    }
}

/// Builds a date, panicking on invalid input.
#[must_use]
pub fn test_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Creates a calendar in `mode` showing the month of the given date.
#[must_use]
pub fn calendar_at(mode: StoreMode, year: i32, month: u32, day: u32) -> Calendar {
    Calendar::new(&test_config(mode), test_date(year, month, day))
}

/// Creates an event whose description and remark derive from the title.
#[must_use]
pub fn test_event(title: &str) -> Event {
    Event::new(title, format!("{title} description"), format!("{title} remark"))
}

/// Fills all three form fields of the open editor.
pub fn fill_draft(calendar: &mut Calendar, title: &str, description: &str, remark: &str) {
    calendar.set_field(EventField::Title, title.to_string());
    calendar.set_field(EventField::Description, description.to_string());
    calendar.set_field(EventField::Remark, remark.to_string());
}

/// A confirmation that always agrees.
pub fn accept(_: &str) -> bool {
    true
}

/// A confirmation that always refuses.
pub fn decline(_: &str) -> bool {
    false
}
