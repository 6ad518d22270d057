// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::event::EventField;
use crate::month::MonthKey;
use crate::store::StoreMode;

/// Errors raised by the calendar core.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A required event field was left empty
    #[error("{field} is required")]
    MissingField {
        /// The empty field
        field: EventField,
    },

    /// The day does not exist in the month
    #[error("Day {day} does not exist in {month}")]
    InvalidDay {
        /// The month the day was looked up in
        month: MonthKey,
        /// The offending day of month
        day: u32,
    },

    /// The month is out of range
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// The year
        year: i32,
        /// The one-based month, expected to be within 1..=12
        month: u32,
    },

    /// The store mode does not allow the operation
    #[error("Cannot {operation} events in {mode} mode")]
    Unsupported {
        /// The mode of the store
        mode: StoreMode,
        /// The rejected operation
        operation: &'static str,
    },
}
