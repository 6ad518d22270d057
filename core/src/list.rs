// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{EventStore, MonthKey, StoredEvent};

/// Shown when the month has no events.
pub const NO_EVENTS_MESSAGE: &str = "No events for this month.";

/// The events of one day in the month listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection<'a> {
    pub day: u32,
    pub heading: String,
    pub events: &'a [StoredEvent],
}

/// All events of a month grouped by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthEventList<'a> {
    month: MonthKey,
    sections: Vec<DaySection<'a>>,
}

impl<'a> MonthEventList<'a> {
    pub fn build(month: MonthKey, store: &'a EventStore) -> Self {
        let sections = month
            .days()
            .filter_map(|(day, _)| {
                let events = store.events_for_day(month, day);
                (!events.is_empty()).then(|| DaySection {
                    day,
                    heading: format!("{} {}", month.name(), day),
                    events,
                })
            })
            .collect();

        Self { month, sections }
    }

    /// "All Event Details February 2024".
    pub fn heading(&self) -> String {
        format!("All Event Details {}", self.month.title())
    }

    pub fn sections(&self) -> &[DaySection<'a>] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Events in display order with the day they belong to.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &'a StoredEvent)> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.events.iter().map(move |e| (s.day, e)))
    }
}
