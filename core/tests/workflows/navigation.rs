// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Navigation workflow tests: events stay with their month while browsing.

use moncal_core::{CalendarError, MonthKey, StoreMode};

use crate::common::{calendar_at, fill_draft, test_date};

#[test]
fn navigation_round_trip_keeps_month() {
    let mut calendar = calendar_at(StoreMode::List, 2024, 5, 20);
    let start = calendar.month();

    calendar.next_month();
    assert_eq!(calendar.month(), MonthKey::new(2024, 6).unwrap());
    calendar.previous_month();

    assert_eq!(calendar.month(), start);
    assert_eq!(calendar.navigator().current(), test_date(2024, 5, 20));
}

#[test]
fn navigation_rolls_over_from_month_end() {
    let mut calendar = calendar_at(StoreMode::List, 2024, 1, 31);
    calendar.next_month();
    // February has no 31st
    assert_eq!(calendar.month(), MonthKey::new(2024, 3).unwrap());
}

#[test]
fn navigation_partitions_events_by_month() {
    let mut calendar = calendar_at(StoreMode::List, 2024, 4, 1);
    calendar.select_day(10).unwrap();
    fill_draft(&mut calendar, "april", "d", "r");
    calendar.submit().unwrap();

    calendar.next_month();
    assert!(calendar.event_list().is_empty());
    assert!(!calendar.grid().day(10).unwrap().has_event);

    calendar.select_day(10).unwrap();
    fill_draft(&mut calendar, "may", "d", "r");
    calendar.submit().unwrap();

    calendar.previous_month();
    let list = calendar.event_list();
    let titles: Vec<_> = list.entries().map(|(_, e)| e.title.as_str()).collect();
    assert_eq!(titles, vec!["april"]);
    assert_eq!(calendar.store().len(), 2);
}

#[test]
fn navigation_grid_follows_displayed_month() {
    let mut calendar = calendar_at(StoreMode::List, 2024, 1, 15);
    calendar.next_month();

    let grid = calendar.grid();
    assert_eq!(grid.month(), MonthKey::new(2024, 2).unwrap());
    assert_eq!(grid.leading_blanks(), 3);
    assert_eq!(grid.day_cells().count(), 29);
}

#[test]
fn selecting_a_missing_day_is_rejected() {
    let mut calendar = calendar_at(StoreMode::List, 2023, 2, 1);
    let err = calendar.select_day(29).unwrap_err();
    assert!(matches!(err, CalendarError::InvalidDay { day: 29, .. }));
    assert!(!calendar.editor().is_open());
}
