// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Workflow tests for the single, list and editable store modes.

use moncal_core::{Calendar, CalendarError, Config, StoreMode};

use crate::common::{accept, assert_titles, calendar_at, fill_draft, test_date};

#[test]
fn single_mode_keeps_the_latest_event() {
    let mut calendar = calendar_at(StoreMode::Single, 2024, 2, 1);
    let month = calendar.month();
    for title in ["first", "second"] {
        calendar.select_day(1).unwrap();
        fill_draft(&mut calendar, title, "d", "r");
        calendar.submit().unwrap();
    }

    assert_titles(calendar.store().events_for_day(month, 1), &["second"]);
    assert_eq!(calendar.grid().day(1).unwrap().overflow, 0);
}

#[test]
fn list_mode_appends_but_refuses_changes() {
    let mut calendar = calendar_at(StoreMode::List, 2024, 2, 1);
    let month = calendar.month();
    calendar.select_day(1).unwrap();
    fill_draft(&mut calendar, "b", "d", "r");
    let id = calendar.submit().unwrap().unwrap();
    calendar.select_day(1).unwrap();
    fill_draft(&mut calendar, "a", "d", "r");
    calendar.submit().unwrap();

    assert_titles(calendar.store().events_for_day(month, 1), &["a", "b"]);
    assert!(matches!(
        calendar.edit_event(1, id),
        Err(CalendarError::Unsupported {
            mode: StoreMode::List,
            ..
        })
    ));
    let err = calendar.toggle_menu(id).unwrap_err();
    assert_eq!(err.to_string(), "Cannot manage events in list mode");
    assert!(calendar.delete_event(1, id, &mut accept).is_err());
    assert_eq!(calendar.store().len(), 2);
}

#[test]
fn pruning_drops_empty_days() {
    let config = Config {
        mode: StoreMode::Editable,
        prune_empty_days: true,
        ..Config::default()
    };
    let mut calendar = Calendar::new(&config, test_date(2024, 2, 1));
    let month = calendar.month();
    calendar.select_day(6).unwrap();
    fill_draft(&mut calendar, "a", "b", "c");
    let id = calendar.submit().unwrap().unwrap();

    calendar.delete_event(6, id, &mut accept).unwrap();

    assert!(!calendar.store().has_day_entry(month, 6));
}

#[test]
fn custom_preview_options_reach_the_grid() {
    let config = Config {
        preview_limit: 1,
        preview_title_width: 4,
        ..Config::default()
    };
    let mut calendar = Calendar::new(&config, test_date(2024, 2, 1));
    for title in ["breakfast", "lunch"] {
        calendar.select_day(3).unwrap();
        fill_draft(&mut calendar, title, "d", "r");
        calendar.submit().unwrap();
    }

    let cell = calendar.grid().day(3).cloned().unwrap();
    assert_eq!(cell.previews, vec!["brea..."]);
    assert_eq!(cell.overflow_label().as_deref(), Some("+1 more"));
}
