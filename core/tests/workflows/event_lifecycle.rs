// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event lifecycle workflow tests: add, edit and delete through the editor.

use moncal_core::{CalendarError, EditorState, EventField, MonthKey, StoreMode};

use crate::common::{
    accept, assert_sorted_by_title, assert_titles, calendar_at, decline, fill_draft,
};

#[test]
fn event_lifecycle_add_flow() {
    // Arrange
    let mut calendar = calendar_at(StoreMode::Editable, 2024, 2, 10);
    let month = MonthKey::new(2024, 2).unwrap();

    // Act
    calendar.select_day(14).unwrap();
    assert_eq!(calendar.editor(), EditorState::Add { month, day: 14 });
    fill_draft(&mut calendar, "Valentine dinner", "Book a table", "7pm");
    let id = calendar.submit().unwrap().expect("event saved");

    // Assert - editor closed and draft reset
    assert_eq!(calendar.editor(), EditorState::Closed);
    assert!(calendar.draft().title.is_empty());

    // Assert - store and grid see the event
    let events = calendar.store().events_for_day(month, 14);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id(), id);
    assert_eq!(events[0].remark, "7pm");

    let grid = calendar.grid();
    let cell = grid.day(14).unwrap();
    assert!(cell.has_event);
    assert_eq!(cell.previews, vec!["Valentine ..."]);

    // Assert - listing sees the event
    let list = calendar.event_list();
    assert_eq!(list.sections().len(), 1);
    assert_eq!(list.sections()[0].heading, "February 14");
}

#[test]
fn event_lifecycle_rejects_incomplete_form() {
    let mut calendar = calendar_at(StoreMode::Editable, 2024, 2, 10);
    calendar.select_day(5).unwrap();
    calendar.set_field(EventField::Title, "Only a title".to_string());

    let err = calendar.submit().unwrap_err();

    assert_eq!(
        err,
        CalendarError::MissingField {
            field: EventField::Description
        }
    );
    assert!(calendar.editor().is_open(), "editor stays open");
    assert!(calendar.store().is_empty());
}

#[test]
fn event_lifecycle_keeps_days_sorted_after_every_save() {
    let mut calendar = calendar_at(StoreMode::Editable, 2024, 6, 1);
    let month = calendar.month();

    for title in ["retro", "Planning", "demo", "all hands", "Zumba"] {
        calendar.select_day(12).unwrap();
        fill_draft(&mut calendar, title, "d", "r");
        calendar.submit().unwrap();
        assert_sorted_by_title(calendar.store().events_for_day(month, 12));
    }

    assert_titles(
        calendar.store().events_for_day(month, 12),
        &["all hands", "demo", "Planning", "retro", "Zumba"],
    );

    let cell = calendar.grid().day(12).cloned().unwrap();
    assert_eq!(cell.previews, vec!["all hands", "demo"]);
    assert_eq!(cell.overflow_label().as_deref(), Some("+3 more"));
}

#[test]
fn event_lifecycle_edit_flow() {
    // Arrange
    let mut calendar = calendar_at(StoreMode::Editable, 2024, 3, 1);
    let month = calendar.month();
    for title in ["alpha", "beta", "gamma"] {
        calendar.select_day(8).unwrap();
        fill_draft(&mut calendar, title, "desc", "rem");
        calendar.submit().unwrap();
    }
    let beta = calendar.store().events_for_day(month, 8)[1].clone();

    // Act - open the editor from the listing
    calendar.toggle_menu(beta.id()).unwrap();
    assert!(calendar.edit_event(8, beta.id()).unwrap());

    // Assert - form pre-filled, menu collapsed
    assert_eq!(
        calendar.editor(),
        EditorState::Edit {
            month,
            day: 8,
            id: beta.id()
        }
    );
    assert_eq!(calendar.draft().title, "beta");
    assert_eq!(calendar.menu().expanded(), None);

    // Act - save a new title
    calendar.set_field(EventField::Title, "omega".to_string());
    assert_eq!(calendar.submit().unwrap(), Some(beta.id()));

    // Assert - only the edited entry changed, order re-derived
    let events = calendar.store().events_for_day(month, 8);
    assert_titles(events, &["alpha", "gamma", "omega"]);
    assert_eq!(events[2].id(), beta.id());
    assert_eq!(events[2].description, "desc");
    assert_eq!(calendar.store().len(), 3);
}

#[test]
fn event_lifecycle_edit_of_unknown_event_does_nothing() {
    let mut calendar = calendar_at(StoreMode::Editable, 2024, 3, 1);
    calendar.select_day(8).unwrap();
    fill_draft(&mut calendar, "a", "b", "c");
    let id = calendar.submit().unwrap().unwrap();

    assert!(!calendar.edit_event(9, id).unwrap());
    assert_eq!(calendar.editor(), EditorState::Closed);
}

#[test]
fn event_lifecycle_distinguishes_identical_events() {
    let mut calendar = calendar_at(StoreMode::Editable, 2024, 3, 1);
    let month = calendar.month();
    let mut ids = Vec::new();
    for _ in 0..2 {
        calendar.select_day(4).unwrap();
        fill_draft(&mut calendar, "twin", "same", "same");
        ids.push(calendar.submit().unwrap().unwrap());
    }

    assert!(calendar.delete_event(4, ids[0], &mut accept).unwrap());

    let events = calendar.store().events_for_day(month, 4);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id(), ids[1]);
}

#[test]
fn event_lifecycle_delete_flow() {
    // Arrange
    let mut calendar = calendar_at(StoreMode::Editable, 2024, 3, 1);
    let month = calendar.month();
    calendar.select_day(20).unwrap();
    fill_draft(&mut calendar, "dentist", "checkup", "bring card");
    let id = calendar.submit().unwrap().unwrap();
    calendar.toggle_menu(id).unwrap();

    // Act - declined confirmation keeps the event
    assert!(!calendar.delete_event(20, id, &mut decline).unwrap());
    assert_eq!(calendar.store().events_for_day(month, 20).len(), 1);
    assert_eq!(calendar.menu().expanded(), Some(id));

    // Act - confirmed deletion removes it
    assert!(calendar.delete_event(20, id, &mut accept).unwrap());

    // Assert
    assert!(calendar.store().events_for_day(month, 20).is_empty());
    assert_eq!(calendar.menu().expanded(), None);
    assert!(!calendar.grid().day(20).unwrap().has_event);
    assert!(calendar.event_list().is_empty());
}

#[test]
fn event_lifecycle_delete_closes_editor_on_that_event() {
    let mut calendar = calendar_at(StoreMode::Editable, 2024, 3, 1);
    calendar.select_day(2).unwrap();
    fill_draft(&mut calendar, "a", "b", "c");
    let id = calendar.submit().unwrap().unwrap();

    calendar.edit_event(2, id).unwrap();
    calendar.delete_event(2, id, &mut accept).unwrap();

    assert_eq!(calendar.editor(), EditorState::Closed);
}

#[test]
fn event_lifecycle_close_discards_the_form() {
    let mut calendar = calendar_at(StoreMode::Editable, 2024, 3, 1);
    calendar.select_day(2).unwrap();
    fill_draft(&mut calendar, "a", "b", "c");

    calendar.close_editor();

    assert_eq!(calendar.editor(), EditorState::Closed);
    assert!(calendar.store().is_empty());
    assert_eq!(calendar.submit().unwrap(), None);
}
