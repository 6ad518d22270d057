// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::editor::{ActionMenu, EditorState};
use crate::event::{EventDraft, EventField, EventId};
use crate::grid::{GridOptions, MonthGrid};
use crate::list::MonthEventList;
use crate::store::{Confirm, EventStore};
use crate::{CalendarError, Config, DateNavigator, MonthKey};

/// The month-view calendar: navigation, events, editor and list menu.
#[derive(Debug, Clone)]
pub struct Calendar {
    navigator: DateNavigator,
    store: EventStore,
    editor: EditorState,
    draft: EventDraft,
    menu: ActionMenu,
    options: GridOptions,
}

impl Calendar {
    /// Creates a calendar showing the month of `today`.
    pub fn new(config: &Config, today: NaiveDate) -> Self {
        Self {
            navigator: DateNavigator::new(today),
            store: EventStore::new(config.mode).with_pruning(config.prune_empty_days),
            editor: EditorState::Closed,
            draft: EventDraft::default(),
            menu: ActionMenu::default(),
            options: config.grid_options(),
        }
    }

    /// The displayed month.
    pub fn month(&self) -> MonthKey {
        self.navigator.month()
    }

    pub fn navigator(&self) -> &DateNavigator {
        &self.navigator
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn editor(&self) -> EditorState {
        self.editor
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn menu(&self) -> ActionMenu {
        self.menu
    }

    pub fn previous_month(&mut self) {
        self.navigator.previous_month();
    }

    pub fn next_month(&mut self) {
        self.navigator.next_month();
    }

    /// Clicks a day of the displayed month, opening the editor to add an event.
    pub fn select_day(&mut self, day: u32) -> Result<(), CalendarError> {
        let month = self.month();
        month.check_day(day)?;
        self.editor = EditorState::Add { month, day };
        self.draft = EventDraft::default();
        Ok(())
    }

    /// Opens the editor on a stored event with its fields pre-filled. Returns
    /// `false` when the event does not exist.
    pub fn edit_event(&mut self, day: u32, id: EventId) -> Result<bool, CalendarError> {
        self.require_editable("edit")?;

        let month = self.month();
        let Some(stored) = self.store.find_event(month, day, id) else {
            return Ok(false);
        };

        self.draft = EventDraft::from_event(stored.event());
        self.editor = EditorState::Edit { month, day, id };
        self.menu.collapse();
        Ok(true)
    }

    /// Expands or collapses the action menu of a listed event.
    pub fn toggle_menu(&mut self, id: EventId) -> Result<(), CalendarError> {
        self.require_editable("manage")?;
        self.menu.toggle(id);
        Ok(())
    }

    pub fn set_field(&mut self, field: EventField, value: String) {
        self.draft.set_field(field, value);
    }

    /// Saves the form. An empty field leaves everything untouched, including
    /// the open editor. Returns the saved event.
    pub fn submit(&mut self) -> Result<Option<EventId>, CalendarError> {
        let saved = match self.editor {
            EditorState::Closed => return Ok(None),
            EditorState::Add { month, day } => {
                let event = self.draft.validate()?;
                Some(self.store.add_event(month, day, event)?)
            }
            EditorState::Edit { month, day, id } => {
                let event = self.draft.validate()?;
                self.store
                    .update_event(month, day, id, event)?
                    .then_some(id)
            }
        };

        self.close_editor();
        Ok(saved)
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
        self.draft = EventDraft::default();
    }

    /// Deletes a listed event after `confirm` agrees.
    pub fn delete_event(
        &mut self,
        day: u32,
        id: EventId,
        confirm: &mut impl Confirm,
    ) -> Result<bool, CalendarError> {
        let deleted = self.store.delete_event(self.month(), day, id, confirm)?;
        if deleted {
            if self.menu.is_expanded(id) {
                self.menu.collapse();
            }
            if self.editor.editing() == Some(id) {
                self.close_editor();
            }
        }
        Ok(deleted)
    }

    /// The grid of the displayed month.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.month(), &self.store, self.options)
    }

    /// The events of the displayed month.
    pub fn event_list(&self) -> MonthEventList<'_> {
        MonthEventList::build(self.month(), &self.store)
    }

    fn require_editable(&self, operation: &'static str) -> Result<(), CalendarError> {
        match self.store.mode().is_editable() {
            true => Ok(()),
            false => Err(CalendarError::Unsupported {
                mode: self.store.mode(),
                operation,
            }),
        }
    }
}
