// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use chrono::Datelike;
use moncal_core::{Calendar, CalendarError, EventDraft, EventField, EventId};

use crate::tui::dispatcher::{Action, Dispatcher};

/// Shown when `e` or `d` is pressed while no action menu is expanded.
pub const OPEN_MENU_HINT: &str = "Press Enter to open the event menu first";

/// Read access to the draft behind the event form.
pub trait EventDraftLike {
    fn draft(&self) -> &EventDraft;
}

/// Which pane receives navigation keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Grid,
    List,
}

#[derive(Debug)]
pub struct CalendarStore {
    pub calendar: Calendar,

    /// Day of the displayed month under the cursor.
    pub cursor: u32,
    pub focus: Focus,

    /// Index into the entries of the event list.
    pub selection: usize,

    /// The event waiting for the user to confirm its deletion.
    pub pending_delete: Option<(u32, EventId)>,

    /// Feedback of the last action, errors included.
    pub status: Option<String>,
}

impl CalendarStore {
    pub fn new(calendar: Calendar) -> Self {
        let cursor = calendar.navigator().current().day();
        Self {
            calendar,
            cursor,
            focus: Focus::default(),
            selection: 0,
            pending_delete: None,
            status: None,
        }
    }

    /// Day and id of the selected list entry.
    pub fn selected_entry(&self) -> Option<(u32, EventId)> {
        self.calendar
            .event_list()
            .entries()
            .nth(self.selection)
            .map(|(day, stored)| (day, stored.id()))
    }

    /// Day and id of the entry whose action menu is expanded.
    pub fn menu_entry(&self) -> Option<(u32, EventId)> {
        let expanded = self.calendar.menu().expanded()?;
        self.calendar
            .event_list()
            .entries()
            .find(|(_, stored)| stored.id() == expanded)
            .map(|(day, stored)| (day, stored.id()))
    }

    pub fn entry_count(&self) -> usize {
        self.calendar.event_list().entries().count()
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().reduce(action);
        }));
        dispatcher.register(callback);
    }

    pub fn reduce(&mut self, action: &Action) {
        self.status = None;
        let result = match action {
            Action::PreviousMonth => {
                self.calendar.previous_month();
                self.on_month_changed();
                Ok(())
            }
            Action::NextMonth => {
                self.calendar.next_month();
                self.on_month_changed();
                Ok(())
            }
            Action::MoveCursor(delta) => {
                let last = self.calendar.month().days_in_month() as i64;
                self.cursor = (self.cursor as i64 + *delta as i64).clamp(1, last) as u32;
                Ok(())
            }
            Action::SelectDay => self.calendar.select_day(self.cursor),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Grid => Focus::List,
                    Focus::List => Focus::Grid,
                };
                self.clamp_selection();
                Ok(())
            }
            Action::MoveSelection(delta) => {
                let last = self.entry_count().saturating_sub(1) as i64;
                self.selection = (self.selection as i64 + *delta as i64).clamp(0, last) as usize;
                Ok(())
            }
            Action::ToggleMenu => match self.selected_entry() {
                Some((_, id)) => self.calendar.toggle_menu(id),
                None => Ok(()),
            },
            Action::EditFromMenu => self.edit_from_menu(),
            Action::RequestDelete => self.request_delete(),
            Action::ConfirmDelete(answer) => self.confirm_delete(*answer),
            Action::UpdateEventTitle(v) => self.set_field(EventField::Title, v),
            Action::UpdateEventDescription(v) => self.set_field(EventField::Description, v),
            Action::UpdateEventRemark(v) => self.set_field(EventField::Remark, v),
            Action::SubmitChanges => match self.calendar.submit() {
                Ok(Some(id)) => {
                    tracing::debug!(%id, "event saved");
                    self.status = Some("Event saved".to_owned());
                    Ok(())
                }
                Ok(None) => Ok(()),
                Err(e) => Err(e),
            },
            Action::CloseEditor => {
                self.calendar.close_editor();
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::warn!(?action, error = %e, "action rejected");
            self.status = Some(e.to_string());
        }
    }

    fn on_month_changed(&mut self) {
        self.cursor = self.calendar.navigator().current().day();
        self.selection = 0;
        self.pending_delete = None;
    }

    fn clamp_selection(&mut self) {
        self.selection = self.selection.min(self.entry_count().saturating_sub(1));
    }

    fn set_field(&mut self, field: EventField, value: &str) -> Result<(), CalendarError> {
        self.calendar.set_field(field, value.to_owned());
        Ok(())
    }

    /// The entry the menu actions apply to, or `None` with a hint when no
    /// menu is expanded.
    fn menu_target(
        &mut self,
        operation: &'static str,
    ) -> Result<Option<(u32, EventId)>, CalendarError> {
        let mode = self.calendar.store().mode();
        if !mode.is_editable() {
            return Err(CalendarError::Unsupported { mode, operation });
        }

        let entry = self.menu_entry();
        if entry.is_none() {
            self.status = Some(OPEN_MENU_HINT.to_owned());
        }
        Ok(entry)
    }

    fn edit_from_menu(&mut self) -> Result<(), CalendarError> {
        let Some((day, id)) = self.menu_target("edit")? else {
            return Ok(());
        };
        if !self.calendar.edit_event(day, id)? {
            tracing::warn!(%id, day, "selected event vanished");
        }
        Ok(())
    }

    fn request_delete(&mut self) -> Result<(), CalendarError> {
        let Some(entry) = self.menu_target("delete")? else {
            return Ok(());
        };

        self.pending_delete = Some(entry);
        Ok(())
    }

    fn confirm_delete(&mut self, answer: bool) -> Result<(), CalendarError> {
        let Some((day, id)) = self.pending_delete.take() else {
            return Ok(());
        };

        if self.calendar.delete_event(day, id, &mut |_: &str| answer)? {
            self.status = Some("Event deleted".to_owned());
            self.clamp_selection();
        }
        Ok(())
    }
}

impl EventDraftLike for CalendarStore {
    fn draft(&self) -> &EventDraft {
        self.calendar.draft()
    }
}
