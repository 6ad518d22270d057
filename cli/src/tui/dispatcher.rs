// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PreviousMonth,
    NextMonth,
    /// Moves the day cursor by a number of days within the displayed month.
    MoveCursor(i32),
    /// Opens the add editor on the day under the cursor.
    SelectDay,
    ToggleFocus,
    /// Moves the selection in the event list.
    MoveSelection(i32),
    /// Expands or collapses the action menu of the selected entry.
    ToggleMenu,
    /// Opens the editor on the entry whose menu is expanded.
    EditFromMenu,
    /// Asks to delete the entry whose menu is expanded.
    RequestDelete,
    ConfirmDelete(bool),
    UpdateEventTitle(String),
    UpdateEventDescription(String),
    UpdateEventRemark(String),
    SubmitChanges,
    CloseEditor,
}
