// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{EventId, MonthKey};

/// Which modal, if any, is open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,

    /// Adding a new event to a day.
    Add { month: MonthKey, day: u32 },

    /// Editing the stored event `id`.
    Edit {
        month: MonthKey,
        day: u32,
        id: EventId,
    },
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    /// The month and day the editor is scoped to.
    pub fn target(&self) -> Option<(MonthKey, u32)> {
        match *self {
            EditorState::Closed => None,
            EditorState::Add { month, day } | EditorState::Edit { month, day, .. } => {
                Some((month, day))
            }
        }
    }

    /// The event being edited.
    pub fn editing(&self) -> Option<EventId> {
        match *self {
            EditorState::Edit { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Modal heading such as "Add Event for 14".
    pub fn title(&self) -> Option<String> {
        match self {
            EditorState::Closed => None,
            EditorState::Add { day, .. } => Some(format!("Add Event for {day}")),
            EditorState::Edit { day, .. } => Some(format!("Edit Event for {day}")),
        }
    }
}

/// The inline action menu of the month listing; at most one entry is expanded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionMenu {
    expanded: Option<EventId>,
}

impl ActionMenu {
    pub fn expanded(&self) -> Option<EventId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: EventId) -> bool {
        self.expanded == Some(id)
    }

    /// Expands the menu of `id`, or collapses it if it is already expanded.
    pub fn toggle(&mut self, id: EventId) {
        self.expanded = match self.expanded {
            Some(current) if current == id => None,
            _ => Some(id),
        };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
