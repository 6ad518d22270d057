// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the moncal month-view calendar: date navigation, the in-memory
//! event store, and the view models a front end renders.

mod calendar;
mod config;
mod editor;
mod error;
mod event;
mod grid;
mod list;
mod month;
mod navigator;
mod store;

pub use crate::calendar::Calendar;
pub use crate::config::{APP_NAME, Config};
pub use crate::editor::{ActionMenu, EditorState};
pub use crate::error::CalendarError;
pub use crate::event::{Event, EventDraft, EventField, EventId, StoredEvent, compare_titles};
pub use crate::grid::{
    DayCell, GridCell, GridOptions, MonthGrid, PREVIEW_LIMIT, PREVIEW_TITLE_WIDTH, truncate_title,
};
pub use crate::list::{DaySection, MonthEventList, NO_EVENTS_MESSAGE};
pub use crate::month::{DAY_NAMES, MONTH_NAMES, MonthKey, is_weekend, weekday_index};
pub use crate::navigator::DateNavigator;
pub use crate::store::{Confirm, DELETE_CONFIRMATION, EventStore, StoreMode};
