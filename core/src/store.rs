// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeMap, fmt, num::NonZeroU64};

use crate::event::{Event, EventId, StoredEvent, compare_titles};
use crate::{CalendarError, MonthKey};

/// Message shown before an event is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this event?";

/// How many events a day holds and whether they can be changed afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    /// One event per day, adding replaces it.
    Single,

    /// A title-sorted list per day, append only.
    List,

    /// A title-sorted list per day with edit and delete.
    #[default]
    Editable,
}

impl StoreMode {
    /// Whether days hold a sorted list rather than a single event.
    pub fn is_list(&self) -> bool {
        !matches!(self, StoreMode::Single)
    }

    /// Whether stored events can be edited and deleted.
    pub fn is_editable(&self) -> bool {
        matches!(self, StoreMode::Editable)
    }
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreMode::Single => write!(f, "single"),
            StoreMode::List => write!(f, "list"),
            StoreMode::Editable => write!(f, "editable"),
        }
    }
}

/// A yes/no question answered by the host before a destructive action.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

type Days = BTreeMap<u32, Vec<StoredEvent>>;

/// In-memory events, partitioned by month and day.
#[derive(Debug, Clone)]
pub struct EventStore {
    mode: StoreMode,
    prune_empty_days: bool,
    months: BTreeMap<MonthKey, Days>,
    next_id: NonZeroU64,
}

impl EventStore {
    pub fn new(mode: StoreMode) -> Self {
        Self {
            mode,
            prune_empty_days: false,
            months: BTreeMap::new(),
            next_id: NonZeroU64::MIN,
        }
    }

    /// Removes day and month entries once their last event is deleted.
    pub fn with_pruning(mut self, prune_empty_days: bool) -> Self {
        self.prune_empty_days = prune_empty_days;
        self
    }

    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    /// Adds an event to a day, creating the month and day entries on demand.
    pub fn add_event(
        &mut self,
        month: MonthKey,
        day: u32,
        event: Event,
    ) -> Result<EventId, CalendarError> {
        month.check_day(day)?;

        let id = self.allocate_id();
        let entry = self.months.entry(month).or_default().entry(day).or_default();
        let stored = StoredEvent::new(id, event);
        if self.mode.is_list() {
            entry.push(stored);
            sort_by_title(entry);
        } else {
            *entry = vec![stored];
        }

        tracing::debug!(%month, day, %id, "event added");
        Ok(id)
    }

    /// Replaces the fields of the event `id`, keeping its identity. Returns
    /// `false` without touching the store when no such event exists.
    pub fn update_event(
        &mut self,
        month: MonthKey,
        day: u32,
        id: EventId,
        event: Event,
    ) -> Result<bool, CalendarError> {
        self.require_editable("update")?;

        let Some(entry) = self.day_mut(month, day) else {
            return Ok(false);
        };
        let Some(stored) = entry.iter_mut().find(|e| e.id() == id) else {
            return Ok(false);
        };

        stored.replace(event);
        sort_by_title(entry);
        tracing::debug!(%month, day, %id, "event updated");
        Ok(true)
    }

    /// Deletes the event `id` once `confirm` agrees. Returns whether anything
    /// was removed.
    pub fn delete_event(
        &mut self,
        month: MonthKey,
        day: u32,
        id: EventId,
        confirm: &mut impl Confirm,
    ) -> Result<bool, CalendarError> {
        self.require_editable("delete")?;

        if !confirm.confirm(DELETE_CONFIRMATION) {
            tracing::debug!(%month, day, %id, "delete declined");
            return Ok(false);
        }

        let Some(entry) = self.day_mut(month, day) else {
            return Ok(false);
        };
        let before = entry.len();
        entry.retain(|e| e.id() != id);
        let removed = entry.len() != before;

        if removed && self.prune_empty_days {
            self.prune(month, day);
        }

        tracing::debug!(%month, day, %id, removed, "event deleted");
        Ok(removed)
    }

    /// The events of a day, empty when there are none.
    pub fn events_for_day(&self, month: MonthKey, day: u32) -> &[StoredEvent] {
        self.months
            .get(&month)
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find_event(&self, month: MonthKey, day: u32, id: EventId) -> Option<&StoredEvent> {
        self.events_for_day(month, day)
            .iter()
            .find(|e| e.id() == id)
    }

    /// Days of `month` that hold at least one event, ascending.
    pub fn days_with_events(&self, month: MonthKey) -> impl Iterator<Item = (u32, &[StoredEvent])> {
        self.months
            .get(&month)
            .into_iter()
            .flat_map(|days| days.iter())
            .filter(|(_, events)| !events.is_empty())
            .map(|(day, events)| (*day, events.as_slice()))
    }

    /// Whether an entry exists for the day, even an empty one.
    pub fn has_day_entry(&self, month: MonthKey, day: u32) -> bool {
        self.months
            .get(&month)
            .is_some_and(|days| days.contains_key(&day))
    }

    /// Total number of stored events.
    pub fn len(&self) -> usize {
        self.months
            .values()
            .flat_map(|days| days.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn allocate_id(&mut self) -> EventId {
        let id = EventId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn require_editable(&self, operation: &'static str) -> Result<(), CalendarError> {
        match self.mode.is_editable() {
            true => Ok(()),
            false => Err(CalendarError::Unsupported {
                mode: self.mode,
                operation,
            }),
        }
    }

    fn day_mut(&mut self, month: MonthKey, day: u32) -> Option<&mut Vec<StoredEvent>> {
        self.months.get_mut(&month).and_then(|days| days.get_mut(&day))
    }

    fn prune(&mut self, month: MonthKey, day: u32) {
        if let Some(days) = self.months.get_mut(&month) {
            if days.get(&day).is_some_and(Vec::is_empty) {
                days.remove(&day);
            }
            if days.is_empty() {
                self.months.remove(&month);
            }
        }
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new(StoreMode::default())
    }
}

fn sort_by_title(events: &mut [StoredEvent]) {
    events.sort_by(|a, b| compare_titles(&a.title, &b.title));
}
