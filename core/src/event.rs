// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cmp::Ordering, fmt, num::NonZeroU64, ops::Deref};

use icu_normalizer::DecomposingNormalizerBorrowed;
use icu_normalizer::properties::CanonicalCombiningClassMapBorrowed;

use crate::CalendarError;

/// A short text event attached to a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The title, also used for ordering.
    pub title: String,

    /// The description of the event.
    pub description: String,

    /// A free-form remark.
    pub remark: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        remark: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            remark: remark.into(),
        }
    }
}

/// Identifier assigned by the store when an event is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(NonZeroU64);

impl EventId {
    pub(crate) fn new(id: NonZeroU64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An event as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEvent {
    id: EventId,
    event: Event,
}

impl StoredEvent {
    pub(crate) fn new(id: EventId, event: Event) -> Self {
        Self { id, event }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub(crate) fn replace(&mut self, event: Event) {
        self.event = event;
    }
}

impl Deref for StoredEvent {
    type Target = Event;

    fn deref(&self) -> &Event {
        &self.event
    }
}

/// The fields of an event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Title,
    Description,
    Remark,
}

impl EventField {
    /// All fields in form order.
    pub const ALL: [EventField; 3] = [Self::Title, Self::Description, Self::Remark];

    /// The form label.
    pub fn label(&self) -> &'static str {
        match self {
            EventField::Title => "Title",
            EventField::Description => "Description",
            EventField::Remark => "Remark",
        }
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unvalidated form input for an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub remark: String,
}

impl EventDraft {
    /// Pre-fills a draft from an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            remark: event.remark.clone(),
        }
    }

    pub fn field(&self, field: EventField) -> &str {
        match field {
            EventField::Title => &self.title,
            EventField::Description => &self.description,
            EventField::Remark => &self.remark,
        }
    }

    pub fn set_field(&mut self, field: EventField, value: String) {
        match field {
            EventField::Title => self.title = value,
            EventField::Description => self.description = value,
            EventField::Remark => self.remark = value,
        }
    }

    /// Turns the draft into an event, requiring every field to be non-empty.
    pub fn validate(&self) -> Result<Event, CalendarError> {
        if let Some(field) = EventField::ALL
            .into_iter()
            .find(|f| self.field(*f).is_empty())
        {
            return Err(CalendarError::MissingField { field });
        }

        Ok(Event {
            title: self.title.clone(),
            description: self.description.clone(),
            remark: self.remark.clone(),
        })
    }
}

/// Orders titles the way a locale-aware string comparison does. Letters
/// compare by their base form first, so accented letters sort next to the
/// unaccented ones regardless of case. Accents break ties before case does,
/// lowercase sorts before uppercase, and codepoints settle the rest.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let (a_base, a_full) = fold(a);
    let (b_base, b_full) = fold(b);

    a_base
        .cmp(&b_base)
        .then_with(|| a_full.cmp(&b_full))
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}

/// The lowercased canonical decomposition of `title`, without and with its
/// combining marks.
fn fold(title: &str) -> (String, String) {
    let nfd = DecomposingNormalizerBorrowed::new_nfd();
    let ccc = CanonicalCombiningClassMapBorrowed::new();

    let full: String = nfd
        .normalize_iter(title.chars())
        .flat_map(char::to_lowercase)
        .collect();
    let base = full.chars().filter(|&c| ccc.get_u8(c) == 0).collect();
    (base, full)
}

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() { 1 } else { 0 }
}
