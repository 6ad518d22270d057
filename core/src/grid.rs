// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use chrono::{Datelike, Weekday};
use unicode_segmentation::UnicodeSegmentation;

use crate::month::is_weekend;
use crate::{EventStore, MonthKey};

/// Number of titles previewed in a day cell.
pub const PREVIEW_LIMIT: usize = 2;

/// Characters kept from a title before it is cut off.
pub const PREVIEW_TITLE_WIDTH: usize = 10;

const ELLIPSIS: &str = "...";

/// Knobs for the day cell previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub preview_limit: usize,
    pub preview_title_width: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            preview_limit: PREVIEW_LIMIT,
            preview_title_width: PREVIEW_TITLE_WIDTH,
        }
    }
}

/// One slot of the 7-column grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before day 1.
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(cell) => Some(cell),
        }
    }
}

/// Everything a renderer needs to draw a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub weekday: Weekday,
    pub has_event: bool,
    pub weekend: bool,

    /// Truncated titles of the first events.
    pub previews: Vec<String>,

    /// Events not covered by the previews.
    pub overflow: usize,
}

impl DayCell {
    /// "+N more" when some events are not previewed.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}

/// View model of a month: leading blanks followed by one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: MonthKey,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn build(month: MonthKey, store: &EventStore, options: GridOptions) -> Self {
        let blanks = month.leading_blanks() as usize;
        let mut cells = Vec::with_capacity(blanks + month.days_in_month() as usize);
        cells.extend(std::iter::repeat_n(GridCell::Blank, blanks));

        for (day, date) in month.days() {
            let events = store.events_for_day(month, day);
            let weekday = date.weekday();
            let previews = events
                .iter()
                .take(options.preview_limit)
                .map(|e| truncate_title(&e.title, options.preview_title_width).into_owned())
                .collect();

            cells.push(GridCell::Day(DayCell {
                day,
                weekday,
                has_event: !events.is_empty(),
                weekend: is_weekend(weekday),
                previews,
                overflow: events.len().saturating_sub(options.preview_limit),
            }));
        }

        Self { month, cells }
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, GridCell::Blank))
            .count()
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        let index = self.leading_blanks() + (day as usize).checked_sub(1)?;
        self.cells.get(index).and_then(GridCell::as_day)
    }

    /// Rows of seven cells, the last one possibly shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }
}

/// Keeps at most `width` characters of `title`, appending "..." when
/// anything was cut.
pub fn truncate_title(title: &str, width: usize) -> Cow<'_, str> {
    match title.grapheme_indices(true).nth(width) {
        Some((byte_index, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &title[..byte_index])),
        None => Cow::Borrowed(title),
    }
}
