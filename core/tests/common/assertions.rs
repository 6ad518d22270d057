// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::cmp::Ordering;

use moncal_core::{StoredEvent, compare_titles};

/// Asserts that the titles of `events` equal `expected`, in order.
pub fn assert_titles(events: &[StoredEvent], expected: &[&str]) {
    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, expected, "Event titles mismatch");
}

/// Asserts that `events` are non-decreasing by title.
pub fn assert_sorted_by_title(events: &[StoredEvent]) {
    for pair in events.windows(2) {
        assert_ne!(
            compare_titles(&pair[0].title, &pair[1].title),
            Ordering::Greater,
            "'{}' sorted before '{}'",
            pair[0].title,
            pair[1].title
        );
    }
}
