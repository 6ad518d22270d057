// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::StoreMode;
use crate::grid::{GridOptions, PREVIEW_LIMIT, PREVIEW_TITLE_WIDTH};

/// The name of the application.
pub const APP_NAME: &str = "moncal";

/// Configuration of the calendar core.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// How days hold events and whether they can be edited.
    pub mode: StoreMode,

    /// Drop a day entry once its last event is deleted.
    pub prune_empty_days: bool,

    /// Number of titles previewed per day cell.
    pub preview_limit: usize,

    /// Characters kept from a previewed title.
    pub preview_title_width: usize,
}

impl Config {
    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            preview_limit: self.preview_limit,
            preview_title_width: self.preview_title_width,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: StoreMode::default(),
            prune_empty_days: false,
            preview_limit: PREVIEW_LIMIT,
            preview_title_width: PREVIEW_TITLE_WIDTH,
        }
    }
}
