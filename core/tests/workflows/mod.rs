// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the moncal-core crate.
//!
//! These tests drive a `Calendar` the way a front end does: navigate, click a
//! day, fill the form, save, and read the derived grid and listing back.

mod event_lifecycle;
mod navigation;
mod store_modes;
