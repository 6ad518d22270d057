// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod calendar_store;
mod calendar_view;
mod component;
mod component_form;
mod component_page;
mod confirm_dialog;
mod dispatcher;
mod event_editor;

pub use app::run_calendar;
