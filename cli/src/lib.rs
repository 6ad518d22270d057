// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface and terminal UI of moncal.

mod cli;
mod cmd_calendar;
mod cmd_generate_completion;
mod config;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_calendar::CmdCalendar;
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
