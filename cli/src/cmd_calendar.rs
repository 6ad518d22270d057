// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use chrono::{Local, NaiveDate};
use clap::{ArgMatches, Command};
use moncal_core::{Calendar, Config, MonthKey, StoreMode};

use crate::config::parse_config;
use crate::tui::run_calendar;
use crate::util::{arg_mode, arg_month, get_mode, get_month};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdCalendar {
    pub mode: Option<StoreMode>,
    pub month: Option<MonthKey>,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Open the month view, the default command")
            .arg(arg_mode())
            .arg(arg_month())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            mode: get_mode(matches),
            month: get_month(matches),
        }
    }

    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = self.apply(parse_config(config).await?);

        let calendar = Calendar::new(&config, self.start_date(Local::now().date_naive()));
        tracing::info!(mode = %config.mode, month = %calendar.month(), "opening calendar");
        let calendar = run_calendar(calendar)?;
        tracing::info!(events = calendar.store().len(), "calendar closed");
        Ok(())
    }

    /// Applies the command-line overrides on top of the configuration file.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        config
    }

    /// The date the navigator starts at.
    pub fn start_date(&self, today: NaiveDate) -> NaiveDate {
        match self.month {
            Some(month) if month != MonthKey::of(today) => month.first_day(),
            _ => today,
        }
    }
}
