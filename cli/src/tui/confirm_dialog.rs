// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use moncal_core::DELETE_CONFIRMATION;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::instructions;
use crate::tui::dispatcher::{Action, Dispatcher};

pub const DIALOG_WIDTH: u16 = 50;
pub const DIALOG_HEIGHT: u16 = 5;

/// Asks whether the pending event should be deleted.
#[derive(Debug, Default)]
pub struct ConfirmDialog;

impl Component<CalendarStore> for ConfirmDialog {
    fn render(&self, _store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(" Delete Event ".bold()).centered())
            .title_bottom(instructions(&[("Yes", "<y>"), ("No", "<n>")]).centered())
            .red();

        Clear.render(area, buf);
        Paragraph::new(DELETE_CONFIRMATION)
            .white()
            .centered()
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<CalendarStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let answer = match event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
            _ => return None,
        };
        dispatcher.dispatch(Action::ConfirmDelete(answer));
        Some(Message::Handled)
    }
}
