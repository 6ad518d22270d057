// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use moncal_core::{DAY_NAMES, DayCell, GridCell, MonthGrid, NO_EVENTS_MESSAGE};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::tui::calendar_store::{CalendarStore, Focus};
use crate::tui::component::{Component, Message};
use crate::tui::component_page::{centered, instructions};
use crate::tui::confirm_dialog::{ConfirmDialog, DIALOG_HEIGHT, DIALOG_WIDTH};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_editor::{EDITOR_HEIGHT, EventEditor};

const EDITOR_WIDTH: u16 = 60;

/// The whole screen: month grid, event list, status line and modals.
pub struct CalendarView {
    editor: EventEditor<CalendarStore>,
    editor_active: bool,
    confirm: ConfirmDialog,
}

impl CalendarView {
    pub fn new() -> Self {
        Self {
            editor: EventEditor::new(),
            editor_active: false,
            confirm: ConfirmDialog,
        }
    }

    /// Gives the editor the focus when it opens, and takes it back when it closes.
    fn sync_editor(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<CalendarStore>) {
        let open = store.borrow().calendar.editor().is_open();
        if open && !self.editor_active {
            self.editor.activate(dispatcher, store);
        } else if !open && self.editor_active {
            self.editor.deactivate(dispatcher, store);
        }
        self.editor_active = open;
    }

    fn on_main_key(&self, focus: Focus, event: KeyEvent) -> Option<Action> {
        use KeyCode::*;
        let action = match (focus, event.code) {
            (_, Char('[') | Char('p') | PageUp) => Action::PreviousMonth,
            (_, Char(']') | Char('n') | PageDown) => Action::NextMonth,
            (_, Tab | BackTab) => Action::ToggleFocus,
            (Focus::Grid, Left) => Action::MoveCursor(-1),
            (Focus::Grid, Right) => Action::MoveCursor(1),
            (Focus::Grid, Up) => Action::MoveCursor(-7),
            (Focus::Grid, Down) => Action::MoveCursor(7),
            (Focus::Grid, Enter) => Action::SelectDay,
            (Focus::List, Up) => Action::MoveSelection(-1),
            (Focus::List, Down) => Action::MoveSelection(1),
            (Focus::List, Enter) => Action::ToggleMenu,
            (Focus::List, Char('e')) => Action::EditFromMenu,
            (Focus::List, Char('d')) => Action::RequestDelete,
            _ => return None,
        };
        Some(action)
    }
}

impl Component<CalendarStore> for CalendarView {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let [grid_area, list_area] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(body);

        {
            let s = store.borrow();
            render_header(&s, header, buf);
            render_grid(&s, &s.calendar.grid(), grid_area, buf);
            render_list(&s, list_area, buf);
            render_status(&s, status, buf);
        }

        let (pending, editor_open) = {
            let s = store.borrow();
            (s.pending_delete.is_some(), s.calendar.editor().is_open())
        };
        if pending {
            self.confirm.render(store, dialog_area(area), buf);
        } else if editor_open {
            self.editor.render(store, editor_area(area), buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<CalendarStore>, area: Rect) -> Option<(u16, u16)> {
        let (pending, editor_open) = {
            let s = store.borrow();
            (s.pending_delete.is_some(), s.calendar.editor().is_open())
        };
        match !pending && editor_open {
            true => self.editor.get_cursor_position(store, editor_area(area)),
            false => None,
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (pending, editor_open, focus) = {
            let s = store.borrow();
            (
                s.pending_delete.is_some(),
                s.calendar.editor().is_open(),
                s.focus,
            )
        };

        if pending {
            return self
                .confirm
                .on_key(dispatcher, store, dialog_area(area), event)
                .or(Some(Message::Handled));
        }

        if editor_open {
            let msg = self
                .editor
                .on_key(dispatcher, store, editor_area(area), event);
            if msg == Some(Message::Exit) {
                dispatcher.dispatch(Action::CloseEditor);
            }
            self.sync_editor(dispatcher, store);
            return Some(Message::Handled);
        }

        if matches!(event.code, KeyCode::Char('q') | KeyCode::Esc) {
            return Some(Message::Exit);
        }

        let action = self.on_main_key(focus, event)?;
        dispatcher.dispatch(action);
        self.sync_editor(dispatcher, store);
        Some(Message::Handled)
    }
}

fn editor_area(area: Rect) -> Rect {
    centered(area, EDITOR_WIDTH, EDITOR_HEIGHT)
}

fn dialog_area(area: Rect) -> Rect {
    centered(area, DIALOG_WIDTH, DIALOG_HEIGHT)
}

fn render_header(store: &CalendarStore, area: Rect, buf: &mut Buffer) {
    let month = store.calendar.month();
    let mode = store.calendar.store().mode();
    Line::from(vec![
        "◀ ".dark_gray(),
        month.title().bold(),
        " ▶".dark_gray(),
    ])
    .centered()
    .render(area, buf);
    Line::from(format!("{mode} ").dark_gray())
        .right_aligned()
        .render(area, buf);
}

fn render_grid(store: &CalendarStore, grid: &MonthGrid, area: Rect, buf: &mut Buffer) {
    let focused = store.focus == Focus::Grid;
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(focus_style(focused));
    let inner = block.inner(area);
    block.render(area, buf);

    let [names_area, weeks_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    for (i, (name, area)) in DAY_NAMES.iter().zip(columns(names_area).iter()).enumerate() {
        let style = match i >= 5 {
            true => Style::new().red().bold(),
            false => Style::new().bold(),
        };
        Line::styled(*name, style).centered().render(*area, buf);
    }

    let weeks: Vec<&[GridCell]> = grid.weeks().collect();
    let rows = Layout::vertical(vec![Constraint::Ratio(1, weeks.len().max(1) as u32); weeks.len()])
        .split(weeks_area);
    for (week, row) in weeks.iter().zip(rows.iter()) {
        for (cell, area) in week.iter().zip(columns(*row).iter()) {
            if let GridCell::Day(day) = cell {
                let selected = focused && day.day == store.cursor;
                render_day(day, selected, *area, buf);
            }
        }
    }
}

fn render_day(cell: &DayCell, selected: bool, area: Rect, buf: &mut Buffer) {
    let mut number = Style::new();
    if cell.weekend {
        number = number.red();
    }
    if cell.has_event {
        number = number.yellow().bold();
    }

    let mut lines = vec![Line::styled(format!("{:>2}", cell.day), number)];
    lines.extend(
        cell.previews
            .iter()
            .map(|title| Line::from(title.as_str().cyan())),
    );
    if let Some(label) = cell.overflow_label() {
        lines.push(Line::from(label.dark_gray().italic()));
    }

    let mut paragraph = Paragraph::new(lines).block(Block::new().padding(Padding::left(1)));
    if selected {
        paragraph = paragraph.on_dark_gray();
    }
    paragraph.render(area, buf);
}

fn render_list(store: &CalendarStore, area: Rect, buf: &mut Buffer) {
    let focused = store.focus == Focus::List;
    let list = store.calendar.event_list();
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(focus_style(focused))
        .title(Line::from(format!(" {} ", list.heading()).bold()));

    if list.is_empty() {
        Paragraph::new(NO_EVENTS_MESSAGE.italic().dark_gray())
            .block(block)
            .render(area, buf);
        return;
    }

    let menu = store.calendar.menu();
    let mut lines = Vec::new();
    let mut selected_line = 0;
    let mut index = 0;
    for section in list.sections() {
        lines.push(Line::from(section.heading.as_str().bold().underlined()));
        for stored in section.events {
            let selected = focused && index == store.selection;
            if selected {
                selected_line = lines.len();
            }
            let marker = if selected { "› " } else { "  " };
            let title = Line::from(vec![
                marker.blue().bold(),
                "Title: ".dark_gray(),
                stored.title.as_str().bold(),
            ]);
            lines.push(if selected { title.reversed() } else { title });
            lines.push(Line::from(vec![
                "    Description: ".dark_gray(),
                stored.description.as_str().into(),
            ]));
            lines.push(Line::from(vec![
                "    Remark: ".dark_gray(),
                stored.remark.as_str().into(),
            ]));
            if menu.is_expanded(stored.id()) {
                lines.push(Line::from(vec![
                    "    ".into(),
                    "[e]".yellow().bold(),
                    " Edit  ".into(),
                    "[d]".yellow().bold(),
                    " Delete".into(),
                ]));
            }
            index += 1;
        }
    }

    let visible = block.inner(area).height as usize;
    let scroll = (selected_line + 4).saturating_sub(visible);
    Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0))
        .render(area, buf);
}

fn render_status(store: &CalendarStore, area: Rect, buf: &mut Buffer) {
    let line = match (&store.status, store.focus) {
        (Some(status), _) => Line::from(format!(" {status}").yellow()),
        (None, Focus::Grid) => instructions(&[
            ("Move", "<Arrows>"),
            ("Month", "<[ ]>"),
            ("Add", "<Enter>"),
            ("List", "<Tab>"),
            ("Quit", "<q>"),
        ]),
        (None, Focus::List) => instructions(&[
            ("Select", "<Up/Down>"),
            ("Menu", "<Enter>"),
            ("Edit", "<e>"),
            ("Delete", "<d>"),
            ("Grid", "<Tab>"),
            ("Quit", "<q>"),
        ]),
    };
    line.render(area, buf);
}

fn columns(area: Rect) -> [Rect; 7] {
    Layout::horizontal([Constraint::Ratio(1, 7); 7]).areas(area)
}

fn focus_style(focused: bool) -> Style {
    match focused {
        true => Style::new().blue(),
        false => Style::new().dark_gray(),
    }
}
