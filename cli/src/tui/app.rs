// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use moncal_core::Calendar;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::calendar_view::CalendarView;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// Runs the calendar until the user quits, then returns the final state.
pub fn run_calendar(calendar: Calendar) -> Result<Calendar, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(CalendarStore::new(calendar)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        CalendarStore::register_to(store.clone(), &mut dispatcher);
        let mut view = CalendarView::new();

        loop {
            if let Err(e) = draw(&view, &store, &mut terminal) {
                break Err(e);
            }

            match read_event(&mut view, &mut dispatcher, &store, &mut terminal) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // render the next frame
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store.calendar)
}

fn draw(
    view: &CalendarView,
    store: &RefCell<CalendarStore>,
    terminal: &mut DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|frame| {
        let area = frame.area();
        view.render(store, area, frame.buffer_mut());
        if let Some(pos) = view.get_cursor_position(store, area) {
            frame.set_cursor_position(pos);
        }
    })?;
    Ok(())
}

fn read_event(
    view: &mut CalendarView,
    dispatcher: &mut Dispatcher,
    store: &RefCell<CalendarStore>,
    terminal: &mut DefaultTerminal,
) -> Result<Option<Message>, Box<dyn Error>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            Ok(view.on_key(dispatcher, store, area, key))
        }
        _ => Ok(None),
    }
}
