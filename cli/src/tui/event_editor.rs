// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::KeyEvent;
use ratatui::prelude::*;

use crate::tui::calendar_store::{CalendarStore, EventDraftLike};
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, FormItem, Input};
use crate::tui::component_page::{SinglePage, instructions};
use crate::tui::dispatcher::{Action, Dispatcher};

/// Height of the editor modal: three fields plus borders and margins.
pub const EDITOR_HEIGHT: u16 = 13;

/// The add/edit modal with its title, description and remark fields.
pub struct EventEditor<S: EventDraftLike>(SinglePage<S, Form<S, Box<dyn FormItem<S>>>>);

impl EventEditor<CalendarStore> {
    pub fn new() -> Self {
        let title = Box::new(|store: &CalendarStore| {
            store.calendar.editor().title().unwrap_or_default()
        });
        Self::with_title(title)
    }
}

impl<S: EventDraftLike + 'static> EventEditor<S> {
    pub fn with_title(title: Box<dyn Fn(&S) -> String>) -> Self {
        let hints = instructions(&[
            ("Prev", "<Up>"),
            ("Next", "<Down>"),
            ("Save", "<Enter>"),
            ("Close", "<Esc>"),
        ]);
        Self(SinglePage::new(title, hints, Form::new(fields())))
    }
}

impl<S: EventDraftLike> Component<S> for EventEditor<S> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.0.on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.0.deactivate(dispatcher, store);
    }
}

fn fields<S: EventDraftLike + 'static>() -> Vec<Box<dyn FormItem<S>>> {
    vec![
        Box::new(new_title()),
        Box::new(new_description()),
        Box::new(new_remark()),
    ]
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn<S: EventDraftLike>() -> Input<S, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl<S: EventDraftLike> Access<S, String> for $acc {
            fn get(store: &RefCell<S>) -> String {
                store.borrow().draft().$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

new_input!(new_title, "Title", TitleAccess, title, UpdateEventTitle);
new_input!(
    new_description,
    "Description",
    DescriptionAccess,
    description,
    UpdateEventDescription
);
new_input!(new_remark, "Remark", RemarkAccess, remark, UpdateEventRemark);
