mod app;
mod presentation;

use std::sync::Arc;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::{App, UiOptions},
    clock::ManualClock,
};

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

pub(crate) fn app_with_clock() -> (App, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(today()));
    let options = UiOptions::default().with_clock(clock.clone());
    (App::new("Talent Management System", options), clock)
}

pub(crate) fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub(crate) fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub(crate) fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_key_for_test(key(KeyCode::Char(ch)));
    }
}
