use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};

use crate::{
    app::{App, INVALID_LOGIN},
    form::{FieldName, SUCCESS_MESSAGE},
    tests::{app_with_clock, ctrl, key, type_text},
};

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
    terminal.draw(|frame| app.draw_for_test(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn open_talent(app: &mut App) {
    type_text(app, "ezv5135");
    app.handle_key_for_test(key(KeyCode::Tab));
    type_text(app, "1234567");
    app.handle_key_for_test(key(KeyCode::Enter));
    app.handle_key_for_test(key(KeyCode::Enter));
}

#[test]
fn login_masks_the_password_and_shows_errors() {
    let (mut app, _) = app_with_clock();
    type_text(&mut app, "ezv5135");
    app.handle_key_for_test(key(KeyCode::Tab));
    type_text(&mut app, "secret");
    app.handle_key_for_test(key(KeyCode::Enter));

    let screen = render(&mut app);
    assert!(screen.contains("ezv5135"));
    assert!(!screen.contains("secret"));
    assert!(screen.contains(INVALID_LOGIN));
}

#[test]
fn dashboard_shows_placeholder_tabs() {
    let (mut app, _) = app_with_clock();
    type_text(&mut app, "ezv5135");
    app.handle_key_for_test(key(KeyCode::Tab));
    type_text(&mut app, "1234567");
    app.handle_key_for_test(key(KeyCode::Enter));

    let screen = render(&mut app);
    assert!(screen.contains("My Projects"));
    assert!(screen.contains("My Talent"));
    assert!(screen.contains("Functionality coming soon..."));
}

#[test]
fn fresh_talent_form_lists_inline_errors() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    let screen = render(&mut app);
    assert!(screen.contains("Add Talent"));
    assert!(screen.contains("First Name is required"));
    assert!(screen.contains("Start date must be before end date"));
    assert!(screen.contains("[JavaScript]"));
}

#[test]
fn cursor_stays_inside_the_form_for_very_long_values() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    // Label column plus value lands just past u16::MAX.
    let value = "x".repeat(usize::from(u16::MAX) + 6 - 22);
    app.form_mut_for_test()
        .unwrap()
        .set_field(FieldName::FirstName, value)
        .unwrap();

    let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
    terminal.draw(|frame| app.draw_for_test(frame)).unwrap();
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!(cursor.x, 108);
}

#[test]
fn success_banner_is_rendered_while_reset_is_pending() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    for (name, text) in [
        (FieldName::FirstName, "Ada"),
        (FieldName::LastName, "Lovelace"),
        (FieldName::Position, "Engineer"),
        (FieldName::Location, "London"),
        (FieldName::Email, "ada@example.com"),
        (FieldName::PhoneNumber, "5551234567"),
    ] {
        app.focus_talent_field_for_test(name);
        type_text(&mut app, text);
    }
    app.focus_talent_field_for_test(FieldName::ExperienceLevel);
    app.handle_key_for_test(key(KeyCode::Right));
    app.focus_talent_field_for_test(FieldName::EndDate);
    app.handle_key_for_test(key(KeyCode::Right));
    for _ in 0..2 {
        app.handle_key_for_test(key(KeyCode::Tab));
    }
    app.handle_key_for_test(key(KeyCode::Char(' ')));
    app.handle_key_for_test(ctrl('s'));

    assert_eq!(app.submitted_for_test().len(), 1);
    let screen = render(&mut app);
    assert!(screen.contains(SUCCESS_MESSAGE));
}
