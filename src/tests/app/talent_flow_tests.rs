use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::{
    app::App,
    form::{ErrorField, FieldName, SUCCESS_MESSAGE},
    tests::{app_with_clock, ctrl, key, type_text},
};

fn open_talent(app: &mut App) {
    type_text(app, "ezv5135");
    app.handle_key_for_test(key(KeyCode::Tab));
    type_text(app, "1234567");
    app.handle_key_for_test(key(KeyCode::Enter));
    app.handle_key_for_test(key(KeyCode::Enter));
}

fn fill_valid_entry(app: &mut App) {
    for (name, text) in [
        (FieldName::FirstName, "Ada"),
        (FieldName::LastName, "Lovelace"),
        (FieldName::Position, "Engineer"),
        (FieldName::Location, "London"),
        (FieldName::Email, "ada@example.com"),
        (FieldName::PhoneNumber, "5551234567"),
        (FieldName::DraftSkill, "Rust"),
    ] {
        app.focus_talent_field_for_test(name);
        type_text(app, text);
    }
    app.handle_key_for_test(key(KeyCode::Enter));

    app.focus_talent_field_for_test(FieldName::ExperienceLevel);
    app.handle_key_for_test(key(KeyCode::Right));

    app.focus_talent_field_for_test(FieldName::EndDate);
    app.handle_key_for_test(key(KeyCode::Right));
}

#[test]
fn filled_entry_submits_and_clears_after_delay() {
    let (mut app, clock) = app_with_clock();
    open_talent(&mut app);
    fill_valid_entry(&mut app);
    let form = app.form_for_test().unwrap();
    assert!(form.is_valid(), "unexpected errors: {:?}", form.errors());

    app.handle_key_for_test(ctrl('s'));
    let records = app.submitted_for_test();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].first_name, "Ada");
    assert_eq!(records[0].experience_level, "Junior");
    assert_eq!(records[0].availability, "03/14/2025 - 03/15/2025");
    assert_eq!(records[0].skills, vec!["Rust".to_string()]);
    assert_eq!(
        app.form_for_test().unwrap().success_message(),
        Some(SUCCESS_MESSAGE)
    );

    clock.advance(Duration::from_millis(2999));
    app.tick_for_test();
    assert_eq!(app.form_for_test().unwrap().state().first_name(), "Ada");

    clock.advance(Duration::from_millis(1));
    app.tick_for_test();
    let form = app.form_for_test().unwrap();
    assert_eq!(form.state().first_name(), "");
    assert!(form.state().skills().is_empty());
    assert_eq!(form.success_message(), None);
    assert_eq!(app.status_for_test(), "Form cleared");
}

#[test]
fn second_submit_while_pending_is_ignored() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    fill_valid_entry(&mut app);
    app.handle_key_for_test(ctrl('s'));
    app.handle_key_for_test(ctrl('s'));
    assert_eq!(app.submitted_for_test().len(), 1);
    assert!(app.status_for_test().starts_with("Already submitted"));
}

#[test]
fn invalid_submit_reports_issue_count() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    app.handle_key_for_test(ctrl('s'));
    assert!(app.submitted_for_test().is_empty());
    assert_eq!(app.status_for_test(), "9 issue(s) remaining");
}

#[test]
fn manual_reset_cancels_the_pending_clear() {
    let (mut app, clock) = app_with_clock();
    open_talent(&mut app);
    fill_valid_entry(&mut app);
    app.handle_key_for_test(ctrl('s'));
    app.handle_key_for_test(ctrl('r'));
    assert_eq!(app.form_for_test().unwrap().success_message(), None);

    app.focus_talent_field_for_test(FieldName::FirstName);
    type_text(&mut app, "Grace");
    clock.advance(Duration::from_secs(5));
    app.tick_for_test();
    assert_eq!(app.form_for_test().unwrap().state().first_name(), "Grace");
}

#[test]
fn experience_popup_sets_the_chosen_level() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    app.focus_talent_field_for_test(FieldName::ExperienceLevel);
    app.handle_key_for_test(key(KeyCode::Enter));
    app.handle_key_for_test(key(KeyCode::Down));
    app.handle_key_for_test(key(KeyCode::Enter));
    let form = app.form_for_test().unwrap();
    assert_eq!(form.state().experience_level(), "Staff");
    assert!(!form.errors().contains(ErrorField::ExperienceLevel));
}

#[test]
fn catalog_chips_toggle_with_space() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    for _ in 0..10 {
        app.handle_key_for_test(key(KeyCode::Tab));
    }
    app.handle_key_for_test(key(KeyCode::Right));
    app.handle_key_for_test(key(KeyCode::Char(' ')));
    let form = app.form_for_test().unwrap();
    assert!(form.state().skills().contains("Java"));
    assert!(!form.errors().contains(ErrorField::Skills));

    app.handle_key_for_test(key(KeyCode::Char(' ')));
    assert!(app.form_for_test().unwrap().state().skills().is_empty());
}

#[test]
fn typed_start_date_applies_when_focus_moves_on() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    app.focus_talent_field_for_test(FieldName::StartDate);
    app.handle_key_for_test(key(KeyCode::Backspace));
    let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    assert_eq!(app.form_for_test().unwrap().state().start_date(), today);

    for _ in 0..9 {
        app.handle_key_for_test(key(KeyCode::Backspace));
    }
    type_text(&mut app, "2025-02-01");
    assert_eq!(app.form_for_test().unwrap().state().start_date(), today);

    app.handle_key_for_test(key(KeyCode::Tab));
    let form = app.form_for_test().unwrap();
    assert_eq!(
        form.state().start_date(),
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    );
    assert!(!form.errors().contains(ErrorField::Dates));
}

#[test]
fn enter_applies_a_typed_date_instead_of_submitting() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    app.focus_talent_field_for_test(FieldName::EndDate);
    for _ in 0..2 {
        app.handle_key_for_test(key(KeyCode::Backspace));
    }
    type_text(&mut app, "20");
    app.handle_key_for_test(key(KeyCode::Enter));
    let form = app.form_for_test().unwrap();
    assert_eq!(
        form.state().end_date(),
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    );
    assert_eq!(app.status_for_test(), "Editing End Date");
}

#[test]
fn unparseable_typed_date_is_dropped_on_focus_change() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    app.focus_talent_field_for_test(FieldName::StartDate);
    type_text(&mut app, "x");
    app.handle_key_for_test(key(KeyCode::Tab));
    let form = app.form_for_test().unwrap();
    assert_eq!(
        form.state().start_date(),
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    );
    assert!(app.status_for_test().contains("2025-03-14x"));
}

#[test]
fn re_adding_a_selected_skill_is_reported_as_duplicate() {
    let (mut app, _) = app_with_clock();
    open_talent(&mut app);
    for _ in 0..10 {
        app.handle_key_for_test(key(KeyCode::Tab));
    }
    app.handle_key_for_test(key(KeyCode::Right));
    app.handle_key_for_test(key(KeyCode::Char(' ')));

    app.focus_talent_field_for_test(FieldName::DraftSkill);
    type_text(&mut app, "Java");
    app.handle_key_for_test(key(KeyCode::Enter));
    let form = app.form_for_test().unwrap();
    assert_eq!(form.state().skills().len(), 1);
    assert_eq!(form.state().draft_skill(), "");
    assert_eq!(app.status_for_test(), "Skill 'Java' is already selected");
}
