use crossterm::event::KeyCode;

use crate::clock::Clock;

use crate::{
    app::{INVALID_LOGIN, PROJECTS_COMING_SOON, Screen},
    tests::{app_with_clock, ctrl, key, type_text},
};

fn log_in(app: &mut crate::app::App, username: &str, password: &str) {
    type_text(app, username);
    app.handle_key_for_test(key(KeyCode::Tab));
    type_text(app, password);
    app.handle_key_for_test(key(KeyCode::Enter));
}

#[test]
fn wrong_credentials_stay_on_login() {
    let (mut app, _) = app_with_clock();
    log_in(&mut app, "ezv5135", "wrong");
    assert_eq!(app.screen_for_test(), Screen::Login);
    assert_eq!(app.login_error_for_test(), Some(INVALID_LOGIN));

    app.handle_key_for_test(key(KeyCode::Esc));
    assert_eq!(app.login_error_for_test(), None);
}

#[test]
fn login_reaches_dashboard_then_talent() {
    let (mut app, _) = app_with_clock();
    log_in(&mut app, "ezv5135", "1234567");
    assert_eq!(app.screen_for_test(), Screen::Dashboard);
    assert!(app.form_for_test().is_none());

    app.handle_key_for_test(key(KeyCode::Enter));
    assert_eq!(app.screen_for_test(), Screen::Talent);
    assert!(app.form_for_test().is_some());
}

#[test]
fn projects_button_reports_coming_soon() {
    let (mut app, _) = app_with_clock();
    log_in(&mut app, "ezv5135", "1234567");
    app.handle_key_for_test(key(KeyCode::Tab));
    app.handle_key_for_test(key(KeyCode::Enter));
    assert_eq!(app.screen_for_test(), Screen::Dashboard);
    assert_eq!(app.status_for_test(), PROJECTS_COMING_SOON);
}

#[test]
fn leaving_talent_drops_the_form() {
    let (mut app, _) = app_with_clock();
    log_in(&mut app, "ezv5135", "1234567");
    app.handle_key_for_test(key(KeyCode::Enter));
    type_text(&mut app, "Ada");
    assert_eq!(app.form_for_test().unwrap().state().first_name(), "Ada");

    app.handle_key_for_test(key(KeyCode::Esc));
    assert_eq!(app.screen_for_test(), Screen::Dashboard);
    assert!(app.form_for_test().is_none());

    app.handle_key_for_test(key(KeyCode::Enter));
    assert_eq!(app.form_for_test().unwrap().state().first_name(), "");
}

#[test]
fn quit_needs_confirmation_only_with_unsaved_input() {
    let (mut app, _) = app_with_clock();
    app.handle_key_for_test(ctrl('q'));
    assert!(app.should_quit_for_test());

    let (mut app, _) = app_with_clock();
    log_in(&mut app, "ezv5135", "1234567");
    app.handle_key_for_test(key(KeyCode::Enter));
    type_text(&mut app, "Ada");
    app.handle_key_for_test(ctrl('q'));
    assert!(!app.should_quit_for_test());
    app.handle_key_for_test(ctrl('q'));
    assert!(app.should_quit_for_test());
}

#[test]
fn untouched_form_quits_without_confirmation_after_midnight() {
    let (mut app, clock) = app_with_clock();
    log_in(&mut app, "ezv5135", "1234567");
    app.handle_key_for_test(key(KeyCode::Enter));
    clock.set_today(clock.today().succ_opt().unwrap());
    app.handle_key_for_test(ctrl('q'));
    assert!(app.should_quit_for_test());
}
