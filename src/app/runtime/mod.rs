use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::{
    form::{FieldName, TalentForm, TalentRecord},
    presentation::{self, DashboardView, LoginView, ScreenView, TalentView, UiContext},
};

use super::{
    dashboard::{DashboardButton, DashboardState, PROJECTS_COMING_SOON},
    input::{KeyAction, KeyDispatch, route},
    keymap::{self, KeymapContext},
    login::LoginState,
    navigation::{Navigator, Screen, Session},
    options::UiOptions,
    popup::PopupState,
    status::StatusLine,
    talent_screen::TalentScreen,
    terminal::TerminalGuard,
};

mod talent_ops;

pub(crate) struct App {
    title: String,
    options: UiOptions,
    session: Session,
    login: LoginState,
    dashboard: DashboardState,
    talent: TalentScreen,
    form: Option<TalentForm>,
    status: StatusLine,
    popup: Option<PopupState>,
    submitted: Vec<TalentRecord>,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(title: impl Into<String>, options: UiOptions) -> Self {
        Self {
            title: title.into(),
            options,
            session: Session::default(),
            login: LoginState::default(),
            dashboard: DashboardState::default(),
            talent: TalentScreen::default(),
            form: None,
            status: StatusLine::new(),
            popup: None,
            submitted: Vec::new(),
            exit_armed: false,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<Vec<TalentRecord>> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.options.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(width, height) => {
                        terminal.resize(Rect::new(0, 0, width, height))?;
                    }
                    Event::Mouse(_) => {}
                    Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
            self.on_tick();
        }
        Ok(std::mem::take(&mut self.submitted))
    }

    fn context(&self) -> KeymapContext {
        match self.session.screen() {
            Screen::Login => KeymapContext::Login,
            Screen::Dashboard => KeymapContext::Dashboard,
            Screen::Talent => KeymapContext::Talent,
        }
    }

    fn current_help_text(&self) -> Option<String> {
        if !self.options.show_help {
            return None;
        }
        keymap::help_text(self.context())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let help = self.current_help_text();
        let screen = match (self.session.screen(), self.form.as_ref()) {
            (Screen::Talent, Some(form)) => ScreenView::Talent(TalentView {
                form,
                start_date: self.talent.date_text(form, FieldName::StartDate),
                end_date: self.talent.date_text(form, FieldName::EndDate),
                pending_dates: [FieldName::StartDate, FieldName::EndDate]
                    .into_iter()
                    .filter(|name| self.talent.date_draft_pending(*name))
                    .collect(),
                catalog_cursor: self.talent.catalog_cursor(),
                custom_cursor: self.talent.custom_cursor(),
                focus: self.talent.focus(),
            }),
            (Screen::Dashboard, _) | (Screen::Talent, None) => {
                ScreenView::Dashboard(DashboardView {
                    focus: self.dashboard.focus(),
                })
            }
            (Screen::Login, _) => ScreenView::Login(LoginView {
                username: self.login.username(),
                password_len: self.login.password_len(),
                error: self.login.error(),
                focus: self.login.focus(),
            }),
        };
        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                status_message: self.status.message(),
                help: help.as_deref(),
                screen,
                popup: self.popup.as_ref().map(PopupState::as_render),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_popup_key(&key) {
            return;
        }

        match route(self.context(), &key) {
            KeyDispatch::Action(KeyAction::Quit) => {
                self.on_exit();
                return;
            }
            KeyDispatch::Action(action) => self.handle_action(action),
            KeyDispatch::Input(event) => self.handle_input(&event),
            KeyDispatch::None => {}
        }
        self.exit_armed = false;
    }

    fn handle_action(&mut self, action: KeyAction) {
        match (self.session.screen(), action) {
            (_, KeyAction::ResetStatus) => {
                self.login.clear_error();
                self.status.ready();
            }
            (Screen::Login, KeyAction::FocusStep(delta)) => self.login.focus_step(delta),
            (Screen::Login, KeyAction::Activate) => self.on_login(),
            (Screen::Dashboard, KeyAction::FocusStep(delta)) => self.dashboard.focus_step(delta),
            (Screen::Dashboard, KeyAction::Activate) => match self.dashboard.focus() {
                DashboardButton::Talent => self.navigate(Screen::Talent),
                DashboardButton::Projects => self.status.set_raw(PROJECTS_COMING_SOON),
            },
            (Screen::Talent, action) => self.handle_talent_action(action),
            _ => {}
        }
    }

    fn handle_input(&mut self, key: &KeyEvent) {
        match self.session.screen() {
            Screen::Login => {
                if self.login.handle_input(key) {
                    self.status.editing("login");
                }
            }
            Screen::Dashboard => {}
            Screen::Talent => self.handle_talent_input(key),
        }
    }

    fn on_login(&mut self) {
        if self.login.attempt(&self.options.credentials) {
            self.session.authenticate();
            self.navigate(Screen::Dashboard);
            self.status.ready();
        }
    }

    fn on_tick(&mut self) {
        if let Some(form) = self.form.as_mut()
            && form.tick()
        {
            self.talent.sync(form);
            self.status.form_cleared();
        }
    }

    fn on_exit(&mut self) {
        let dirty = self.form.as_ref().is_some_and(|form| !form.is_pristine());
        if self.options.confirm_exit && dirty && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}

/// Moves to `target` through the session, mounting a fresh talent form on
/// entry to the talent screen and dropping it on exit.
impl Navigator for App {
    fn navigate(&mut self, target: Screen) {
        let before = self.session.screen();
        self.session.navigate(target);
        let after = self.session.screen();
        if before == after {
            return;
        }
        if after == Screen::Talent {
            let form = TalentForm::new(self.options.catalog.clone(), self.options.clock())
                .with_reset_delay(self.options.reset_delay);
            self.talent = TalentScreen::default();
            self.form = Some(form);
        } else {
            self.form = None;
            self.popup = None;
        }
        self.status.ready();
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn handle_key_for_test(&mut self, key: KeyEvent) {
        self.handle_key(key)
    }

    pub(crate) fn tick_for_test(&mut self) {
        self.on_tick()
    }

    pub(crate) fn screen_for_test(&self) -> Screen {
        self.session.screen()
    }

    pub(crate) fn form_for_test(&self) -> Option<&TalentForm> {
        self.form.as_ref()
    }

    pub(crate) fn form_mut_for_test(&mut self) -> Option<&mut TalentForm> {
        self.form.as_mut()
    }

    pub(crate) fn login_error_for_test(&self) -> Option<&str> {
        self.login.error()
    }

    pub(crate) fn status_for_test(&self) -> &str {
        self.status.message()
    }

    pub(crate) fn submitted_for_test(&self) -> &[TalentRecord] {
        &self.submitted
    }

    pub(crate) fn should_quit_for_test(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn draw_for_test(&mut self, frame: &mut ratatui::Frame<'_>) {
        self.draw(frame)
    }
}
