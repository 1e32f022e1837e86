use crossterm::event::KeyEvent;
use tracing::{info, warn};

use super::{input::handle_text_edit, options::Credentials};

pub const INVALID_LOGIN: &str = "Invalid username or password";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LoginFocus {
    #[default]
    Username,
    Password,
    Submit,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 3] = [LoginFocus::Username, LoginFocus::Password, LoginFocus::Submit];

    fn step(self, delta: i32) -> Self {
        let len = Self::ORDER.len() as i32;
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0) as i32;
        Self::ORDER[(index + delta).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct LoginState {
    username: String,
    password: String,
    error: Option<String>,
    focus: LoginFocus,
}

impl LoginState {
    pub(crate) fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn focus(&self) -> LoginFocus {
        self.focus
    }

    pub(crate) fn focus_step(&mut self, delta: i32) {
        self.focus = self.focus.step(delta);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn handle_input(&mut self, key: &KeyEvent) -> bool {
        match self.focus {
            LoginFocus::Username => handle_text_edit(&mut self.username, key),
            LoginFocus::Password => handle_text_edit(&mut self.password, key),
            LoginFocus::Submit => false,
        }
    }

    /// Checks the typed pair; on success the inputs are cleared.
    pub(crate) fn attempt(&mut self, credentials: &Credentials) -> bool {
        if credentials.matches(&self.username, &self.password) {
            info!(username = %self.username, "login accepted");
            *self = LoginState::default();
            true
        } else {
            warn!(username = %self.username, "login rejected");
            self.error = Some(INVALID_LOGIN.to_string());
            false
        }
    }
}
