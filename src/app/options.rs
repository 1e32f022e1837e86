use std::{sync::Arc, time::Duration};

use crate::{
    clock::{Clock, SystemClock},
    form::{DEFAULT_RESET_DELAY, SkillCatalog},
};

pub const DEFAULT_USERNAME: &str = "ezv5135";
pub const DEFAULT_PASSWORD: &str = "1234567";

/// Username/password pair accepted by the login screen.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub reset_delay: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    pub credentials: Credentials,
    pub(crate) catalog: SkillCatalog,
    pub(crate) clock: Arc<dyn Clock>,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            reset_delay: DEFAULT_RESET_DELAY,
            confirm_exit: true,
            show_help: true,
            credentials: Credentials::default(),
            catalog: SkillCatalog::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl std::fmt::Debug for UiOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiOptions")
            .field("tick_rate", &self.tick_rate)
            .field("reset_delay", &self.reset_delay)
            .field("confirm_exit", &self.confirm_exit)
            .field("show_help", &self.show_help)
            .field("credentials", &self.credentials)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_skill_catalog(mut self, catalog: SkillCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn skill_catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
