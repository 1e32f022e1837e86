use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Talent,
}

impl Screen {
    pub fn requires_auth(self) -> bool {
        !matches!(self, Screen::Login)
    }
}

/// Capability to move between screens.
pub trait Navigator {
    fn navigate(&mut self, target: Screen);
}

/// Which screen is showing and whether the user has logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
    authenticated: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            screen: Screen::Login,
            authenticated: false,
        }
    }
}

impl Session {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn authenticate(&mut self) {
        self.authenticated = true;
    }
}

impl Navigator for Session {
    fn navigate(&mut self, target: Screen) {
        let resolved = if target.requires_auth() && !self.authenticated {
            Screen::Login
        } else {
            target
        };
        if resolved != self.screen {
            info!(from = ?self.screen, to = ?resolved, "navigate");
        }
        self.screen = resolved;
    }
}
