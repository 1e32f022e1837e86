mod dashboard;
pub(crate) mod input;
pub(crate) mod keymap;
mod login;
mod navigation;
mod options;
mod popup;
mod runtime;
mod status;
mod talent_screen;
mod talent_ui;
mod terminal;

pub use dashboard::PROJECTS_COMING_SOON;
pub use login::INVALID_LOGIN;
pub use navigation::{Navigator, Screen, Session};
pub use options::{Credentials, DEFAULT_PASSWORD, DEFAULT_USERNAME, UiOptions};
pub use talent_ui::{DEFAULT_TITLE, TalentUI};

pub(crate) use dashboard::DashboardButton;
pub(crate) use login::LoginFocus;
pub(crate) use runtime::App;
pub(crate) use talent_screen::TalentFocus;
