use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    app::{DashboardButton, LoginFocus, TalentFocus},
    form::{FieldName, TalentForm},
};

use super::components::{
    render_dashboard, render_footer, render_header, render_login, render_popup, render_talent,
};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub screen: ScreenView<'a>,
    pub popup: Option<PopupRender<'a>>,
}

pub enum ScreenView<'a> {
    Login(LoginView<'a>),
    Dashboard(DashboardView),
    Talent(TalentView<'a>),
}

pub struct LoginView<'a> {
    pub username: &'a str,
    pub password_len: usize,
    pub error: Option<&'a str>,
    pub(crate) focus: LoginFocus,
}

pub struct DashboardView {
    pub(crate) focus: DashboardButton,
}

pub struct TalentView<'a> {
    pub form: &'a TalentForm,
    pub start_date: String,
    pub end_date: String,
    /// Date slots holding typed text not applied to the form yet.
    pub pending_dates: Vec<FieldName>,
    pub catalog_cursor: usize,
    pub custom_cursor: usize,
    pub(crate) focus: TalentFocus,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

impl ScreenView<'_> {
    fn error_count(&self) -> usize {
        match self {
            ScreenView::Talent(view) => view.form.errors().len(),
            _ => 0,
        }
    }
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], ctx.title);
    match &ctx.screen {
        ScreenView::Login(view) => render_login(frame, chunks[1], view),
        ScreenView::Dashboard(view) => render_dashboard(frame, chunks[1], view),
        ScreenView::Talent(view) => render_talent(frame, chunks[1], view),
    }
    render_footer(
        frame,
        chunks[2],
        ctx.help,
        ctx.status_message,
        ctx.screen.error_count(),
    );

    if let Some(popup) = ctx.popup {
        render_popup(frame, popup);
    }
}
