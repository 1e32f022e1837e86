use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::app::LoginFocus;

use super::super::view::LoginView;

const MAIN_TITLE: &str = "Talent Management System";
const SUBTITLE: &str = "Find your resources, list your needs and...";
const DESCRIPTION: &str = "…achieve your project goals with the Talent Management System (TMS). \
With TMS, we provide innovative solutions to help businesses and teams effectively manage and \
grow their workforce. Whether you’re looking to add new talent, track skills, or manage \
resource requests, our platform is designed to simplify and streamline the talent management \
process.";

pub fn render_login(frame: &mut Frame<'_>, area: Rect, view: &LoginView<'_>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    render_intro(frame, columns[0]);
    render_form(frame, columns[1], view);
}

fn render_intro(frame: &mut Frame<'_>, area: Rect) {
    let width = area.width.saturating_sub(4).max(10) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            MAIN_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            SUBTITLE,
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
    ];
    lines.extend(
        wrap(DESCRIPTION, width)
            .into_iter()
            .map(|segment| Line::from(segment.into_owned())),
    );
    let intro = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(intro, area);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, view: &LoginView<'_>) {
    let block = Block::default()
        .title("Login or Sign Up")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let masked = "•".repeat(view.password_len);
    let inputs = [
        (LoginFocus::Username, "Username", view.username),
        (LoginFocus::Password, "Password", masked.as_str()),
    ];
    for (row, (focus, label, value)) in inputs.into_iter().enumerate() {
        let focused = view.focus == focus;
        let input = Paragraph::new(value.to_string()).block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        );
        frame.render_widget(input, rows[row]);
        if focused {
            let x = rows[row].x + 1 + value.width() as u16;
            frame.set_cursor_position((x.min(rows[row].right().saturating_sub(2)), rows[row].y + 1));
        }
    }

    if let Some(error) = view.error {
        let message = Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red));
        frame.render_widget(message, rows[2]);
    }

    let button = Paragraph::new(Line::from(Span::styled(
        "[ Login ]",
        button_style(view.focus == LoginFocus::Submit),
    )));
    frame.render_widget(button, rows[3]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

pub(super) fn button_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}
