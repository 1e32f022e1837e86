use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::DashboardButton;

use super::super::view::DashboardView;
use super::login::button_style;

const TABS: [&str; 2] = ["My Projects", "My Talent"];
const PLACEHOLDER: &str = "Functionality coming soon...";

pub fn render_dashboard(frame: &mut Frame<'_>, area: Rect, view: &DashboardView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(3),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Dashboard",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, rows[0]);

    let mut buttons = Vec::new();
    for button in DashboardButton::ALL {
        buttons.push(Span::styled(
            format!("[ {} ]", button.label()),
            button_style(view.focus == button),
        ));
        buttons.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(buttons)), rows[1]);

    let tabs: Vec<Span<'_>> = TABS
        .iter()
        .flat_map(|tab| {
            [
                Span::styled(format!(" {tab} "), Style::default().fg(Color::Gray)),
                Span::raw("│"),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(tabs)), rows[2]);

    let content = Paragraph::new(PLACEHOLDER).block(Block::default().borders(Borders::ALL));
    frame.render_widget(content, rows[3]);
}
