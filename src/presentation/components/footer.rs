use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn render_header(frame: &mut Frame<'_>, area: Rect, title: &str) {
    let header = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

pub fn render_footer(
    frame: &mut Frame<'_>,
    area: Rect,
    help: Option<&str>,
    status_message: &str,
    error_count: usize,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let actions = help.unwrap_or(" ");
    let actions_widget = Paragraph::new(format!("Actions: {actions}"))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(actions_widget, rows[0]);

    let mut status = status_message.to_string();
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }
    let mut spans = vec![Span::raw("Status: "), Span::raw(status)];
    if error_count > 0 {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[! {error_count}]"),
            Style::default().fg(Color::Red).bg(Color::Black),
        ));
    }
    let status_widget = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(status_widget, rows[1]);
}
