use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::TalentFocus,
    form::{ErrorField, FieldName},
};

use super::super::view::TalentView;
use super::login::button_style;

const LABEL_WIDTH: usize = 18;

const TEXT_ROWS: [(FieldName, Option<ErrorField>); 7] = [
    (FieldName::FirstName, Some(ErrorField::FirstName)),
    (FieldName::LastName, Some(ErrorField::LastName)),
    (FieldName::Position, Some(ErrorField::Position)),
    (FieldName::ExperienceLevel, Some(ErrorField::ExperienceLevel)),
    (FieldName::Location, Some(ErrorField::Location)),
    (FieldName::Email, Some(ErrorField::Email)),
    (FieldName::PhoneNumber, Some(ErrorField::PhoneNumber)),
];

/// Lines of the form body plus the index of the focused line.
struct Body<'a> {
    lines: Vec<Line<'a>>,
    focus_line: usize,
    cursor: Option<(usize, usize)>,
}

impl<'a> Body<'a> {
    fn push(&mut self, line: Line<'a>, focused: bool) {
        if focused {
            self.focus_line = self.lines.len();
        }
        self.lines.push(line);
    }

    fn push_error(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            self.lines.push(Line::from(Span::styled(
                format!("{:width$}{message}", "", width = LABEL_WIDTH + 4),
                Style::default().fg(Color::Red),
            )));
        }
    }
}

pub fn render_talent(frame: &mut Frame<'_>, area: Rect, view: &TalentView<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .split(area);

    let tabs = Line::from(vec![
        Span::styled(
            " Add Talent ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(" Find Talent ", Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(
            "← Back to Dashboard",
            link_style(view.focus == TalentFocus::Back),
        ),
    ]);
    frame.render_widget(Paragraph::new(tabs), rows[0]);

    if let Some(message) = view.form.success_message() {
        let banner = Paragraph::new(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(banner, rows[1]);
    }

    let block = Block::default().title("Talent").borders(Borders::ALL);
    let inner = block.inner(rows[2]);
    frame.render_widget(block, rows[2]);

    let body = build_body(view);
    let height = inner.height as usize;
    let offset = if height == 0 {
        0
    } else {
        (body.focus_line + 2).saturating_sub(height)
    };
    if let Some((line, column)) = body.cursor
        && line >= offset
        && line < offset + height
    {
        let x = inner.x + column.min(inner.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position((x, inner.y + (line - offset) as u16));
    }
    let paragraph = Paragraph::new(body.lines).scroll((offset as u16, 0));
    frame.render_widget(paragraph, inner);
}

fn build_body<'a>(view: &'a TalentView<'a>) -> Body<'a> {
    let form = view.form;
    let errors = form.errors();
    let mut body = Body {
        lines: Vec::new(),
        focus_line: 0,
        cursor: None,
    };

    for (name, error) in TEXT_ROWS {
        let focused = view.focus == TalentFocus::Field(name);
        let value = form.state().display_value(name);
        let shown = if name == FieldName::ExperienceLevel && value.is_empty() {
            Span::styled(
                "Experience Level (←/→ or Enter)",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw(value.clone())
        };
        if focused && name != FieldName::ExperienceLevel {
            body.cursor = Some((body.lines.len(), LABEL_WIDTH + 4 + value.width()));
        }
        body.push(field_line(name.label(), shown, focused), focused);
        body.push_error(error.and_then(|field| errors.get(field)));
    }

    body.lines.push(Line::from(Span::styled(
        "Availability:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (name, text) in [
        (FieldName::StartDate, &view.start_date),
        (FieldName::EndDate, &view.end_date),
    ] {
        let focused = view.focus == TalentFocus::Field(name);
        let mut spans = vec![Span::raw(text.clone())];
        if view.pending_dates.contains(&name) {
            spans.push(Span::styled(
                "  (YYYY-MM-DD, Enter applies)",
                Style::default().fg(Color::DarkGray),
            ));
        } else if focused {
            spans.push(Span::styled(
                "  ←/→ one day",
                Style::default().fg(Color::DarkGray),
            ));
        }
        if focused {
            body.cursor = Some((body.lines.len(), LABEL_WIDTH + 4 + text.width()));
        }
        let mut line = field_line(name.label(), Span::raw(""), focused);
        line.spans.extend(spans);
        body.push(line, focused);
    }
    body.push_error(errors.get(ErrorField::Dates));

    let draft_focused = view.focus == TalentFocus::Field(FieldName::DraftSkill);
    let draft = form.state().draft_skill();
    if draft_focused {
        body.cursor = Some((body.lines.len(), LABEL_WIDTH + 4 + draft.width()));
    }
    let mut draft_line = field_line(
        FieldName::DraftSkill.label(),
        Span::raw(draft.to_string()),
        draft_focused,
    );
    draft_line.spans.push(Span::styled(
        "  (Enter adds)",
        Style::default().fg(Color::DarkGray),
    ));
    body.push(draft_line, draft_focused);

    let skills = form.skill_view();
    let catalog_focused = view.focus == TalentFocus::CatalogSkills;
    let chips = skills.catalog.iter().enumerate().map(|(index, chip)| {
        (
            chip.name,
            chip.highlighted,
            catalog_focused && index == view.catalog_cursor,
        )
    });
    body.push(chip_line("Skills", chips, catalog_focused), catalog_focused);

    let custom_focused = view.focus == TalentFocus::CustomSkills;
    let custom = skills
        .custom
        .iter()
        .enumerate()
        .map(|(index, name)| (*name, true, custom_focused && index == view.custom_cursor));
    let mut custom_line = chip_line("Added", custom, custom_focused);
    if skills.custom.is_empty() {
        custom_line
            .spans
            .push(Span::styled("none", Style::default().fg(Color::DarkGray)));
    }
    body.push(custom_line, custom_focused);
    body.push_error(errors.get(ErrorField::Skills));

    body.lines.push(Line::default());
    let submit_focused = view.focus == TalentFocus::Submit;
    let reset_focused = view.focus == TalentFocus::Reset;
    body.push(
        Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 4)),
            Span::styled("[ Add Talent ]", button_style(submit_focused)),
            Span::raw("  "),
            Span::styled("[ Reset ]", button_style(reset_focused)),
        ]),
        submit_focused || reset_focused,
    );
    if view.focus == TalentFocus::Back {
        body.focus_line = 0;
    }
    body
}

fn field_line<'a>(label: &str, value: Span<'a>, focused: bool) -> Line<'a> {
    let marker = if focused { "» " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{marker}{label:<width$}: ", width = LABEL_WIDTH), label_style),
        value,
    ])
}

fn chip_line<'a>(
    label: &str,
    chips: impl Iterator<Item = (&'a str, bool, bool)>,
    focused: bool,
) -> Line<'a> {
    let mut line = field_line(label, Span::raw(""), focused);
    for (name, highlighted, under_cursor) in chips {
        let mut style = if highlighted {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if under_cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        line.spans.push(Span::styled(format!("[{name}]"), style));
        line.spans.push(Span::raw(" "));
    }
    line
}

fn link_style(focused: bool) -> Style {
    let style = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED);
    if focused {
        style.bg(Color::Yellow).fg(Color::Black)
    } else {
        style
    }
}
