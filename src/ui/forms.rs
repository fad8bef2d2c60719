//! Registration form rendering

use crate::app::App;
use crate::state::{Form, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the registration form view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // username
            Constraint::Length(3), // email
            Constraint::Length(3), // phone
            Constraint::Length(3), // age
            Constraint::Length(3), // profession
            Constraint::Length(3), // experience
            Constraint::Length(4), // comment (multiline)
            Constraint::Length(3), // buttons row
            Constraint::Min(0),
        ])
        .split(area);

    let form = &app.state.form;
    for index in 0..7 {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, form.active_field_index == index);
        }
    }

    draw_buttons_row(frame, chunks[7], app);
}

/// Draw a single form field.
///
/// Error highlighting wins over the inactive style but not over the
/// active one, so the cursor position stays visible while fixing input.
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if field.has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if field.is_selector() && is_active {
        format!("< {display_value} >")
    } else if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active && !field.is_selector() {
        "|"
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title = if field.has_error {
        format!(" {} (invalid) ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the Reset/Submit buttons, or the loading indicator while a
/// submission is in flight
fn draw_buttons_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let on_buttons_row = form.is_buttons_row_active();

    let line = if app.state.is_submitting() {
        // The submit affordance is withdrawn until the request settles
        Line::from(Span::styled(
            "  Submitting, please wait...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let button = |label: &str, index: usize| {
            let selected = on_buttons_row && form.selected_button == index;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("[ {label} ]"), style)
        };
        Line::from(vec![
            Span::raw("  "),
            button("Reset", 0),
            Span::raw("  "),
            button("Submit", 1),
        ])
    };

    let border_style = if on_buttons_row {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
