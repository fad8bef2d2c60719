//! About page rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the static about page
pub fn draw(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("  regform-tui"),
        Line::from(""),
        Line::from("  A terminal client for the event registration service."),
        Line::from(""),
        Line::from("  Fill in the registration form on the Register tab and"),
        Line::from("  submit it; invalid fields are highlighted in red. The"),
        Line::from("  Statistics tab shows aggregated registration data as"),
        Line::from("  bar charts."),
        Line::from(""),
        Line::from("  Set REGFORM_SERVER_URL to point at a different server."),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" About "));
    frame.render_widget(paragraph, area);
}
