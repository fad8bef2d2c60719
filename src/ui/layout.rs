//! Screen layout and chrome shared by all views

use crate::app::App;
use crate::state::{ToastKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Split the screen into tab bar, main content, and status line
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the view tab bar
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<String> = [View::Register, View::Statistics, View::About]
        .iter()
        .enumerate()
        .map(|(i, view)| format!("F{} {}", i + 1, view.title()))
        .collect();

    let selected = match app.state.current_view {
        View::Register => 0,
        View::Statistics => 1,
        View::About => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Event Registration "),
        );
    frame.render_widget(tabs, area);
}

/// Draw the status line: toast if present, loading indicator while a
/// submission is in flight, otherwise key help
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(toast) = &app.state.toast {
        let style = match toast.kind {
            ToastKind::Success => Style::default().fg(Color::Green),
            ToastKind::Error => Style::default().fg(Color::Red),
        };
        Line::from(Span::styled(format!(" {}", toast.message), style))
    } else if app.state.is_submitting() {
        Line::from(Span::styled(
            " Submitting...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            help_text(app.state.current_view),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn help_text(view: View) -> &'static str {
    match view {
        View::Register => {
            " Tab/Up/Down move | Left/Right cycle | Enter next/submit | Ctrl+S submit | Ctrl+C quit"
        }
        View::Statistics => " Tab/Left/Right switch chart | r reload | q quit",
        View::About => " q quit",
    }
}
