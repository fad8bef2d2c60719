//! Statistics dashboard rendering

use crate::app::App;
use crate::state::StatsTab;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{BarChart, Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Draw the statistics view: chart tabs plus the active bar chart
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_chart_tabs(frame, chunks[0], app);
    draw_chart(frame, chunks[1], app);
}

fn draw_chart_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<&str> = [StatsTab::Experience, StatsTab::Profession, StatsTab::Age]
        .iter()
        .map(|tab| tab.label())
        .collect();

    let selected = match app.state.stats.active_tab {
        StatsTab::Experience => 0,
        StatsTab::Profession => 1,
        StatsTab::Age => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(" Charts "));
    frame.render_widget(tabs, area);
}

fn draw_chart(frame: &mut Frame, area: Rect, app: &App) {
    let stats = &app.state.stats;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", stats.active_tab.label()));

    if stats.loading {
        let message = Paragraph::new("Loading statistics...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    if stats.load_failed {
        let message = Paragraph::new("Failed to load statistics. Press r to retry.")
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let Some(data) = &stats.data else {
        frame.render_widget(block, area);
        return;
    };

    let labels = stats.active_tab.bucket_labels();
    let buckets = data.buckets(stats.active_tab);
    let bars = chart_bars(stats.active_tab, labels, buckets);

    let chart = BarChart::default()
        .data(&bars)
        .bar_width(14)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .block(block);
    frame.render_widget(chart, area);
}

/// Pair chart labels with bucket counts; extra entries on either side
/// are dropped, with a log line so the mismatch is visible.
fn chart_bars<'a>(tab: StatsTab, labels: &[&'a str], buckets: &[u64]) -> Vec<(&'a str, u64)> {
    if labels.len() != buckets.len() {
        tracing::debug!(
            tab = tab.label(),
            labels = labels.len(),
            buckets = buckets.len(),
            "series length does not match chart labels"
        );
    }
    labels
        .iter()
        .copied()
        .zip(buckets.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_bars_pairs_labels_with_counts() {
        let bars = chart_bars(StatsTab::Age, &["10-15", "15-20", "20-25"], &[3, 7, 2]);
        assert_eq!(bars, vec![("10-15", 3), ("15-20", 7), ("20-25", 2)]);
    }

    #[test]
    fn test_chart_bars_truncates_extra_buckets() {
        let bars = chart_bars(StatsTab::Experience, &["Beginner", "Intermediate"], &[1, 2, 3, 4]);
        assert_eq!(bars, vec![("Beginner", 1), ("Intermediate", 2)]);
    }

    #[test]
    fn test_chart_bars_truncates_extra_labels() {
        let bars = chart_bars(StatsTab::Profession, &["School", "College"], &[9]);
        assert_eq!(bars, vec![("School", 9)]);
    }
}
