//! Results pane with counts, percentages, and proportional bars

use crate::sim::worker::SimulationHandle;
use crate::sim::TossSummary;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label column plus count and percentage columns before the bar starts
const BAR_PREFIX_WIDTH: usize = 26;

/// Render the results pane
///
/// Three states: a run in flight (animated progress line), a finished
/// summary (count rows with bars), or neither (hint text).
pub fn render_summary_pane(
    frame: &mut Frame,
    area: Rect,
    summary: Option<&TossSummary>,
    pending: Option<&SimulationHandle>,
) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if let Some(handle) = pending {
        // Walking-dots indicator driven by elapsed time
        let dots = (handle.elapsed().as_millis() / 300) % 4;
        let text = format!(
            "Simulating {} tosses{}",
            handle.tosses(),
            ".".repeat(dots as usize + 1)
        );
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.secondary));
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(summary) = summary else {
        let paragraph = Paragraph::new("(no results yet, press Enter to toss)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let content_width = area.width.saturating_sub(2) as usize; // borders
    let bar_width = content_width.saturating_sub(BAR_PREFIX_WIDTH);

    let lines = vec![
        count_line(
            "Heads",
            summary.heads,
            summary.heads_pct(),
            DEFAULT_THEME.heads,
            bar_width,
        ),
        count_line(
            "Tails",
            summary.tails,
            summary.tails_pct(),
            DEFAULT_THEME.tails,
            bar_width,
        ),
        Line::from(vec![
            Span::styled("Total  ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!("{:>9}", summary.total()),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// One result row: label, count, percentage, proportional bar
fn count_line(label: &str, count: usize, pct: f64, color: Color, bar_width: usize) -> Line<'_> {
    let filled = ((pct / 100.0) * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);

    Line::from(vec![
        Span::styled(
            format!("{:<7}", label),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>9}", count),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            format!("{:>8.2}% ", pct),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ])
}
