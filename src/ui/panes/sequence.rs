//! Toss sequence pane rendering
//!
//! This module renders the virtualized toss grid. The pane never walks the
//! whole sequence: it asks [`VirtualGrid::visible_window`] for the rows that
//! intersect the viewport and materializes tokens for those alone, so a
//! million-toss run scrolls as cheaply as a hundred-toss one.
//!
//! Each grid row shows the ordinal of its first toss in a right-aligned
//! gutter, followed by one colored `H`/`T` token per coin.

use crate::sim::{Outcome, TossSummary};
use crate::ui::theme::DEFAULT_THEME;
use crate::window::{VirtualGrid, ROW_CAPACITY};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Scroll state for the sequence pane
///
/// `viewport_rows` is refreshed on every render so key handlers can take
/// page-sized steps without knowing the layout.
pub struct SequenceScrollState {
    pub offset: usize,
    pub viewport_rows: usize,
}

impl SequenceScrollState {
    pub fn new() -> Self {
        SequenceScrollState {
            offset: 0,
            viewport_rows: 0,
        }
    }

    /// Reset to the top, keeping the measured viewport
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for SequenceScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the toss sequence pane
pub fn render_sequence_pane(
    frame: &mut Frame,
    area: Rect,
    summary: &TossSummary,
    scroll_state: &mut SequenceScrollState,
) {
    let block = Block::default()
        .title(" Toss Sequence ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if summary.sequence.is_empty() {
        let paragraph = Paragraph::new("(no tosses)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let viewport_rows = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    scroll_state.viewport_rows = viewport_rows;

    let grid = VirtualGrid::new(summary.sequence.len(), ROW_CAPACITY);
    scroll_state.offset = scroll_state.offset.min(grid.max_scroll(viewport_rows));

    let window = grid.visible_window(scroll_state.offset, viewport_rows);

    let mut visible_lines: Vec<Line> = Vec::with_capacity(viewport_rows);
    for row in &window {
        // Overscan rows fall outside the frame; the terminal has nowhere to
        // put them
        if row.top < scroll_state.offset || row.top >= scroll_state.offset + viewport_rows {
            continue;
        }

        let mut spans = vec![Span::styled(
            format!("{:>8} ", row.range.start + 1),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        for outcome in &summary.sequence[row.range.clone()] {
            let color = match outcome {
                Outcome::Heads => DEFAULT_THEME.heads,
                Outcome::Tails => DEFAULT_THEME.tails,
            };
            spans.push(Span::styled(
                format!(" {} ", outcome.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }
        visible_lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
