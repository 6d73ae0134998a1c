//! Controls pane: toss count input and sequence toggle display

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the controls pane
pub fn render_controls_pane(
    frame: &mut Frame,
    area: Rect,
    toss_input: &str,
    show_sequence: bool,
) {
    let block = Block::default()
        .title(" Coin Toss Simulator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut input_spans = vec![Span::styled(
        "Tosses   ",
        Style::default().fg(DEFAULT_THEME.fg),
    )];
    if toss_input.is_empty() {
        input_spans.push(Span::styled(
            "0",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    } else {
        input_spans.push(Span::styled(
            toss_input.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ));
    }
    input_spans.push(Span::styled(
        "▏",
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    let toggle_spans = vec![
        Span::styled("Sequence ", Style::default().fg(DEFAULT_THEME.fg)),
        if show_sequence {
            Span::styled(
                "shown",
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("hidden", Style::default().fg(DEFAULT_THEME.comment))
        },
    ];

    let paragraph =
        Paragraph::new(vec![Line::from(input_spans), Line::from(toggle_spans)]).block(block);
    frame.render_widget(paragraph, area);
}
