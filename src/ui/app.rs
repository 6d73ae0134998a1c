//! Main TUI application state and logic

use crate::sim::worker::{spawn_simulation, SimulationHandle};
use crate::sim::TossSummary;
use crate::ui::panes::SequenceScrollState;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Upper bound on the count input. Seven digits keeps the largest run at
/// 9 999 999 tosses, comfortably past anything the grid needs to display.
const MAX_INPUT_DIGITS: usize = 7;

/// The main application state
pub struct App {
    /// Toss count input buffer, digits only
    pub toss_input: String,

    /// Result of the most recent completed run
    pub summary: Option<TossSummary>,

    /// Whether the sequence grid is displayed
    pub show_sequence: bool,

    /// In-flight simulation, if any. Replacing this handle supersedes the
    /// old run: its channel disconnects and the stale result is dropped.
    pub pending: Option<SimulationHandle>,

    /// Scroll state for the sequence pane
    pub sequence_scroll: SequenceScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app with the given initial toss count
    pub fn new(initial_tosses: usize) -> Self {
        App {
            toss_input: if initial_tosses > 0 {
                initial_tosses.to_string()
            } else {
                String::new()
            },
            summary: None,
            show_sequence: false,
            pending: None,
            sequence_scroll: SequenceScrollState::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Current toss count. The buffer only ever holds digits, capped at
    /// [`MAX_INPUT_DIGITS`], so the parse cannot overflow; an empty buffer
    /// means zero.
    pub fn tosses(&self) -> usize {
        self.toss_input.parse().unwrap_or(0)
    }

    /// Run the TUI application
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.poll_pending();

            // Poll with timeout so the pending-run indicator keeps animating
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Collect a finished background run, if one has arrived
    fn poll_pending(&mut self) {
        if let Some(handle) = &self.pending {
            if let Some(summary) = handle.try_recv() {
                self.status_message = format!(
                    "Tossed {} coins: {} heads, {} tails",
                    summary.total(),
                    summary.heads,
                    summary.tails
                );
                self.summary = Some(summary);
                self.pending = None;
                self.sequence_scroll.reset();
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Controls and results are fixed-height; the sequence grid takes the
        // rest, with the status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_controls_pane(
            frame,
            chunks[0],
            &self.toss_input,
            self.show_sequence,
        );

        super::panes::render_summary_pane(
            frame,
            chunks[1],
            self.summary.as_ref(),
            self.pending.as_ref(),
        );

        if self.show_sequence {
            if let Some(summary) = &self.summary {
                super::panes::render_sequence_pane(
                    frame,
                    chunks[2],
                    summary,
                    &mut self.sequence_scroll,
                );
            }
        } else if self.summary.is_some() {
            let hint = Paragraph::new("(sequence hidden, press s to show)")
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(hint, chunks[2]);
        }

        super::panes::render_status_bar(
            frame,
            chunks[3],
            &self.status_message,
            self.pending.is_some(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '0'..='9') => {
                if self.toss_input.len() < MAX_INPUT_DIGITS {
                    self.toss_input.push(c);
                    // A bare zero displays as the empty count
                    if self.toss_input == "0" {
                        self.toss_input.clear();
                    }
                    self.on_count_edited();
                }
            }
            KeyCode::Backspace => {
                if self.toss_input.pop().is_some() {
                    self.on_count_edited();
                }
            }
            KeyCode::Enter => {
                self.trigger_simulation();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.show_sequence = !self.show_sequence;
            }
            KeyCode::Up => {
                self.sequence_scroll.offset = self.sequence_scroll.offset.saturating_sub(1);
            }
            KeyCode::Down => {
                self.sequence_scroll.offset = self.sequence_scroll.offset.saturating_add(1);
            }
            KeyCode::PageUp => {
                let page = self.sequence_scroll.viewport_rows.max(1);
                self.sequence_scroll.offset = self.sequence_scroll.offset.saturating_sub(page);
            }
            KeyCode::PageDown => {
                let page = self.sequence_scroll.viewport_rows.max(1);
                self.sequence_scroll.offset = self.sequence_scroll.offset.saturating_add(page);
            }
            KeyCode::Home => {
                self.sequence_scroll.offset = 0;
            }
            KeyCode::End => {
                // Clamped to the last full viewport at render time
                self.sequence_scroll.offset = usize::MAX;
            }
            _ => {}
        }
    }

    /// Editing the count invalidates the displayed result
    fn on_count_edited(&mut self) {
        self.summary = None;
        self.sequence_scroll.reset();
        self.status_message = format!("Count set to {}", self.tosses());
    }

    /// Start a simulation run, superseding any run still in flight
    fn trigger_simulation(&mut self) {
        let tosses = self.tosses();
        if tosses == 0 {
            self.status_message = String::from("Enter a toss count first");
            return;
        }

        let superseded = self.pending.is_some();
        self.summary = None;
        self.sequence_scroll.reset();
        self.pending = Some(spawn_simulation(tosses));
        self.status_message = if superseded {
            format!("Restarted: {} tosses", tosses)
        } else {
            format!("Tossing {} coins...", tosses)
        };
    }
}
