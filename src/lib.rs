//! # Introduction
//!
//! `cointoss` simulates a configurable number of independent coin tosses and
//! presents the results in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui): aggregate counts with percentage bars,
//! and an optional scrollable grid of the full toss sequence.
//!
//! ## Pipeline
//!
//! ```text
//! Toss count → Simulation → TossSummary → Virtual window → TUI
//! ```
//!
//! 1. [`sim`] — tosses the coins: [`sim::simulate`] maps a trial count to a
//!    [`sim::TossSummary`]; [`sim::worker`] runs it on a background thread so
//!    the event loop keeps drawing while a large run is in flight.
//! 2. [`window`] — the virtualized grid geometry: given a sequence length and
//!    a row capacity, [`window::VirtualGrid`] computes which rows intersect
//!    the viewport for any scroll position, so only those rows are ever
//!    materialized.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Sequences in the hundreds of thousands of tosses stay cheap to display:
//! per frame the sequence pane touches a viewport's worth of rows plus a
//! fixed overscan margin, never the whole sequence.

pub mod sim;
pub mod ui;
pub mod window;
