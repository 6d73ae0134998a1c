//! Background simulation runs
//!
//! Large runs (10^5 tosses and up) are tossed off the event-loop thread so
//! the UI keeps drawing while they are in flight. The handoff is a plain
//! mpsc channel polled from the event loop tick.
//!
//! Latest trigger wins: the app stores at most one [`SimulationHandle`] and
//! replaces it when the user retriggers. Dropping the old handle disconnects
//! its channel, so a stale worker's send fails and the result is discarded.

use super::{simulate, TossSummary};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Floor on how long a run appears to take. Keeps the running indicator
/// visible for small counts; nothing depends on this for correctness.
const RESULT_DELAY: Duration = Duration::from_millis(400);

/// Handle to a simulation running on a background thread
#[derive(Debug)]
pub struct SimulationHandle {
    tosses: usize,
    started: Instant,
    rx: mpsc::Receiver<TossSummary>,
    join: Option<JoinHandle<()>>,
}

impl SimulationHandle {
    /// Number of tosses this run was started with
    pub fn tosses(&self) -> usize {
        self.tosses
    }

    /// Time elapsed since the run was triggered
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Non-blocking poll for the finished summary
    pub fn try_recv(&self) -> Option<TossSummary> {
        self.rx.try_recv().ok()
    }

    /// Block until the run finishes and return its summary
    pub fn wait(mut self) -> Option<TossSummary> {
        let result = self.rx.recv().ok();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
        result
    }
}

/// Start a simulation of `tosses` coin tosses on a background thread
pub fn spawn_simulation(tosses: usize) -> SimulationHandle {
    let (tx, rx) = mpsc::channel::<TossSummary>();
    let join = std::thread::spawn(move || {
        std::thread::sleep(RESULT_DELAY);
        let summary = simulate(tosses);
        // Receiver may be gone if a newer run superseded this one
        let _ = tx.send(summary);
    });
    SimulationHandle {
        tosses,
        started: Instant::now(),
        rx,
        join: Some(join),
    }
}
