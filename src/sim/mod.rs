//! Coin toss simulation
//!
//! This module defines the outcome types and the simulation engine itself.
//! [`simulate`] is a pure function from a trial count to a [`TossSummary`];
//! it keeps no state between calls and cannot fail for any count.
//!
//! Randomness comes from [`rand::rng`], the thread-local generator. Runs are
//! deliberately not seedable: every invocation is an independent experiment.

pub mod worker;

use rand::Rng;

/// Result of a single coin toss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Heads,
    Tails,
}

impl Outcome {
    /// Single-character display token for the sequence grid
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Heads => "H",
            Outcome::Tails => "T",
        }
    }
}

/// Aggregate result of one simulation run
///
/// Invariant: `heads + tails == sequence.len()`, and the counts agree with
/// the sequence contents. The sequence is in toss order, first toss first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TossSummary {
    pub heads: usize,
    pub tails: usize,
    pub sequence: Vec<Outcome>,
}

impl TossSummary {
    /// Total number of tosses in this run
    pub fn total(&self) -> usize {
        self.sequence.len()
    }

    /// Heads share as a percentage, 0.0 for an empty run
    pub fn heads_pct(&self) -> f64 {
        if self.sequence.is_empty() {
            0.0
        } else {
            self.heads as f64 / self.sequence.len() as f64 * 100.0
        }
    }

    /// Tails share as a percentage, 0.0 for an empty run
    pub fn tails_pct(&self) -> f64 {
        if self.sequence.is_empty() {
            0.0
        } else {
            self.tails as f64 / self.sequence.len() as f64 * 100.0
        }
    }
}

/// Toss a fair coin `tosses` times
///
/// Each toss is independent with probability 0.5 per side. `tosses == 0` is
/// valid and yields an empty summary.
pub fn simulate(tosses: usize) -> TossSummary {
    let mut rng = rand::rng();
    let mut heads = 0;
    let mut tails = 0;
    let mut sequence = Vec::with_capacity(tosses);

    for _ in 0..tosses {
        if rng.random_bool(0.5) {
            heads += 1;
            sequence.push(Outcome::Heads);
        } else {
            tails += 1;
            sequence.push(Outcome::Tails);
        }
    }

    TossSummary {
        heads,
        tails,
        sequence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_sequence() {
        let summary = simulate(500);

        assert_eq!(summary.total(), 500);
        assert_eq!(summary.heads + summary.tails, 500);

        let heads_in_sequence = summary
            .sequence
            .iter()
            .filter(|o| **o == Outcome::Heads)
            .count();
        assert_eq!(heads_in_sequence, summary.heads);
    }

    #[test]
    fn test_zero_tosses() {
        let summary = simulate(0);

        assert_eq!(summary.heads, 0);
        assert_eq!(summary.tails, 0);
        assert!(summary.sequence.is_empty());
        assert_eq!(summary.heads_pct(), 0.0);
        assert_eq!(summary.tails_pct(), 0.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let summary = simulate(1000);
        let sum = summary.heads_pct() + summary.tails_pct();
        assert!((sum - 100.0).abs() < 1e-9, "got {}", sum);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Outcome::Heads.label(), "H");
        assert_eq!(Outcome::Tails.label(), "T");
    }
}
