//! End-of-run statistics.

use serde::{Deserialize, Serialize};

// ── WaitSummary ───────────────────────────────────────────────────────────────

/// Wait-time summary over completed trips.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaitSummary {
    /// Shortest completed wait, in rounds.
    pub min: u32,
    /// Longest completed wait, in rounds.
    pub max: u32,
    /// Mean wait over all completed trips.
    pub avg: f64,
}

// ── RunStats ──────────────────────────────────────────────────────────────────

/// The record a finished run returns.
///
/// `wait` is `None` when no passenger completed a trip — an all-waiting run
/// is a legitimate outcome, and there is no meaningful average to report for
/// it.  Callers must pattern-match rather than assume a summary exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Rounds simulated.
    pub rounds: u64,
    /// Passengers generated over the whole run.
    pub total_passengers: u64,
    /// Passengers who reached their target and left.
    pub completed: u64,
    /// Wait-time summary; `None` when `completed == 0`.
    pub wait: Option<WaitSummary>,
}

impl RunStats {
    /// Summarize a run from the completed-trip wait list.
    pub(crate) fn from_waits(rounds: u64, total_passengers: u64, waits: &[u32]) -> Self {
        let wait = match (waits.iter().min(), waits.iter().max()) {
            (Some(&min), Some(&max)) => {
                let sum: u64 = waits.iter().map(|&w| w as u64).sum();
                Some(WaitSummary {
                    min,
                    max,
                    avg: sum as f64 / waits.len() as f64,
                })
            }
            _ => None,
        };
        Self {
            rounds,
            total_passengers,
            completed: waits.len() as u64,
            wait,
        }
    }
}
