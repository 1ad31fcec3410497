//! Ready-set scan and idle advance.
//!
//! Every selection-based engine walks the same arena of process records:
//! pick the best ready process, or, when none is ready, jump the clock to
//! the next arrival among unfinished processes.

use super::SelectionRule;
use crate::models::Process;

/// Index of the best ready process at `now`, or `None` if nothing is ready.
///
/// Ready means `remaining_time > 0` and `arrival_time <= now`. Among equal
/// keys the lowest index wins.
pub fn select_ready<R>(processes: &[Process], now: i64, rule: &R) -> Option<usize>
where
    R: SelectionRule + ?Sized,
{
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_ready(now))
        .min_by_key(|(_, p)| rule.key(p))
        .map(|(i, _)| i)
}

/// Earliest arrival among unfinished processes.
///
/// When nothing is ready this is the instant the clock jumps to. `None`
/// means every process has completed and the simulation is over.
pub fn next_arrival(processes: &[Process]) -> Option<i64> {
    processes
        .iter()
        .filter(|p| p.is_pending())
        .map(|p| p.arrival_time)
        .min()
}

/// Earliest arrival across the whole set (simulation start).
pub fn earliest_arrival(processes: &[Process]) -> Option<i64> {
    processes.iter().map(|p| p.arrival_time).min()
}
