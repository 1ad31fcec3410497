//! Built-in selection rules.
//!
//! # Rules
//!
//! - **SJF**: shortest total burst (non-preemptive selection)
//! - **SRTF**: shortest remaining time, preempted by shorter arrivals
//! - **PRIORITY**: lowest priority number, preempted by strictly better arrivals
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{SelectionKey, SelectionRule};
use crate::models::Process;

/// Shortest Job First.
///
/// Ranks by total burst time. Used by the non-preemptive SJF engine, where
/// a selected process always runs to completion.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> SelectionKey {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Ranks by remaining time. An arrival preempts when its full burst is
/// strictly shorter than what the running process will still owe at the
/// arrival instant.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, process: &Process) -> SelectionKey {
        process.remaining_time
    }

    fn preempts(&self, arriving: &Process, running: &Process, wait: i64) -> bool {
        arriving.burst_time < running.remaining_time - wait
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Priority scheduling.
///
/// Ranks by priority number (lower = more important). An arrival preempts
/// only with a strictly lower number; burst time plays no part.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> SelectionKey {
        SelectionKey::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst_key() {
        let mut p = Process::new("A", 0, 7);
        p.execute(5);
        // Burst, not remaining
        assert_eq!(ShortestBurst.key(&p), 7);
    }

    #[test]
    fn test_shortest_remaining_key() {
        let mut p = Process::new("A", 0, 7);
        p.execute(5);
        assert_eq!(ShortestRemaining.key(&p), 2);
    }

    #[test]
    fn test_srtf_preemption_accounts_for_wait() {
        let running = Process::new("A", 0, 5);
        let arriving = Process::new("B", 1, 2);
        // A owes 4 at t=1, B needs 2 → preempt
        assert!(ShortestRemaining.preempts(&arriving, &running, 1));
        // A owes 2 at t=3, B needs 2 → tie does not preempt
        assert!(!ShortestRemaining.preempts(&arriving, &running, 3));
    }

    #[test]
    fn test_priority_key_and_preemption() {
        let running = Process::new("A", 0, 5).with_priority(2);
        let better = Process::new("B", 1, 50).with_priority(1);
        let equal = Process::new("C", 1, 1).with_priority(2);
        assert_eq!(HighestPriority.key(&better), 1);
        assert!(HighestPriority.preempts(&better, &running, 1));
        assert!(!HighestPriority.preempts(&equal, &running, 1));
        // Elapsed wait plays no part in the default rule
        assert!(HighestPriority.preempts(&better, &running, 4));
        assert!(!HighestPriority.preempts(&equal, &running, 0));
    }

    #[test]
    fn test_rule_metadata() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(ShortestRemaining.description(), "Shortest Remaining Time First");
        assert_eq!(HighestPriority.name(), "PRIORITY");
    }
}
