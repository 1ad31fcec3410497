//! Selection rules and ready-set scanning.
//!
//! Provides the keys the selection-based engines (SJF, SRTF, Priority)
//! order ready processes by, and the shared scan that picks the next
//! process or advances the clock when nothing is ready.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, select_ready};
//! use cpu_schedule::models::Process;
//!
//! let processes = vec![Process::new("A", 0, 5), Process::new("B", 0, 2)];
//! assert_eq!(select_ready(&processes, 0, &rules::ShortestBurst), Some(1));
//! ```

mod ready;
pub mod rules;

pub use ready::{earliest_arrival, next_arrival, select_ready};

use crate::models::Process;
use std::fmt::Debug;

/// Ordering key returned by a selection rule.
///
/// Lower keys = dispatched first.
pub type SelectionKey = i64;

/// A rule that ranks ready processes and decides preemption.
///
/// # Key Convention
/// **Lower key = dispatched first.** Ties are never resolved by the rule;
/// the scan keeps the lowest input index among equal keys.
pub trait SelectionRule: Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Ranks a ready process.
    fn key(&self, process: &Process) -> SelectionKey;

    /// Whether `arriving`, reaching the CPU `wait` units after `running` was
    /// dispatched, would take the CPU from it.
    ///
    /// Defaults to a strictly better key.
    fn preempts(&self, arriving: &Process, running: &Process, _wait: i64) -> bool {
        self.key(arriving) < self.key(running)
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
