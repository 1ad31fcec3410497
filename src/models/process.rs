//! Process model.
//!
//! A process is the single schedulable unit of the simulator. It arrives at a
//! fixed instant, needs a fixed amount of CPU time, and leaves behind the
//! metrics the engines fill in as it runs.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Response | first dispatch - arrival |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the single simulated CPU.
///
/// Only `id`, `arrival_time`, `burst_time` and `priority` are inputs.
/// `remaining_time` and `start_time` are engine bookkeeping and never cross
/// the wire; the four metric fields are written once, at completion
/// (response time at first dispatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Display label. Unique within a request, never used for ordering.
    pub id: String,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed. Starts at `burst_time`, only decreases.
    #[serde(skip)]
    pub remaining_time: i64,
    /// Scheduling priority (lower = more important). Priority engines only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub priority: i32,
    /// First instant the process held the CPU. `None` until dispatched.
    #[serde(skip)]
    pub start_time: Option<i64>,
    /// Instant the last unit of work finished.
    #[serde(default)]
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    #[serde(default)]
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    #[serde(default)]
    pub waiting_time: i64,
    /// `start_time - arrival_time`.
    #[serde(default)]
    pub response_time: i64,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

impl Process {
    /// Creates a process with `remaining_time` already set to `burst_time`.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            priority: 0,
            start_time: None,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Clears all simulation state, leaving only the inputs.
    ///
    /// Deserialized processes arrive with `remaining_time == 0`; the
    /// simulator calls this on its private copy before any engine runs.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
        self.response_time = 0;
    }

    /// Whether all CPU work has been delivered.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process has ever held the CPU.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process still needs CPU and has arrived by `now`.
    #[inline]
    pub fn is_ready(&self, now: i64) -> bool {
        self.remaining_time > 0 && self.arrival_time <= now
    }

    /// Whether the process still needs CPU, arrived or not.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.remaining_time > 0
    }

    /// Records a dispatch at `now`.
    ///
    /// Only the first call captures `start_time` and `response_time`;
    /// resumptions after preemption leave them untouched.
    pub fn dispatch(&mut self, now: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
            self.response_time = now - self.arrival_time;
        }
    }

    /// Consumes `amount` units of remaining CPU time.
    #[inline]
    pub fn execute(&mut self, amount: i64) {
        self.remaining_time -= amount;
    }

    /// Finalizes completion metrics at `now`.
    pub fn complete(&mut self, now: i64) {
        self.completion_time = now;
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}
