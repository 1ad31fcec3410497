//! Scheduling engines and KPI evaluation.
//!
//! Each engine consumes a private copy of the process set and returns the
//! completed processes plus the CPU timeline.
//!
//! # Engines
//!
//! | Policy | Engine | Selection | Preemption |
//! |--------|--------|-----------|------------|
//! | FCFS | `FcfsScheduler` | arrival order | never |
//! | SJF | `NonPreemptiveScheduler<ShortestBurst>` | burst | never |
//! | SRTF | `PreemptiveScheduler<ShortestRemaining>` | remaining | shorter arrival |
//! | RR | `RoundRobinScheduler` | FIFO queue | quantum expiry |
//! | Priority | `NonPreemptiveScheduler<HighestPriority>` | priority | never |
//! | Priority (preemptive) | `PreemptiveScheduler<HighestPriority>` | priority | better arrival |
//!
//! # KPI
//!
//! `SimulationKpi` computes the average waiting, turnaround and response
//! times plus makespan, idle time, utilization and throughput.
//!
//! # Complexity
//! O(n²) for the selection engines, O(n · Σburst / quantum) for Round-Robin.

mod fcfs;
mod kpi;
mod non_preemptive;
mod preemptive;
mod round_robin;

pub use fcfs::FcfsScheduler;
pub use kpi::{averages, SimulationKpi};
pub use non_preemptive::{CompletionOrder, NonPreemptiveScheduler};
pub use preemptive::PreemptiveScheduler;
pub use round_robin::{RoundRobinScheduler, DEFAULT_QUANTUM};

use crate::dispatching::rules::{HighestPriority, ShortestBurst, ShortestRemaining};
use crate::models::{Algorithm, Process, Timeline};

/// Output of one engine run.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    /// Completed processes with their metrics filled in.
    pub processes: Vec<Process>,
    /// CPU occupancy, sorted by start time.
    pub timeline: Timeline,
}

impl Simulation {
    /// Finds a process by ID.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Whether every process has received its full burst.
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(Process::is_complete)
    }
}

/// A single-CPU scheduling engine.
pub trait Scheduler {
    /// Engine name for logs and reports.
    fn name(&self) -> &'static str;

    /// Runs the simulation to completion.
    ///
    /// `processes` must already have `remaining_time == burst_time`.
    fn run(&self, processes: Vec<Process>) -> Simulation;
}

/// A fully resolved scheduling policy: algorithm, preemption and quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Non-preemptive Shortest Job First.
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Round-Robin with the given quantum.
    RoundRobin { quantum: i64 },
    /// Non-preemptive Priority.
    Priority,
    /// Preemptive Priority.
    PreemptivePriority,
}

impl Policy {
    /// Resolves the request-level algorithm and flags into one policy.
    ///
    /// `is_preemptive` is ignored for FCFS and RR; `time_quantum` is ignored
    /// for everything but RR.
    pub fn resolve(algorithm: Algorithm, is_preemptive: bool, time_quantum: i64) -> Self {
        match (algorithm, is_preemptive) {
            (Algorithm::Fcfs, _) => Self::Fcfs,
            (Algorithm::Sjf, false) => Self::Sjf,
            (Algorithm::Sjf, true) => Self::Srtf,
            (Algorithm::RoundRobin, _) => Self::RoundRobin {
                quantum: time_quantum,
            },
            (Algorithm::Priority, false) => Self::Priority,
            (Algorithm::Priority, true) => Self::PreemptivePriority,
        }
    }

    /// Policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin { .. } => "RR",
            Self::Priority => "Priority",
            Self::PreemptivePriority => "Priority (preemptive)",
        }
    }

    /// Builds the engine implementing this policy.
    pub fn engine(&self) -> Box<dyn Scheduler> {
        match *self {
            Self::Fcfs => Box::new(FcfsScheduler),
            Self::Sjf => Box::new(NonPreemptiveScheduler::sjf()),
            Self::Srtf => Box::new(PreemptiveScheduler::srtf()),
            Self::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(quantum)),
            Self::Priority => Box::new(NonPreemptiveScheduler::priority()),
            Self::PreemptivePriority => Box::new(PreemptiveScheduler::priority()),
        }
    }

    /// Runs the matching engine.
    pub fn run(&self, processes: Vec<Process>) -> Simulation {
        self.engine().run(processes)
    }
}

impl NonPreemptiveScheduler<ShortestBurst> {
    /// Non-preemptive SJF. Reports processes in completion order.
    pub fn sjf() -> Self {
        Self::new(ShortestBurst).with_completion_order(CompletionOrder::Completion)
    }
}

impl NonPreemptiveScheduler<HighestPriority> {
    /// Non-preemptive Priority. Reports processes in input order.
    pub fn priority() -> Self {
        Self::new(HighestPriority)
    }
}

impl PreemptiveScheduler<ShortestRemaining> {
    /// Shortest Remaining Time First.
    pub fn srtf() -> Self {
        Self::new(ShortestRemaining)
    }
}

impl PreemptiveScheduler<HighestPriority> {
    /// Preemptive Priority.
    pub fn priority() -> Self {
        Self::new(HighestPriority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_preemption_flag() {
        assert_eq!(Policy::resolve(Algorithm::Sjf, false, 0), Policy::Sjf);
        assert_eq!(Policy::resolve(Algorithm::Sjf, true, 0), Policy::Srtf);
        assert_eq!(Policy::resolve(Algorithm::Priority, false, 0), Policy::Priority);
        assert_eq!(
            Policy::resolve(Algorithm::Priority, true, 0),
            Policy::PreemptivePriority
        );
    }

    #[test]
    fn test_resolve_ignores_irrelevant_flags() {
        assert_eq!(Policy::resolve(Algorithm::Fcfs, true, 5), Policy::Fcfs);
        assert_eq!(
            Policy::resolve(Algorithm::RoundRobin, true, 3),
            Policy::RoundRobin { quantum: 3 }
        );
    }

    #[test]
    fn test_policy_run_dispatches_engine() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 2)];
        let srtf = Policy::Srtf.run(processes.clone());
        let sjf = Policy::Sjf.run(processes);
        // SRTF splits A around B, SJF does not
        assert_eq!(srtf.timeline.len(), 3);
        assert_eq!(sjf.timeline.len(), 2);
        assert!(srtf.is_complete());
        assert!(sjf.is_complete());
    }

    #[test]
    fn test_policy_engine_names() {
        assert_eq!(Policy::Fcfs.engine().name(), "FCFS");
        assert_eq!(Policy::Sjf.engine().name(), "SJF");
        assert_eq!(Policy::Srtf.engine().name(), "SRTF");
        assert_eq!(Policy::RoundRobin { quantum: 2 }.engine().name(), "RR");
        assert_eq!(Policy::Priority.engine().name(), "PRIORITY");
        assert_eq!(Policy::PreemptivePriority.engine().name(), "PRIORITY");
    }

    #[test]
    fn test_simulation_lookup() {
        let sim = Policy::Fcfs.run(vec![Process::new("A", 0, 1)]);
        assert_eq!(sim.process("A").map(|p| p.completion_time), Some(1));
        assert!(sim.process("Z").is_none());
    }
}
