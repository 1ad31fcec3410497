//! Seeded random workload generation.
//!
//! Produces process sets `P1..Pn` for demos and randomized testing. The same
//! seed always yields the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Generates random process sets.
///
/// # Example
///
/// ```
/// use cpu_schedule::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(7).with_count(5).generate();
/// assert_eq!(processes.len(), 5);
/// assert_eq!(processes[0].id, "P1");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    count: usize,
    max_arrival: i64,
    burst_range: (i64, i64),
    priority_range: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator: 5 processes, arrivals in 0..=10, bursts in
    /// 1..=8, priorities in 1..=5.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 5,
            max_arrival: 10,
            burst_range: (1, 8),
            priority_range: (1, 5),
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest possible arrival (clamped to >= 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst range (clamped to >= 1, ordered).
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst_range = (min, max.max(min));
        self
    }

    /// Sets the inclusive priority range (ordered).
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max.max(min));
        self
    }

    /// Generates the workload.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let (burst_min, burst_max) = self.burst_range;
        let (prio_min, prio_max) = self.priority_range;

        (1..=self.count)
            .map(|n| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(burst_min..=burst_max);
                let priority = rng.random_range(prio_min..=prio_max);
                Process::new(format!("P{n}"), arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
