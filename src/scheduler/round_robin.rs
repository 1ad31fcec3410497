//! Round-Robin.
//!
//! # Algorithm
//!
//! 1. Seed the ready queue with every process arriving at the earliest instant.
//! 2. If the queue is empty, jump to the next arrival and enqueue every
//!    process arriving then (index order). Stop when nothing is left.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`.
//! 4. Append processes that arrived in `(slice_start, slice_end]`, in the
//!    order a scan of the input finds them (index order).
//! 5. Re-enqueue the dispatched process behind those arrivals, or finalize it.
//!
//! New arrivals always go ahead of a process returning at the same instant.
//!
//! # Complexity
//! O(n · Σburst / quantum): one arena scan per slice.

use std::collections::VecDeque;

use super::{Scheduler, Simulation};
use crate::dispatching::{earliest_arrival, next_arrival};
use crate::models::{Process, Timeline, TimelineSegment};

/// Quantum used when the requested one is not positive.
pub const DEFAULT_QUANTUM: i64 = 1;

/// FIFO ready queue with O(1) membership checks.
#[derive(Debug)]
struct ReadyQueue {
    queue: VecDeque<usize>,
    queued: Vec<bool>,
}

impl ReadyQueue {
    fn new(len: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(len),
            queued: vec![false; len],
        }
    }

    fn push(&mut self, idx: usize) {
        if !self.queued[idx] {
            self.queued[idx] = true;
            self.queue.push_back(idx);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let idx = self.queue.pop_front()?;
        self.queued[idx] = false;
        Some(idx)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Round-Robin engine with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates an engine. A non-positive quantum is clamped to
    /// [`DEFAULT_QUANTUM`].
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum: if quantum <= 0 { DEFAULT_QUANTUM } else { quantum },
        }
    }

    /// Effective quantum after clamping.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Enqueues every unfinished, unqueued process whose arrival lies in
    /// `(after, until]`, in index order.
    fn enqueue_arrivals(processes: &[Process], ready: &mut ReadyQueue, after: i64, until: i64) {
        for (idx, p) in processes.iter().enumerate() {
            if p.is_pending() && p.arrival_time > after && p.arrival_time <= until {
                ready.push(idx);
            }
        }
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, mut processes: Vec<Process>) -> Simulation {
        let mut timeline = Timeline::new();
        let mut ready = ReadyQueue::new(processes.len());

        let Some(mut clock) = earliest_arrival(&processes) else {
            return Simulation::default();
        };
        for (i, p) in processes.iter().enumerate() {
            if p.is_ready(clock) {
                ready.push(i);
            }
        }

        loop {
            if ready.is_empty() {
                let Some(arrival) = next_arrival(&processes) else {
                    break;
                };
                // Every unfinished process arrives after `clock` here, so this
                // picks up exactly the ones arriving at `arrival`.
                Self::enqueue_arrivals(&processes, &mut ready, clock, arrival);
                clock = arrival;
            }

            let Some(idx) = ready.pop() else {
                break;
            };

            let process = &mut processes[idx];
            process.dispatch(clock);

            let slice = self.quantum.min(process.remaining_time);
            let slice_start = clock;
            timeline.push(TimelineSegment::new(&process.id, slice_start, slice_start + slice));
            process.execute(slice);
            clock += slice;

            Self::enqueue_arrivals(&processes, &mut ready, slice_start, clock);

            let process = &mut processes[idx];
            if process.is_complete() {
                process.complete(clock);
            } else {
                ready.push(idx);
            }
        }

        Simulation {
            processes,
            timeline,
        }
    }
}
