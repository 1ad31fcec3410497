//! Non-preemptive selection engine (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Start the clock at the earliest arrival.
//! 2. Select the best ready process by rule key (ties: lowest index).
//! 3. If nothing is ready, jump to the next arrival among unfinished processes.
//! 4. Run the selection to completion as one segment.
//!
//! # Complexity
//! O(n²): one linear scan per dispatch.

use super::{Scheduler, Simulation};
use crate::dispatching::{earliest_arrival, next_arrival, select_ready, SelectionRule};
use crate::models::{Process, Timeline, TimelineSegment};

/// Order in which completed processes are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionOrder {
    /// Same order as the input.
    #[default]
    Input,
    /// Order in which processes finished.
    Completion,
}

/// Runs the best ready process to completion, one at a time.
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler<R> {
    rule: R,
    order: CompletionOrder,
}

impl<R: SelectionRule> NonPreemptiveScheduler<R> {
    /// Creates an engine ranking ready processes by `rule`.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            order: CompletionOrder::Input,
        }
    }

    /// Sets the reporting order.
    pub fn with_completion_order(mut self, order: CompletionOrder) -> Self {
        self.order = order;
        self
    }
}

impl<R: SelectionRule> Scheduler for NonPreemptiveScheduler<R> {
    fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn run(&self, mut processes: Vec<Process>) -> Simulation {
        let mut timeline = Timeline::new();
        let mut finished: Vec<usize> = Vec::with_capacity(processes.len());
        let mut clock = earliest_arrival(&processes).unwrap_or(0);

        loop {
            let Some(idx) = select_ready(&processes, clock, &self.rule) else {
                match next_arrival(&processes) {
                    Some(arrival) => {
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let process = &mut processes[idx];
            process.dispatch(clock);

            let end = clock + process.remaining_time;
            timeline.push(TimelineSegment::new(&process.id, clock, end));
            process.execute(process.remaining_time);

            clock = end;
            process.complete(clock);
            finished.push(idx);
        }

        let processes = match self.order {
            CompletionOrder::Input => processes,
            CompletionOrder::Completion => finished
                .into_iter()
                .map(|i| processes[i].clone())
                .collect(),
        };

        Simulation {
            processes,
            timeline,
        }
    }
}
