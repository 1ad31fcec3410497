//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (equal arrivals keep input order).
//! 2. Run each to completion in that order, idling until its arrival if the
//!    CPU gets there first.
//!
//! One segment per process. Processes are reported in dispatch order.

use super::{Scheduler, Simulation};
use crate::models::{Process, Timeline, TimelineSegment};

/// First-Come-First-Served engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, mut processes: Vec<Process>) -> Simulation {
        processes.sort_by_key(|p| p.arrival_time);

        let mut timeline = Timeline::new();
        let mut clock = 0;

        for process in &mut processes {
            clock = clock.max(process.arrival_time);
            process.dispatch(clock);

            let end = clock + process.remaining_time;
            timeline.push(TimelineSegment::new(&process.id, clock, end));
            process.execute(process.remaining_time);

            clock = end;
            process.complete(clock);
        }

        Simulation {
            processes,
            timeline,
        }
    }
}
