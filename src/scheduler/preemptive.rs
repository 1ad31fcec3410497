//! Preemptive selection engine (SRTF, preemptive Priority).
//!
//! # Algorithm
//!
//! 1. Start the clock at the earliest arrival with no running process.
//! 2. At each decision point select the best ready process (ties: lowest index).
//!    If it differs from the running one, close the running segment at the
//!    current clock and open a new one.
//! 3. Run until completion or until the earliest later arrival the rule says
//!    would preempt, whichever comes first.
//! 4. If nothing is ready, close any open segment and jump to the next arrival.
//!
//! A process selected again at consecutive decision points keeps one open
//! segment, so a segment spans every decision that kept it on the CPU.
//!
//! # Complexity
//! O(n²): each decision point scans the arena twice, and there are at most
//! one completion and one preemption per process.

use super::{Scheduler, Simulation};
use crate::dispatching::{earliest_arrival, next_arrival, select_ready, SelectionRule};
use crate::models::{Process, Timeline, TimelineSegment};

/// Always runs the best ready process, preempting on better arrivals.
#[derive(Debug, Clone)]
pub struct PreemptiveScheduler<R> {
    rule: R,
}

impl<R: SelectionRule> PreemptiveScheduler<R> {
    /// Creates an engine ranking ready processes by `rule`.
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// How long `running` keeps the CPU from `now`.
    ///
    /// Either its full remaining time, or the distance to the earliest
    /// arrival inside that window that the rule lets preempt it.
    fn run_length(&self, processes: &[Process], running: usize, now: i64) -> i64 {
        let current = &processes[running];
        let horizon = now + current.remaining_time;

        processes
            .iter()
            .filter(|p| p.is_pending() && p.arrival_time > now && p.arrival_time < horizon)
            .filter(|p| self.rule.preempts(p, current, p.arrival_time - now))
            .map(|p| p.arrival_time - now)
            .min()
            .unwrap_or(current.remaining_time)
    }
}

/// The segment currently occupying the CPU.
#[derive(Debug, Clone, Copy)]
struct OpenSegment {
    process: usize,
    start: i64,
}

impl OpenSegment {
    fn close(self, processes: &[Process], end: i64) -> TimelineSegment {
        TimelineSegment::new(&processes[self.process].id, self.start, end)
    }
}

impl<R: SelectionRule> Scheduler for PreemptiveScheduler<R> {
    fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn run(&self, mut processes: Vec<Process>) -> Simulation {
        let mut timeline = Timeline::new();
        let mut open: Option<OpenSegment> = None;
        let mut clock = earliest_arrival(&processes).unwrap_or(0);

        loop {
            let Some(idx) = select_ready(&processes, clock, &self.rule) else {
                if let Some(segment) = open.take() {
                    timeline.push(segment.close(&processes, clock));
                }
                match next_arrival(&processes) {
                    Some(arrival) => {
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            processes[idx].dispatch(clock);

            match open {
                Some(segment) if segment.process == idx => {}
                Some(segment) => {
                    timeline.push(segment.close(&processes, clock));
                    open = Some(OpenSegment {
                        process: idx,
                        start: clock,
                    });
                }
                None => {
                    open = Some(OpenSegment {
                        process: idx,
                        start: clock,
                    });
                }
            }

            let slice = self.run_length(&processes, idx, clock);
            clock += slice;

            let process = &mut processes[idx];
            process.execute(slice);

            if process.is_complete() {
                process.complete(clock);
                if let Some(segment) = open.take() {
                    timeline.push(segment.close(&processes, clock));
                }
            }
        }

        Simulation {
            processes,
            timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segments(sim: &Simulation) -> Vec<(&str, i64, i64)> {
        sim.timeline
            .iter()
            .map(|s| (s.process_id.as_str(), s.start_time, s.end_time))
            .collect()
    }

    #[test]
    fn test_srtf_preemption() {
        let sim = PreemptiveScheduler::srtf()
            .run(vec![Process::new("A", 0, 5), Process::new("B", 1, 2)]);
        assert_eq!(segments(&sim), vec![("A", 0, 1), ("B", 1, 3), ("A", 3, 7)]);

        let a = sim.process("A").unwrap();
        let b = sim.process("B").unwrap();
        assert_eq!(a.response_time, 0);
        assert_eq!(b.response_time, 0);
        assert_eq!(a.completion_time, 7);
        assert_eq!(a.waiting_time, 2);
        assert_eq!(b.waiting_time, 0);
    }

    #[test]
    fn test_srtf_tie_does_not_preempt() {
        // At t=2 A owes 2 and B needs 2 → A keeps the CPU
        let sim = PreemptiveScheduler::srtf()
            .run(vec![Process::new("A", 0, 4), Process::new("B", 2, 2)]);
        assert_eq!(segments(&sim), vec![("A", 0, 4), ("B", 4, 6)]);
    }

    #[test]
    fn test_srtf_earliest_preempting_arrival() {
        let sim = PreemptiveScheduler::srtf().run(vec![
            Process::new("A", 0, 10),
            Process::new("late", 6, 1),
            Process::new("early", 2, 3),
        ]);
        assert_eq!(
            segments(&sim),
            vec![("A", 0, 2), ("early", 2, 5), ("A", 5, 6), ("late", 6, 7), ("A", 7, 14)]
        );
        let a = sim.process("A").unwrap();
        assert_eq!(a.response_time, 0);
        assert_eq!(a.waiting_time, 4);
    }

    #[test]
    fn test_srtf_non_preempting_arrival_keeps_segment() {
        // B arrives while A runs but is longer than A's remainder
        let sim = PreemptiveScheduler::srtf()
            .run(vec![Process::new("A", 0, 3), Process::new("B", 1, 8)]);
        assert_eq!(segments(&sim), vec![("A", 0, 3), ("B", 3, 11)]);
    }

    #[test]
    fn test_srtf_idle_advance() {
        let sim = PreemptiveScheduler::srtf()
            .run(vec![Process::new("A", 0, 2), Process::new("B", 5, 2)]);
        assert_eq!(segments(&sim), vec![("A", 0, 2), ("B", 5, 7)]);
        assert_eq!(sim.process("B").unwrap().response_time, 0);
    }

    #[test]
    fn test_priority_preemption_ignores_burst() {
        let sim = PreemptiveScheduler::priority().run(vec![
            Process::new("A", 0, 4).with_priority(3),
            Process::new("B", 1, 10).with_priority(1),
        ]);
        assert_eq!(segments(&sim), vec![("A", 0, 1), ("B", 1, 11), ("A", 11, 14)]);
        let a = sim.process("A").unwrap();
        assert_eq!(a.response_time, 0);
        assert_eq!(a.waiting_time, 10);
    }

    #[test]
    fn test_priority_equal_arrival_does_not_preempt() {
        let sim = PreemptiveScheduler::priority().run(vec![
            Process::new("A", 0, 4).with_priority(2),
            Process::new("B", 1, 1).with_priority(2),
        ]);
        assert_eq!(segments(&sim), vec![("A", 0, 4), ("B", 4, 5)]);
    }

    #[test]
    fn test_priority_nested_preemption() {
        let sim = PreemptiveScheduler::priority().run(vec![
            Process::new("low", 0, 6).with_priority(5),
            Process::new("mid", 1, 3).with_priority(3),
            Process::new("high", 2, 1).with_priority(1),
        ]);
        assert_eq!(
            segments(&sim),
            vec![
                ("low", 0, 1),
                ("mid", 1, 2),
                ("high", 2, 3),
                ("mid", 3, 5),
                ("low", 5, 10)
            ]
        );
        // Input order is preserved
        assert_eq!(sim.processes[0].id, "low");
        assert_eq!(sim.process("mid").unwrap().response_time, 0);
    }
}
