//! Simulation quality metrics (KPIs).
//!
//! Computes request-level indicators from a completed simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Response | Mean of first dispatch - arrival |
//! | Makespan | Latest segment end |
//! | Idle Time | Sum of gaps between segments |
//! | CPU Utilization | Busy time / (makespan - earliest arrival) |
//! | Throughput | Processes / (makespan - earliest arrival) |
//!
//! Averages are plain arithmetic means over every returned process.

use crate::models::{Process, Timeline};

/// Simulation performance indicators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationKpi {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Longest single waiting time.
    pub max_waiting_time: i64,
    /// End of the last segment.
    pub makespan: i64,
    /// Total idle time between segments.
    pub idle_time: i64,
    /// Fraction of the schedule window the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit over the schedule window.
    pub throughput: f64,
    /// Number of hand-overs between different processes.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from completed processes and their timeline.
    ///
    /// An empty process set yields all-zero averages.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        let (avg_waiting_time, avg_turnaround_time, avg_response_time) = averages(processes);

        let max_waiting_time = processes
            .iter()
            .map(|p| p.waiting_time)
            .max()
            .unwrap_or(0);

        let makespan = timeline.makespan();
        let origin = processes
            .iter()
            .map(|p| p.arrival_time)
            .min()
            .unwrap_or(0);
        let window = makespan - origin;

        let (cpu_utilization, throughput) = if window <= 0 {
            (0.0, 0.0)
        } else {
            (
                timeline.busy_time() as f64 / window as f64,
                processes.len() as f64 / window as f64,
            )
        };

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            avg_response_time,
            max_waiting_time,
            makespan,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        }
    }
}

/// Mean waiting, turnaround and response time.
///
/// Returns zeros for an empty set. Sums are taken in `i128`, so times near
/// `i64::MAX` do not overflow.
pub fn averages(processes: &[Process]) -> (f64, f64, f64) {
    if processes.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let (waiting, turnaround, response) =
        processes.iter().fold((0i128, 0i128, 0i128), |(w, t, r), p| {
            (
                w + i128::from(p.waiting_time),
                t + i128::from(p.turnaround_time),
                r + i128::from(p.response_time),
            )
        });

    let n = processes.len() as f64;
    (waiting as f64 / n, turnaround as f64 / n, response as f64 / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineSegment;

    fn finished(id: &str, arrival: i64, burst: i64, start: i64, completion: i64) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.dispatch(start);
        p.execute(burst);
        p.complete(completion);
        p
    }

    #[test]
    fn test_kpi_basic() {
        let processes = vec![finished("A", 0, 3, 0, 3), finished("B", 1, 2, 3, 5)];
        let timeline = Timeline::from(vec![
            TimelineSegment::new("A", 0, 3),
            TimelineSegment::new("B", 3, 5),
        ]);

        let kpi = SimulationKpi::calculate(&processes, &timeline);
        assert!((kpi.avg_waiting_time - 1.0).abs() < 1e-10); // (0 + 2) / 2
        assert!((kpi.avg_turnaround_time - 3.5).abs() < 1e-10); // (3 + 4) / 2
        assert!((kpi.avg_response_time - 1.0).abs() < 1e-10); // (0 + 2) / 2
        assert_eq!(kpi.max_waiting_time, 2);
        assert_eq!(kpi.makespan, 5);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.4).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 1);
    }

    #[test]
    fn test_kpi_idle_utilization() {
        let processes = vec![finished("A", 2, 2, 2, 4), finished("B", 8, 2, 8, 10)];
        let timeline = Timeline::from(vec![
            TimelineSegment::new("A", 2, 4),
            TimelineSegment::new("B", 8, 10),
        ]);

        let kpi = SimulationKpi::calculate(&processes, &timeline);
        assert_eq!(kpi.idle_time, 4);
        // Window starts at the earliest arrival (2): busy 4 over 8
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_averages_non_integer() {
        let processes = vec![
            finished("A", 0, 1, 0, 1),
            finished("B", 0, 1, 1, 2),
            finished("C", 0, 1, 2, 3),
        ];
        let (w, t, r) = averages(&processes);
        assert!((w - 1.0).abs() < 1e-10);
        assert!((t - 2.0).abs() < 1e-10);
        assert!((r - 1.0).abs() < 1e-10);

        let processes = vec![finished("A", 0, 1, 0, 1), finished("B", 0, 2, 1, 3)];
        let (w, _, _) = averages(&processes);
        assert!((w - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_averages_near_time_limit() {
        let half = i64::MAX / 2;
        let processes = vec![
            finished("A", 0, half, 0, half),
            finished("B", 0, half, half, 2 * half),
        ];

        let (waiting, turnaround, _) = averages(&processes);
        let expected_turnaround = (half as f64 + (2 * half) as f64) / 2.0;
        assert!((waiting - half as f64 / 2.0).abs() / waiting < 1e-12);
        assert!((turnaround - expected_turnaround).abs() / turnaround < 1e-12);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SimulationKpi::calculate(&[], &Timeline::new());
        assert_eq!(kpi, SimulationKpi::default());
    }
}
