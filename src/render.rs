//! Plain-text rendering of simulation results.
//!
//! [`GanttChart`] draws the timeline as a single bar with idle gaps filled by
//! `-`; [`MetricsTable`] lists per-process metrics and the averages.
//!
//! ```text
//! |  A  |  B  |-----|  C  |
//! 0     3     5     7     9
//! ```

use std::fmt;

use crate::models::Timeline;
use crate::simulator::SimulationResponse;

const MIN_CELL_WIDTH: usize = 5;

/// Text Gantt chart of a timeline.
#[derive(Debug, Clone, Copy)]
pub struct GanttChart<'a>(pub &'a Timeline);

struct Cell<'a> {
    label: &'a str,
    start: i64,
    idle: bool,
}

impl Cell<'_> {
    fn width(&self) -> usize {
        let label = if self.idle { 0 } else { self.label.len() + 2 };
        label
            .max(self.start.to_string().len() + 1)
            .max(MIN_CELL_WIDTH)
    }
}

impl fmt::Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeline = self.0;
        if timeline.is_empty() {
            return writeln!(f, "(empty timeline)");
        }

        let mut cells = Vec::with_capacity(timeline.len() * 2);
        let mut previous_end: Option<i64> = None;
        for segment in timeline {
            if let Some(end) = previous_end.filter(|&end| segment.start_time > end) {
                cells.push(Cell {
                    label: "",
                    start: end,
                    idle: true,
                });
            }
            cells.push(Cell {
                label: &segment.process_id,
                start: segment.start_time,
                idle: false,
            });
            previous_end = Some(segment.end_time);
        }

        for cell in &cells {
            let width = cell.width();
            if cell.idle {
                write!(f, "|{}", "-".repeat(width))?;
            } else {
                write!(f, "|{:^width$}", cell.label)?;
            }
        }
        writeln!(f, "|")?;

        for cell in &cells {
            write!(f, "{:<width$}", cell.start, width = cell.width() + 1)?;
        }
        writeln!(f, "{}", timeline.makespan())
    }
}

/// Per-process metrics table with averages.
#[derive(Debug, Clone, Copy)]
pub struct MetricsTable<'a>(pub &'a SimulationResponse);

impl fmt::Display for MetricsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.0;
        let id_width = response
            .processes
            .iter()
            .map(|p| p.id.len())
            .max()
            .unwrap_or(0)
            .max("Average".len());

        writeln!(
            f,
            "{:<id_width$}  {:>7}  {:>5}  {:>8}  {:>10}  {:>10}  {:>7}  {:>8}",
            "ID", "Arrival", "Burst", "Priority", "Completion", "Turnaround", "Waiting", "Response"
        )?;

        for p in &response.processes {
            writeln!(
                f,
                "{:<id_width$}  {:>7}  {:>5}  {:>8}  {:>10}  {:>10}  {:>7}  {:>8}",
                p.id,
                p.arrival_time,
                p.burst_time,
                p.priority,
                p.completion_time,
                p.turnaround_time,
                p.waiting_time,
                p.response_time
            )?;
        }

        writeln!(
            f,
            "{:<id_width$}  {:>7}  {:>5}  {:>8}  {:>10}  {:>10.2}  {:>7.2}  {:>8.2}",
            "Average",
            "",
            "",
            "",
            "",
            response.average_turnaround_time,
            response.average_waiting_time,
            response.average_response_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Algorithm, Process, TimelineSegment};
    use crate::simulator::simulate;

    #[test]
    fn test_gantt_contiguous() {
        let timeline = Timeline::from(vec![
            TimelineSegment::new("A", 0, 3),
            TimelineSegment::new("B", 3, 5),
        ]);
        let chart = GanttChart(&timeline).to_string();
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "|  A  |  B  |");
        assert_eq!(lines[1], "0     3     5");
    }

    #[test]
    fn test_gantt_idle_gap() {
        let timeline = Timeline::from(vec![
            TimelineSegment::new("A", 0, 3),
            TimelineSegment::new("B", 5, 6),
        ]);
        let chart = GanttChart(&timeline).to_string();
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "|  A  |-----|  B  |");
        assert_eq!(lines[1], "0     3     5     6");
    }

    #[test]
    fn test_gantt_wide_labels() {
        let timeline = Timeline::from(vec![TimelineSegment::new("worker", 0, 2)]);
        let chart = GanttChart(&timeline).to_string();
        assert!(chart.starts_with("| worker |"));
    }

    #[test]
    fn test_gantt_empty() {
        assert_eq!(GanttChart(&Timeline::new()).to_string(), "(empty timeline)\n");
    }

    #[test]
    fn test_metrics_table() {
        let response = simulate(
            &[Process::new("A", 0, 3), Process::new("B", 1, 2)],
            Algorithm::Fcfs,
            false,
            0,
        )
        .unwrap();
        let table = MetricsTable(&response).to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].starts_with("B"));
        assert!(lines[3].starts_with("Average"));
        assert!(lines[3].ends_with("1.00"));
    }
}
