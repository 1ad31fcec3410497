//! Timeline (Gantt) model.
//!
//! A timeline is the ordered list of CPU-occupancy segments one simulation
//! produced. Engines append segments in time order, so the list is always
//! sorted by start time; gaps between consecutive segments are idle CPU.

use serde::{Deserialize, Serialize};

/// One uninterrupted span `[start_time, end_time)` on the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    /// Process holding the CPU.
    pub process_id: String,
    /// Inclusive start.
    pub start_time: i64,
    /// Exclusive end.
    pub end_time: i64,
}

impl TimelineSegment {
    /// Creates a new segment.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the segment.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// An idle interval between two segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleGap {
    /// Instant the CPU went idle.
    pub start_time: i64,
    /// Instant the next segment began.
    pub end_time: i64,
}

impl IdleGap {
    /// Length of the gap.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Segments of one simulation, in time order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: TimelineSegment) {
        self.segments.push(segment);
    }

    /// All segments, sorted by start time.
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Consumes the timeline, returning its segments.
    pub fn into_segments(self) -> Vec<TimelineSegment> {
        self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment was recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineSegment> {
        self.segments.iter()
    }

    /// Start of the first segment (0 when empty).
    pub fn start_time(&self) -> i64 {
        self.segments.first().map(|s| s.start_time).unwrap_or(0)
    }

    /// End of the last segment (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// Total time some process held the CPU.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(TimelineSegment::duration).sum()
    }

    /// Idle intervals between consecutive segments.
    ///
    /// Time before the first segment is not counted.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        self.segments
            .windows(2)
            .filter(|w| w[1].start_time > w[0].end_time)
            .map(|w| IdleGap {
                start_time: w[0].end_time,
                end_time: w[1].start_time,
            })
            .collect()
    }

    /// Total idle time between the first and last segment.
    pub fn idle_time(&self) -> i64 {
        self.idle_gaps().iter().map(IdleGap::duration).sum()
    }

    /// Segments belonging to one process.
    pub fn segments_for(&self, process_id: &str) -> Vec<&TimelineSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// CPU time delivered to one process.
    pub fn busy_time_for(&self, process_id: &str) -> i64 {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Number of times the CPU passed from one process to a different one.
    ///
    /// Idle gaps do not count as a switch on their own.
    pub fn context_switches(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineSegment;
    type IntoIter = std::slice::Iter<'a, TimelineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl From<Vec<TimelineSegment>> for Timeline {
    fn from(segments: Vec<TimelineSegment>) -> Self {
        Self { segments }
    }
}
