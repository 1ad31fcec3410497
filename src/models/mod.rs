//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling engine: the process
//! record, the CPU timeline it produces, and the algorithm selector.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | Textbook term | Visualization |
//! |------------|--------------|------------|
//! | Process | Job / PCB | Table row |
//! | TimelineSegment | Dispatch interval | Gantt bar |
//! | Timeline | Execution trace | Gantt chart |
//! | Algorithm | Scheduling policy | Algorithm selector |

mod algorithm;
mod process;
mod timeline;

pub use algorithm::Algorithm;
pub use process::Process;
pub use timeline::{IdleGap, Timeline, TimelineSegment};
