//! Single-processor CPU scheduling simulator.
//!
//! Given a set of processes (arrival, burst, optional priority) and an
//! algorithm, produces the CPU timeline and per-process waiting, turnaround
//! and response times for educational visualization.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `TimelineSegment`, `Timeline`, `Algorithm`
//! - **`dispatching`**: Selection rules (SJF, SRTF, PRIORITY) and the ready-set scan
//! - **`scheduler`**: The engines (FCFS, SJF, SRTF, RR, Priority) and `SimulationKpi`
//! - **`simulator`**: Request/response types and the `Simulator` dispatcher
//! - **`validation`**: Input checks (empty set, duplicate IDs, bad times)
//! - **`workload`**: Seeded random process sets
//! - **`render`**: Text Gantt chart and metrics table
//!
//! # Example
//!
//! ```
//! use cpu_schedule::{simulate, Algorithm, Process};
//!
//! let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 2)];
//! let response = simulate(&processes, Algorithm::Sjf, true, 0).unwrap();
//!
//! let spans: Vec<_> = response
//!     .timeline
//!     .iter()
//!     .map(|s| (s.process_id.as_str(), s.start_time, s.end_time))
//!     .collect();
//! assert_eq!(spans, vec![("A", 0, 1), ("B", 1, 3), ("A", 3, 7)]);
//! ```
//!
//! # Concurrency
//!
//! Every simulation works on its own copy of the input and shares no state,
//! so the crate can be called from any number of threads without locking.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-9

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod simulator;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use config::SimulatorConfig;
pub use error::{SimulationError, SimulationResult};
pub use models::{Algorithm, Process, Timeline, TimelineSegment};
pub use scheduler::{Policy, Simulation, SimulationKpi};
pub use simulator::{simulate, SimulationRequest, SimulationResponse, Simulator};
