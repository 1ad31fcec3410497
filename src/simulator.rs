//! Simulation dispatcher.
//!
//! # Flow
//!
//! 1. Validate the request (optional, on by default).
//! 2. Copy the processes and reset their bookkeeping; the caller's list is
//!    never touched.
//! 3. Resolve algorithm + preemption flag + quantum into one [`Policy`].
//! 4. Run the engine and aggregate the averages.
//!
//! Every call owns its copies, so one `Simulator` can serve concurrent
//! callers without locking.

use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SimulatorConfig;
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Algorithm, Process, Timeline};
use crate::scheduler::{averages, Policy, Simulation, SimulationKpi};
use crate::validation::validate_processes;

/// A simulation request, as received from the transport layer.
///
/// Parse wire input with [`from_json`](Self::from_json) or
/// [`from_reader`](Self::from_reader): an unrecognized algorithm name is
/// reported as [`SimulationError::UnknownAlgorithm`], separate from
/// malformed JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Algorithm family.
    pub algorithm: Algorithm,
    /// Preemption flag. Only SJF and Priority honor it.
    #[serde(default)]
    pub is_preemptive: bool,
    /// Round-Robin quantum. Ignored by every other algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<i64>,
    /// Processes to schedule.
    pub processes: Vec<Process>,
}

impl SimulationRequest {
    /// Creates a non-preemptive request without a quantum.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            is_preemptive: false,
            time_quantum: None,
            processes,
        }
    }

    /// Sets the preemption flag.
    pub fn with_preemption(mut self, is_preemptive: bool) -> Self {
        self.is_preemptive = is_preemptive;
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_time_quantum(mut self, quantum: i64) -> Self {
        self.time_quantum = Some(quantum);
        self
    }

    /// Parses a request from its JSON wire form.
    pub fn from_json(body: &str) -> SimulationResult<Self> {
        serde_json::from_str::<WireRequest>(body)?.try_into()
    }

    /// Parses a request from a JSON stream.
    pub fn from_reader<R: Read>(reader: R) -> SimulationResult<Self> {
        serde_json::from_reader::<_, WireRequest>(reader)?.try_into()
    }
}

/// Request body before the algorithm name is resolved.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    algorithm: String,
    #[serde(default)]
    is_preemptive: bool,
    #[serde(default)]
    time_quantum: Option<i64>,
    processes: Vec<Process>,
}

impl TryFrom<WireRequest> for SimulationRequest {
    type Error = SimulationError;

    fn try_from(wire: WireRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            algorithm: wire.algorithm.parse()?,
            is_preemptive: wire.is_preemptive,
            time_quantum: wire.time_quantum,
            processes: wire.processes,
        })
    }
}

/// Completed simulation, as returned to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    /// Completed processes with metrics.
    pub processes: Vec<Process>,
    /// CPU timeline.
    pub timeline: Timeline,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
}

impl SimulationResponse {
    /// Wraps an engine result and computes the averages.
    pub fn from_simulation(simulation: Simulation) -> Self {
        let (waiting, turnaround, response) = averages(&simulation.processes);
        Self {
            processes: simulation.processes,
            timeline: simulation.timeline,
            average_waiting_time: waiting,
            average_turnaround_time: turnaround,
            average_response_time: response,
        }
    }

    /// Finds a process by ID.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Extended KPIs (makespan, utilization, throughput, ...).
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(&self.processes, &self.timeline)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SimulationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Selects and runs the engine for a request.
///
/// # Example
///
/// ```
/// use cpu_schedule::{Algorithm, Process, SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(
///     vec![Process::new("A", 0, 3), Process::new("B", 1, 2)],
///     Algorithm::Fcfs,
/// );
/// let response = Simulator::new().run(&request).unwrap();
/// assert_eq!(response.timeline.len(), 2);
/// assert_eq!(response.average_waiting_time, 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Resolves the request into the policy that will run.
    pub fn policy_for(&self, request: &SimulationRequest) -> Policy {
        Policy::resolve(
            request.algorithm,
            request.is_preemptive,
            self.effective_quantum(request),
        )
    }

    /// Runs one simulation.
    pub fn run(&self, request: &SimulationRequest) -> SimulationResult<SimulationResponse> {
        if self.config.validate {
            validate_processes(&request.processes).map_err(SimulationError::InvalidInput)?;
        }

        let mut processes = request.processes.clone();
        for process in &mut processes {
            process.reset();
        }

        let policy = self.policy_for(request);
        let engine = policy.engine();
        debug!(
            policy = policy.name(),
            engine = engine.name(),
            processes = processes.len(),
            "Dispatching simulation"
        );

        let response = SimulationResponse::from_simulation(engine.run(processes));
        debug!(
            policy = policy.name(),
            segments = response.timeline.len(),
            avg_waiting = response.average_waiting_time,
            avg_turnaround = response.average_turnaround_time,
            avg_response = response.average_response_time,
            "Simulation complete"
        );

        Ok(response)
    }

    /// Parses a JSON request body and runs it.
    pub fn run_json(&self, body: &str) -> SimulationResult<SimulationResponse> {
        self.run(&SimulationRequest::from_json(body)?)
    }

    fn effective_quantum(&self, request: &SimulationRequest) -> i64 {
        let fallback = self.config.default_time_quantum;
        match request.time_quantum {
            Some(q) if q > 0 => q,
            Some(q) => {
                if request.algorithm == Algorithm::RoundRobin {
                    warn!(requested = q, fallback, "Non-positive time quantum, using fallback");
                }
                fallback
            }
            None => fallback,
        }
    }
}

/// Runs one simulation with the default configuration.
///
/// `is_preemptive` only affects SJF and Priority; `time_quantum` only
/// affects Round-Robin, where a non-positive value falls back to 1.
pub fn simulate(
    processes: &[Process],
    algorithm: Algorithm,
    is_preemptive: bool,
    time_quantum: i64,
) -> SimulationResult<SimulationResponse> {
    let request = SimulationRequest::new(processes.to_vec(), algorithm)
        .with_preemption(is_preemptive)
        .with_time_quantum(time_quantum);
    Simulator::new().run(&request)
}
