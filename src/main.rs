//! cpu-schedule command line.
//!
//! Reads a simulation request (JSON, from a file or stdin) or generates a
//! random workload, runs it, and prints the result as JSON or as a text
//! Gantt chart with a metrics table.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;

use cpu_schedule::render::{GanttChart, MetricsTable};
use cpu_schedule::telemetry::init_tracing;
use cpu_schedule::workload::WorkloadGenerator;
use cpu_schedule::{Algorithm, SimulationRequest, Simulator, SimulatorConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

/// Simulate single-CPU scheduling algorithms.
#[derive(Debug, Parser)]
#[command(name = "cpu-schedule", version, about)]
struct Cli {
    /// Request JSON file ("-" or absent reads stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Override the algorithm (FCFS, SJF, RR, Priority)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Enable preemption (SJF → SRTF, preemptive Priority)
    #[arg(short, long)]
    preemptive: bool,

    /// Round-Robin time quantum
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Generate N random processes instead of reading a request
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn read_request(cli: &Cli) -> Result<SimulationRequest, Box<dyn Error>> {
    if let Some(count) = cli.random {
        let processes = WorkloadGenerator::new(cli.seed).with_count(count).generate();
        info!(count, seed = cli.seed, "Generated random workload");
        return Ok(SimulationRequest::new(processes, Algorithm::Fcfs));
    }

    let request = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            info!(path = %path.display(), "Reading request");
            SimulationRequest::from_reader(BufReader::new(File::open(path)?))?
        }
        _ => SimulationRequest::from_reader(io::stdin().lock())?,
    };
    Ok(request)
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing()?;
    let cli = Cli::parse();

    let mut request = read_request(&cli)?;
    if let Some(name) = cli.algorithm.as_deref() {
        request.algorithm = name.parse()?;
    }
    if cli.preemptive {
        request.is_preemptive = true;
    }
    if let Some(quantum) = cli.quantum {
        request.time_quantum = Some(quantum);
    }

    let simulator = Simulator::with_config(SimulatorConfig::from_env());
    info!(
        algorithm = %request.algorithm,
        preemptive = request.is_preemptive,
        processes = request.processes.len(),
        "Running simulation"
    );
    let response = simulator.run(&request)?;

    match cli.format {
        OutputFormat::Json => println!("{}", response.to_json_pretty()?),
        OutputFormat::Table => {
            print!("{}", GanttChart(&response.timeline));
            println!();
            print!("{}", MetricsTable(&response));

            let kpi = response.kpi();
            println!();
            println!(
                "Makespan {}  Idle {}  Utilization {:.1}%  Throughput {:.3}/unit  Switches {}",
                kpi.makespan,
                kpi.idle_time,
                kpi.cpu_utilization * 100.0,
                kpi.throughput,
                kpi.context_switches
            );
        }
    }

    Ok(())
}
