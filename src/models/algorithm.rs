//! Algorithm selection.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// Scheduling algorithm family requested by the caller.
///
/// Preemption is a separate request flag; it only changes the behavior
/// of [`Algorithm::Sjf`] and [`Algorithm::Priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (SRTF when preemptive).
    Sjf,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
    /// Priority scheduling (lower number = higher priority).
    Priority,
}

impl Algorithm {
    /// All algorithms, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Wire name (`FCFS`, `SJF`, `RR`, `Priority`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "RR",
            Self::Priority => "Priority",
        }
    }

    /// Whether the preemption flag changes this algorithm's behavior.
    pub const fn honors_preemption(&self) -> bool {
        matches!(self, Self::Sjf | Self::Priority)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "rr" | "roundrobin" | "round-robin" | "round_robin" => Ok(Self::RoundRobin),
            "priority" => Ok(Self::Priority),
            _ => Err(SimulationError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("round-robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(" sjf ".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("PRIORITY".parse::<Algorithm>().unwrap(), Algorithm::Priority);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "LOTTERY".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, SimulationError::UnknownAlgorithm(ref name) if name == "LOTTERY"));
    }

    #[test]
    fn test_honors_preemption() {
        assert!(Algorithm::Sjf.honors_preemption());
        assert!(Algorithm::Priority.honors_preemption());
        assert!(!Algorithm::Fcfs.honors_preemption());
        assert!(!Algorithm::RoundRobin.honors_preemption());
    }

    #[test]
    fn test_serde_round_trip_name() {
        let json = serde_json::to_string(&Algorithm::RoundRobin).unwrap();
        assert_eq!(json, "\"RR\"");
        assert!(serde_json::from_str::<Algorithm>("\"EDF\"").is_err());
    }
}
