//! Simulator configuration.

use tracing::warn;

use crate::scheduler::DEFAULT_QUANTUM;

/// Environment variable overriding the fallback Round-Robin quantum.
pub const DEFAULT_QUANTUM_ENV: &str = "CPU_SCHEDULE_DEFAULT_QUANTUM";

/// Settings shared by every simulation a [`Simulator`](crate::Simulator) runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Quantum used when a Round-Robin request carries none, or a
    /// non-positive one. Always >= 1.
    pub default_time_quantum: i64,
    /// Whether requests are validated before dispatch.
    pub validate: bool,
}

impl SimulatorConfig {
    /// Creates the default configuration (quantum 1, validation on).
    pub fn new() -> Self {
        Self {
            default_time_quantum: DEFAULT_QUANTUM,
            validate: true,
        }
    }

    /// Sets the fallback quantum. Non-positive values keep the default.
    pub fn with_default_time_quantum(mut self, quantum: i64) -> Self {
        self.default_time_quantum = if quantum <= 0 { DEFAULT_QUANTUM } else { quantum };
        self
    }

    /// Enables or disables request validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Reads overrides from the environment.
    ///
    /// Unset, unparsable or non-positive values leave the default in place.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DEFAULT_QUANTUM_ENV).ok().as_deref())
    }

    fn from_env_value(quantum: Option<&str>) -> Self {
        let config = Self::new();
        let Some(raw) = quantum else {
            return config;
        };

        match raw.trim().parse::<i64>() {
            Ok(q) if q > 0 => config.with_default_time_quantum(q),
            _ => {
                warn!(value = raw, env = DEFAULT_QUANTUM_ENV, "Ignoring invalid default quantum");
                config
            }
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.default_time_quantum, 1);
        assert!(config.validate);
    }

    #[test]
    fn test_builder() {
        let config = SimulatorConfig::new()
            .with_default_time_quantum(4)
            .with_validation(false);
        assert_eq!(config.default_time_quantum, 4);
        assert!(!config.validate);
    }

    #[test]
    fn test_non_positive_quantum_keeps_default() {
        let config = SimulatorConfig::new().with_default_time_quantum(-2);
        assert_eq!(config.default_time_quantum, DEFAULT_QUANTUM);
    }

    #[test]
    fn test_env_value_parsing() {
        assert_eq!(SimulatorConfig::from_env_value(Some("3")).default_time_quantum, 3);
        assert_eq!(SimulatorConfig::from_env_value(Some(" 5 ")).default_time_quantum, 5);
        assert_eq!(SimulatorConfig::from_env_value(Some("0")).default_time_quantum, 1);
        assert_eq!(SimulatorConfig::from_env_value(Some("abc")).default_time_quantum, 1);
        assert_eq!(SimulatorConfig::from_env_value(None), SimulatorConfig::new());
    }
}
