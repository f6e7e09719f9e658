//! Configuration types for the analysis engine.

use pyo3::prelude::*;

/// Configuration for bottleneck detection, recommendations, and risk scoring.
#[pyclass]
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Slack strictly above this (in days) flags a task as having excessive slack
    #[pyo3(get, set)]
    pub excess_slack_threshold: i64,
    /// Critical-task duration strictly above this (in days) flags it as long
    #[pyo3(get, set)]
    pub long_task_threshold: u32,
    /// Dependency count strictly above this flags a task as complex
    #[pyo3(get, set)]
    pub complex_deps_threshold: usize,
    /// Maximum number of task names listed per finding
    #[pyo3(get, set)]
    pub max_flagged_tasks: usize,
    /// Average slack below this (in days) marks the schedule as tight
    #[pyo3(get, set)]
    pub tight_slack_threshold: f64,
    /// Critical-task ratio above this is high risk
    #[pyo3(get, set)]
    pub high_risk_critical_ratio: f64,
    /// Average slack below this is high risk
    #[pyo3(get, set)]
    pub high_risk_avg_slack: f64,
    /// Critical-task ratio above this is medium risk
    #[pyo3(get, set)]
    pub medium_risk_critical_ratio: f64,
    /// Average slack below this is medium risk
    #[pyo3(get, set)]
    pub medium_risk_avg_slack: f64,
    /// Verbosity level: 0=silent, 1=summaries, 2=per-task, 3=debug
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            excess_slack_threshold: 7,
            long_task_threshold: 14,
            complex_deps_threshold: 3,
            max_flagged_tasks: 3,
            tight_slack_threshold: 2.0,
            high_risk_critical_ratio: 0.6,
            high_risk_avg_slack: 3.0,
            medium_risk_critical_ratio: 0.4,
            medium_risk_avg_slack: 5.0,
            verbosity: 0,
        }
    }
}

#[pymethods]
impl AnalysisConfig {
    #[new]
    #[pyo3(signature = (
        excess_slack_threshold=None,
        long_task_threshold=None,
        complex_deps_threshold=None,
        max_flagged_tasks=None,
        tight_slack_threshold=None,
        high_risk_critical_ratio=None,
        high_risk_avg_slack=None,
        medium_risk_critical_ratio=None,
        medium_risk_avg_slack=None,
        verbosity=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        excess_slack_threshold: Option<i64>,
        long_task_threshold: Option<u32>,
        complex_deps_threshold: Option<usize>,
        max_flagged_tasks: Option<usize>,
        tight_slack_threshold: Option<f64>,
        high_risk_critical_ratio: Option<f64>,
        high_risk_avg_slack: Option<f64>,
        medium_risk_critical_ratio: Option<f64>,
        medium_risk_avg_slack: Option<f64>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            excess_slack_threshold: excess_slack_threshold
                .unwrap_or(defaults.excess_slack_threshold),
            long_task_threshold: long_task_threshold.unwrap_or(defaults.long_task_threshold),
            complex_deps_threshold: complex_deps_threshold
                .unwrap_or(defaults.complex_deps_threshold),
            max_flagged_tasks: max_flagged_tasks.unwrap_or(defaults.max_flagged_tasks),
            tight_slack_threshold: tight_slack_threshold.unwrap_or(defaults.tight_slack_threshold),
            high_risk_critical_ratio: high_risk_critical_ratio
                .unwrap_or(defaults.high_risk_critical_ratio),
            high_risk_avg_slack: high_risk_avg_slack.unwrap_or(defaults.high_risk_avg_slack),
            medium_risk_critical_ratio: medium_risk_critical_ratio
                .unwrap_or(defaults.medium_risk_critical_ratio),
            medium_risk_avg_slack: medium_risk_avg_slack.unwrap_or(defaults.medium_risk_avg_slack),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "AnalysisConfig(excess_slack_threshold={}, long_task_threshold={}, complex_deps_threshold={})",
            self.excess_slack_threshold, self.long_task_threshold, self.complex_deps_threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.excess_slack_threshold, 7);
        assert_eq!(config.long_task_threshold, 14);
        assert_eq!(config.complex_deps_threshold, 3);
        assert_eq!(config.max_flagged_tasks, 3);
        assert!((config.tight_slack_threshold - 2.0).abs() < 1e-9);
        assert!((config.high_risk_critical_ratio - 0.6).abs() < 1e-9);
        assert!((config.medium_risk_critical_ratio - 0.4).abs() < 1e-9);
        assert_eq!(config.verbosity, 0);
    }
}
