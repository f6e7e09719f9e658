//! Types for critical path analysis.

/// Per-task timing information computed by the forward and backward passes.
///
/// All fields are whole days from the project start. Durations are integers,
/// so the arithmetic is exact and criticality is an exact zero-slack test.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskTiming {
    /// Earliest possible start time (from forward pass).
    pub earliest_start: i64,
    /// Earliest possible finish time (from forward pass).
    pub earliest_finish: i64,
    /// Latest allowable start time (from backward pass).
    pub latest_start: i64,
    /// Latest allowable finish time (from backward pass).
    pub latest_finish: i64,
    /// Slack = latest_start - earliest_start.
    pub slack: i64,
}

impl TaskTiming {
    pub fn is_critical(&self) -> bool {
        self.slack == 0
    }
}

/// Category of a bottleneck finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FindingKind {
    /// Slack above the configured threshold.
    ExcessiveSlack,
    /// Critical-path task with duration above the configured threshold.
    LongCriticalTask,
    /// More prerequisites than the configured threshold.
    ComplexDependencies,
}

/// How strongly a finding threatens the schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A structured bottleneck finding.
///
/// `affected` holds task ids ranked by the category's key (slack, duration,
/// or dependency count, descending) and truncated to the configured cap.
/// Rendering to display text happens separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub affected: Vec<String>,
}

/// Overall schedule risk classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Summary metrics over one analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleMetrics {
    /// Number of tasks analyzed.
    pub total_tasks: usize,
    /// Number of zero-slack tasks.
    pub critical_tasks: usize,
    /// Length of the representative critical path.
    pub longest_path: usize,
    /// Mean slack across all tasks, rounded to one decimal.
    pub average_slack: f64,
    /// Risk classification from critical ratio and average slack.
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_timing_critical() {
        let timing = TaskTiming {
            earliest_start: 0,
            earliest_finish: 5,
            latest_start: 0,
            latest_finish: 5,
            slack: 0,
        };
        assert!(timing.is_critical());

        let timing_with_slack = TaskTiming {
            earliest_start: 0,
            earliest_finish: 5,
            latest_start: 2,
            latest_finish: 7,
            slack: 2,
        };
        assert!(!timing_with_slack.is_critical());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_risk_level_labels() {
        assert_eq!(RiskLevel::Low.as_str(), "low");
        assert_eq!(RiskLevel::Medium.as_str(), "medium");
        assert_eq!(RiskLevel::High.as_str(), "high");
    }
}
