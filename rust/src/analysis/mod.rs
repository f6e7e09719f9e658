//! Critical path analysis.
//!
//! Implements the classic CPM computation over a task dependency graph: a
//! forward pass for earliest start/finish times, a backward pass for latest
//! start/finish times, slack and criticality derivation, extraction of one
//! representative critical path, and heuristic risk analysis over the
//! finished timings. Every call is a full recomputation over the supplied
//! task list; nothing is shared between calls.

mod calculation;
mod graph;
mod path;
mod risk;
mod types;

pub use calculation::{analyze, CriticalPathAnalysis};
pub use graph::{AnalysisError, TaskGraph, TaskId};
pub use path::extract_critical_path;
pub use risk::{
    detect_bottlenecks, recommend, render_finding, render_recommendation, schedule_metrics,
    Recommendation,
};
pub use types::{Finding, FindingKind, RiskLevel, ScheduleMetrics, Severity, TaskTiming};
