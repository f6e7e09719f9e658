//! Rust implementation of the critical path analysis engine.
//!
//! This module provides the data structures and algorithms behind project
//! schedule analysis: timing windows, slack, criticality, and risk signals.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDate;
use pyo3::prelude::*;

pub mod analysis;
mod config;
pub mod logging;
mod models;
pub mod timeline;

pub use analysis::{
    analyze, AnalysisError, CriticalPathAnalysis, Finding, FindingKind, RiskLevel, Severity,
    TaskTiming,
};
pub use config::AnalysisConfig;
pub use models::{AnalysisResult, ScheduleMetrics, ScheduledTask, Task, TaskSchedule};
pub use timeline::{earliest_schedule, DateWindow};

/// Run the critical path analysis over a task list.
///
/// This computes, in one pass over the dependency graph:
/// 1. Earliest and latest start/finish for every task
/// 2. Slack and criticality, plus the minimum project duration
/// 3. One representative critical path and the full critical set
/// 4. Bottleneck findings, recommendations, and summary metrics
///
/// # Arguments
/// * `tasks` - List of tasks to analyze
/// * `config` - Optional analysis configuration (thresholds, verbosity)
///
/// # Returns
/// * AnalysisResult with per-task schedules, the critical path, and risk output
///
/// # Raises
/// * ValueError on duplicate ids, unresolvable dependencies, or cycles
#[pyfunction]
#[pyo3(signature = (tasks, config=None))]
fn run_analysis(tasks: Vec<Task>, config: Option<AnalysisConfig>) -> PyResult<AnalysisResult> {
    let config = config.unwrap_or_default();

    match analysis::analyze(&tasks, &config) {
        Ok(result) => Ok(to_boundary_result(&tasks, result)),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Convert the core analysis value into boundary records, one schedule per
/// input task in input order.
fn to_boundary_result(tasks: &[Task], analysis: CriticalPathAnalysis) -> AnalysisResult {
    let schedules: Vec<TaskSchedule> = tasks
        .iter()
        .filter_map(|task| {
            let timing = analysis.task_timings.get(&task.id)?;
            Some(TaskSchedule {
                task_id: task.id.clone(),
                name: task.name.clone(),
                duration_days: task.duration_days,
                earliest_start: timing.earliest_start,
                earliest_finish: timing.earliest_finish,
                latest_start: timing.latest_start,
                latest_finish: timing.latest_finish,
                slack: timing.slack,
                critical: timing.is_critical(),
            })
        })
        .collect();

    AnalysisResult {
        schedules,
        critical_path: analysis.critical_path,
        critical_tasks: analysis.critical_tasks,
        project_duration: analysis.project_duration,
        bottlenecks: analysis.bottlenecks,
        recommendations: analysis.recommendations,
        metrics: ScheduleMetrics {
            total_tasks: analysis.metrics.total_tasks,
            critical_tasks: analysis.metrics.critical_tasks,
            longest_path: analysis.metrics.longest_path,
            average_slack: analysis.metrics.average_slack,
            risk_level: analysis.metrics.risk_level.as_str().to_string(),
        },
    }
}

/// Map an analysis result's earliest-start schedule onto calendar dates.
///
/// # Arguments
/// * `result` - A result from `run_analysis`
/// * `project_start` - Calendar date of day zero
///
/// # Returns
/// * List of ScheduledTask, one per task in input order
#[pyfunction]
fn schedule_dates(result: AnalysisResult, project_start: NaiveDate) -> Vec<ScheduledTask> {
    result
        .schedules
        .iter()
        .map(|s| {
            let (start_date, end_date) =
                timeline::date_window(project_start, s.earliest_start, s.earliest_finish);
            ScheduledTask {
                task_id: s.task_id.clone(),
                start_date,
                end_date,
                duration_days: s.duration_days,
                critical: s.critical,
            }
        })
        .collect()
}

/// The critpath.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Task>()?;
    m.add_class::<TaskSchedule>()?;
    m.add_class::<ScheduleMetrics>()?;
    m.add_class::<AnalysisResult>()?;
    m.add_class::<ScheduledTask>()?;

    // Config types
    m.add_class::<AnalysisConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(run_analysis, m)?)?;
    m.add_function(wrap_pyfunction!(schedule_dates, m)?)?;

    Ok(())
}
