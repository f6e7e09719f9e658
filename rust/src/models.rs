//! Core data types for the analysis engine.

use chrono::NaiveDate;
use pyo3::prelude::*;

/// A task to be analyzed.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Task {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub duration_days: u32,
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
}

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (id, name, duration_days, dependencies=None))]
    fn new(id: String, name: String, duration_days: u32, dependencies: Option<Vec<String>>) -> Self {
        Self {
            id,
            name,
            duration_days,
            dependencies: dependencies.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(id={:?}, duration_days={}, deps={})",
            self.id,
            self.duration_days,
            self.dependencies.len()
        )
    }
}

/// A task enriched with its computed timing window.
#[pyclass]
#[derive(Clone, Debug)]
pub struct TaskSchedule {
    #[pyo3(get, set)]
    pub task_id: String,
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub duration_days: u32,
    #[pyo3(get, set)]
    pub earliest_start: i64,
    #[pyo3(get, set)]
    pub earliest_finish: i64,
    #[pyo3(get, set)]
    pub latest_start: i64,
    #[pyo3(get, set)]
    pub latest_finish: i64,
    #[pyo3(get, set)]
    pub slack: i64,
    #[pyo3(get, set)]
    pub critical: bool,
}

#[pymethods]
impl TaskSchedule {
    #[new]
    #[allow(clippy::too_many_arguments)]
    fn new(
        task_id: String,
        name: String,
        duration_days: u32,
        earliest_start: i64,
        earliest_finish: i64,
        latest_start: i64,
        latest_finish: i64,
        slack: i64,
        critical: bool,
    ) -> Self {
        Self {
            task_id,
            name,
            duration_days,
            earliest_start,
            earliest_finish,
            latest_start,
            latest_finish,
            slack,
            critical,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskSchedule(task_id={:?}, es={}, ef={}, slack={}, critical={})",
            self.task_id, self.earliest_start, self.earliest_finish, self.slack, self.critical
        )
    }
}

/// Summary metrics over one analysis.
#[pyclass]
#[derive(Clone, Debug)]
pub struct ScheduleMetrics {
    #[pyo3(get, set)]
    pub total_tasks: usize,
    #[pyo3(get, set)]
    pub critical_tasks: usize,
    #[pyo3(get, set)]
    pub longest_path: usize,
    #[pyo3(get, set)]
    pub average_slack: f64,
    #[pyo3(get, set)]
    pub risk_level: String,
}

#[pymethods]
impl ScheduleMetrics {
    #[new]
    fn new(
        total_tasks: usize,
        critical_tasks: usize,
        longest_path: usize,
        average_slack: f64,
        risk_level: String,
    ) -> Self {
        Self {
            total_tasks,
            critical_tasks,
            longest_path,
            average_slack,
            risk_level,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleMetrics(total_tasks={}, critical_tasks={}, average_slack={}, risk_level={:?})",
            self.total_tasks, self.critical_tasks, self.average_slack, self.risk_level
        )
    }
}

/// Full result from one analysis call.
#[pyclass]
#[derive(Clone, Debug)]
pub struct AnalysisResult {
    #[pyo3(get, set)]
    pub schedules: Vec<TaskSchedule>,
    #[pyo3(get, set)]
    pub critical_path: Vec<String>,
    #[pyo3(get, set)]
    pub critical_tasks: Vec<String>,
    #[pyo3(get, set)]
    pub project_duration: i64,
    #[pyo3(get, set)]
    pub bottlenecks: Vec<String>,
    #[pyo3(get, set)]
    pub recommendations: Vec<String>,
    #[pyo3(get, set)]
    pub metrics: ScheduleMetrics,
}

#[pymethods]
impl AnalysisResult {
    #[new]
    #[allow(clippy::too_many_arguments)]
    fn new(
        schedules: Vec<TaskSchedule>,
        critical_path: Vec<String>,
        critical_tasks: Vec<String>,
        project_duration: i64,
        bottlenecks: Vec<String>,
        recommendations: Vec<String>,
        metrics: ScheduleMetrics,
    ) -> Self {
        Self {
            schedules,
            critical_path,
            critical_tasks,
            project_duration,
            bottlenecks,
            recommendations,
            metrics,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "AnalysisResult(tasks={}, project_duration={}, critical_path={:?})",
            self.schedules.len(),
            self.project_duration,
            self.critical_path
        )
    }
}

/// A task placed on the calendar.
#[pyclass]
#[derive(Clone, Debug)]
pub struct ScheduledTask {
    #[pyo3(get, set)]
    pub task_id: String,
    #[pyo3(get, set)]
    pub start_date: NaiveDate,
    #[pyo3(get, set)]
    pub end_date: NaiveDate,
    #[pyo3(get, set)]
    pub duration_days: u32,
    #[pyo3(get, set)]
    pub critical: bool,
}

#[pymethods]
impl ScheduledTask {
    #[new]
    fn new(
        task_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        duration_days: u32,
        critical: bool,
    ) -> Self {
        Self {
            task_id,
            start_date,
            end_date,
            duration_days,
            critical,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduledTask(task_id={:?}, start={}, end={}, critical={})",
            self.task_id, self.start_date, self.end_date, self.critical
        )
    }
}
