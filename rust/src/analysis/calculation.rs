//! Critical path analysis using forward and backward passes.

use rustc_hash::FxHashMap;

use crate::config::AnalysisConfig;
use crate::models::Task;
use crate::{log_changes, log_checks, log_debug};

use super::graph::{AnalysisError, TaskGraph, TaskId};
use super::path::extract_critical_path;
use super::risk::{
    detect_bottlenecks, recommend, render_finding, render_recommendation, schedule_metrics,
};
use super::types::{Finding, ScheduleMetrics, TaskTiming};

/// Result of one analysis call.
///
/// A pure value: id-referencing, acyclic, owning no caller state. Two calls
/// on the same input produce equal results.
#[derive(Clone, Debug, PartialEq)]
pub struct CriticalPathAnalysis {
    /// Task ids in input order.
    pub task_order: Vec<String>,
    /// Timing window for each task.
    pub task_timings: FxHashMap<String, TaskTiming>,
    /// All zero-slack task ids, in input order. Authoritative critical set.
    pub critical_tasks: Vec<String>,
    /// One representative critical path, ordered root to terminal. When the
    /// critical subgraph branches this is illustrative, not exhaustive.
    pub critical_path: Vec<String>,
    /// Minimum possible project duration in days.
    pub project_duration: i64,
    /// Structured bottleneck findings.
    pub findings: Vec<Finding>,
    /// Rendered bottleneck text, one string per finding.
    pub bottlenecks: Vec<String>,
    /// Rendered advisory text.
    pub recommendations: Vec<String>,
    /// Summary metrics.
    pub metrics: ScheduleMetrics,
}

/// Forward pass: earliest start/finish per task, prerequisites first.
fn forward_pass(graph: &TaskGraph, topo_order: &[TaskId]) -> Vec<TaskTiming> {
    let mut timings = vec![TaskTiming::default(); graph.len()];

    for &task in topo_order {
        let idx = task as usize;
        let mut earliest_start = 0;
        for &dep in graph.deps(task) {
            earliest_start = earliest_start.max(timings[dep as usize].earliest_finish);
        }
        timings[idx].earliest_start = earliest_start;
        timings[idx].earliest_finish = earliest_start + graph.duration(task) as i64;
    }

    timings
}

/// Backward pass: latest start/finish per task, dependents first.
///
/// A task with several dependents takes the minimum over all of their latest
/// starts; reverse topological order guarantees every dependent is final
/// before its prerequisite is visited, so traversal order cannot change the
/// result. Tasks with no dependents close at the project end.
fn backward_pass(
    graph: &TaskGraph,
    topo_order: &[TaskId],
    timings: &mut [TaskTiming],
    project_duration: i64,
) {
    for &task in topo_order.iter().rev() {
        let idx = task as usize;
        let mut latest_finish = project_duration;
        for &dependent in graph.dependents(task) {
            latest_finish = latest_finish.min(timings[dependent as usize].latest_start);
        }
        timings[idx].latest_finish = latest_finish;
        timings[idx].latest_start = latest_finish - graph.duration(task) as i64;
    }
}

/// Slack derivation, strictly after both passes.
fn compute_slack(timings: &mut [TaskTiming]) {
    for timing in timings.iter_mut() {
        timing.slack = timing.latest_start - timing.earliest_start;
    }
}

/// Run the full critical path analysis over a task list.
///
/// Builds the dependency graph, runs the forward and backward passes over a
/// topological order, derives slack and criticality, extracts one
/// representative critical path, and produces risk findings, recommendations,
/// and summary metrics.
///
/// # Errors
/// * `AnalysisError::DuplicateTaskId` if two tasks share an id
/// * `AnalysisError::UnknownDependency` if a dependency id resolves to no task
/// * `AnalysisError::CircularDependency` if the dependency graph has a cycle
pub fn analyze(
    tasks: &[Task],
    config: &AnalysisConfig,
) -> Result<CriticalPathAnalysis, AnalysisError> {
    let graph = TaskGraph::build(tasks)?;
    let topo_order = graph.topological_order()?;
    log_debug!(config.verbosity, "topological order: {:?}", topo_order);

    let mut timings = forward_pass(&graph, &topo_order);
    let project_duration = timings
        .iter()
        .map(|t| t.earliest_finish)
        .max()
        .unwrap_or(0);
    backward_pass(&graph, &topo_order, &mut timings, project_duration);
    compute_slack(&mut timings);

    for (idx, timing) in timings.iter().enumerate() {
        log_checks!(
            config.verbosity,
            "task {}: es={} ef={} ls={} lf={} slack={}",
            graph.id(idx as TaskId),
            timing.earliest_start,
            timing.earliest_finish,
            timing.latest_start,
            timing.latest_finish,
            timing.slack
        );
    }

    let critical_tasks: Vec<String> = (0..graph.len())
        .filter(|&i| timings[i].is_critical())
        .map(|i| graph.id(i as TaskId).to_string())
        .collect();
    let critical_path = extract_critical_path(&graph, &timings);

    let findings = detect_bottlenecks(&graph, &timings, config);
    let bottlenecks: Vec<String> = findings
        .iter()
        .map(|f| render_finding(f, &graph, config))
        .collect();
    let metrics = schedule_metrics(&timings, &critical_path, config);
    let recommendations: Vec<String> = recommend(&graph, &timings, &findings, &metrics, config)
        .into_iter()
        .map(|r| render_recommendation(r).to_string())
        .collect();

    log_changes!(
        config.verbosity,
        "analyzed {} tasks: project duration {} days, {} critical, risk {}",
        graph.len(),
        project_duration,
        critical_tasks.len(),
        metrics.risk_level.as_str()
    );

    let task_order: Vec<String> = (0..graph.len())
        .map(|i| graph.id(i as TaskId).to_string())
        .collect();
    let task_timings: FxHashMap<String, TaskTiming> = task_order
        .iter()
        .cloned()
        .zip(timings)
        .collect();

    Ok(CriticalPathAnalysis {
        task_order,
        task_timings,
        critical_tasks,
        critical_path,
        project_duration,
        findings,
        bottlenecks,
        recommendations,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RiskLevel;

    fn make_task(id: &str, duration: u32, deps: Vec<&str>) -> Task {
        Task {
            id: id.to_string(),
            name: id.to_string(),
            duration_days: duration,
            dependencies: deps.into_iter().map(|d| d.to_string()).collect(),
        }
    }

    fn run(tasks: &[Task]) -> CriticalPathAnalysis {
        analyze(tasks, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_linear_chain() {
        // a (3d) -> b (2d) -> c (4d)
        let tasks = vec![
            make_task("a", 3, vec![]),
            make_task("b", 2, vec!["a"]),
            make_task("c", 4, vec!["b"]),
        ];
        let result = run(&tasks);

        assert_eq!(result.project_duration, 9);
        assert_eq!(result.critical_tasks, vec!["a", "b", "c"]);
        assert_eq!(result.critical_path, vec!["a", "b", "c"]);
        let b = &result.task_timings["b"];
        assert_eq!(b.earliest_start, 3);
        assert_eq!(b.earliest_finish, 5);
        assert_eq!(b.slack, 0);
    }

    #[test]
    fn test_diamond() {
        // a feeds b and c; d needs both.
        // Via b: 2 + 3 + 2 = 7 (critical); via c: 2 + 1 + 2 = 5.
        let tasks = vec![
            make_task("a", 2, vec![]),
            make_task("b", 3, vec!["a"]),
            make_task("c", 1, vec!["a"]),
            make_task("d", 2, vec!["b", "c"]),
        ];
        let result = run(&tasks);

        assert_eq!(result.project_duration, 7);
        assert_eq!(result.critical_tasks, vec!["a", "b", "d"]);
        assert_eq!(result.critical_path, vec!["a", "b", "d"]);

        let c = &result.task_timings["c"];
        assert_eq!(c.earliest_start, 2);
        assert_eq!(c.earliest_finish, 3);
        assert_eq!(c.latest_finish, 5);
        assert_eq!(c.slack, 2);
        assert!(!c.is_critical());

        let d = &result.task_timings["d"];
        assert_eq!(d.earliest_start, 5);
        assert_eq!(d.earliest_finish, 7);
    }

    #[test]
    fn test_disconnected_tasks() {
        let tasks = vec![make_task("a", 5, vec![]), make_task("b", 3, vec![])];
        let result = run(&tasks);

        assert_eq!(result.project_duration, 5);
        assert_eq!(result.critical_tasks, vec!["a"]);
        assert_eq!(result.task_timings["b"].slack, 2);
        assert!((result.metrics.average_slack - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_milestone() {
        let tasks = vec![make_task("a", 0, vec![]), make_task("b", 4, vec!["a"])];
        let result = run(&tasks);

        let a = &result.task_timings["a"];
        assert_eq!(a.earliest_start, 0);
        assert_eq!(a.earliest_finish, 0);
        assert!(a.is_critical());

        let b = &result.task_timings["b"];
        assert_eq!(b.earliest_start, 0);
        assert_eq!(b.earliest_finish, 4);
        assert!(b.is_critical());

        assert_eq!(result.project_duration, 4);
        assert_eq!(result.critical_path, vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_reference_fails() {
        let tasks = vec![make_task("a", 3, vec![]), make_task("b", 2, vec!["nope"])];
        let err = analyze(&tasks, &AnalysisConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownDependency {
                task_id: "b".to_string(),
                dependency_id: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_converging_dependents_take_minimum() {
        // a feeds b (5d) and c (1d), both terminal. a must close at
        // min(b.latest_start, c.latest_start), not whichever is visited first.
        let tasks = vec![
            make_task("a", 2, vec![]),
            make_task("b", 5, vec!["a"]),
            make_task("c", 1, vec!["a"]),
        ];
        let result = run(&tasks);

        assert_eq!(result.project_duration, 7);
        let a = &result.task_timings["a"];
        let b = &result.task_timings["b"];
        let c = &result.task_timings["c"];
        assert_eq!(b.latest_start, 2);
        assert_eq!(c.latest_start, 6);
        assert_eq!(a.latest_finish, b.latest_start.min(c.latest_start));
        assert_eq!(a.slack, 0);
        assert_eq!(c.slack, 4);
    }

    #[test]
    fn test_circular_dependency_fails() {
        let tasks = vec![
            make_task("a", 3, vec!["b"]),
            make_task("b", 2, vec!["a"]),
        ];
        let err = analyze(&tasks, &AnalysisConfig::default()).unwrap_err();
        match err {
            AnalysisError::CircularDependency { task_id } => {
                assert!(task_id == "a" || task_id == "b");
            }
            other => panic!("expected CircularDependency, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_id_fails() {
        let tasks = vec![make_task("a", 3, vec![]), make_task("a", 2, vec![])];
        let err = analyze(&tasks, &AnalysisConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::DuplicateTaskId {
                task_id: "a".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let result = run(&[]);
        assert_eq!(result.project_duration, 0);
        assert!(result.critical_path.is_empty());
        assert!(result.critical_tasks.is_empty());
        assert!(result.bottlenecks.is_empty());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.metrics.total_tasks, 0);
        assert_eq!(result.metrics.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_idempotent() {
        let tasks = vec![
            make_task("a", 2, vec![]),
            make_task("b", 3, vec!["a"]),
            make_task("c", 1, vec!["a"]),
            make_task("d", 2, vec!["b", "c"]),
            make_task("e", 9, vec![]),
        ];
        let first = run(&tasks);
        let second = run(&tasks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_timing_invariants() {
        let tasks = vec![
            make_task("a", 2, vec![]),
            make_task("b", 3, vec!["a"]),
            make_task("c", 1, vec!["a"]),
            make_task("d", 2, vec!["b", "c"]),
            make_task("e", 4, vec!["c"]),
            make_task("f", 0, vec!["d", "e"]),
            make_task("g", 6, vec![]),
        ];
        let result = run(&tasks);

        for (id, timing) in &result.task_timings {
            let duration = tasks
                .iter()
                .find(|t| &t.id == id)
                .map(|t| t.duration_days as i64)
                .unwrap();
            assert_eq!(timing.earliest_finish, timing.earliest_start + duration);
            assert_eq!(timing.latest_finish, timing.latest_start + duration);
            assert!(timing.slack >= 0, "negative slack on {}", id);
        }

        let max_ef = result
            .task_timings
            .values()
            .map(|t| t.earliest_finish)
            .max()
            .unwrap();
        let max_lf = result
            .task_timings
            .values()
            .map(|t| t.latest_finish)
            .max()
            .unwrap();
        assert_eq!(result.project_duration, max_ef);
        assert_eq!(result.project_duration, max_lf);
    }

    #[test]
    fn test_critical_path_is_a_valid_dependency_chain() {
        let tasks = vec![
            make_task("a", 2, vec![]),
            make_task("b", 3, vec!["a"]),
            make_task("c", 5, vec!["a"]),
            make_task("d", 1, vec!["b", "c"]),
        ];
        let result = run(&tasks);

        assert!(!result.critical_path.is_empty());
        for id in &result.critical_path {
            assert!(result.task_timings[id].is_critical());
        }
        for pair in result.critical_path.windows(2) {
            let dependent = tasks.iter().find(|t| t.id == pair[1]).unwrap();
            assert!(
                dependent.dependencies.contains(&pair[0]),
                "{} -> {} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }
}
