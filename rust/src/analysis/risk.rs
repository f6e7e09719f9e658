//! Heuristic risk analysis over the computed task timings.
//!
//! Detection produces structured `Finding` values; turning findings and
//! recommendations into display text is a separate rendering step, so
//! callers can consume either form.

use crate::config::AnalysisConfig;

use super::graph::{TaskGraph, TaskId};
use super::types::{Finding, FindingKind, RiskLevel, ScheduleMetrics, Severity, TaskTiming};

/// Detect bottleneck patterns in the finished node set.
///
/// Three independent categories, each contributing at most one finding:
/// excessive slack, long critical-path tasks, and high dependency fan-in.
/// Affected ids are ranked by the category's key, descending, input order on
/// ties, and capped at `config.max_flagged_tasks`.
pub fn detect_bottlenecks(
    graph: &TaskGraph,
    timings: &[TaskTiming],
    config: &AnalysisConfig,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    let slack_heavy: Vec<(TaskId, i64)> = (0..graph.len() as TaskId)
        .filter(|&t| timings[t as usize].slack > config.excess_slack_threshold)
        .map(|t| (t, timings[t as usize].slack))
        .collect();
    if !slack_heavy.is_empty() {
        findings.push(Finding {
            kind: FindingKind::ExcessiveSlack,
            severity: Severity::Low,
            affected: top_ranked(slack_heavy, config.max_flagged_tasks, graph),
        });
    }

    let long_critical: Vec<(TaskId, i64)> = (0..graph.len() as TaskId)
        .filter(|&t| {
            timings[t as usize].is_critical() && graph.duration(t) > config.long_task_threshold
        })
        .map(|t| (t, graph.duration(t) as i64))
        .collect();
    if !long_critical.is_empty() {
        findings.push(Finding {
            kind: FindingKind::LongCriticalTask,
            severity: Severity::High,
            affected: top_ranked(long_critical, config.max_flagged_tasks, graph),
        });
    }

    let complex: Vec<(TaskId, i64)> = (0..graph.len() as TaskId)
        .filter(|&t| graph.deps(t).len() > config.complex_deps_threshold)
        .map(|t| (t, graph.deps(t).len() as i64))
        .collect();
    if !complex.is_empty() {
        findings.push(Finding {
            kind: FindingKind::ComplexDependencies,
            severity: Severity::Medium,
            affected: top_ranked(complex, config.max_flagged_tasks, graph),
        });
    }

    findings
}

/// Sort candidates by key descending (input order on ties), cap, and map to ids.
fn top_ranked(mut candidates: Vec<(TaskId, i64)>, cap: usize, graph: &TaskGraph) -> Vec<String> {
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    candidates.truncate(cap);
    candidates
        .into_iter()
        .map(|(t, _)| graph.id(t).to_string())
        .collect()
}

/// Render one finding as display text, naming the affected tasks.
pub fn render_finding(finding: &Finding, graph: &TaskGraph, config: &AnalysisConfig) -> String {
    let names: Vec<&str> = finding
        .affected
        .iter()
        .filter_map(|id| graph.index_of(id).map(|t| graph.name(t)))
        .collect();
    let names = names.join(", ");

    match finding.kind {
        FindingKind::ExcessiveSlack => format!(
            "Tasks with excessive slack (more than {} days): {}",
            config.excess_slack_threshold, names
        ),
        FindingKind::LongCriticalTask => format!(
            "Long critical-path tasks (more than {} days): {}",
            config.long_task_threshold, names
        ),
        FindingKind::ComplexDependencies => format!(
            "Tasks with complex dependencies (more than {} prerequisites): {}",
            config.complex_deps_threshold, names
        ),
    }
}

/// Advisory categories. Templates are fixed; only the gating conditions
/// depend on the analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recommendation {
    FocusCriticalPath,
    ResolveBottlenecks,
    StartIndependentTasksEarly,
    WatchParallelCriticalChains,
    AddScheduleBuffer,
}

/// Produce the advisories whose gates hold, in a fixed order.
pub fn recommend(
    graph: &TaskGraph,
    timings: &[TaskTiming],
    findings: &[Finding],
    metrics: &ScheduleMetrics,
    config: &AnalysisConfig,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.longest_path > 0 {
        recs.push(Recommendation::FocusCriticalPath);
    }
    if !findings.is_empty() {
        recs.push(Recommendation::ResolveBottlenecks);
    }
    let has_free_starter = (0..graph.len() as TaskId)
        .any(|t| graph.deps(t).is_empty() && timings[t as usize].slack > 0);
    if has_free_starter {
        recs.push(Recommendation::StartIndependentTasksEarly);
    }
    if metrics.critical_tasks > metrics.longest_path {
        recs.push(Recommendation::WatchParallelCriticalChains);
    }
    if metrics.total_tasks > 0 && metrics.average_slack < config.tight_slack_threshold {
        recs.push(Recommendation::AddScheduleBuffer);
    }

    recs
}

/// Fixed display template for an advisory.
pub fn render_recommendation(rec: Recommendation) -> &'static str {
    match rec {
        Recommendation::FocusCriticalPath => {
            "Any delay to a critical-path task delays the whole project; track these tasks closely."
        }
        Recommendation::ResolveBottlenecks => {
            "Address the flagged bottlenecks: split long tasks and reduce dependency fan-in where possible."
        }
        Recommendation::StartIndependentTasksEarly => {
            "Tasks with no prerequisites and spare slack can be started in parallel right away."
        }
        Recommendation::WatchParallelCriticalChains => {
            "More tasks are critical than the listed path alone; parallel critical chains need the same attention."
        }
        Recommendation::AddScheduleBuffer => {
            "Average slack is low; the schedule has little buffer against overruns."
        }
    }
}

/// Summary metrics and risk classification.
///
/// Risk is high when the critical ratio or average slack crosses the high
/// thresholds, medium on the medium thresholds, low otherwise. An empty
/// input is low risk with zeroed metrics.
pub fn schedule_metrics(
    timings: &[TaskTiming],
    critical_path: &[String],
    config: &AnalysisConfig,
) -> ScheduleMetrics {
    let total_tasks = timings.len();
    let critical_tasks = timings.iter().filter(|t| t.is_critical()).count();
    let longest_path = critical_path.len();

    if total_tasks == 0 {
        return ScheduleMetrics {
            total_tasks: 0,
            critical_tasks: 0,
            longest_path: 0,
            average_slack: 0.0,
            risk_level: RiskLevel::Low,
        };
    }

    let average_slack = round_tenths(
        timings.iter().map(|t| t.slack as f64).sum::<f64>() / total_tasks as f64,
    );
    let critical_ratio = critical_tasks as f64 / total_tasks as f64;

    let risk_level = if critical_ratio > config.high_risk_critical_ratio
        || average_slack < config.high_risk_avg_slack
    {
        RiskLevel::High
    } else if critical_ratio > config.medium_risk_critical_ratio
        || average_slack < config.medium_risk_avg_slack
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    ScheduleMetrics {
        total_tasks,
        critical_tasks,
        longest_path,
        average_slack,
        risk_level,
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
