//! Representative critical path extraction.

use super::graph::{TaskGraph, TaskId};
use super::types::TaskTiming;

/// Walk the critical subgraph into one ordered task-id sequence.
///
/// Starts from the critical root (a critical task with no critical
/// prerequisite) with the smallest earliest start, then repeatedly steps to
/// the critical dependent of the last appended task with the smallest
/// earliest start. Ties keep input order. When several critical chains
/// coexist this returns exactly one of them; the unordered critical set is
/// the authoritative data.
pub fn extract_critical_path(graph: &TaskGraph, timings: &[TaskTiming]) -> Vec<String> {
    let roots: Vec<TaskId> = (0..graph.len() as TaskId)
        .filter(|&t| timings[t as usize].is_critical())
        .filter(|&t| {
            !graph
                .deps(t)
                .iter()
                .any(|&dep| timings[dep as usize].is_critical())
        })
        .collect();

    let Some(mut current) = pick_earliest(&roots, timings) else {
        return Vec::new();
    };

    let mut path = Vec::new();
    loop {
        path.push(graph.id(current).to_string());

        let next: Vec<TaskId> = graph
            .dependents(current)
            .iter()
            .copied()
            .filter(|&t| timings[t as usize].is_critical())
            .collect();
        match pick_earliest(&next, timings) {
            Some(task) => current = task,
            None => break,
        }
    }

    path
}

/// Smallest earliest start wins; lower input position breaks ties.
fn pick_earliest(candidates: &[TaskId], timings: &[TaskTiming]) -> Option<TaskId> {
    candidates.iter().copied().min_by(|&a, &b| {
        timings[a as usize]
            .earliest_start
            .cmp(&timings[b as usize].earliest_start)
            .then(a.cmp(&b))
    })
}
