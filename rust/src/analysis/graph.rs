//! Task graph construction, validation, and topological ordering.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use thiserror::Error;

use crate::models::Task;

/// Dense task index. All adjacency is stored in vectors indexed by this,
/// assigned in input order so tie-breaks downstream stay stable.
pub type TaskId = u32;

/// Errors that can occur while building or ordering the task graph.
///
/// Any of these fails the whole analysis; no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("duplicate task id: {task_id}")]
    DuplicateTaskId { task_id: String },
    #[error("task '{task_id}' depends on unknown task '{dependency_id}'")]
    UnknownDependency {
        task_id: String,
        dependency_id: String,
    },
    #[error("circular dependency detected involving task '{task_id}'")]
    CircularDependency { task_id: String },
}

/// Forward and reverse adjacency over the task list.
///
/// Every task has an entry in both `deps` (prerequisites) and `dependents`
/// (tasks waiting on it), possibly empty, so the passes never distinguish
/// "no entry" from "no edges".
#[derive(Debug)]
pub struct TaskGraph {
    index: FxHashMap<String, TaskId>,
    ids: Vec<String>,
    names: Vec<String>,
    durations: Vec<u32>,
    deps: Vec<Vec<TaskId>>,
    dependents: Vec<Vec<TaskId>>,
}

impl TaskGraph {
    /// Build the graph from the input task list.
    ///
    /// Validates that ids are unique and that every dependency reference
    /// resolves to a supplied task.
    pub fn build(tasks: &[Task]) -> Result<Self, AnalysisError> {
        let mut index: FxHashMap<String, TaskId> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
        for (pos, task) in tasks.iter().enumerate() {
            if index.insert(task.id.clone(), pos as TaskId).is_some() {
                return Err(AnalysisError::DuplicateTaskId {
                    task_id: task.id.clone(),
                });
            }
        }

        let n = tasks.len();
        let mut deps: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut dependents: Vec<Vec<TaskId>> = vec![Vec::new(); n];

        for (pos, task) in tasks.iter().enumerate() {
            for dep_id in &task.dependencies {
                let Some(&dep) = index.get(dep_id.as_str()) else {
                    return Err(AnalysisError::UnknownDependency {
                        task_id: task.id.clone(),
                        dependency_id: dep_id.clone(),
                    });
                };
                deps[pos].push(dep);
                dependents[dep as usize].push(pos as TaskId);
            }
        }

        Ok(Self {
            index,
            ids: tasks.iter().map(|t| t.id.clone()).collect(),
            names: tasks.iter().map(|t| t.name.clone()).collect(),
            durations: tasks.iter().map(|t| t.duration_days).collect(),
            deps,
            dependents,
        })
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Task id string for a dense index.
    pub fn id(&self, task: TaskId) -> &str {
        &self.ids[task as usize]
    }

    /// Display name for a dense index.
    pub fn name(&self, task: TaskId) -> &str {
        &self.names[task as usize]
    }

    /// Duration in days for a dense index.
    pub fn duration(&self, task: TaskId) -> u32 {
        self.durations[task as usize]
    }

    /// Prerequisites of a task (reverse adjacency).
    pub fn deps(&self, task: TaskId) -> &[TaskId] {
        &self.deps[task as usize]
    }

    /// Tasks that depend on a task (forward adjacency).
    pub fn dependents(&self, task: TaskId) -> &[TaskId] {
        &self.dependents[task as usize]
    }

    /// Dense index for a task id string.
    pub fn index_of(&self, id: &str) -> Option<TaskId> {
        self.index.get(id).copied()
    }

    /// Topological order via Kahn's algorithm (prerequisites before dependents).
    ///
    /// In-degree counts gate when a task is emitted, so completion is never
    /// inferred from a timing field's value. A short result proves a cycle;
    /// the error names a task that is actually on one.
    pub fn topological_order(&self) -> Result<Vec<TaskId>, AnalysisError> {
        let n = self.len();
        let mut in_degree: Vec<usize> = (0..n).map(|i| self.deps[i].len()).collect();

        let mut queue: VecDeque<TaskId> = (0..n as TaskId)
            .filter(|&t| in_degree[t as usize] == 0)
            .collect();

        let mut order: Vec<TaskId> = Vec::with_capacity(n);
        let mut emitted = vec![false; n];

        while let Some(task) = queue.pop_front() {
            order.push(task);
            emitted[task as usize] = true;

            for &dependent in &self.dependents[task as usize] {
                let degree = &mut in_degree[dependent as usize];
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(dependent);
                }
            }
        }

        if order.len() != n {
            let task = self.cycle_member(&emitted).unwrap_or(0);
            return Err(AnalysisError::CircularDependency {
                task_id: self.ids[task as usize].clone(),
            });
        }

        Ok(order)
    }

    /// Find a task on a cycle, given the emitted set from an incomplete
    /// Kahn's sort.
    ///
    /// Every unemitted task has at least one unemitted prerequisite, so
    /// walking unemitted prerequisites must revisit a task; the first task
    /// revisited is on a cycle (tasks merely downstream of one are never
    /// revisited).
    fn cycle_member(&self, emitted: &[bool]) -> Option<TaskId> {
        let start = (0..self.len() as TaskId).find(|&t| !emitted[t as usize])?;
        let mut on_walk = vec![false; self.len()];
        let mut current = start;
        loop {
            if on_walk[current as usize] {
                return Some(current);
            }
            on_walk[current as usize] = true;
            current = self.deps[current as usize]
                .iter()
                .copied()
                .find(|&d| !emitted[d as usize])?;
        }
    }
}
