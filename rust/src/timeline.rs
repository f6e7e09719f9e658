//! Calendar projection of a computed schedule.
//!
//! The analysis works in whole days from an abstract day zero; consumers
//! rendering Gantt-style timelines want dates. This maps the earliest-start
//! schedule onto the calendar from a given project start.

use chrono::{Duration, NaiveDate};

use crate::analysis::CriticalPathAnalysis;

/// One task's earliest-start window on the calendar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub task_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub critical: bool,
}

/// Convert a day-offset window to calendar dates.
pub fn date_window(project_start: NaiveDate, start_offset: i64, end_offset: i64) -> (NaiveDate, NaiveDate) {
    (
        project_start + Duration::days(start_offset),
        project_start + Duration::days(end_offset),
    )
}

/// Project the earliest-start schedule onto calendar dates.
///
/// Windows come back in input order. A zero-duration milestone starts and
/// ends on the same date.
pub fn earliest_schedule(
    analysis: &CriticalPathAnalysis,
    project_start: NaiveDate,
) -> Vec<DateWindow> {
    analysis
        .task_order
        .iter()
        .filter_map(|id| {
            let timing = analysis.task_timings.get(id)?;
            let (start, end) =
                date_window(project_start, timing.earliest_start, timing.earliest_finish);
            Some(DateWindow {
                task_id: id.clone(),
                start,
                end,
                critical: timing.is_critical(),
            })
        })
        .collect()
}
