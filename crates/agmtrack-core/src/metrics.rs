//! Derived metrics over a store snapshot.
//!
//! Every function here is pure: the reporting date is an explicit parameter,
//! never a clock read, so the same snapshot and date always produce the same
//! result. Tasks whose end date fails to parse have no determinable due
//! status and are classified as neither overdue nor upcoming.

use crate::model::{AgendaItem, AgendaStatus, Phase, Task, TaskStatus};
use chrono::NaiveDate;

/// Default lookahead window for [`upcoming_tasks`], in days.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 3;

/// Number of tasks across all phases.
pub fn total_task_count(phases: &[Phase]) -> usize {
    phases.iter().map(|p| p.tasks.len()).sum()
}

/// Number of completed tasks across all phases.
pub fn completed_task_count(phases: &[Phase]) -> usize {
    phases
        .iter()
        .flat_map(|p| p.tasks.iter())
        .filter(|t| t.status == TaskStatus::Completed)
        .count()
}

/// Overall completion percentage, rounded to the nearest integer.
///
/// Returns 0 when there are no tasks at all.
pub fn overall_progress(phases: &[Phase]) -> u32 {
    let total = total_task_count(phases);
    if total == 0 {
        return 0;
    }
    let completed = completed_task_count(phases);
    (100.0 * completed as f64 / total as f64).round() as u32
}

/// Whole days from `today` until `target`. Negative once the target has
/// passed; that is a meaningful output, not an error.
pub fn days_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Tasks needing urgent attention: explicitly marked `Delayed`, or not
/// completed with an end date already in the past.
///
/// Input traversal order is preserved (phase order, then task order).
pub fn overdue_tasks(phases: &[Phase], today: NaiveDate) -> Vec<&Task> {
    phases
        .iter()
        .flat_map(|p| p.tasks.iter())
        .filter(|t| is_overdue(t, today))
        .collect()
}

/// Whether a single task counts as overdue on the given date.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.status == TaskStatus::Delayed {
        return true;
    }
    if task.status == TaskStatus::Completed {
        return false;
    }
    match task.end_date_parsed() {
        Some(end) => end < today,
        None => false,
    }
}

/// Tasks due within the lookahead window: not completed, not delayed, and
/// ending between `today` and `today + within_days` inclusive.
///
/// Disjoint from [`overdue_tasks`] for any fixed date: delayed tasks are
/// excluded here and past-due tasks fail the `>= 0` bound.
pub fn upcoming_tasks(phases: &[Phase], today: NaiveDate, within_days: i64) -> Vec<&Task> {
    phases
        .iter()
        .flat_map(|p| p.tasks.iter())
        .filter(|t| is_upcoming(t, today, within_days))
        .collect()
}

/// Whether a single task is due within the lookahead window.
pub fn is_upcoming(task: &Task, today: NaiveDate, within_days: i64) -> bool {
    if matches!(task.status, TaskStatus::Completed | TaskStatus::Delayed) {
        return false;
    }
    match task.end_date_parsed() {
        Some(end) => {
            let diff = (end - today).num_days();
            diff >= 0 && diff <= within_days
        }
        None => false,
    }
}

/// The next milestone to aim for: the earliest-ending incomplete milestone
/// due on or after the given date.
pub fn next_milestone(phases: &[Phase], today: NaiveDate) -> Option<&Task> {
    phases
        .iter()
        .flat_map(|p| p.tasks.iter())
        .filter(|t| t.is_milestone && t.status != TaskStatus::Completed)
        .filter_map(|t| t.end_date_parsed().map(|end| (end, t)))
        .filter(|(end, _)| *end >= today)
        .min_by_key(|(end, _)| *end)
        .map(|(_, t)| t)
}

/// Agenda item counts partitioned by status.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AgendaReadiness {
    pub drafting: usize,
    pub reviewing: usize,
    pub finalized: usize,
    pub total: usize,
    /// Share of finalized items, 0.0 when there are no items.
    pub finalized_ratio: f64,
}

/// Partition agenda items by drafting status.
pub fn agenda_readiness(items: &[AgendaItem]) -> AgendaReadiness {
    let mut readiness = AgendaReadiness {
        total: items.len(),
        ..Default::default()
    };
    for item in items {
        match item.status {
            AgendaStatus::Drafting => readiness.drafting += 1,
            AgendaStatus::Reviewing => readiness.reviewing += 1,
            AgendaStatus::Finalized => readiness.finalized += 1,
        }
    }
    if readiness.total > 0 {
        readiness.finalized_ratio = readiness.finalized as f64 / readiness.total as f64;
    }
    readiness
}
