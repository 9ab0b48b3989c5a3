//! Task filtering for the timeline view.

use crate::model::{Phase, Task, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Criteria for narrowing the task list. `None` means "All" for that
/// dimension; specified criteria are combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    /// Keep tasks starting on or after this date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_from: Option<NaiveDate>,

    /// Keep tasks ending on or before this date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_to: Option<NaiveDate>,
}

impl TaskFilter {
    /// Whether no criteria are set (the filter passes everything).
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.team_id.is_none()
            && self.start_date_from.is_none()
            && self.end_date_to.is_none()
    }

    /// Whether a task satisfies every specified criterion.
    ///
    /// Date criteria compare chronologically; a task whose date does not
    /// parse cannot satisfy a date criterion.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(team_id) = &self.team_id {
            if task.team_id != *team_id {
                return false;
            }
        }
        if let Some(from) = self.start_date_from {
            match task.start_date_parsed() {
                Some(start) if start >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = self.end_date_to {
            match task.end_date_parsed() {
                Some(end) if end <= to => {}
                _ => return false,
            }
        }
        true
    }
}

/// Apply a filter across phases, keeping only matching tasks.
///
/// Phases left with no tasks are dropped entirely; phase order and task
/// order within each phase are preserved.
pub fn filter_tasks(phases: &[Phase], filter: &TaskFilter) -> Vec<Phase> {
    phases
        .iter()
        .map(|phase| Phase {
            tasks: phase
                .tasks
                .iter()
                .filter(|t| filter.matches(t))
                .cloned()
                .collect(),
            ..phase.clone()
        })
        .filter(|phase| !phase.tasks.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, team_id: &str, start: &str, end: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            team_id: team_id.to_string(),
            responsible_person: None,
            status,
            is_milestone: false,
            progress_percent: None,
            logs: vec![],
        }
    }

    fn sample_phases() -> Vec<Phase> {
        vec![
            Phase {
                id: 1,
                name: "Preparation".to_string(),
                period: String::new(),
                description: String::new(),
                tasks: vec![
                    task("1.1", "PROCUREMENT", "2025-11-01", "2025-11-15", TaskStatus::Completed),
                    task("1.2", "BOOK", "2025-11-01", "2025-12-31", TaskStatus::InProgress),
                ],
            },
            Phase {
                id: 2,
                name: "Audit".to_string(),
                period: String::new(),
                description: String::new(),
                tasks: vec![
                    task("2.1", "FINANCE", "2026-01-02", "2026-01-15", TaskStatus::Pending),
                    task("2.2", "FINANCE", "2026-01-16", "2026-01-25", TaskStatus::Pending),
                ],
            },
        ]
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task_ids(phases: &[Phase]) -> Vec<String> {
        phases
            .iter()
            .flat_map(|p| p.tasks.iter())
            .map(|t| t.id.clone())
            .collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let phases = sample_phases();
        let filtered = filter_tasks(&phases, &TaskFilter::default());
        assert_eq!(filtered, phases);
    }

    #[test]
    fn test_filter_by_status() {
        let phases = sample_phases();
        let filter = TaskFilter {
            status: Some(TaskStatus::Pending),
            ..Default::default()
        };
        let filtered = filter_tasks(&phases, &filter);
        assert_eq!(task_ids(&filtered), vec!["2.1", "2.2"]);
        // Phase 1 has no pending tasks and is dropped entirely.
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_filter_by_team() {
        let phases = sample_phases();
        let filter = TaskFilter {
            team_id: Some("BOOK".to_string()),
            ..Default::default()
        };
        assert_eq!(task_ids(&filter_tasks(&phases, &filter)), vec!["1.2"]);
    }

    #[test]
    fn test_filter_by_date_window() {
        let phases = sample_phases();
        let filter = TaskFilter {
            start_date_from: Some(date(2026, 1, 1)),
            end_date_to: Some(date(2026, 1, 20)),
            ..Default::default()
        };
        assert_eq!(task_ids(&filter_tasks(&phases, &filter)), vec!["2.1"]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let phases = sample_phases();
        let filter = TaskFilter {
            status: Some(TaskStatus::Pending),
            team_id: Some("BOOK".to_string()),
            ..Default::default()
        };
        assert!(filter_tasks(&phases, &filter).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let phases = sample_phases();
        let filter = TaskFilter {
            status: Some(TaskStatus::Pending),
            start_date_from: Some(date(2026, 1, 1)),
            ..Default::default()
        };
        let once = filter_tasks(&phases, &filter);
        let twice = filter_tasks(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_task_date_never_matches_date_criteria() {
        let mut phases = sample_phases();
        phases[0].tasks[0].start_date = "Nov 1st".to_string();
        let filter = TaskFilter {
            start_date_from: Some(date(2025, 1, 1)),
            ..Default::default()
        };
        let filtered = filter_tasks(&phases, &filter);
        assert!(!task_ids(&filtered).contains(&"1.1".to_string()));
        // But it still passes non-date criteria.
        let by_team = TaskFilter {
            team_id: Some("PROCUREMENT".to_string()),
            ..Default::default()
        };
        assert_eq!(task_ids(&filter_tasks(&phases, &by_team)), vec!["1.1"]);
    }
}
