//! Entity types for the AGM report tracker.
//!
//! Everything is serde-serializable so seed fixtures and config files
//! round-trip through JSON/YAML.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Calendar date format used by task due windows and filter bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date. Returns `None` for malformed input;
/// callers treat an unparseable date as "no determinable due status".
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// A named responsible party, referenced weakly by tasks and agenda items.
///
/// References are by id only; deleting a team leaves referencing tasks and
/// agenda items untouched, and lookups fall back to the raw id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Presentation color class shown with the team name
    pub color_tag: String,
}

/// An append-only, timestamped free-text note on a task or agenda item.
///
/// Immutable once created; log lists are kept newest-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub author: String,
}

/// Scheduling status of a task.
///
/// A flat enumeration: any status can be set from any other via the edit
/// operation, there is no transition graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Critical,
    Delayed,
}

impl TaskStatus {
    /// All statuses in display order.
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Critical,
        TaskStatus::Delayed,
    ];

    /// English display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Critical => "Critical",
            TaskStatus::Delayed => "Delayed",
        }
    }

    /// Thai display label used by the dashboard.
    pub fn label_thai(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "รอดำเนินการ",
            TaskStatus::InProgress => "กำลังดำเนินการ",
            TaskStatus::Completed => "เสร็จสิ้น",
            TaskStatus::Critical => "วิกฤต/เร่งด่วน",
            TaskStatus::Delayed => "ล่าช้า",
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" | "Pending" => Ok(TaskStatus::Pending),
            "in_progress" | "In Progress" => Ok(TaskStatus::InProgress),
            "completed" | "Completed" => Ok(TaskStatus::Completed),
            "critical" | "Critical" => Ok(TaskStatus::Critical),
            "delayed" | "Delayed" => Ok(TaskStatus::Delayed),
            other => Err(format!("unknown task status: {other}")),
        }
    }
}

/// A unit of work with a due window, owned by exactly one phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Start of the due window, `YYYY-MM-DD`. Kept as a string because
    /// fixture and form input may be malformed; parse with [`parse_date`].
    pub start_date: String,

    /// End of the due window, `YYYY-MM-DD`
    pub end_date: String,

    /// Weak reference to the responsible [`Team`]
    pub team_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,

    pub status: TaskStatus,

    #[serde(default)]
    pub is_milestone: bool,

    /// Manual progress estimate, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<u8>,

    #[serde(default)]
    pub logs: Vec<TrackingLog>,
}

impl Task {
    /// Parsed start date, `None` if malformed.
    pub fn start_date_parsed(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    /// Parsed end date, `None` if malformed.
    pub fn end_date_parsed(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }
}

/// A time-boxed stage of the reporting project, owning an ordered task list.
///
/// Tasks do not exist outside a phase; the phase id routes every task
/// mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    pub id: u32,
    pub name: String,
    /// Human-readable period label, display only
    pub period: String,
    pub description: String,
    pub tasks: Vec<Task>,
}

/// Drafting status of an agenda item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgendaStatus {
    Drafting,
    Reviewing,
    Finalized,
}

impl AgendaStatus {
    /// English display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgendaStatus::Drafting => "Drafting",
            AgendaStatus::Reviewing => "Reviewing",
            AgendaStatus::Finalized => "Finalized",
        }
    }

    /// Thai display label used by the agenda checklist.
    pub fn label_thai(&self) -> &'static str {
        match self {
            AgendaStatus::Drafting => "กำลังร่าง",
            AgendaStatus::Reviewing => "รอตรวจสอบ",
            AgendaStatus::Finalized => "สมบูรณ์",
        }
    }
}

/// A content section of the report requiring drafting, review and
/// finalization, independent of the phase/task schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgendaItem {
    pub id: String,
    pub title: String,
    /// Weak reference to the responsible [`Team`]
    pub responsible_team_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    pub status: AgendaStatus,
    #[serde(default)]
    pub logs: Vec<TrackingLog>,
}
