//! Text rendering for tracker views.
//!
//! Dates render in the Thai Buddhist calendar (`dd/mm/yyyy` with the year
//! offset by 543), matching the cooperative's printed materials. Malformed
//! dates render as the "-" sentinel instead of failing.

use agmtrack_core::metrics::{self, AgendaReadiness};
use agmtrack_core::model::parse_date;
use agmtrack_core::{AgendaItem, Phase, Task, TrackerStore, TrackingLog};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

/// Buddhist-era rendering of a `YYYY-MM-DD` string, "-" when malformed.
pub fn thai_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format_thai(date),
        None => "-".to_string(),
    }
}

/// Buddhist-era rendering of a parsed date.
pub fn format_thai(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year() + 543)
}

/// Buddhist-era date plus wall time, for log timestamps.
pub fn thai_datetime(ts: &DateTime<Utc>) -> String {
    format!(
        "{} {:02}:{:02}",
        format_thai(ts.date_naive()),
        ts.hour(),
        ts.minute()
    )
}

/// The four dashboard summary cards.
pub fn dashboard(store: &TrackerStore, today: NaiveDate, agm_date: NaiveDate) -> String {
    let days_left = metrics::days_remaining(agm_date, today);
    let progress = metrics::overall_progress(store.phases());
    let completed = metrics::completed_task_count(store.phases());
    let total = metrics::total_task_count(store.phases());
    let readiness = metrics::agenda_readiness(store.agenda_items());
    let overdue = metrics::overdue_tasks(store.phases(), today).len();

    let mut out = String::new();
    out.push_str(&format!("AGM overview — as of {}\n\n", format_thai(today)));
    out.push_str(&format!(
        "  Days remaining      {days_left} days (AGM: {})\n",
        format_thai(agm_date)
    ));
    out.push_str(&format!(
        "  Overall progress    {progress}% ({completed} of {total} tasks completed)\n"
    ));
    out.push_str(&format!(
        "  Content readiness   {}/{} finalized ({}%)\n",
        readiness.finalized,
        readiness.total,
        (readiness.finalized_ratio * 100.0).round() as u32
    ));
    out.push_str(&format!("  Needs attention     {overdue} overdue task(s)\n"));

    if let Some(milestone) = metrics::next_milestone(store.phases(), today) {
        out.push_str(&format!(
            "\nNext milestone: {} {} (due {})\n",
            milestone.id,
            milestone.title,
            thai_date(&milestone.end_date)
        ));
    }
    out
}

/// The notification center: overdue section, then upcoming section.
pub fn notifications(store: &TrackerStore, today: NaiveDate, within_days: i64) -> String {
    let overdue = metrics::overdue_tasks(store.phases(), today);
    let upcoming = metrics::upcoming_tasks(store.phases(), today, within_days);

    if overdue.is_empty() && upcoming.is_empty() {
        return "All tasks are on plan. Nothing overdue or due soon.\n".to_string();
    }

    let mut out = String::new();
    if !overdue.is_empty() {
        out.push_str("OVERDUE\n");
        for task in overdue {
            out.push_str(&notification_line(store, task));
        }
    }
    if !upcoming.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("DUE WITHIN {within_days} DAYS\n"));
        for task in upcoming {
            out.push_str(&notification_line(store, task));
        }
    }
    out
}

fn notification_line(store: &TrackerStore, task: &Task) -> String {
    let mut line = format!(
        "  {} {} — due {} [{}]",
        task.id,
        task.title,
        thai_date(&task.end_date),
        task.status.as_str()
    );
    line.push_str(&format!(", {}", store.team_name(&task.team_id)));
    if let Some(person) = &task.responsible_person {
        line.push_str(&format!(" / {person}"));
    }
    line.push('\n');
    line
}

/// The timeline view: phases with their (possibly filtered) tasks.
pub fn task_table(store: &TrackerStore, phases: &[Phase]) -> String {
    if phases.is_empty() {
        return "No tasks match the current filters.\n".to_string();
    }

    let mut out = String::new();
    for phase in phases {
        out.push_str(&format!("{} ({})\n", phase.name, phase.period));
        for task in &phase.tasks {
            let milestone = if task.is_milestone { " *" } else { "" };
            out.push_str(&format!(
                "  {}{} {} — {} to {} [{}] {}",
                task.id,
                milestone,
                task.title,
                thai_date(&task.start_date),
                thai_date(&task.end_date),
                task.status.label_thai(),
                store.team_name(&task.team_id),
            ));
            if !task.logs.is_empty() {
                out.push_str(&format!(" ({} update(s))", task.logs.len()));
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// The agenda checklist with a readiness summary line.
pub fn agenda_list(store: &TrackerStore) -> String {
    let items = store.agenda_items();
    let readiness = metrics::agenda_readiness(items);

    let mut out = String::new();
    out.push_str(&readiness_line(&readiness));
    out.push('\n');
    for item in items {
        out.push_str(&agenda_line(store, item));
    }
    out
}

fn readiness_line(readiness: &AgendaReadiness) -> String {
    format!(
        "{} items — {} finalized, {} reviewing, {} drafting\n",
        readiness.total, readiness.finalized, readiness.reviewing, readiness.drafting
    )
}

fn agenda_line(store: &TrackerStore, item: &AgendaItem) -> String {
    let mut line = format!(
        "  [{}] {} — {}",
        item.status.label_thai(),
        item.title,
        store.team_name(&item.responsible_team_id),
    );
    if let Some(person) = &item.responsible_person {
        line.push_str(&format!(" / {person}"));
    }
    if !item.logs.is_empty() {
        line.push_str(&format!(" ({} update(s))", item.logs.len()));
    }
    line.push('\n');
    line
}

/// Team listing for the settings view.
pub fn team_list(store: &TrackerStore) -> String {
    let mut out = format!("{} team(s)\n", store.teams().len());
    for team in store.teams() {
        out.push_str(&format!("  {} — {}", team.id, team.name));
        if let Some(description) = &team.description {
            out.push_str(&format!(": {description}"));
        }
        out.push('\n');
    }
    out
}

/// A tracking log list, newest first.
pub fn log_list(logs: &[TrackingLog]) -> String {
    if logs.is_empty() {
        return "  (no updates yet)\n".to_string();
    }
    let mut out = String::new();
    for log in logs {
        out.push_str(&format!(
            "  {} [{}] {}\n",
            thai_datetime(&log.timestamp),
            log.author,
            log.message
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_date_buddhist_era() {
        assert_eq!(thai_date("2026-02-07"), "07/02/2569");
        assert_eq!(thai_date("2025-11-01"), "01/11/2568");
    }

    #[test]
    fn test_thai_date_sentinel_on_malformed() {
        assert_eq!(thai_date("garbage"), "-");
        assert_eq!(thai_date(""), "-");
        assert_eq!(thai_date("07/02/2026"), "-");
    }

    #[test]
    fn test_dashboard_renders_seed() {
        let store = TrackerStore::from_seed(agmtrack_core::SeedData::builtin());
        let today = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
        let agm = NaiveDate::from_ymd_opt(2026, 3, 13).unwrap();
        let out = dashboard(&store, today, agm);
        assert!(out.contains("34 days"));
        assert!(out.contains("0%"));
        assert!(out.contains("Next milestone"));
    }

    #[test]
    fn test_notifications_empty_store() {
        let store = TrackerStore::new();
        let today = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
        let out = notifications(&store, today, 3);
        assert!(out.contains("on plan"));
    }
}
