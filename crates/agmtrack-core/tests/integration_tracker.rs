//! Integration tests for the tracker flow: seed, mutate, derive, filter.

use agmtrack_core::{
    filter_tasks, fixture, metrics, AgendaStatus, SeedData, TaskFilter, TaskStatus, Team,
    TrackerStore,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The dashboard numbers over the untouched builtin seed at the pinned date.
#[test]
fn test_dashboard_over_builtin_seed() {
    let store = TrackerStore::from_seed(SeedData::builtin());
    let today = date(2026, 2, 7);

    // Nothing is completed yet.
    assert_eq!(metrics::overall_progress(store.phases()), 0);

    // Countdown to the meeting itself.
    assert_eq!(metrics::days_remaining(date(2026, 3, 13), today), 34);

    // Every task ending before 7 Feb is pending, hence overdue.
    let overdue = metrics::overdue_tasks(store.phases(), today);
    let overdue_ids: Vec<_> = overdue.iter().map(|t| t.id.as_str()).collect();
    assert!(overdue_ids.contains(&"1.1"));
    assert!(overdue_ids.contains(&"2.4"));
    assert!(!overdue_ids.contains(&"3.2b"));

    // All agenda items start in drafting.
    let readiness = metrics::agenda_readiness(store.agenda_items());
    assert_eq!(readiness.finalized, 0);
    assert_eq!(readiness.drafting, readiness.total);
    assert_eq!(readiness.finalized_ratio, 0.0);
}

/// Completing tasks moves the aggregate progress and empties the overdue list.
#[test]
fn test_progress_follows_task_updates() {
    let mut store = TrackerStore::from_seed(SeedData::builtin());
    let today = date(2026, 2, 7);
    let total = metrics::total_task_count(store.phases());

    // Complete everything that is overdue at the pinned date.
    let overdue: Vec<(u32, String)> = store
        .phases()
        .iter()
        .flat_map(|p| {
            p.tasks
                .iter()
                .filter(|t| metrics::is_overdue(t, today))
                .map(move |t| (p.id, t.id.clone()))
        })
        .collect();
    for (phase_id, task_id) in overdue {
        let mut task = store
            .phases()
            .iter()
            .find(|p| p.id == phase_id)
            .and_then(|p| p.tasks.iter().find(|t| t.id == task_id))
            .cloned()
            .unwrap();
        task.status = TaskStatus::Completed;
        task.progress_percent = Some(100);
        store.update_task(phase_id, task).unwrap();
    }

    assert!(metrics::overdue_tasks(store.phases(), today).is_empty());
    let completed = metrics::completed_task_count(store.phases());
    assert!(completed > 0);
    let expected = (100.0 * completed as f64 / total as f64).round() as u32;
    assert_eq!(metrics::overall_progress(store.phases()), expected);
}

/// The notification sets never overlap, whatever the store looks like.
#[test]
fn test_notification_sets_disjoint_on_seed() {
    let mut store = TrackerStore::from_seed(SeedData::builtin());
    // Push one task into each interesting state.
    let mut t = store.phases()[2].tasks[0].clone();
    t.status = TaskStatus::Delayed;
    store.update_task(3, t).unwrap();

    let today = date(2026, 2, 7);
    let overdue: Vec<String> = metrics::overdue_tasks(store.phases(), today)
        .iter()
        .map(|t| t.id.clone())
        .collect();
    for task in metrics::upcoming_tasks(store.phases(), today, 3) {
        assert!(!overdue.contains(&task.id));
    }
}

/// Agenda mutations: prepend on add, log prepend, readiness movement.
#[test]
fn test_agenda_flow() {
    let mut store = TrackerStore::from_seed(SeedData::builtin());
    let first_seeded = store.agenda_items()[0].id.clone();

    let mut extra = store.agenda_items()[0].clone();
    extra.id = "extra".to_string();
    extra.title = "Late-added agenda".to_string();
    store.add_agenda_item(extra).unwrap();
    assert_eq!(store.agenda_items()[0].id, "extra");
    assert_eq!(store.agenda_items()[1].id, first_seeded);

    store
        .append_agenda_log("extra", "outline circulated", "admin")
        .unwrap();
    assert_eq!(store.agenda_items()[0].logs.len(), 1);

    let mut finalized = store.agenda_items()[0].clone();
    finalized.status = AgendaStatus::Finalized;
    store.update_agenda_item(finalized).unwrap();
    let readiness = metrics::agenda_readiness(store.agenda_items());
    assert_eq!(readiness.finalized, 1);
    assert!(readiness.finalized_ratio > 0.0);
}

/// Filtering the seeded timeline by team and window, then re-filtering.
#[test]
fn test_filter_over_seed() {
    let store = TrackerStore::from_seed(SeedData::builtin());

    let filter = TaskFilter {
        team_id: Some(fixture::TEAM_FINANCE.to_string()),
        start_date_from: Some(date(2026, 1, 1)),
        ..Default::default()
    };
    let filtered = filter_tasks(store.phases(), &filter);
    // Finance work in 2026 all sits in the audit phase.
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);
    for task in &filtered[0].tasks {
        assert_eq!(task.team_id, fixture::TEAM_FINANCE);
    }

    let again = filter_tasks(&filtered, &filter);
    assert_eq!(again, filtered);

    // The empty filter is the identity.
    let identity = filter_tasks(store.phases(), &TaskFilter::default());
    assert_eq!(identity, store.phases());
}

/// Deleting a team must leave referencing tasks readable.
#[test]
fn test_dangling_team_reference_tolerated() {
    let mut store = TrackerStore::from_seed(SeedData::builtin());
    store.delete_team(fixture::TEAM_VENDOR).unwrap();

    let team_id = store
        .all_tasks()
        .find(|t| t.team_id == fixture::TEAM_VENDOR)
        .map(|t| t.team_id.clone())
        .expect("seed has vendor tasks");
    assert_eq!(store.team_name(&team_id), fixture::TEAM_VENDOR);

    // Re-adding under the same id resolves the name again.
    store
        .add_team(Team {
            id: fixture::TEAM_VENDOR.to_string(),
            name: "Replacement Vendor".to_string(),
            description: None,
            color_tag: "rose".to_string(),
        })
        .unwrap();
    assert_eq!(store.team_name(&team_id), "Replacement Vendor");
}
