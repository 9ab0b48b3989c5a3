//! Seed fixtures consumed once at startup.
//!
//! The builtin dataset mirrors the cooperative's AGM preparation plan; any
//! JSON file respecting the entity shapes can replace it via
//! [`SeedData::load_from`].

use crate::model::{AgendaItem, AgendaStatus, Phase, Task, TaskStatus, Team};
use crate::StoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stable team ids used by the builtin dataset.
pub const TEAM_BOOK: &str = "COMMITTEE_BOOK";
pub const TEAM_PROCUREMENT: &str = "COMMITTEE_PROCUREMENT";
pub const TEAM_INSPECTION: &str = "COMMITTEE_INSPECTION";
pub const TEAM_VENDOR: &str = "VENDOR";
pub const TEAM_FINANCE: &str = "FINANCE";

/// Initial tracker state: teams, phases-with-tasks, agenda items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub teams: Vec<Team>,
    pub phases: Vec<Phase>,
    pub agenda_items: Vec<AgendaItem>,
}

impl SeedData {
    /// Load seed data from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| StoreError::Fixture(e.to_string()))
    }

    /// The builtin AGM preparation dataset.
    pub fn builtin() -> Self {
        Self {
            teams: builtin_teams(),
            phases: builtin_phases(),
            agenda_items: builtin_agenda_items(),
        }
    }
}

fn team(id: &str, name: &str, description: &str, color_tag: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        color_tag: color_tag.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    start_date: &str,
    end_date: &str,
    team_id: &str,
    responsible_person: &str,
    is_milestone: bool,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        team_id: team_id.to_string(),
        responsible_person: Some(responsible_person.to_string()),
        status: TaskStatus::Pending,
        is_milestone,
        progress_percent: Some(0),
        logs: vec![],
    }
}

fn agenda(id: &str, title: &str, team_id: &str, person: &str) -> AgendaItem {
    AgendaItem {
        id: id.to_string(),
        title: title.to_string(),
        responsible_team_id: team_id.to_string(),
        responsible_person: Some(person.to_string()),
        status: AgendaStatus::Drafting,
        logs: vec![],
    }
}

fn builtin_teams() -> Vec<Team> {
    vec![
        team(
            TEAM_BOOK,
            "Report Book Committee",
            "Collects material, assembles the manuscript and proofreads",
            "indigo",
        ),
        team(
            TEAM_PROCUREMENT,
            "Procurement Committee",
            "Runs the print tender and defines the terms of reference",
            "blue",
        ),
        team(
            TEAM_INSPECTION,
            "Inspection Committee",
            "Verifies deliverables and signs off acceptance",
            "emerald",
        ),
        team(
            TEAM_VENDOR,
            "Print Vendor",
            "Print house producing and binding the report",
            "rose",
        ),
        team(
            TEAM_FINANCE,
            "Finance & Accounting",
            "Financial statements, bookkeeping and the audit",
            "amber",
        ),
    ]
}

fn builtin_phases() -> Vec<Phase> {
    vec![
        Phase {
            id: 1,
            name: "Phase 1: Preparation and Planning".to_string(),
            period: "1 Nov – 31 Dec".to_string(),
            description: "Line up resources, budget and groundwork".to_string(),
            tasks: vec![
                task(
                    "1.1",
                    "Tender the print contract (TOR)",
                    "Issue TOR for 4,000 copies, 14 working days production, penalty clause",
                    "2025-11-01",
                    "2025-11-15",
                    TEAM_PROCUREMENT,
                    "Procurement chair",
                    true,
                ),
                task(
                    "1.2",
                    "Draft the narrative section",
                    "Collect the chairman's message, board biographies, activity photos",
                    "2025-11-01",
                    "2025-12-31",
                    TEAM_BOOK,
                    "Working group secretary",
                    false,
                ),
                task(
                    "1.3",
                    "Coordinate with the external auditor",
                    "Arrange the interim review and fix the final audit date",
                    "2025-12-01",
                    "2025-12-31",
                    TEAM_FINANCE,
                    "Head of accounting",
                    false,
                ),
            ],
        },
        Phase {
            id: 2,
            name: "Phase 2: Book Closing and Audit (Critical)".to_string(),
            period: "2 Jan – 4 Feb".to_string(),
            description: "Critical window; slippage here pushes the print date".to_string(),
            tasks: vec![
                task(
                    "2.1",
                    "Preliminary book closing",
                    "Post adjusting entries, confirm receivables and share capital",
                    "2026-01-02",
                    "2026-01-15",
                    TEAM_FINANCE,
                    "Head of accounting",
                    false,
                ),
                task(
                    "2.2",
                    "Audit fieldwork",
                    "External auditor reviews documents on site",
                    "2026-01-16",
                    "2026-01-25",
                    TEAM_FINANCE,
                    "External auditor",
                    false,
                ),
                task(
                    "2.3",
                    "Approve statements and profit allocation",
                    "Board meeting to consider the draft statements and dividend",
                    "2026-01-26",
                    "2026-01-30",
                    TEAM_BOOK,
                    "Board of directors",
                    true,
                ),
                task(
                    "2.4",
                    "Sign the auditor's report",
                    "Receive the final report (content freeze)",
                    "2026-02-01",
                    "2026-02-04",
                    TEAM_FINANCE,
                    "External auditor",
                    true,
                ),
            ],
        },
        Phase {
            id: 3,
            name: "Phase 3: Production and Printing".to_string(),
            period: "5 Feb – 25 Feb".to_string(),
            description: "14 working days of print production, day-to-day management".to_string(),
            tasks: vec![
                task(
                    "3.1",
                    "Final assembly and file handoff",
                    "Merge statements with the narrative, final proofread",
                    "2026-02-05",
                    "2026-02-06",
                    TEAM_BOOK,
                    "Working group secretary",
                    true,
                ),
                task(
                    "3.2a",
                    "Approve the digital color proof",
                    "Vendor sends the proof; inspection committee approves within 24h",
                    "2026-02-09",
                    "2026-02-11",
                    TEAM_INSPECTION,
                    "Inspection chair",
                    false,
                ),
                task(
                    "3.2b",
                    "Print and bind",
                    "Print the body, bind and trim",
                    "2026-02-12",
                    "2026-02-25",
                    TEAM_VENDOR,
                    "Print house",
                    false,
                ),
            ],
        },
        Phase {
            id: 4,
            name: "Phase 4: Delivery and Distribution".to_string(),
            period: "26 Feb – 5 Mar".to_string(),
            description: "Books must reach members before the meeting; mind the 3 Mar holiday"
                .to_string(),
            tasks: vec![
                task(
                    "4.1",
                    "Acceptance and e-book release",
                    "Receive 4,000 copies, publish the e-book on web and Line",
                    "2026-02-26",
                    "2026-02-26",
                    TEAM_INSPECTION,
                    "Inspection committee",
                    true,
                ),
                task(
                    "4.2",
                    "Distribute the books (EMS and offices)",
                    "Deliver to branch offices and post EMS before the holiday",
                    "2026-02-27",
                    "2026-02-28",
                    TEAM_BOOK,
                    "Administration",
                    false,
                ),
            ],
        },
        Phase {
            id: 5,
            name: "Phase 5: Annual General Meeting".to_string(),
            period: "13 Mar".to_string(),
            description: "Meeting day".to_string(),
            tasks: vec![task(
                "5.1",
                "Hold the annual general meeting",
                "Prepare registration desks, spare copies, presentation media",
                "2026-03-13",
                "2026-03-13",
                TEAM_BOOK,
                "Secretary",
                true,
            )],
        },
    ]
}

fn builtin_agenda_items() -> Vec<AgendaItem> {
    vec![
        agenda("1", "Message from the chairman", TEAM_BOOK, "Secretary"),
        agenda("2", "Message from the manager", TEAM_BOOK, "Manager"),
        agenda(
            "3",
            "Board of directors and internal auditors",
            TEAM_BOOK,
            "Administration",
        ),
        agenda("4", "Cooperative staff", TEAM_BOOK, "Administration"),
        agenda("5", "Activity photos", TEAM_BOOK, "Administration/PR"),
        agenda("6", "Annual operating results", TEAM_BOOK, "Manager"),
        agenda("7", "Strategic plan", TEAM_BOOK, "Planning"),
        agenda("8", "Notice of the annual general meeting", TEAM_BOOK, "Secretary"),
        agenda(
            "9",
            "Agenda 1: Matters announced by the chairman",
            TEAM_BOOK,
            "Chairman/Secretary",
        ),
        agenda(
            "10",
            "Agenda 2: Adoption of last year's meeting minutes",
            TEAM_BOOK,
            "Secretary",
        ),
        agenda(
            "11",
            "Agenda 3: Expiry of the current board's term",
            TEAM_BOOK,
            "Nomination committee",
        ),
        agenda(
            "12",
            "Agenda 4.1: Annual operating report",
            TEAM_BOOK,
            "Manager",
        ),
        agenda(
            "13",
            "Agenda 4.2: Member admissions and withdrawals",
            TEAM_BOOK,
            "Membership",
        ),
        agenda(
            "14",
            "Agenda 4.3: Internal audit report",
            TEAM_BOOK,
            "Internal auditor",
        ),
        agenda(
            "15",
            "Agenda 5.1: Approval of the financial statements",
            TEAM_FINANCE,
            "External auditor",
        ),
        agenda(
            "16",
            "Agenda 5.2: Approval of the net profit allocation",
            TEAM_FINANCE,
            "Accounting/Manager",
        ),
        agenda(
            "17",
            "Agenda 5.3: Approval of next year's budget",
            TEAM_FINANCE,
            "Accounting",
        ),
        agenda(
            "18",
            "Agenda 5.4: Selection of the external auditor and fee",
            TEAM_FINANCE,
            "Accounting",
        ),
        agenda(
            "19",
            "Agenda 5.5: Approval of the borrowing limit",
            TEAM_FINANCE,
            "Finance",
        ),
        agenda(
            "20",
            "Agenda 6: Election results for the incoming board",
            TEAM_BOOK,
            "Election committee",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shapes() {
        let seed = SeedData::builtin();
        assert_eq!(seed.teams.len(), 5);
        assert_eq!(seed.phases.len(), 5);
        assert!(!seed.agenda_items.is_empty());

        // Every task and agenda item references a seeded team.
        let team_ids: Vec<_> = seed.teams.iter().map(|t| t.id.as_str()).collect();
        for phase in &seed.phases {
            for task in &phase.tasks {
                assert!(team_ids.contains(&task.team_id.as_str()), "{}", task.id);
                assert!(task.start_date_parsed().is_some(), "{}", task.id);
                assert!(task.end_date_parsed().is_some(), "{}", task.id);
            }
        }
        for item in &seed.agenda_items {
            assert!(team_ids.contains(&item.responsible_team_id.as_str()));
        }
    }

    #[test]
    fn test_builtin_task_ids_unique_within_phase() {
        let seed = SeedData::builtin();
        for phase in &seed.phases {
            let mut ids: Vec<_> = phase.tasks.iter().map(|t| t.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), phase.tasks.len(), "phase {}", phase.id);
        }
    }

    #[test]
    fn test_seed_round_trips_through_json() {
        let seed = SeedData::builtin();
        let json = serde_json::to_string_pretty(&seed).unwrap();
        let parsed: SeedData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.teams, seed.teams);
        assert_eq!(parsed.phases, seed.phases);
        assert_eq!(parsed.agenda_items, seed.agenda_items);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        let json = serde_json::to_string(&SeedData::builtin()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = SeedData::load_from(&path).unwrap();
        assert_eq!(loaded.phases.len(), 5);
    }

    #[test]
    fn test_load_from_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            SeedData::load_from(&path),
            Err(StoreError::Fixture(_))
        ));
    }
}
