//! In-memory tracker store.
//!
//! Owns the three root collections (teams, phases-with-tasks, agenda items)
//! and applies structural mutations. Every mutation validates first and then
//! rebuilds the affected collection, so a snapshot cloned before the call is
//! never aliased by the mutation and the store is left untouched on any
//! error path.
//!
//! Single-writer: operations run to completion synchronously, there is no
//! shared-state locking.

use crate::fixture::SeedData;
use crate::model::{AgendaItem, Phase, Task, Team, TrackingLog};
use crate::StoreError;
use chrono::Utc;
use uuid::Uuid;

/// Cloned, consistent view of the store's root collections.
#[derive(Debug, Clone)]
pub struct TrackerSnapshot {
    pub teams: Vec<Team>,
    pub phases: Vec<Phase>,
    pub agenda_items: Vec<AgendaItem>,
}

/// Authoritative holder of the tracking data.
#[derive(Debug, Default)]
pub struct TrackerStore {
    teams: Vec<Team>,
    phases: Vec<Phase>,
    agenda_items: Vec<AgendaItem>,
}

impl TrackerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from a seed fixture.
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            teams: seed.teams,
            phases: seed.phases,
            agenda_items: seed.agenda_items,
        }
    }

    /// Current teams, insertion order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Current phases with their tasks, schedule order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Current agenda items, newest-first.
    pub fn agenda_items(&self) -> &[AgendaItem] {
        &self.agenda_items
    }

    /// All tasks flattened in phase order, then task order within phase.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.phases.iter().flat_map(|p| p.tasks.iter())
    }

    /// Clone a consistent view of all three collections.
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            teams: self.teams.clone(),
            phases: self.phases.clone(),
            agenda_items: self.agenda_items.clone(),
        }
    }

    /// Look up a team by id.
    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Display name for a team id, falling back to the raw id.
    ///
    /// Team references are weak: a task may still name a deleted team, and
    /// the lookup must resolve to something displayable rather than fail.
    pub fn team_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.team(id).map(|t| t.name.as_str()).unwrap_or(id)
    }

    // ---- teams ----

    /// Add a team at the end of the collection.
    ///
    /// Rejects an empty id and an id that would shadow an existing team in
    /// lookups.
    pub fn add_team(&mut self, team: Team) -> Result<(), StoreError> {
        if team.id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        if self.team(&team.id).is_some() {
            return Err(StoreError::DuplicateTeam(team.id));
        }
        tracing::debug!(team = %team.id, "Team added");
        let mut teams = self.teams.clone();
        teams.push(team);
        self.teams = teams;
        Ok(())
    }

    /// Replace the team with a matching id.
    pub fn update_team(&mut self, team: Team) -> Result<(), StoreError> {
        if self.team(&team.id).is_none() {
            return Err(StoreError::TeamNotFound(team.id));
        }
        self.teams = self
            .teams
            .iter()
            .map(|t| if t.id == team.id { team.clone() } else { t.clone() })
            .collect();
        Ok(())
    }

    /// Remove a team. Tasks and agenda items referencing it are not touched;
    /// their references dangle and lookups fall back to the raw id.
    pub fn delete_team(&mut self, id: &str) -> Result<(), StoreError> {
        if self.team(id).is_none() {
            return Err(StoreError::TeamNotFound(id.to_string()));
        }
        tracing::debug!(team = %id, "Team deleted");
        self.teams = self.teams.iter().filter(|t| t.id != id).cloned().collect();
        Ok(())
    }

    // ---- agenda items ----

    /// Insert an agenda item at the front of the collection (newest-first).
    pub fn add_agenda_item(&mut self, item: AgendaItem) -> Result<(), StoreError> {
        if item.id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        let mut items = Vec::with_capacity(self.agenda_items.len() + 1);
        items.push(item);
        items.extend(self.agenda_items.iter().cloned());
        self.agenda_items = items;
        Ok(())
    }

    /// Replace the agenda item with a matching id, order preserved.
    pub fn update_agenda_item(&mut self, item: AgendaItem) -> Result<(), StoreError> {
        if !self.agenda_items.iter().any(|i| i.id == item.id) {
            return Err(StoreError::AgendaItemNotFound(item.id));
        }
        self.agenda_items = self
            .agenda_items
            .iter()
            .map(|i| if i.id == item.id { item.clone() } else { i.clone() })
            .collect();
        Ok(())
    }

    /// Remove an agenda item by id, order otherwise preserved.
    pub fn delete_agenda_item(&mut self, id: &str) -> Result<(), StoreError> {
        if !self.agenda_items.iter().any(|i| i.id == id) {
            return Err(StoreError::AgendaItemNotFound(id.to_string()));
        }
        self.agenda_items = self
            .agenda_items
            .iter()
            .filter(|i| i.id != id)
            .cloned()
            .collect();
        Ok(())
    }

    /// Prepend a tracking log to an agenda item. Only the log list changes.
    pub fn append_agenda_log(
        &mut self,
        item_id: &str,
        message: &str,
        author: &str,
    ) -> Result<(), StoreError> {
        if !self.agenda_items.iter().any(|i| i.id == item_id) {
            return Err(StoreError::AgendaItemNotFound(item_id.to_string()));
        }
        let log = new_log(message, author);
        tracing::debug!(item = %item_id, log = %log.id, "Agenda log appended");
        self.agenda_items = self
            .agenda_items
            .iter()
            .map(|i| {
                if i.id != item_id {
                    return i.clone();
                }
                let mut logs = Vec::with_capacity(i.logs.len() + 1);
                logs.push(log.clone());
                logs.extend(i.logs.iter().cloned());
                AgendaItem {
                    logs,
                    ..i.clone()
                }
            })
            .collect();
        Ok(())
    }

    // ---- tasks ----

    /// Append a task to the end of the named phase's task list.
    ///
    /// Tasks are oldest-first, unlike logs and agenda items.
    pub fn add_task(&mut self, phase_id: u32, task: Task) -> Result<(), StoreError> {
        if task.id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        if !self.phases.iter().any(|p| p.id == phase_id) {
            return Err(StoreError::PhaseNotFound(phase_id));
        }
        self.phases = self
            .phases
            .iter()
            .map(|p| {
                if p.id != phase_id {
                    return p.clone();
                }
                let mut tasks = p.tasks.clone();
                tasks.push(task.clone());
                Phase { tasks, ..p.clone() }
            })
            .collect();
        Ok(())
    }

    /// Replace a task by id within the named phase only.
    pub fn update_task(&mut self, phase_id: u32, task: Task) -> Result<(), StoreError> {
        self.require_task(phase_id, &task.id)?;
        self.phases = self
            .phases
            .iter()
            .map(|p| {
                if p.id != phase_id {
                    return p.clone();
                }
                Phase {
                    tasks: p
                        .tasks
                        .iter()
                        .map(|t| if t.id == task.id { task.clone() } else { t.clone() })
                        .collect(),
                    ..p.clone()
                }
            })
            .collect();
        Ok(())
    }

    /// Remove a task by id within the named phase only.
    pub fn delete_task(&mut self, phase_id: u32, task_id: &str) -> Result<(), StoreError> {
        self.require_task(phase_id, task_id)?;
        tracing::debug!(phase = phase_id, task = %task_id, "Task deleted");
        self.phases = self
            .phases
            .iter()
            .map(|p| {
                if p.id != phase_id {
                    return p.clone();
                }
                Phase {
                    tasks: p.tasks.iter().filter(|t| t.id != task_id).cloned().collect(),
                    ..p.clone()
                }
            })
            .collect();
        Ok(())
    }

    /// Prepend a tracking log to a task within the named phase.
    pub fn append_task_log(
        &mut self,
        phase_id: u32,
        task_id: &str,
        message: &str,
        author: &str,
    ) -> Result<(), StoreError> {
        self.require_task(phase_id, task_id)?;
        let log = new_log(message, author);
        tracing::debug!(phase = phase_id, task = %task_id, log = %log.id, "Task log appended");
        self.phases = self
            .phases
            .iter()
            .map(|p| {
                if p.id != phase_id {
                    return p.clone();
                }
                Phase {
                    tasks: p
                        .tasks
                        .iter()
                        .map(|t| {
                            if t.id != task_id {
                                return t.clone();
                            }
                            let mut logs = Vec::with_capacity(t.logs.len() + 1);
                            logs.push(log.clone());
                            logs.extend(t.logs.iter().cloned());
                            Task { logs, ..t.clone() }
                        })
                        .collect(),
                    ..p.clone()
                }
            })
            .collect();
        Ok(())
    }

    fn require_task(&self, phase_id: u32, task_id: &str) -> Result<(), StoreError> {
        let phase = self
            .phases
            .iter()
            .find(|p| p.id == phase_id)
            .ok_or(StoreError::PhaseNotFound(phase_id))?;
        if !phase.tasks.iter().any(|t| t.id == task_id) {
            return Err(StoreError::TaskNotFound {
                phase_id,
                task_id: task_id.to_string(),
            });
        }
        Ok(())
    }
}

/// Build a tracking log with a fresh id and the current timestamp.
fn new_log(message: &str, author: &str) -> TrackingLog {
    TrackingLog {
        id: Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        message: message.to_string(),
        author: author.to_string(),
    }
}
