//! Core error types for the tracker.

use thiserror::Error;

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity id was empty
    #[error("Entity id must not be empty")]
    EmptyId,

    /// A team with the same id already exists
    #[error("Team already exists: {0}")]
    DuplicateTeam(String),

    /// Team not found
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    /// Phase not found
    #[error("Phase not found: {0}")]
    PhaseNotFound(u32),

    /// Task not found within the named phase
    #[error("Task not found in phase {phase_id}: {task_id}")]
    TaskNotFound { phase_id: u32, task_id: String },

    /// Agenda item not found
    #[error("Agenda item not found: {0}")]
    AgendaItemNotFound(String),

    /// Seed fixture could not be loaded
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
