//! AGM Tracker Core Components
//!
//! This crate provides the core functionality for the AGM report tracker:
//! the entity model, the in-memory store, derived metrics and task
//! filtering, plus seed fixtures and configuration.

mod config;
mod error;
pub mod filter;
pub mod fixture;
pub mod metrics;
pub mod model;
mod store;

pub use config::TrackerConfig;
pub use error::StoreError;
pub use filter::{filter_tasks, TaskFilter};
pub use fixture::SeedData;
pub use metrics::AgendaReadiness;
pub use model::{AgendaItem, AgendaStatus, Phase, Task, TaskStatus, Team, TrackingLog};
pub use store::{TrackerSnapshot, TrackerStore};
