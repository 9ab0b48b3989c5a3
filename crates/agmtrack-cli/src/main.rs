//! AGM Tracker CLI
//!
//! Command-line interface over the in-memory tracker: dashboard, task
//! notifications, timeline filtering, agenda checklist and team listing.
//! State is seeded per invocation and discarded at exit.

mod render;

use agmtrack_core::{
    filter_tasks, SeedData, TaskFilter, TaskStatus, TrackerConfig, TrackerStore,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agmtrack")]
#[command(about = "AGM report tracker - schedule, content and team tracking")]
#[command(version)]
struct Cli {
    /// Configuration file (default: ~/.agmtrack/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON seed fixture replacing the builtin dataset
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Override the pinned reporting date (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard summary
    Dashboard,

    /// Show overdue and upcoming task notifications
    Notify,

    /// List phases and tasks, optionally filtered
    Tasks {
        /// Filter by status (pending, in_progress, completed, critical, delayed)
        #[arg(long)]
        status: Option<TaskStatus>,

        /// Filter by responsible team id
        #[arg(long)]
        team: Option<String>,

        /// Keep tasks starting on or after this date
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Keep tasks ending on or before this date
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Show the agenda checklist
    Agenda,

    /// List teams
    Teams,

    /// Append a tracking log entry
    Log {
        #[command(subcommand)]
        target: LogTarget,
    },
}

#[derive(Subcommand)]
enum LogTarget {
    /// Log against a task within a phase
    Task {
        phase_id: u32,
        task_id: String,
        message: String,

        #[arg(long, default_value = "staff")]
        author: String,
    },

    /// Log against an agenda item
    Agenda {
        item_id: String,
        message: String,

        #[arg(long, default_value = "staff")]
        author: String,
    },
}

fn main() -> Result<()> {
    // Simple logging for CLI
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt().with_target(false).init();
    }

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TrackerConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => TrackerConfig::load(),
    };
    let today = cli.date.unwrap_or(config.today);

    let seed = match cli.fixture.as_ref().or(config.fixture_path.as_ref()) {
        Some(path) => SeedData::load_from(path)
            .with_context(|| format!("Failed to load seed fixture from {}", path.display()))?,
        None => SeedData::builtin(),
    };
    let store = TrackerStore::from_seed(seed);

    match cli.command {
        Commands::Dashboard => cmd_dashboard(&store, today, &config),
        Commands::Notify => cmd_notify(&store, today, &config),
        Commands::Tasks {
            status,
            team,
            from,
            to,
        } => cmd_tasks(&store, status, team, from, to),
        Commands::Agenda => cmd_agenda(&store),
        Commands::Teams => cmd_teams(&store),
        Commands::Log { target } => cmd_log(store, target),
    }
}

fn cmd_dashboard(store: &TrackerStore, today: NaiveDate, config: &TrackerConfig) -> Result<()> {
    print!("{}", render::dashboard(store, today, config.agm_date));
    Ok(())
}

fn cmd_notify(store: &TrackerStore, today: NaiveDate, config: &TrackerConfig) -> Result<()> {
    print!(
        "{}",
        render::notifications(store, today, config.upcoming_window_days)
    );
    Ok(())
}

fn cmd_tasks(
    store: &TrackerStore,
    status: Option<TaskStatus>,
    team: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let filter = TaskFilter {
        status,
        team_id: team,
        start_date_from: from,
        end_date_to: to,
    };
    let phases = filter_tasks(store.phases(), &filter);
    print!("{}", render::task_table(store, &phases));
    Ok(())
}

fn cmd_agenda(store: &TrackerStore) -> Result<()> {
    print!("{}", render::agenda_list(store));
    Ok(())
}

fn cmd_teams(store: &TrackerStore) -> Result<()> {
    print!("{}", render::team_list(store));
    Ok(())
}

fn cmd_log(mut store: TrackerStore, target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Task {
            phase_id,
            task_id,
            message,
            author,
        } => {
            store
                .append_task_log(phase_id, &task_id, &message, &author)
                .context("Failed to append task log")?;
            let task = store
                .phases()
                .iter()
                .find(|p| p.id == phase_id)
                .and_then(|p| p.tasks.iter().find(|t| t.id == task_id));
            if let Some(task) = task {
                println!("{} {}", task.id, task.title);
                print!("{}", render::log_list(&task.logs));
            }
        }
        LogTarget::Agenda {
            item_id,
            message,
            author,
        } => {
            store
                .append_agenda_log(&item_id, &message, &author)
                .context("Failed to append agenda log")?;
            if let Some(item) = store.agenda_items().iter().find(|i| i.id == item_id) {
                println!("{}", item.title);
                print!("{}", render::log_list(&item.logs));
            }
        }
    }
    Ok(())
}
