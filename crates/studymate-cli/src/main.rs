//! `studymate` CLI — check weekly schedules, aggregate Pomodoro statistics and
//! list deadline alerts from JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Replay a list of new subjects for one student, stopping at the first conflict
//! studymate schedule -i subjects.json
//!
//! # Aggregate study sessions (stdin → stdout)
//! cat sessions.json | studymate stats
//!
//! # Deadline alerts for a task list, as of a given day
//! studymate alerts -i tasks.json --today 2026-03-02
//!
//! # Override Pomodoro limits or the alert window
//! studymate --config studymate.toml alerts -i tasks.json
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use studymate_core::{
    aggregate, deadline_alerts, Config, InMemoryRepository, NewSubject, Organizer, SessionTally,
    StudyError, Task,
};

/// Student id used when replaying subjects; the CLI works on one student.
const CLI_STUDENT: &str = "cli-student";

#[derive(Parser)]
#[command(
    name = "studymate",
    version,
    about = "StudyMate schedule, session and deadline tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create subjects in order, rejecting the first schedule conflict
    Schedule {
        /// JSON array of subjects (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Aggregate Pomodoro session statistics
    Stats {
        /// JSON array of sessions (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List deadline alerts for open tasks
    Alerts {
        /// JSON array of tasks (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reference date as YYYY-MM-DD (defaults to today, UTC)
        #[arg(long)]
        today: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => Config::load(path).context("Failed to load configuration")?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Schedule { input } => {
            let json = read_input(input.as_deref())?;
            let subjects: Vec<NewSubject> =
                serde_json::from_str(&json).context("Failed to parse subjects")?;

            let mut organizer = Organizer::with_config(InMemoryRepository::new(), config);
            for new in subjects {
                let name = new.name.clone();
                match organizer.create_subject(CLI_STUDENT, new) {
                    Ok(subject) => {
                        let slots: Vec<String> =
                            subject.schedule.iter().map(ToString::to_string).collect();
                        println!("OK {}: [{}]", subject.name, slots.join(", "));
                    }
                    Err(err @ StudyError::ScheduleConflict(_)) => {
                        anyhow::bail!("Subject \"{}\" rejected. {}", name, err);
                    }
                    Err(err) => {
                        return Err(err).with_context(|| format!("Subject \"{}\" is invalid", name));
                    }
                }
            }
        }
        Commands::Stats { input } => {
            let json = read_input(input.as_deref())?;
            let sessions: Vec<SessionTally> =
                serde_json::from_str(&json).context("Failed to parse sessions")?;
            let stats = aggregate(sessions);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Alerts { input, today } => {
            let json = read_input(input.as_deref())?;
            let tasks: Vec<Task> = serde_json::from_str(&json).context("Failed to parse tasks")?;

            let now = match today.as_deref() {
                Some(day) => NaiveDate::parse_from_str(day, "%Y-%m-%d")
                    .with_context(|| format!("Invalid --today date: {}", day))?
                    .and_hms_opt(0, 0, 0)
                    .context("Invalid --today date")?
                    .and_utc(),
                None => Utc::now(),
            };

            let alerts = deadline_alerts(&tasks, now, config.alerts.window_days);
            log::debug!("{} of {} tasks raised alerts", alerts.len(), tasks.len());
            println!("{}", serde_json::to_string_pretty(&alerts)?);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
