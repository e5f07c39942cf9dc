//! # studymate-core
//!
//! Schedule-conflict detection and study-session statistics for the StudyMate
//! academic organizer.
//!
//! A student's subjects each carry a weekly schedule. Before a schedule is
//! stored it is checked against every other subject the student owns; two
//! slots conflict when they fall on the same day and their time ranges overlap
//! (touching end-to-start is fine). Pomodoro sessions logged against a task are
//! folded into per-task statistics.
//!
//! ## Modules
//!
//! - [`time`] — strict `HH:MM` parsing to minutes since midnight
//! - [`schedule`] — weekly slots and the pairwise overlap test
//! - [`conflict`] — validate a candidate schedule against existing subjects
//! - [`stats`] — aggregate session statistics
//! - [`subject`], [`task`], [`session`], [`alert`] — domain records
//! - [`repository`] — storage trait and in-memory implementation
//! - [`service`] — the [`Organizer`] facade tying it all together
//! - [`config`] — TOML configuration
//! - [`error`] — Error types

pub mod alert;
pub mod config;
pub mod conflict;
pub mod error;
pub mod repository;
pub mod schedule;
pub mod service;
pub mod session;
pub mod stats;
pub mod subject;
pub mod task;
pub mod time;

pub use alert::{deadline_alerts, Alert};
pub use config::Config;
pub use conflict::{find_schedule_conflict, validate_schedule, ScheduleConflict};
pub use error::StudyError;
pub use repository::{InMemoryRepository, StudyRepository};
pub use schedule::{overlaps, Day, ScheduleSlot};
pub use service::Organizer;
pub use session::{NewSession, SessionUpdate, StudySession};
pub use stats::{aggregate, SessionStats, SessionTally};
pub use subject::{NewSubject, Subject, SubjectUpdate};
pub use task::{NewTask, Task, TaskPriority, TaskState, TaskUpdate};
pub use time::{to_minutes, WallClock};
