//! Pomodoro study sessions, one timed study interval per record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PomodoroConfig;
use crate::error::{Result, StudyError};
use crate::stats::SessionTally;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub session_id: Uuid,
    #[serde(rename = "taskId")]
    pub task_id: Uuid,
    pub duration_min: u32,
    pub break_time: u32,
    pub breaks_taken: u32,
    pub completed: bool,
    pub start_session: DateTime<Utc>,
    pub end_session: Option<DateTime<Utc>>,
}

impl StudySession {
    /// The fields the statistics aggregator reads.
    pub fn tally(&self) -> SessionTally {
        SessionTally {
            duration_min: self.duration_min,
            breaks_taken: self.breaks_taken,
            completed: self.completed,
        }
    }

    /// Replace the mutable fields carried by `update`.
    ///
    /// Marking a session completed without an explicit end closes it at `now`,
    /// unless it already has an end time.
    pub fn apply(&mut self, update: SessionUpdate, now: DateTime<Utc>) {
        if let Some(duration) = update.duration_min {
            self.duration_min = duration;
        }
        if let Some(break_time) = update.break_time {
            self.break_time = break_time;
        }
        if let Some(breaks) = update.breaks_taken {
            self.breaks_taken = breaks;
        }
        if let Some(end) = update.end_session {
            self.end_session = Some(end);
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
            if completed && self.end_session.is_none() {
                self.end_session = Some(now);
            }
        }
    }
}

/// Payload for starting a session. Omitted fields take the configured defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    #[serde(rename = "taskId")]
    pub task_id: Uuid,
    #[serde(default)]
    pub duration_min: Option<u32>,
    #[serde(default)]
    pub break_time: Option<u32>,
    #[serde(default)]
    pub breaks_taken: Option<u32>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl NewSession {
    pub fn for_task(task_id: Uuid) -> Self {
        NewSession {
            task_id,
            duration_min: None,
            break_time: None,
            breaks_taken: None,
            completed: None,
        }
    }

    pub(crate) fn into_session(
        self,
        limits: &PomodoroConfig,
        now: DateTime<Utc>,
    ) -> Result<StudySession> {
        let duration_min = self.duration_min.unwrap_or(limits.default_duration_min);
        let break_time = self.break_time.unwrap_or(limits.default_break_min);
        check_limits(Some(duration_min), Some(break_time), limits)?;

        Ok(StudySession {
            session_id: Uuid::new_v4(),
            task_id: self.task_id,
            duration_min,
            break_time,
            breaks_taken: self.breaks_taken.unwrap_or(0),
            completed: self.completed.unwrap_or(false),
            start_session: now,
            end_session: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUpdate {
    pub duration_min: Option<u32>,
    pub break_time: Option<u32>,
    pub breaks_taken: Option<u32>,
    pub completed: Option<bool>,
    pub end_session: Option<DateTime<Utc>>,
}

impl SessionUpdate {
    pub fn validate(&self, limits: &PomodoroConfig) -> Result<()> {
        check_limits(self.duration_min, self.break_time, limits)
    }
}

fn check_limits(
    duration_min: Option<u32>,
    break_time: Option<u32>,
    limits: &PomodoroConfig,
) -> Result<()> {
    if let Some(d) = duration_min {
        if !(1..=limits.max_duration_min).contains(&d) {
            return Err(StudyError::validation(format!(
                "duration_min {d} outside 1..={}",
                limits.max_duration_min
            )));
        }
    }
    if let Some(b) = break_time {
        if !(1..=limits.max_break_min).contains(&b) {
            return Err(StudyError::validation(format!(
                "break_time {b} outside 1..={}",
                limits.max_break_min
            )));
        }
    }
    Ok(())
}
