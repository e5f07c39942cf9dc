//! Tasks: deliverables with a priority and a deadline, attached to a subject.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StudyError};
use crate::subject::require_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskState {
    /// Completed and cancelled tasks are closed; everything else still needs work.
    pub fn is_open(self) -> bool {
        matches!(self, TaskState::Pending | TaskState::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: Uuid,
    #[serde(rename = "subjectId")]
    pub subject_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub start_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub priority: TaskPriority,
    #[serde(default)]
    pub state: TaskState,
}

impl Task {
    /// Whole days from `today` to the delivery date; negative once overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.delivery_date - today).num_days()
    }

    pub fn apply(&mut self, update: TaskUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(delivery_date) = update.delivery_date {
            self.delivery_date = delivery_date;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    #[serde(rename = "subjectId")]
    pub subject_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub start_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub priority: TaskPriority,
    #[serde(default)]
    pub state: TaskState,
}

impl NewTask {
    /// A new task may not start in the past and may not be due before it starts.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        if self.start_date < today {
            return Err(StudyError::validation(format!(
                "start_date {} is in the past",
                self.start_date
            )));
        }
        check_dates(self.start_date, self.delivery_date)
    }

    pub(crate) fn into_task(self) -> Task {
        Task {
            task_id: Uuid::new_v4(),
            subject_id: self.subject_id,
            title: self.title,
            description: self.description,
            notes: self.notes,
            start_date: self.start_date,
            delivery_date: self.delivery_date,
            priority: self.priority,
            state: self.state,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub priority: Option<TaskPriority>,
    pub state: Option<TaskState>,
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(description) = &self.description {
            require_text("description", description)?;
        }
        Ok(())
    }
}

pub(crate) fn check_dates(start: NaiveDate, delivery: NaiveDate) -> Result<()> {
    if delivery < start {
        return Err(StudyError::validation(format!(
            "delivery_date {delivery} is before start_date {start}"
        )));
    }
    Ok(())
}
