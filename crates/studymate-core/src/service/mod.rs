//! Subject, task, session and alert services.
//!
//! [`Organizer`] owns a repository and the configuration and exposes one
//! method per operation. Every operation is scoped to a student: entities
//! owned by someone else are reported as not found.
//!
//! Operations that depend on the current date or time take it as an argument
//! (`today` / `now`) so callers and tests control the clock.

mod alerts;
mod sessions;
mod subjects;
mod tasks;

use uuid::Uuid;

use crate::config::Config;
use crate::error::{Result, StudyError};
use crate::repository::StudyRepository;
use crate::subject::Subject;
use crate::task::Task;

pub struct Organizer<R> {
    repo: R,
    config: Config,
}

impl<R: StudyRepository> Organizer<R> {
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, Config::default())
    }

    pub fn with_config(repo: R, config: Config) -> Self {
        Organizer { repo, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    fn owned_subject(&self, student_id: &str, subject_id: Uuid) -> Result<Subject> {
        self.repo
            .subject(subject_id)?
            .filter(|s| s.student_id == student_id)
            .ok_or_else(|| StudyError::not_found("Subject", subject_id))
    }

    fn owned_task(&self, student_id: &str, task_id: Uuid) -> Result<Task> {
        let task = self
            .repo
            .task(task_id)?
            .ok_or_else(|| StudyError::not_found("Task", task_id))?;
        // A task belonging to another student's subject is reported as missing.
        self.owned_subject(student_id, task.subject_id)
            .map_err(|_| StudyError::not_found("Task", task_id))?;
        Ok(task)
    }
}
