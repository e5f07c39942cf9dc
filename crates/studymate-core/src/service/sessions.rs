use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Organizer;
use crate::error::{Result, StudyError};
use crate::repository::StudyRepository;
use crate::session::{NewSession, SessionUpdate, StudySession};
use crate::stats::{aggregate, SessionStats};

impl<R: StudyRepository> Organizer<R> {
    /// Start a Pomodoro session on one of the student's tasks.
    pub fn start_session(
        &mut self,
        student_id: &str,
        new: NewSession,
        now: DateTime<Utc>,
    ) -> Result<StudySession> {
        self.owned_task(student_id, new.task_id)?;

        let session = new.into_session(&self.config.pomodoro, now)?;
        self.repo.save_session(session.clone())?;
        log::debug!(
            "started {}-minute session {} on task {}",
            session.duration_min,
            session.session_id,
            session.task_id
        );
        Ok(session)
    }

    /// All of the student's sessions, newest first.
    pub fn list_sessions(&self, student_id: &str) -> Result<Vec<StudySession>> {
        let mut sessions = self.repo.sessions_for_student(student_id)?;
        newest_first(&mut sessions);
        Ok(sessions)
    }

    /// Sessions of one task, newest first.
    pub fn sessions_for_task(&self, student_id: &str, task_id: Uuid) -> Result<Vec<StudySession>> {
        self.owned_task(student_id, task_id)?;
        let mut sessions = self.repo.sessions_for_task(task_id)?;
        newest_first(&mut sessions);
        Ok(sessions)
    }

    pub fn get_session(&self, student_id: &str, session_id: Uuid) -> Result<StudySession> {
        let session = self
            .repo
            .session(session_id)?
            .ok_or_else(|| StudyError::not_found("Session", session_id))?;
        self.owned_task(student_id, session.task_id)
            .map_err(|_| StudyError::not_found("Session", session_id))?;
        Ok(session)
    }

    /// Record breaks, completion or an end time on a session.
    pub fn update_session(
        &mut self,
        student_id: &str,
        session_id: Uuid,
        update: SessionUpdate,
        now: DateTime<Utc>,
    ) -> Result<StudySession> {
        let mut session = self.get_session(student_id, session_id)?;
        update.validate(&self.config.pomodoro)?;

        session.apply(update, now);
        self.repo.save_session(session.clone())?;
        log::debug!("updated session {session_id}");
        Ok(session)
    }

    pub fn remove_session(&mut self, student_id: &str, session_id: Uuid) -> Result<()> {
        self.get_session(student_id, session_id)?;
        self.repo.delete_session(session_id)?;
        log::debug!("removed session {session_id}");
        Ok(())
    }

    /// Aggregate statistics over one task's sessions.
    pub fn task_stats(&self, student_id: &str, task_id: Uuid) -> Result<SessionStats> {
        let sessions = self.sessions_for_task(student_id, task_id)?;
        Ok(aggregate(sessions.iter().map(StudySession::tally)))
    }
}

fn newest_first(sessions: &mut [StudySession]) {
    sessions.sort_by(|a, b| b.start_session.cmp(&a.start_session));
}
