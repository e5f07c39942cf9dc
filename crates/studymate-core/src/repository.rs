//! Storage seam for the services.
//!
//! [`StudyRepository`] has one method per access pattern the services need.
//! [`InMemoryRepository`] keeps everything in insertion-ordered vectors, which
//! makes iteration order (and therefore which conflict is reported first)
//! deterministic.

use uuid::Uuid;

use crate::alert::Alert;
use crate::error::Result;
use crate::session::StudySession;
use crate::subject::Subject;
use crate::task::Task;

pub trait StudyRepository {
    /// All subjects owned by `student_id`, minus `exclude` if given.
    fn subjects_for_student(&self, student_id: &str, exclude: Option<Uuid>) -> Result<Vec<Subject>>;
    fn subject(&self, subject_id: Uuid) -> Result<Option<Subject>>;
    /// Insert, or replace the subject with the same id.
    fn save_subject(&mut self, subject: Subject) -> Result<()>;
    /// Delete a subject together with its tasks, their sessions and alerts.
    fn delete_subject(&mut self, subject_id: Uuid) -> Result<()>;

    fn tasks_for_student(&self, student_id: &str) -> Result<Vec<Task>>;
    fn tasks_for_subject(&self, subject_id: Uuid) -> Result<Vec<Task>>;
    fn task(&self, task_id: Uuid) -> Result<Option<Task>>;
    fn save_task(&mut self, task: Task) -> Result<()>;
    /// Delete a task together with its sessions and alerts.
    fn delete_task(&mut self, task_id: Uuid) -> Result<()>;

    fn sessions_for_student(&self, student_id: &str) -> Result<Vec<StudySession>>;
    fn sessions_for_task(&self, task_id: Uuid) -> Result<Vec<StudySession>>;
    fn session(&self, session_id: Uuid) -> Result<Option<StudySession>>;
    fn save_session(&mut self, session: StudySession) -> Result<()>;
    fn delete_session(&mut self, session_id: Uuid) -> Result<()>;

    fn alerts_for_student(&self, student_id: &str) -> Result<Vec<Alert>>;
    fn save_alert(&mut self, alert: Alert) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryRepository {
    subjects: Vec<Subject>,
    tasks: Vec<Task>,
    sessions: Vec<StudySession>,
    alerts: Vec<Alert>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn owns_subject(&self, student_id: &str, subject_id: Uuid) -> bool {
        self.subjects
            .iter()
            .any(|s| s.subject_id == subject_id && s.student_id == student_id)
    }

    fn owns_task(&self, student_id: &str, task_id: Uuid) -> bool {
        self.tasks
            .iter()
            .any(|t| t.task_id == task_id && self.owns_subject(student_id, t.subject_id))
    }
}

/// Replace the element matching `same`, or append.
fn upsert<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T, &T) -> bool) {
    match items.iter().position(|existing| same(existing, &item)) {
        Some(i) => items[i] = item,
        None => items.push(item),
    }
}

impl StudyRepository for InMemoryRepository {
    fn subjects_for_student(
        &self,
        student_id: &str,
        exclude: Option<Uuid>,
    ) -> Result<Vec<Subject>> {
        Ok(self
            .subjects
            .iter()
            .filter(|s| s.student_id == student_id && Some(s.subject_id) != exclude)
            .cloned()
            .collect())
    }

    fn subject(&self, subject_id: Uuid) -> Result<Option<Subject>> {
        Ok(self
            .subjects
            .iter()
            .find(|s| s.subject_id == subject_id)
            .cloned())
    }

    fn save_subject(&mut self, subject: Subject) -> Result<()> {
        upsert(&mut self.subjects, subject, |a, b| a.subject_id == b.subject_id);
        Ok(())
    }

    fn delete_subject(&mut self, subject_id: Uuid) -> Result<()> {
        let task_ids: Vec<Uuid> = self
            .tasks
            .iter()
            .filter(|t| t.subject_id == subject_id)
            .map(|t| t.task_id)
            .collect();
        for task_id in task_ids {
            self.delete_task(task_id)?;
        }
        self.subjects.retain(|s| s.subject_id != subject_id);
        Ok(())
    }

    fn tasks_for_student(&self, student_id: &str) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| self.owns_subject(student_id, t.subject_id))
            .cloned()
            .collect())
    }

    fn tasks_for_subject(&self, subject_id: Uuid) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.subject_id == subject_id)
            .cloned()
            .collect())
    }

    fn task(&self, task_id: Uuid) -> Result<Option<Task>> {
        Ok(self.tasks.iter().find(|t| t.task_id == task_id).cloned())
    }

    fn save_task(&mut self, task: Task) -> Result<()> {
        upsert(&mut self.tasks, task, |a, b| a.task_id == b.task_id);
        Ok(())
    }

    fn delete_task(&mut self, task_id: Uuid) -> Result<()> {
        self.sessions.retain(|s| s.task_id != task_id);
        self.alerts.retain(|a| a.task_id != task_id);
        self.tasks.retain(|t| t.task_id != task_id);
        Ok(())
    }

    fn sessions_for_student(&self, student_id: &str) -> Result<Vec<StudySession>> {
        Ok(self
            .sessions
            .iter()
            .filter(|s| self.owns_task(student_id, s.task_id))
            .cloned()
            .collect())
    }

    fn sessions_for_task(&self, task_id: Uuid) -> Result<Vec<StudySession>> {
        Ok(self
            .sessions
            .iter()
            .filter(|s| s.task_id == task_id)
            .cloned()
            .collect())
    }

    fn session(&self, session_id: Uuid) -> Result<Option<StudySession>> {
        Ok(self
            .sessions
            .iter()
            .find(|s| s.session_id == session_id)
            .cloned())
    }

    fn save_session(&mut self, session: StudySession) -> Result<()> {
        upsert(&mut self.sessions, session, |a, b| a.session_id == b.session_id);
        Ok(())
    }

    fn delete_session(&mut self, session_id: Uuid) -> Result<()> {
        self.sessions.retain(|s| s.session_id != session_id);
        Ok(())
    }

    fn alerts_for_student(&self, student_id: &str) -> Result<Vec<Alert>> {
        Ok(self
            .alerts
            .iter()
            .filter(|a| self.owns_task(student_id, a.task_id))
            .cloned()
            .collect())
    }

    fn save_alert(&mut self, alert: Alert) -> Result<()> {
        upsert(&mut self.alerts, alert, |a, b| a.alert_id == b.alert_id);
        Ok(())
    }
}
