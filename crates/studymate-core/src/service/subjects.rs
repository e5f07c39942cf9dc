use uuid::Uuid;

use super::Organizer;
use crate::conflict::validate_schedule;
use crate::error::Result;
use crate::repository::StudyRepository;
use crate::subject::{NewSubject, Subject, SubjectUpdate};

impl<R: StudyRepository> Organizer<R> {
    /// Create a subject after checking its schedule against the student's
    /// other subjects.
    pub fn create_subject(&mut self, student_id: &str, new: NewSubject) -> Result<Subject> {
        new.validate()?;
        validate_schedule(&self.repo, &new.schedule, student_id, None)?;

        let subject = new.into_subject(student_id);
        self.repo.save_subject(subject.clone())?;
        log::debug!(
            "created subject {} ({}) for student {student_id}",
            subject.subject_id,
            subject.name
        );
        Ok(subject)
    }

    pub fn list_subjects(&self, student_id: &str) -> Result<Vec<Subject>> {
        self.repo.subjects_for_student(student_id, None)
    }

    pub fn get_subject(&self, student_id: &str, subject_id: Uuid) -> Result<Subject> {
        self.owned_subject(student_id, subject_id)
    }

    /// Apply a partial update. The schedule is re-validated only when the
    /// update replaces it, and never against the subject's own old schedule.
    pub fn update_subject(
        &mut self,
        student_id: &str,
        subject_id: Uuid,
        update: SubjectUpdate,
    ) -> Result<Subject> {
        let mut subject = self.owned_subject(student_id, subject_id)?;
        update.validate()?;

        if let Some(schedule) = &update.schedule {
            validate_schedule(&self.repo, schedule, student_id, Some(subject_id))?;
        }

        subject.apply(update);
        self.repo.save_subject(subject.clone())?;
        log::debug!("updated subject {subject_id}");
        Ok(subject)
    }

    pub fn remove_subject(&mut self, student_id: &str, subject_id: Uuid) -> Result<()> {
        self.owned_subject(student_id, subject_id)?;
        self.repo.delete_subject(subject_id)?;
        log::debug!("removed subject {subject_id}");
        Ok(())
    }
}
