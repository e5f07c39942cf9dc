use chrono::NaiveDate;
use uuid::Uuid;

use super::Organizer;
use crate::error::Result;
use crate::repository::StudyRepository;
use crate::task::{check_dates, NewTask, Task, TaskUpdate};

impl<R: StudyRepository> Organizer<R> {
    pub fn create_task(
        &mut self,
        student_id: &str,
        new: NewTask,
        today: NaiveDate,
    ) -> Result<Task> {
        self.owned_subject(student_id, new.subject_id)?;
        new.validate(today)?;

        let task = new.into_task();
        self.repo.save_task(task.clone())?;
        log::debug!("created task {} on subject {}", task.task_id, task.subject_id);
        Ok(task)
    }

    /// All tasks of the student, soonest delivery first.
    pub fn list_tasks(&self, student_id: &str) -> Result<Vec<Task>> {
        let mut tasks = self.repo.tasks_for_student(student_id)?;
        tasks.sort_by_key(|t| t.delivery_date);
        Ok(tasks)
    }

    pub fn list_tasks_for_subject(&self, student_id: &str, subject_id: Uuid) -> Result<Vec<Task>> {
        self.owned_subject(student_id, subject_id)?;
        let mut tasks = self.repo.tasks_for_subject(subject_id)?;
        tasks.sort_by_key(|t| t.delivery_date);
        Ok(tasks)
    }

    pub fn get_task(&self, student_id: &str, task_id: Uuid) -> Result<Task> {
        self.owned_task(student_id, task_id)
    }

    pub fn update_task(
        &mut self,
        student_id: &str,
        task_id: Uuid,
        update: TaskUpdate,
    ) -> Result<Task> {
        let mut task = self.owned_task(student_id, task_id)?;
        update.validate()?;

        task.apply(update);
        check_dates(task.start_date, task.delivery_date)?;

        self.repo.save_task(task.clone())?;
        log::debug!("updated task {task_id}");
        Ok(task)
    }

    pub fn remove_task(&mut self, student_id: &str, task_id: Uuid) -> Result<()> {
        self.owned_task(student_id, task_id)?;
        self.repo.delete_task(task_id)?;
        log::debug!("removed task {task_id}");
        Ok(())
    }
}
