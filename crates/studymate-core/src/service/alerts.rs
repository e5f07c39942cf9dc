use chrono::{DateTime, Utc};

use super::Organizer;
use crate::alert::{deadline_alerts, Alert};
use crate::error::Result;
use crate::repository::StudyRepository;

impl<R: StudyRepository> Organizer<R> {
    /// Generate deadline alerts for the student's open tasks and store the ones
    /// not already recorded for the same task today. Returns the new alerts.
    pub fn refresh_alerts(&mut self, student_id: &str, now: DateTime<Utc>) -> Result<Vec<Alert>> {
        let tasks = self.repo.tasks_for_student(student_id)?;
        let existing = self.repo.alerts_for_student(student_id)?;

        let fresh: Vec<Alert> = deadline_alerts(&tasks, now, self.config.alerts.window_days)
            .into_iter()
            .filter(|alert| {
                !existing
                    .iter()
                    .any(|a| a.task_id == alert.task_id && a.alert_date == alert.alert_date)
            })
            .collect();

        for alert in &fresh {
            log::info!("deadline alert for task {}: {}", alert.task_id, alert.message);
            self.repo.save_alert(alert.clone())?;
        }

        Ok(fresh)
    }

    /// Stored alerts for the student, newest first.
    pub fn list_alerts(&self, student_id: &str) -> Result<Vec<Alert>> {
        let mut alerts = self.repo.alerts_for_student(student_id)?;
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(alerts)
    }
}
