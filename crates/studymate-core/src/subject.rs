//! Subjects: a named course with a weekly schedule, owned by one student.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StudyError};
use crate::schedule::ScheduleSlot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub subject_id: Uuid,
    pub student_id: String,
    pub name: String,
    pub assigned_teacher: String,
    pub color: String,
    #[serde(default)]
    pub schedule: Vec<ScheduleSlot>,
}

/// Payload for creating a subject. The schedule is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    pub name: String,
    pub assigned_teacher: String,
    pub color: String,
    #[serde(default)]
    pub schedule: Vec<ScheduleSlot>,
}

/// Partial update. `schedule: Some(..)` replaces the whole schedule and is the
/// only field that triggers a conflict check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectUpdate {
    pub name: Option<String>,
    pub assigned_teacher: Option<String>,
    pub color: Option<String>,
    pub schedule: Option<Vec<ScheduleSlot>>,
}

impl NewSubject {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("assignedTeacher", &self.assigned_teacher)?;
        validate_color(&self.color)
    }

    pub(crate) fn into_subject(self, student_id: &str) -> Subject {
        Subject {
            subject_id: Uuid::new_v4(),
            student_id: student_id.to_string(),
            name: self.name,
            assigned_teacher: self.assigned_teacher,
            color: self.color,
            schedule: self.schedule,
        }
    }
}

impl SubjectUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(teacher) = &self.assigned_teacher {
            require_text("assignedTeacher", teacher)?;
        }
        if let Some(color) = &self.color {
            validate_color(color)?;
        }
        Ok(())
    }
}

impl Subject {
    /// Overwrite every field the update carries.
    pub fn apply(&mut self, update: SubjectUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(teacher) = update.assigned_teacher {
            self.assigned_teacher = teacher;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(schedule) = update.schedule {
            self.schedule = schedule;
        }
    }
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StudyError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Colors are `#RRGGBB` hex strings.
fn validate_color(color: &str) -> Result<()> {
    let hex = color.strip_prefix('#').unwrap_or("");
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StudyError::validation(format!(
            "color '{color}' is not a #RRGGBB value"
        )));
    }
    Ok(())
}
