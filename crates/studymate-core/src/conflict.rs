//! Detect schedule conflicts between a candidate schedule and a student's
//! existing subjects.
//!
//! Every candidate slot is compared against every slot of every existing
//! subject, in that nesting order. The first overlap wins; no attempt is made
//! to collect all of them. Adjacent slots (one ends exactly when another
//! starts) are NOT conflicts.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::repository::StudyRepository;
use crate::schedule::ScheduleSlot;
use crate::subject::Subject;

/// A candidate slot that collides with a slot of an existing subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConflict {
    pub slot: ScheduleSlot,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub existing_slot: ScheduleSlot,
}

impl fmt::Display for ScheduleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Schedule conflict: {} overlaps \"{}\" ({})",
            self.slot, self.subject_name, self.existing_slot
        )
    }
}

/// Find the first conflict between `candidate` and the schedules of `existing`.
///
/// Subjects with an empty schedule are skipped. Returns `None` when nothing
/// overlaps, including when `candidate` is empty.
pub fn find_schedule_conflict(
    candidate: &[ScheduleSlot],
    existing: &[Subject],
) -> Option<ScheduleConflict> {
    for slot in candidate {
        for subject in existing {
            for existing_slot in &subject.schedule {
                if slot.overlaps(existing_slot) {
                    return Some(ScheduleConflict {
                        slot: *slot,
                        subject_id: subject.subject_id,
                        subject_name: subject.name.clone(),
                        existing_slot: *existing_slot,
                    });
                }
            }
        }
    }

    None
}

/// Reject `candidate` if it overlaps any other subject owned by `student_id`.
///
/// `exclude` names the subject being updated so that its previous schedule is
/// not compared against its new one. An empty candidate succeeds without
/// touching the repository; otherwise exactly one read is made.
///
/// # Errors
/// Returns `StudyError::ScheduleConflict` for the first overlap found, or any
/// error the repository raises while reading.
pub fn validate_schedule<R>(
    repo: &R,
    candidate: &[ScheduleSlot],
    student_id: &str,
    exclude: Option<Uuid>,
) -> Result<()>
where
    R: StudyRepository + ?Sized,
{
    if candidate.is_empty() {
        return Ok(());
    }

    let existing = repo.subjects_for_student(student_id, exclude)?;

    match find_schedule_conflict(candidate, &existing) {
        Some(conflict) => {
            log::warn!("rejecting schedule for student {student_id}: {conflict}");
            Err(conflict.into())
        }
        None => Ok(()),
    }
}
