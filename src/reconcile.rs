//! Attendance and grade reconciliation.
//!
//! The rules that keep a student's current grade in sync with submitted
//! grade records, that reject duplicate same-day attendance entries, and
//! that join attendance rows back to student names at read time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{AttendanceRecord, GradeRecord, Store};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("Student not found")]
    StudentNotFound(u64),

    #[error("Attendance record not found")]
    RecordNotFound(u64),

    #[error("Attendance already recorded for this student on this date")]
    DuplicateAttendance { student_id: u64, date: NaiveDate },
}

/// Partial update for an attendance record. Absent fields are left
/// unchanged; `present: Some(false)` is an update, not an omission.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AttendancePatch {
    pub present: Option<bool>,
    pub date: Option<NaiveDate>,
}

/// One entry of a grade submission batch. `id` is the student id.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmission {
    pub id: u64,
    pub grade: String,
    #[serde(default)]
    pub subject: Option<String>,
}

/// Per-entry outcome of a grade batch: records created, and student ids
/// that matched nothing.
#[derive(Debug, Default)]
pub struct GradeOutcome {
    pub updated: Vec<GradeRecord>,
    pub skipped: Vec<u64>,
}

/// Attendance row projected for the API, with the student name joined at
/// read time. Records carry no name snapshot, so renames are reflected and
/// deleted students degrade to "Unknown".
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceView {
    pub id: u64,
    pub student_id: u64,
    pub student_name: String,
    pub present: bool,
    pub date: NaiveDate,
}

impl AttendanceView {
    pub fn project(store: &Store, record: &AttendanceRecord) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            student_name: student_name(store, record.student_id),
            present: record.present,
            date: record.date,
        }
    }
}

pub fn student_name(store: &Store, student_id: u64) -> String {
    store
        .student(student_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn attendance_roster(store: &Store) -> Vec<AttendanceView> {
    store
        .attendance()
        .iter()
        .map(|record| AttendanceView::project(store, record))
        .collect()
}

/// Records one attendance entry. The student must exist, and at most one
/// record may exist per (student, date) pair.
pub fn record_attendance(
    store: &mut Store,
    student_id: u64,
    present: bool,
    date: NaiveDate,
) -> Result<AttendanceRecord, ReconcileError> {
    if store.student(student_id).is_none() {
        return Err(ReconcileError::StudentNotFound(student_id));
    }
    if store.attendance_for_day(student_id, date).is_some() {
        return Err(ReconcileError::DuplicateAttendance { student_id, date });
    }
    Ok(store.add_attendance(student_id, present, date))
}

/// Applies a partial update to an attendance record. A date move that would
/// land on another record for the same student is rejected, so the
/// (student, date) uniqueness holds across updates too.
pub fn update_attendance(
    store: &mut Store,
    id: u64,
    patch: AttendancePatch,
) -> Result<AttendanceRecord, ReconcileError> {
    let (student_id, current_date) = match store.attendance_record(id) {
        Some(record) => (record.student_id, record.date),
        None => return Err(ReconcileError::RecordNotFound(id)),
    };
    if let Some(date) = patch.date {
        if date != current_date && store.attendance_for_day(student_id, date).is_some() {
            return Err(ReconcileError::DuplicateAttendance { student_id, date });
        }
    }
    let record = store
        .attendance_record_mut(id)
        .ok_or(ReconcileError::RecordNotFound(id))?;
    if let Some(present) = patch.present {
        record.present = present;
    }
    if let Some(date) = patch.date {
        record.date = date;
    }
    Ok(record.clone())
}

/// Applies a grade batch in input order. Each matched entry overwrites the
/// student's current grade with the trimmed value and appends a history
/// record; later entries for the same student win on the current grade
/// while every intermediate record stays in history. Unknown student ids
/// are reported in `skipped` rather than dropped silently.
pub fn submit_grades(store: &mut Store, batch: Vec<GradeSubmission>) -> GradeOutcome {
    let mut outcome = GradeOutcome::default();
    for entry in batch {
        let grade = entry.grade.trim().to_string();
        match store.student_mut(entry.id) {
            Some(student) => student.grade = grade.clone(),
            None => {
                outcome.skipped.push(entry.id);
                continue;
            }
        }
        let record = store.add_grade(entry.id, entry.subject, grade);
        outcome.updated.push(record);
    }
    outcome
}
