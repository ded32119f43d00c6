use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub grade: String,
    pub parent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Teacher {
    pub id: u64,
    pub name: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRecord {
    pub id: u64,
    pub student_id: u64,
    pub present: bool,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRecord {
    pub id: u64,
    pub student_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
}

/// Monotonic identifier source, independent of collection size. An
/// identifier handed out once is never handed out again, even after the
/// record carrying it is deleted.
#[derive(Debug, Default)]
struct IdSeq(u64);

impl IdSeq {
    fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// In-memory entity store owning the five record collections and their
/// identifier counters. Collections keep insertion order. The store does no
/// validation and raises no errors of its own; existence checks belong to
/// the callers.
#[derive(Debug, Default)]
pub struct Store {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    attendance: Vec<AttendanceRecord>,
    grades: Vec<GradeRecord>,
    events: Vec<Event>,
    student_ids: IdSeq,
    teacher_ids: IdSeq,
    attendance_ids: IdSeq,
    grade_ids: IdSeq,
    event_ids: IdSeq,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, name: String, grade: String, parent: String) -> Student {
        let student = Student {
            id: self.student_ids.next(),
            name,
            grade,
            parent,
        };
        self.students.push(student.clone());
        student
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student(&self, id: u64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn student_mut(&mut self, id: u64) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    /// Removes every student with the given id. Idempotent: removing an
    /// absent id is not an error.
    pub fn remove_student(&mut self, id: u64) {
        self.students.retain(|s| s.id != id);
    }

    pub fn add_teacher(&mut self, name: String, subject: String) -> Teacher {
        let teacher = Teacher {
            id: self.teacher_ids.next(),
            name,
            subject,
        };
        self.teachers.push(teacher.clone());
        teacher
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn remove_teacher(&mut self, id: u64) {
        self.teachers.retain(|t| t.id != id);
    }

    pub fn add_attendance(&mut self, student_id: u64, present: bool, date: NaiveDate) -> AttendanceRecord {
        let record = AttendanceRecord {
            id: self.attendance_ids.next(),
            student_id,
            present,
            date,
        };
        self.attendance.push(record.clone());
        record
    }

    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    pub fn attendance_record(&self, id: u64) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|r| r.id == id)
    }

    pub fn attendance_record_mut(&mut self, id: u64) -> Option<&mut AttendanceRecord> {
        self.attendance.iter_mut().find(|r| r.id == id)
    }

    pub fn attendance_for_day(&self, student_id: u64, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance
            .iter()
            .find(|r| r.student_id == student_id && r.date == date)
    }

    pub fn add_grade(&mut self, student_id: u64, subject: Option<String>, grade: String) -> GradeRecord {
        let record = GradeRecord {
            id: self.grade_ids.next(),
            student_id,
            subject,
            grade,
        };
        self.grades.push(record.clone());
        record
    }

    pub fn grades(&self) -> &[GradeRecord] {
        &self.grades
    }

    pub fn add_event(&mut self, title: String, date: NaiveDate) -> Event {
        let event = Event {
            id: self.event_ids.next(),
            title,
            date,
        };
        self.events.push(event.clone());
        event
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn remove_event(&mut self, id: u64) {
        self.events.retain(|e| e.id != id);
    }
}
