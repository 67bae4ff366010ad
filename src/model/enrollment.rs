use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite primary key of an enrollment: one student in one course.
///
/// Using the pair itself as the store key makes the uniqueness invariant
/// ("at most one enrollment per `(student_id, course_id)`") a plain
/// duplicate-key rejection inside the enrollment store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrollmentKey {
    pub student_id: String,
    pub course_id: String,
}

impl fmt::Display for EnrollmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.student_id, self.course_id)
    }
}

/// A link between one student and one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: String,
    pub course_id: String,
}

impl Enrollment {
    pub fn key(&self) -> EnrollmentKey {
        EnrollmentKey {
            student_id: self.student_id.clone(),
            course_id: self.course_id.clone(),
        }
    }
}

/// Creation payload for an enrollment.
#[derive(Debug, Clone)]
pub struct EnrollmentCreate {
    pub student_id: String,
    pub course_id: String,
}
