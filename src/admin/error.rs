//! Error types for the administration service.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can cross the administration service boundary.
///
/// Every operation converts collaborator failures into one of these
/// variants; no [`StoreError`] leaves the service raw. Each variant maps to
/// a stable transport status via [`AdminError::status`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    /// The role was absent or not one of `professor` / `student`.
    #[error("Invalid role. Role should be either 'professor' or 'student'.")]
    InvalidRole,

    /// A required field was absent or blank after trimming.
    #[error("Required field is missing or blank: {0}")]
    MissingField(&'static str),

    /// The referenced student does not exist.
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    /// The referenced course does not exist.
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// The referenced professor does not exist.
    #[error("Professor not found: {0}")]
    ProfessorNotFound(String),

    /// The student already holds an enrollment for this course.
    #[error("Student {student_id} is already enrolled in course {course_id}")]
    AlreadyEnrolled {
        student_id: String,
        course_id: String,
    },

    /// A record store task is no longer running.
    #[error("Record store is not available")]
    Unavailable,

    /// An underlying storage failure, including uniqueness violations
    /// surfaced by the store layer.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AdminError {
    /// The transport status category for this failure.
    pub fn status(&self) -> u16 {
        match self {
            AdminError::InvalidRole | AdminError::MissingField(_) => 400,
            AdminError::StudentNotFound(_)
            | AdminError::CourseNotFound(_)
            | AdminError::ProfessorNotFound(_) => 404,
            AdminError::AlreadyEnrolled { .. } => 409,
            AdminError::Unavailable | AdminError::Storage(_) => 500,
        }
    }
}

impl From<StoreError> for AdminError {
    /// Boundary conversion for store failures with no entity context.
    ///
    /// `NotFound` is deliberately *not* given a friendlier mapping here: the
    /// service maps it per call site, where it knows which entity was being
    /// resolved.
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Closed | StoreError::Dropped => AdminError::Unavailable,
            other => AdminError::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categories() {
        assert_eq!(AdminError::InvalidRole.status(), 400);
        assert_eq!(AdminError::MissingField("email").status(), 400);
        assert_eq!(AdminError::StudentNotFound("S1".into()).status(), 404);
        assert_eq!(AdminError::CourseNotFound("C1".into()).status(), 404);
        assert_eq!(AdminError::ProfessorNotFound("P1".into()).status(), 404);
        let conflict = AdminError::AlreadyEnrolled {
            student_id: "S1".into(),
            course_id: "C1".into(),
        };
        assert_eq!(conflict.status(), 409);
        assert_eq!(AdminError::Unavailable.status(), 500);
        assert_eq!(AdminError::Storage("boom".into()).status(), 500);
    }

    #[test]
    fn test_store_error_conversion() {
        assert_eq!(AdminError::from(StoreError::Closed), AdminError::Unavailable);
        assert_eq!(AdminError::from(StoreError::Dropped), AdminError::Unavailable);
        assert_eq!(
            AdminError::from(StoreError::Duplicate("a@x.com".into())),
            AdminError::Storage("Duplicate key: a@x.com".into())
        );
    }
}
