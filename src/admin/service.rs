//! The administration service.
//!
//! Five short, independent use cases against the four entity stores:
//! registration (role-dispatched), enrollment (with the uniqueness
//! invariant), student update, and student/professor deletion.

use crate::admin::{AdminError, EnrollRequest, RegisterRequest};
use crate::clients::{
    CourseClient, EnrollmentClient, ProfessorClient, StoreHandle, StudentClient,
};
use crate::framework::StoreError;
use crate::model::{
    Enrollment, EnrollmentCreate, EnrollmentKey, Person, PersonCreate, PersonKind, Student,
    StudentUpdate,
};
use tracing::{debug, info, instrument};

/// The administration service over the four entity stores.
///
/// # Dependency Injection
/// The service is constructed exactly once with its store clients and is
/// stateless per call beyond them. There is no ambient storage handle to
/// bind: a service without stores cannot exist. If a store task has stopped,
/// calls surface [`AdminError::Unavailable`].
#[derive(Clone)]
pub struct AdminService {
    professors: ProfessorClient,
    students: StudentClient,
    courses: CourseClient,
    enrollments: EnrollmentClient,
}

impl AdminService {
    pub fn new(
        professors: ProfessorClient,
        students: StudentClient,
        courses: CourseClient,
        enrollments: EnrollmentClient,
    ) -> Self {
        Self {
            professors,
            students,
            courses,
            enrollments,
        }
    }

    /// Registers a professor or a student, dispatched on the `role` field.
    ///
    /// Validation runs once for both kinds: the role must parse, and
    /// `identity_id`, `first_name`, `last_name`, `email` must be non-blank
    /// after trimming. `bio` and `phone_number` default to an explicit
    /// `None` so the persisted record always materializes them. Duplicate
    /// identities or emails are rejected by the target store and surface as
    /// [`AdminError::Storage`].
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterRequest) -> Result<Person, AdminError> {
        debug!(?request, "register called");
        let kind = request
            .role
            .as_deref()
            .and_then(PersonKind::from_role)
            .ok_or(AdminError::InvalidRole)?;

        let params = PersonCreate {
            id: required(kind.id_field(), request.identity_id)?,
            first_name: required("first_name", request.first_name)?,
            last_name: required("last_name", request.last_name)?,
            email: required("email", request.email)?,
            bio: request.bio,
            phone_number: request.phone_number,
        };

        info!(?kind, id = %params.id, "Registering person");
        let person = match kind {
            PersonKind::Professor => {
                Person::Professor(self.professors.create_professor(params).await?)
            }
            PersonKind::Student => Person::Student(self.students.create_student(params).await?),
        };
        Ok(person)
    }

    /// Enrolls a student into a course.
    ///
    /// Lookup order matters for error precision: the student is resolved
    /// first, then the course, and only then is the existing-link check
    /// performed. Re-enrolling the same pair is rejected, not silently
    /// accepted.
    #[instrument(skip(self, request))]
    pub async fn enroll(&self, request: EnrollRequest) -> Result<Enrollment, AdminError> {
        debug!(?request, "enroll called");
        let student_id = required("student_id", request.student_id)?;
        let course_id = required("course_id", request.course_id)?;

        self.students
            .get(student_id.clone())
            .await?
            .ok_or_else(|| AdminError::StudentNotFound(student_id.clone()))?;
        self.courses
            .get(course_id.clone())
            .await?
            .ok_or_else(|| AdminError::CourseNotFound(course_id.clone()))?;

        let key = EnrollmentKey {
            student_id: student_id.clone(),
            course_id: course_id.clone(),
        };
        if self.enrollments.find_enrollment(key).await?.is_some() {
            return Err(AdminError::AlreadyEnrolled {
                student_id,
                course_id,
            });
        }

        let params = EnrollmentCreate {
            student_id: student_id.clone(),
            course_id: course_id.clone(),
        };
        match self.enrollments.create_enrollment(params).await {
            Ok(enrollment) => {
                info!(%student_id, %course_id, "Enrolled");
                Ok(enrollment)
            }
            // Check-then-create lost a race; the store's duplicate-key
            // rejection is the backstop and means the same conflict.
            Err(StoreError::Duplicate(_)) => Err(AdminError::AlreadyEnrolled {
                student_id,
                course_id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Applies a partial update to an existing student.
    ///
    /// Omitted (`None`) fields preserve the stored value; only supplied
    /// fields overwrite.
    #[instrument(skip(self, update))]
    pub async fn update_student(
        &self,
        student_id: String,
        update: StudentUpdate,
    ) -> Result<Student, AdminError> {
        debug!(?update, "update_student called");
        self.students
            .get(student_id.clone())
            .await?
            .ok_or_else(|| AdminError::StudentNotFound(student_id.clone()))?;

        match self.students.update_student(student_id.clone(), update).await {
            Ok(student) => {
                info!(%student_id, "Student updated");
                Ok(student)
            }
            Err(StoreError::NotFound(_)) => Err(AdminError::StudentNotFound(student_id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes an existing student.
    #[instrument(skip(self))]
    pub async fn delete_student(&self, student_id: String) -> Result<(), AdminError> {
        self.students
            .get(student_id.clone())
            .await?
            .ok_or_else(|| AdminError::StudentNotFound(student_id.clone()))?;

        match self.students.delete(student_id.clone()).await {
            Ok(()) => {
                info!(%student_id, "Student deleted");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => Err(AdminError::StudentNotFound(student_id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes an existing professor.
    #[instrument(skip(self))]
    pub async fn delete_professor(&self, professor_id: String) -> Result<(), AdminError> {
        self.professors
            .get(professor_id.clone())
            .await?
            .ok_or_else(|| AdminError::ProfessorNotFound(professor_id.clone()))?;

        match self.professors.delete(professor_id.clone()).await {
            Ok(()) => {
                info!(%professor_id, "Professor deleted");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => Err(AdminError::ProfessorNotFound(professor_id)),
            Err(e) => Err(e.into()),
        }
    }
}

/// Presence check: the value must exist and be non-blank after trimming.
/// The stored value stays untrimmed, matching what the caller sent.
fn required(field: &'static str, value: Option<String>) -> Result<String, AdminError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AdminError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_accepts_untrimmed_values() {
        assert_eq!(required("email", Some(" a@x.com ".into())).unwrap(), " a@x.com ");
    }

    #[test]
    fn test_required_rejects_blank_and_absent() {
        assert_eq!(
            required("email", Some("   ".into())).unwrap_err(),
            AdminError::MissingField("email")
        );
        assert_eq!(
            required("email", None).unwrap_err(),
            AdminError::MissingField("email")
        );
    }
}
