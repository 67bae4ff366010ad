use crate::admin::AdminService;
use crate::clients::{CourseClient, EnrollmentClient, ProfessorClient, StudentClient};
use tracing::{error, info};

/// The runtime orchestrator for the administration service.
///
/// `AdminSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the four store tasks
/// - **Dependency Wiring**: Constructing the [`AdminService`] with its
///   clients exactly once, at startup
///
/// # Architecture
///
/// Four independent stores run as Tokio tasks — Professor, Student, Course,
/// Enrollment. None of them talks to another; all coordination happens in
/// the [`AdminService`].
///
/// # Example
///
/// ```ignore
/// let system = AdminSystem::new();
///
/// // Seed a course, then use the service
/// system.courses.create_course(course).await?;
/// let person = system.service.register(request).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct AdminSystem {
    /// The administration service, wired to all four stores.
    pub service: AdminService,

    /// Client for the professor store.
    pub professors: ProfessorClient,

    /// Client for the student store.
    pub students: StudentClient,

    /// Client for the course store (used for seeding).
    pub courses: CourseClient,

    /// Client for the enrollment store.
    pub enrollments: EnrollmentClient,

    /// Task handles for all running stores (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminSystem {
    /// Creates a new `AdminSystem` with all four stores running.
    pub fn new() -> Self {
        let (professor_store, professors) = crate::stores::professor::new();
        let (student_store, students) = crate::stores::student::new();
        let (course_store, courses) = crate::stores::course::new();
        let (enrollment_store, enrollments) = crate::stores::enrollment::new();

        let handles = vec![
            tokio::spawn(professor_store.run()),
            tokio::spawn(student_store.run()),
            tokio::spawn(course_store.run()),
            tokio::spawn(enrollment_store.run()),
        ];

        let service = AdminService::new(
            professors.clone(),
            students.clone(),
            courses.clone(),
            enrollments.clone(),
        );

        Self {
            service,
            professors,
            students,
            courses,
            enrollments,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the service and the clients closes every store channel; each
    /// store drains its queue and exits its loop. Returns an error if any
    /// store task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.professors);
        drop(self.students);
        drop(self.courses);
        drop(self.enrollments);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for AdminSystem {
    fn default() -> Self {
        Self::new()
    }
}
