//! Typed per-entity clients over the generic [`StoreClient`](crate::framework::StoreClient).
//!
//! The rest of the crate never sees raw message passing; each store is
//! wrapped in a domain-specific client resolved once at construction.

pub mod course_client;
pub mod enrollment_client;
pub mod professor_client;
pub mod store_handle;
pub mod student_client;

pub use course_client::CourseClient;
pub use enrollment_client::EnrollmentClient;
pub use professor_client::ProfessorClient;
pub use store_handle::StoreHandle;
pub use student_client::StudentClient;
