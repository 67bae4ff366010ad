use serde::{Deserialize, Serialize};

/// A course record.
///
/// The administration service treats courses as opaque, pre-existing records
/// looked up by key only; it never creates or mutates them. The creation
/// payload exists so deployments (and tests) can seed the course store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub title: String,
}

/// Seeding payload for the course store.
#[derive(Debug, Clone)]
pub struct CourseCreate {
    pub course_id: String,
    pub title: String,
}
