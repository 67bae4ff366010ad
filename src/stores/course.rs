//! Course store wiring and entity implementation.
//!
//! Courses are opaque to the administration service: the store exists so
//! enrollments can resolve `course_id`, and so deployments can seed records.

use crate::clients::CourseClient;
use crate::framework::{EntityStore, StoreEntity};
use crate::model::{Course, CourseCreate};

impl StoreEntity for Course {
    type Id = String;
    type CreateParams = CourseCreate;
    type UpdateParams = ();
    type Filter = ();

    fn from_create_params(params: CourseCreate) -> Result<Self, String> {
        Ok(Self {
            course_id: params.course_id,
            title: params.title,
        })
    }

    fn id(&self) -> String {
        self.course_id.clone()
    }

    fn apply_update(&mut self, _update: ()) -> Result<(), String> {
        Ok(())
    }

    fn matches(&self, _filter: &()) -> bool {
        false
    }
}

/// Creates a new course store and its client.
pub fn new() -> (EntityStore<Course>, CourseClient) {
    let (store, generic_client) = EntityStore::new(32);
    (store, CourseClient::new(generic_client))
}
