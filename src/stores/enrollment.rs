//! Enrollment store wiring and entity implementation.

use crate::clients::EnrollmentClient;
use crate::framework::{EntityStore, StoreEntity};
use crate::model::{Enrollment, EnrollmentCreate, EnrollmentKey};

impl StoreEntity for Enrollment {
    // The pair itself is the primary key, so the store's duplicate-key
    // rejection doubles as the uniqueness constraint on
    // (student_id, course_id).
    type Id = EnrollmentKey;
    type CreateParams = EnrollmentCreate;
    type UpdateParams = ();
    type Filter = EnrollmentKey;

    fn from_create_params(params: EnrollmentCreate) -> Result<Self, String> {
        Ok(Self {
            student_id: params.student_id,
            course_id: params.course_id,
        })
    }

    fn id(&self) -> EnrollmentKey {
        self.key()
    }

    fn apply_update(&mut self, _update: ()) -> Result<(), String> {
        Ok(())
    }

    fn matches(&self, filter: &EnrollmentKey) -> bool {
        self.student_id == filter.student_id && self.course_id == filter.course_id
    }
}

/// Creates a new enrollment store and its client.
pub fn new() -> (EntityStore<Enrollment>, EnrollmentClient) {
    let (store, generic_client) = EntityStore::new(32);
    (store, EnrollmentClient::new(generic_client))
}
