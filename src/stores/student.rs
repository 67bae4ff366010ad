//! Student store wiring and entity implementation.

use crate::clients::StudentClient;
use crate::framework::{EntityStore, StoreEntity};
use crate::model::{PersonCreate, Student, StudentUpdate};

impl StoreEntity for Student {
    type Id = String;
    type CreateParams = PersonCreate;
    type UpdateParams = StudentUpdate;
    type Filter = ();

    fn from_create_params(params: PersonCreate) -> Result<Self, String> {
        Ok(Self {
            student_id: params.id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            bio: params.bio,
            phone_number: params.phone_number,
        })
    }

    fn id(&self) -> String {
        self.student_id.clone()
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email.clone())
    }

    /// Partial update: omitted fields keep the stored value.
    fn apply_update(&mut self, update: StudentUpdate) -> Result<(), String> {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    fn matches(&self, _filter: &()) -> bool {
        false
    }
}

/// Creates a new student store and its client.
pub fn new() -> (EntityStore<Student>, StudentClient) {
    let (store, generic_client) = EntityStore::new(32);
    (store, StudentClient::new(generic_client))
}
