//! Professor store wiring and entity implementation.

use crate::clients::ProfessorClient;
use crate::framework::{EntityStore, StoreEntity};
use crate::model::{PersonCreate, Professor};

impl StoreEntity for Professor {
    type Id = String;
    type CreateParams = PersonCreate;
    // The service defines no update operation for professors.
    type UpdateParams = ();
    type Filter = ();

    fn from_create_params(params: PersonCreate) -> Result<Self, String> {
        Ok(Self {
            professor_id: params.id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            bio: params.bio,
            phone_number: params.phone_number,
        })
    }

    fn id(&self) -> String {
        self.professor_id.clone()
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email.clone())
    }

    fn apply_update(&mut self, _update: ()) -> Result<(), String> {
        Ok(())
    }

    fn matches(&self, _filter: &()) -> bool {
        false
    }
}

/// Creates a new professor store and its client.
pub fn new() -> (EntityStore<Professor>, ProfessorClient) {
    let (store, generic_client) = EntityStore::new(32);
    (store, ProfessorClient::new(generic_client))
}
