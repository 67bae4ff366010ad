use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::model::{PersonCreate, Student, StudentUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the student store.
#[derive(Clone)]
pub struct StudentClient {
    inner: StoreClient<Student>,
}

impl StudentClient {
    pub fn new(inner: StoreClient<Student>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_student(&self, params: PersonCreate) -> Result<Student, StoreError> {
        debug!(?params, "create_student called");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn update_student(
        &self,
        id: String,
        update: StudentUpdate,
    ) -> Result<Student, StoreError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }
}

#[async_trait]
impl StoreHandle<Student> for StudentClient {
    fn inner(&self) -> &StoreClient<Student> {
        &self.inner
    }
}
