use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::model::{PersonCreate, Professor};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the professor store.
#[derive(Clone)]
pub struct ProfessorClient {
    inner: StoreClient<Professor>,
}

impl ProfessorClient {
    pub fn new(inner: StoreClient<Professor>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_professor(&self, params: PersonCreate) -> Result<Professor, StoreError> {
        debug!(?params, "create_professor called");
        self.inner.create(params).await
    }
}

#[async_trait]
impl StoreHandle<Professor> for ProfessorClient {
    fn inner(&self) -> &StoreClient<Professor> {
        &self.inner
    }
}
