use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::model::{Course, CourseCreate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the course store.
///
/// The administration service only looks courses up; `create_course` exists
/// for seeding.
#[derive(Clone)]
pub struct CourseClient {
    inner: StoreClient<Course>,
}

impl CourseClient {
    pub fn new(inner: StoreClient<Course>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_course(&self, params: CourseCreate) -> Result<Course, StoreError> {
        debug!(?params, "create_course called");
        self.inner.create(params).await
    }
}

#[async_trait]
impl StoreHandle<Course> for CourseClient {
    fn inner(&self) -> &StoreClient<Course> {
        &self.inner
    }
}
