use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::model::{Enrollment, EnrollmentCreate, EnrollmentKey};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the enrollment store.
#[derive(Clone)]
pub struct EnrollmentClient {
    inner: StoreClient<Enrollment>,
}

impl EnrollmentClient {
    pub fn new(inner: StoreClient<Enrollment>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_enrollment(
        &self,
        params: EnrollmentCreate,
    ) -> Result<Enrollment, StoreError> {
        debug!(?params, "create_enrollment called");
        self.inner.create(params).await
    }

    /// Criteria lookup for an existing `(student_id, course_id)` link.
    #[instrument(skip(self))]
    pub async fn find_enrollment(
        &self,
        key: EnrollmentKey,
    ) -> Result<Option<Enrollment>, StoreError> {
        debug!("Sending request");
        self.inner.find_one(key).await
    }
}

#[async_trait]
impl StoreHandle<Enrollment> for EnrollmentClient {
    fn inner(&self) -> &StoreClient<Enrollment> {
        &self.inner
    }
}
