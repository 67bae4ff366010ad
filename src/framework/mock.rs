//! # Mock Stores
//!
//! Utilities for testing against stores in isolation.
//!
//! Use [`MockStore`] for fluent expectation-based tests, or
//! [`create_mock_store`] to get a client plus the raw request receiver when a
//! test needs to assert exactly which requests were (or were not) sent.

use crate::framework::{StoreClient, StoreEntity, StoreError, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock store.
enum Expectation<T: StoreEntity> {
    Get {
        response: Result<Option<T>, StoreError>,
    },
    FindOne {
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T, StoreError>,
    },
    Update {
        response: Result<T, StoreError>,
    },
    Delete {
        response: Result<(), StoreError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Student>::new();
/// mock.expect_get().return_ok(Some(student));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request with the next queued expectation.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindOne { respond_to, .. },
                        Some(Expectation::FindOne { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> LookupExpectationBuilder<T> {
        LookupExpectationBuilder {
            kind: LookupKind::Get,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find_one` operation.
    pub fn expect_find_one(&mut self) -> LookupExpectationBuilder<T> {
        LookupExpectationBuilder {
            kind: LookupKind::FindOne,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

enum LookupKind {
    Get,
    FindOne,
}

/// Builder for `get` and `find_one` expectations.
pub struct LookupExpectationBuilder<T: StoreEntity> {
    kind: LookupKind,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> LookupExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, StoreError>) {
        let expectation = match self.kind {
            LookupKind::Get => Expectation::Get { response },
            LookupKind::FindOne => Expectation::FindOne { response },
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> CreateExpectationBuilder<T> {
    /// Sets the expectation to return the created record.
    pub fn return_ok(self, record: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(record) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Err(error) });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> UpdateExpectationBuilder<T> {
    /// Sets the expectation to return the updated record.
    pub fn return_ok(self, record: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update { response: Ok(record) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update { response: Err(error) });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> DeleteExpectationBuilder<T> {
    /// Sets the expectation to return success.
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete { response: Ok(()) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete { response: Err(error) });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock store client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The fluent [`MockStore`] answers whatever arrives; sometimes a test needs
/// the opposite view — which requests were sent, in which order, and (just as
/// important) which were *not* sent. This helper hands the raw receiver to
/// the test so it can answer requests by hand and inspect the channel with
/// `try_recv` afterwards.
pub fn create_mock_store<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next request is a Get.
pub async fn expect_get<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, crate::framework::Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a FindOne.
pub async fn expect_find_one<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Filter, crate::framework::Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindOne { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a Create.
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::CreateParams, crate::framework::Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PersonCreate, Student};

    fn sample_student() -> Student {
        Student {
            student_id: "S1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            bio: None,
            phone_number: None,
        }
    }

    #[tokio::test]
    async fn test_mock_store_channel_helpers() {
        let (client, mut receiver) = create_mock_store::<Student>(10);

        let create_task = tokio::spawn(async move {
            let params = PersonCreate {
                id: "S1".to_string(),
                first_name: "Ann".to_string(),
                last_name: "Lee".to_string(),
                email: "a@x.com".to_string(),
                bio: None,
                phone_number: None,
            };
            client.create(params).await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.id, "S1");
        responder.send(Ok(sample_student())).unwrap();

        let result = create_task.await.unwrap().unwrap();
        assert_eq!(result.student_id, "S1");
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let mut mock = MockStore::<Student>::new();

        mock.expect_create().return_ok(sample_student());
        mock.expect_get().return_ok(Some(sample_student()));

        let client = mock.client();

        let params = PersonCreate {
            id: "S1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            bio: None,
            phone_number: None,
        };
        let created = client.create(params).await.unwrap();
        assert_eq!(created.student_id, "S1");

        let fetched = client.get("S1".to_string()).await.unwrap();
        assert_eq!(fetched.unwrap().email, "a@x.com");

        mock.verify();
    }
}
