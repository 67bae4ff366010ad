//! # Core Store Framework
//!
//! This module defines the generic building blocks for the entity stores.
//!
//! ## Key Types
//!
//! - [`StoreEntity`]: The trait that all record types must implement.
//! - [`EntityStore`]: The generic store task that owns the records.
//! - [`StoreClient`]: The generic client for communicating with a store.
//! - [`StoreError`]: Store-level errors (e.g., NotFound, Duplicate).

use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type must implement to be managed by [`EntityStore`].
///
/// # Architecture Note
/// By defining one contract that all our record types (Professor, Student,
/// Course, Enrollment) satisfy, we write the store's message loop *once* and
/// reuse it for every entity kind.
///
/// Associated types keep the stores type-safe: a Student store only accepts
/// Student creation payloads, and the compiler rejects everything else.
///
/// # Identity & Uniqueness
/// Records carry their own primary key ([`StoreEntity::id`]); the store
/// rejects an insert whose key is already taken. A record may additionally
/// declare a secondary [`unique_key`](StoreEntity::unique_key) (e.g., an
/// email address); the store maintains that index and rejects duplicates on
/// create and update. This is the storage-level backstop that the service
/// layer's check-then-create sequences rely on under concurrency.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The primary key for this record (e.g., String, a composite key type).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record. The primary key is part of
    /// this payload: identities are caller-supplied, not generated.
    type CreateParams: Send + Sync + Debug;

    /// The data required to update an existing record.
    type UpdateParams: Send + Sync + Debug;

    /// Match criteria for [`StoreClient::find_one`]. Use `()` if the record
    /// type does not support criteria lookups.
    type Filter: Send + Sync + Debug;

    /// Construct the full record from the creation payload.
    fn from_create_params(params: Self::CreateParams) -> Result<Self, String>;

    /// The record's primary key.
    fn id(&self) -> Self::Id;

    /// Optional secondary unique key (e.g., an email address). The store
    /// enforces uniqueness over this value across all records of the type.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Apply a partial update in place.
    fn apply_update(&mut self, update: Self::UpdateParams) -> Result<(), String>;

    /// Whether this record matches the given criteria.
    fn matches(&self, filter: &Self::Filter) -> bool;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store layer itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    /// The store task is no longer running.
    #[error("Store closed")]
    Closed,
    /// The store dropped the response channel before answering.
    #[error("Store dropped response channel")]
    Dropped,
    /// No record exists under the given key.
    #[error("Record not found: {0}")]
    NotFound(String),
    /// A record with the same primary or unique key already exists.
    #[error("Duplicate key: {0}")]
    Duplicate(String),
    /// The record payload was rejected by the entity itself.
    #[error("Invalid record: {0}")]
    Invalid(String),
}

/// Type alias for the one-shot response channel used by the stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a store to request operations.
///
/// The variants map directly to the repository capabilities the service
/// consumes: create, find-by-key, find-one-by-criteria, update, delete.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindOne {
        filter: T::Filter,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC STORE TASK
// =============================================================================

/// The generic store that owns a collection of records.
///
/// # Architecture Note
/// This struct is the "server" half of a store. It owns the state
/// (`records`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each store processes its own messages *sequentially* in a loop, so no
/// `Mutex` or `RwLock` is needed around the records. Two racing creates for
/// the same key are serialized here, and the second one is rejected with
/// [`StoreError::Duplicate`].
pub struct EntityStore<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
    unique_keys: HashSet<String>,
}

impl<T: StoreEntity> EntityStore<T> {
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            records: HashMap::new(),
            unique_keys: HashSet::new(),
        };
        let client = StoreClient::new(sender);
        (store, client)
    }

    /// Runs the store's event loop, processing requests until the channel
    /// closes (i.e., until every client handle has been dropped).
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Student" instead of
        // "registrar::model::person::Student")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let record = match T::from_create_params(params) {
                        Ok(record) => record,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(StoreError::Invalid(e)));
                            continue;
                        }
                    };
                    let id = record.id();
                    if self.records.contains_key(&id) {
                        warn!(entity_type, %id, "Duplicate primary key");
                        let _ = respond_to.send(Err(StoreError::Duplicate(id.to_string())));
                        continue;
                    }
                    if let Some(key) = record.unique_key() {
                        if !self.unique_keys.insert(key.clone()) {
                            warn!(entity_type, %id, %key, "Duplicate unique key");
                            let _ = respond_to.send(Err(StoreError::Duplicate(key)));
                            continue;
                        }
                    }
                    self.records.insert(id.clone(), record.clone());
                    info!(entity_type, %id, size = self.records.len(), "Created");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    let found = record.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::FindOne { filter, respond_to } => {
                    let record = self.records.values().find(|r| r.matches(&filter)).cloned();
                    let found = record.is_some();
                    debug!(entity_type, ?filter, found, "FindOne");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let current = match self.records.get(&id) {
                        Some(record) => record.clone(),
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                            continue;
                        }
                    };
                    // Apply the update to a copy so a rejected update leaves
                    // the stored record untouched.
                    let mut updated = current.clone();
                    if let Err(e) = updated.apply_update(update) {
                        warn!(entity_type, %id, error = %e, "Update rejected");
                        let _ = respond_to.send(Err(StoreError::Invalid(e)));
                        continue;
                    }
                    let old_key = current.unique_key();
                    let new_key = updated.unique_key();
                    if new_key != old_key {
                        if let Some(key) = new_key.clone() {
                            if self.unique_keys.contains(&key) {
                                warn!(entity_type, %id, %key, "Duplicate unique key");
                                let _ = respond_to.send(Err(StoreError::Duplicate(key)));
                                continue;
                            }
                            self.unique_keys.insert(key);
                        }
                        if let Some(key) = old_key {
                            self.unique_keys.remove(&key);
                        }
                    }
                    self.records.insert(id.clone(), updated.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(updated));
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    match self.records.remove(&id) {
                        Some(record) => {
                            if let Some(key) = record.unique_key() {
                                self.unique_keys.remove(&key);
                            }
                            info!(entity_type, %id, size = self.records.len(), "Deleted");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with an [`EntityStore`].
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { params, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn find_one(&self, filter: T::Filter) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::FindOne { filter, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update { id, update, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
