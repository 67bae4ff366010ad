//! # Registrar
//!
//! > **An actor-based administration service for academic records.**
//!
//! This crate implements the business-logic core of a small academic-records
//! system: registering people (professors or students), enrolling students
//! into courses, and updating or deleting records. Each entity kind lives in
//! its own store task, and a single [`AdminService`](admin::AdminService)
//! coordinates them.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why stores as actors?
//!
//! Every entity kind (Professor, Student, Course, Enrollment) is managed by a
//! generic [`EntityStore<T>`](framework::EntityStore) running in its own Tokio
//! task. Each store processes its requests *sequentially*, so:
//! - **No locks**: the store owns its records exclusively; there is no shared
//!   mutable state to protect.
//! - **A real uniqueness backstop**: duplicate primary keys (including the
//!   `(student_id, course_id)` enrollment pair) are rejected inside the store
//!   loop, so two racing enroll calls cannot both insert.
//! - **One message loop, four stores**: the store logic is written once and
//!   reused for every entity type via the [`StoreEntity`](framework::StoreEntity)
//!   trait.
//!
//! ### Explicit dependency injection
//!
//! The [`AdminService`](admin::AdminService) is constructed exactly once with
//! the four store clients. There is no global storage handle to forget to
//! bind: a service without its stores is unrepresentable. The only remaining
//! unavailability mode is a stopped store task, which surfaces as
//! [`AdminError::Unavailable`](admin::AdminError::Unavailable).
//!
//! ### Typed errors at the boundary
//!
//! Store failures never cross the service surface raw. Every operation
//! converts [`StoreError`](framework::StoreError) into an
//! [`AdminError`](admin::AdminError) variant with a stable status category
//! (invalid input, not found, conflict, storage failure).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic entity-store layer: [`StoreEntity`](framework::StoreEntity),
//! [`EntityStore`](framework::EntityStore), [`StoreClient`](framework::StoreClient),
//! and the [`framework::mock`] utilities for testing against stores in
//! isolation.
//!
//! ### 2. The Records ([`model`])
//! Pure data: [`Professor`](model::Professor), [`Student`](model::Student),
//! [`Course`](model::Course), [`Enrollment`](model::Enrollment), plus the
//! creation/update payloads and the [`PersonKind`](model::PersonKind)
//! role dispatch type.
//!
//! ### 3. The Stores ([`stores`])
//! Per-entity [`StoreEntity`](framework::StoreEntity) implementations and
//! constructors that pair each store with its typed client.
//!
//! ### 4. The Interface ([`clients`])
//! Domain-specific clients ([`StudentClient`](clients::StudentClient),
//! [`EnrollmentClient`](clients::EnrollmentClient), ...) that hide the raw
//! message passing behind typed methods.
//!
//! ### 5. The Service ([`admin`])
//! The five administrative operations and the
//! [`AdminError`](admin::AdminError) taxonomy.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`AdminSystem`](lifecycle::AdminSystem) spins up the stores, wires the
//! service, and shuts everything down gracefully. Also hosts
//! [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! let system = AdminSystem::new();
//!
//! let person = system.service.register(RegisterRequest {
//!     role: Some("student".into()),
//!     identity_id: Some("S1".into()),
//!     first_name: Some("Ann".into()),
//!     last_name: Some("Lee".into()),
//!     email: Some("a@x.com".into()),
//!     ..Default::default()
//! }).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! Run the tests with `cargo test`; set `RUST_LOG=debug` to see full request
//! payloads in the traces.

pub mod admin;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod stores;
