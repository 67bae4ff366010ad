//! # Observability & Tracing
//!
//! Structured logging for the whole system, built on the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup, shutdown, and final record counts
//! - **Store Operations**: Create, Get, FindOne, Update, Delete, with
//!   `entity_type` and record ids as structured fields
//! - **Service Operations**: every `AdminService` call opens an
//!   `#[instrument]` span; failures log the offending id and reason
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test -- --nocapture
//!
//! # Show full request payloads
//! RUST_LOG=debug cargo test -- --nocapture
//!
//! # Filter to the store layer only
//! RUST_LOG=registrar::framework=debug cargo test -- --nocapture
//! ```
//!
//! With `RUST_LOG=debug` an enroll call traces like:
//!
//! ```text
//! DEBUG enroll: enroll called request=EnrollRequest { student_id: Some("S1"), course_id: Some("C1") }
//! DEBUG enroll:get: Sending request id="S1"
//! DEBUG Get id="S1" found=true
//! DEBUG enroll:get: Sending request id="C1"
//! DEBUG Get id="C1" found=true
//! DEBUG FindOne filter=S1/C1 found=false
//! INFO Created id=S1/C1 size=1
//! INFO enroll: Enrolled student_id="S1" course_id="C1"
//! ```
//!
//! The compact format hides module paths (`with_target(false)`); the
//! structured `entity_type` field identifies the store instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
