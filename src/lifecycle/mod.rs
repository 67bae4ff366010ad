//! System wiring and observability.

pub mod admin_system;
pub mod tracing;

pub use self::admin_system::AdminSystem;
pub use self::tracing::setup_tracing;
