//! The administration service: the five operations and their error taxonomy.

pub mod error;
pub mod request;
pub mod service;

pub use error::AdminError;
pub use request::{EnrollRequest, RegisterRequest};
pub use service::AdminService;
