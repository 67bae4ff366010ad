//! Request payloads for the administration service.
//!
//! Fields arrive as `Option<String>` because the call surface is
//! transport-agnostic: the service itself decides what is required, what
//! counts as blank, and what defaults apply.

use serde::{Deserialize, Serialize};

/// Payload for [`register`](crate::admin::AdminService::register).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Must be exactly `professor` or `student`.
    pub role: Option<String>,
    /// Becomes `professor_id` or `student_id` depending on the role.
    pub identity_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
}

/// Payload for [`enroll`](crate::admin::AdminService::enroll).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
}
