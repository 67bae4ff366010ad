use serde::{Deserialize, Serialize};

/// The two kinds of people the administration service registers.
///
/// # Role Dispatch
/// Registration is polymorphic over this kind: validation and attribute
/// assembly run once, and the kind only decides which store receives the
/// final create. There are no per-role code paths beyond that dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    Professor,
    Student,
}

impl PersonKind {
    /// Parses a caller-supplied role string. Anything other than the two
    /// exact role names is rejected.
    pub fn from_role(role: &str) -> Option<Self> {
        match role {
            "professor" => Some(PersonKind::Professor),
            "student" => Some(PersonKind::Student),
            _ => None,
        }
    }

    /// Name of the identity field for this kind, as it appears on the wire.
    pub fn id_field(&self) -> &'static str {
        match self {
            PersonKind::Professor => "professor_id",
            PersonKind::Student => "student_id",
        }
    }
}

/// A registered professor.
///
/// `professor_id` is caller-supplied and unique; `email` is unique across
/// professors. `bio` and `phone_number` are always materialized — a missing
/// value is stored as an explicit `None` (serialized as `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    pub professor_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
}

/// A registered student. Same shape as [`Professor`] with its own identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
}

/// Shared creation payload for both person kinds.
///
/// `id` lands in `professor_id` or `student_id` depending on which store the
/// payload is sent to.
#[derive(Debug, Clone)]
pub struct PersonCreate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
}

/// Partial update payload for a student. `None` fields preserve the stored
/// value; only `Some` fields overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// The outcome of a registration: one person of either kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Person {
    Professor(Professor),
    Student(Student),
}

impl Person {
    pub fn kind(&self) -> PersonKind {
        match self {
            Person::Professor(_) => PersonKind::Professor,
            Person::Student(_) => PersonKind::Student,
        }
    }

    /// The caller-supplied identity, regardless of kind.
    pub fn identity_id(&self) -> &str {
        match self {
            Person::Professor(p) => &p.professor_id,
            Person::Student(s) => &s.student_id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Person::Professor(p) => &p.email,
            Person::Student(s) => &s.email,
        }
    }
}
