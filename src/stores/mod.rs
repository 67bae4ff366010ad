//! Per-entity store wiring: [`StoreEntity`](crate::framework::StoreEntity)
//! implementations and constructors pairing each store with its typed client.

pub mod course;
pub mod enrollment;
pub mod professor;
pub mod student;
