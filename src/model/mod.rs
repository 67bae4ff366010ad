//! Pure data structures for the academic-records domain.

pub mod course;
pub mod enrollment;
pub mod person;

pub use course::*;
pub use enrollment::*;
pub use person::*;
