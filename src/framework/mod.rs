//! Generic entity-store framework.
//!
//! This module contains the reusable plumbing: the [`StoreEntity`] trait,
//! the [`EntityStore`] task, the [`StoreClient`] handle, and the
//! [`mock`] utilities for tests.

pub mod core;
pub mod mock;

pub use self::core::*;
