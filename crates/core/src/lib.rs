//! `rollcall-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives: errors, identity traits and
//! the process-wide sequential identifier machinery.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::IdSequence;
pub use value_object::ValueObject;
