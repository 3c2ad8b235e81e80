//! People domain module.
//!
//! This crate contains the entity registry that creates named, aged people
//! with unique sequential identifiers, plus a handful of greeting helpers.
//! Pure domain logic: no IO, no storage.

pub mod greeting;
pub mod person;

pub use greeting::{Human, greet, judge_age, or_no_input};
pub use person::{Person, PersonId, PersonRegistry};
