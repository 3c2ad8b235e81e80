//! Movies domain module.
//!
//! Validated movie records. Ratings are a closed enumeration and every value
//! arriving through JSON is checked at the boundary.

pub mod movie;
pub mod rating;

pub use movie::{Movie, parse_catalog};
pub use rating::Rating;
