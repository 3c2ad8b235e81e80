//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: they are defined entirely by their
/// attribute values and are compared by value.
///
/// - **Value Object**: `Rating::Five`, a `Movie` record
/// - **Entity**: a `Person` (same id means same person, whatever the name)
///
/// Construction is where validation happens; once built, a value object is
/// known to satisfy its invariants.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
