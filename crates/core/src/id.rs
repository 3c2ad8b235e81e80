//! Sequential identifiers used across the domain.
//!
//! Identifiers are plain `u64` values handed out by an [`IdSequence`] in
//! creation order, starting at 0. Domain crates wrap them in their own
//! newtypes via [`sequential_id!`](crate::sequential_id).

use core::sync::atomic::{AtomicU64, Ordering};

/// Monotonic, thread-safe source of identifiers.
///
/// Every call to [`IdSequence::allocate`] returns the pre-increment value of an
/// atomic counter, so no two callers (on any thread) observe the same id.
/// Sequences are never reset; a value handed out is never handed out again.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Create a sequence whose first id is 0.
    ///
    /// `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    #[cfg(test)]
    const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Hand out the next identifier.
    ///
    /// The counter wraps after `u64::MAX`; handing out that last value trips a
    /// debug assertion because the following call would repeat 0.
    pub fn allocate(&self) -> u64 {
        // Only atomicity of the increment matters; ids carry no happens-before.
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        debug_assert!(id != u64::MAX, "id sequence exhausted");
        id
    }

    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

/// Implement the standard identifier surface for a `u64` newtype.
///
/// The type must be a tuple struct around a `u64`, e.g.
/// `pub struct PersonId(u64);`. Generates `from_raw`/`get`, `Display`,
/// `From` conversions and a `FromStr` that reports
/// [`DomainError::InvalidId`](crate::DomainError::InvalidId).
#[macro_export]
macro_rules! sequential_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw identifier value.
            ///
            /// Prefer ids handed out by a registry; this exists for
            /// deserialization and tests.
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw identifier value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .parse::<u64>()
                    .map_err(|e| $crate::DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}
