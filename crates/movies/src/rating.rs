use serde::{Deserialize, Serialize};

use rollcall_core::{DomainError, ValueObject};

/// Movie rating: one to five stars.
///
/// Serialized as a bare integer. Deserialization goes through
/// [`TryFrom<u8>`], so out-of-range input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl ValueObject for Rating {}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::One),
            2 => Ok(Rating::Two),
            3 => Ok(Rating::Three),
            4 => Ok(Rating::Four),
            5 => Ok(Rating::Five),
            other => Err(DomainError::validation(format!(
                "rating must be between 1 and 5, got {other}"
            ))),
        }
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.value()
    }
}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/5", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_through_five() {
        for (raw, rating) in (1u8..=5).zip(Rating::ALL) {
            assert_eq!(Rating::try_from(raw).unwrap(), rating);
            assert_eq!(rating.value(), raw);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        for raw in [0u8, 6, 42, u8::MAX] {
            let err = Rating::try_from(raw).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{raw} should be rejected");
        }
    }

    #[test]
    fn serde_uses_bare_integer() {
        assert_eq!(serde_json::to_string(&Rating::Four).unwrap(), "4");
        assert_eq!(serde_json::from_str::<Rating>("2").unwrap(), Rating::Two);
        assert!(serde_json::from_str::<Rating>("0").is_err());
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert!(serde_json::from_str::<Rating>("\"5\"").is_err());
    }

    #[test]
    fn display_shows_stars_out_of_five() {
        assert_eq!(Rating::Three.to_string(), "3/5");
    }
}
