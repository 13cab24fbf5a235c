use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::constraint::ConstraintError;

/// An overall review score from one to five stars.
///
/// # Examples
///
/// ```
/// use cupping_core::Rating;
///
/// let rating = Rating::new(4).unwrap();
/// assert_eq!(rating.get(), 4);
/// assert_eq!(rating.to_string(), "4/5");
///
/// assert!(Rating::new(0).is_err());
/// assert_eq!(Rating::coerce(9.0), Rating::new(5).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a rating if `value` is within `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] or
    /// [`ConstraintError::AboveMaximum`] for out-of-range values.
    pub fn new(value: u8) -> Result<Self, ConstraintError> {
        if value < Self::MIN {
            return Err(ConstraintError::BelowMinimum);
        }
        if value > Self::MAX {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(Self(value))
    }

    /// Rounds and clamps an arbitrary number into a rating.
    ///
    /// Non-finite input yields the default rating.
    #[must_use]
    pub fn coerce(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        let clamped = value.round().clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stars = clamped as u8;
        Self(stars)
    }

    /// Returns the number of stars.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

/// New reviews start at the top of the scale.
impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ConstraintError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        for stars in 1..=5 {
            assert_eq!(Rating::new(stars).unwrap().get(), stars);
        }
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Rating::new(0), Err(ConstraintError::BelowMinimum));
        assert_eq!(Rating::new(6), Err(ConstraintError::AboveMaximum));
    }

    #[test]
    fn coerce_rounds_and_clamps() {
        assert_eq!(Rating::coerce(3.4).get(), 3);
        assert_eq!(Rating::coerce(3.5).get(), 4);
        assert_eq!(Rating::coerce(-2.0).get(), 1);
        assert_eq!(Rating::coerce(12.0).get(), 5);
        assert_eq!(Rating::coerce(f64::NAN), Rating::default());
    }

    #[test]
    fn default_is_five_stars() {
        assert_eq!(Rating::default().get(), 5);
    }
}
