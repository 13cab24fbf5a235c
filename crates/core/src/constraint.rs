//! Type-level numeric constraints checked once at construction.
//!
//! A [`Constrained<T, C>`] wraps a value of type `T` that has been verified
//! against the marker constraint `C`. Downstream code can then rely on the
//! invariant without re-checking it.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: Zero or greater (coffee doses, water amounts)
//! - [`StrictlyPositive`]: Greater than zero (ratios used as divisors)
//!
//! Both work with plain floats and with `uom` quantities, since the checks
//! only need [`PartialOrd`] and [`Zero`].
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for your own zero-sized marker type.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use cupping_core::constraint::{Constrained, StrictlyPositive};
///
/// let ratio = Constrained::<_, StrictlyPositive>::new(15.0).unwrap();
/// assert_eq!(ratio.into_inner(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: PartialOrd + Zero> Constrained<T, NonNegative> {
    /// Returns zero wrapped as a non-negative value without a runtime check.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}
