use cupping_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors returned by brew calculations.
///
/// These indicate a caller bug (an unchecked form value, say) rather than a
/// transient condition, so nothing here is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum BrewError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidInput {
        name: &'static str,
        value: f64,
        reason: ConstraintError,
    },
}

impl BrewError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: ConstraintError) -> Self {
        Self::InvalidInput {
            name,
            value,
            reason,
        }
    }
}
