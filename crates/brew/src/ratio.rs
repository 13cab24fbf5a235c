use std::{fmt, ops::RangeInclusive};

use cupping_core::constraint::{
    Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive,
};

use crate::BrewError;

/// Ratios offered by the calculator slider, from 1:10 (strong) to 1:22 (light).
///
/// This is a presentation range only; the functions in this module accept any
/// valid ratio.
pub const RECOMMENDED_RATIOS: RangeInclusive<u32> = 10..=22;

/// Returns the water (ml) needed for `coffee_grams` of coffee at `ratio`.
///
/// A ratio of zero is a valid degenerate brew and yields zero water.
///
/// # Errors
///
/// Returns [`BrewError::InvalidInput`] if either argument is negative or not
/// finite.
///
/// # Example
///
/// ```
/// use cupping_brew::water_for;
///
/// assert_eq!(water_for(18.0, 15.0).unwrap(), 270.0);
/// assert!(water_for(-1.0, 15.0).is_err());
/// ```
pub fn water_for(coffee_grams: f64, ratio: f64) -> Result<f64, BrewError> {
    let coffee = checked::<NonNegative>("coffee_grams", coffee_grams)?;
    let ratio = checked::<NonNegative>("ratio", ratio)?;
    Ok(coffee.get() * ratio.get())
}

/// Returns the coffee (g) needed for `water_ml` of water at `ratio`.
///
/// # Errors
///
/// Returns [`BrewError::InvalidInput`] if `water_ml` is negative or not finite,
/// or if `ratio` is not strictly positive and finite.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use cupping_brew::coffee_for;
///
/// assert_relative_eq!(coffee_for(250.0, 15.0).unwrap(), 16.666_666, epsilon = 1e-5);
/// assert!(coffee_for(250.0, 0.0).is_err());
/// ```
pub fn coffee_for(water_ml: f64, ratio: f64) -> Result<f64, BrewError> {
    let water = checked::<NonNegative>("water_ml", water_ml)?;
    let ratio = checked::<StrictlyPositive>("ratio", ratio)?;
    Ok(water.get() / ratio.get())
}

/// Rounds to one decimal place, as the calculator displays doses.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to the nearest whole number, as the calculator displays water.
#[must_use]
pub fn round_to_whole(value: f64) -> f64 {
    value.round()
}

/// Validates a finite argument against constraint `C`.
fn checked<C: Constraint<f64>>(
    name: &'static str,
    value: f64,
) -> Result<Constrained<f64, C>, BrewError> {
    if !value.is_finite() {
        return Err(BrewError::invalid(name, value, ConstraintError::NotFinite));
    }
    Constrained::<f64, C>::new(value).map_err(|reason| BrewError::invalid(name, value, reason))
}

/// A consistent coffee dose, water amount and ratio.
///
/// Any two of the three determine the third. Construct from whichever pair
/// the user edited and read the derived value back.
///
/// # Example
///
/// ```
/// use cupping_brew::BrewRatio;
///
/// let brew = BrewRatio::from_coffee(20.0, 16.0).unwrap();
/// assert_eq!(brew.water_ml(), 320.0);
/// assert_eq!(brew.to_string(), "1:16");
///
/// let stronger = brew.with_ratio(15.0).unwrap();
/// assert_eq!(stronger.water_ml(), 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrewRatio {
    coffee_g: f64,
    water_ml: f64,
    ratio: f64,
}

impl BrewRatio {
    /// Derives the water amount from a dose and a ratio.
    ///
    /// # Errors
    ///
    /// Fails if the dose is negative or not finite, or the ratio is not
    /// strictly positive.
    pub fn from_coffee(coffee_g: f64, ratio: f64) -> Result<Self, BrewError> {
        let ratio = checked::<StrictlyPositive>("ratio", ratio)?.get();
        let water_ml = water_for(coffee_g, ratio)?;
        Ok(Self {
            coffee_g,
            water_ml,
            ratio,
        })
    }

    /// Derives the dose from a water amount and a ratio.
    ///
    /// # Errors
    ///
    /// Fails if the water is negative or not finite, or the ratio is not
    /// strictly positive.
    pub fn from_water(water_ml: f64, ratio: f64) -> Result<Self, BrewError> {
        let coffee_g = coffee_for(water_ml, ratio)?;
        Ok(Self {
            coffee_g,
            water_ml,
            ratio,
        })
    }

    /// Derives the ratio from a dose and a water amount.
    ///
    /// # Errors
    ///
    /// Fails if the dose is not strictly positive, or if the water amount is
    /// negative, zero, or not finite (the ratio would not be positive).
    pub fn from_amounts(coffee_g: f64, water_ml: f64) -> Result<Self, BrewError> {
        let coffee_g = checked::<StrictlyPositive>("coffee_g", coffee_g)?.get();
        let water_ml = checked::<StrictlyPositive>("water_ml", water_ml)?.get();
        Ok(Self {
            coffee_g,
            water_ml,
            ratio: water_ml / coffee_g,
        })
    }

    /// Returns a brew with the same dose at a new ratio.
    ///
    /// # Errors
    ///
    /// Fails if the ratio is not strictly positive.
    pub fn with_ratio(self, ratio: f64) -> Result<Self, BrewError> {
        Self::from_coffee(self.coffee_g, ratio)
    }

    /// Returns a brew with a new dose at the same ratio.
    ///
    /// # Errors
    ///
    /// Fails if the dose is negative or not finite.
    pub fn with_coffee(self, coffee_g: f64) -> Result<Self, BrewError> {
        Self::from_coffee(coffee_g, self.ratio)
    }

    /// Returns a brew with a new water amount at the same ratio.
    ///
    /// # Errors
    ///
    /// Fails if the water amount is negative or not finite.
    pub fn with_water(self, water_ml: f64) -> Result<Self, BrewError> {
        Self::from_water(water_ml, self.ratio)
    }

    #[must_use]
    pub fn coffee_g(&self) -> f64 {
        self.coffee_g
    }

    #[must_use]
    pub fn water_ml(&self) -> f64 {
        self.water_ml
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Returns `true` if the ratio lies within [`RECOMMENDED_RATIOS`].
    #[must_use]
    pub fn is_recommended(&self) -> bool {
        let low = f64::from(*RECOMMENDED_RATIOS.start());
        let high = f64::from(*RECOMMENDED_RATIOS.end());
        (low..=high).contains(&self.ratio)
    }
}

/// Renders the ratio as `1:N`, with one decimal only when needed.
impl fmt::Display for BrewRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ratio = round_to_tenth(self.ratio);
        if ratio.fract() == 0.0 {
            write!(f, "1:{ratio:.0}")
        } else {
            write!(f, "1:{ratio:.1}")
        }
    }
}
