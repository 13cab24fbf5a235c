//! Unit-safe brew conversions over [`uom`] quantities.
//!
//! Brew water is weighed on the same scale as the coffee, so one gram of water
//! is treated as one millilitre throughout.

use uom::si::{
    f64::{Mass, Volume},
    mass::gram,
    volume::milliliter,
};

use crate::{BrewError, coffee_for, water_for};

/// Returns the water mass needed for `coffee` at `ratio`.
///
/// # Errors
///
/// Same as [`water_for`].
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use cupping_brew::units::water_mass_for;
/// use uom::si::{f64::Mass, mass::gram};
///
/// let water = water_mass_for(Mass::new::<gram>(18.0), 15.0).unwrap();
/// assert_relative_eq!(water.get::<gram>(), 270.0, epsilon = 1e-9);
/// ```
pub fn water_mass_for(coffee: Mass, ratio: f64) -> Result<Mass, BrewError> {
    water_for(coffee.get::<gram>(), ratio).map(Mass::new::<gram>)
}

/// Returns the coffee mass needed for `water` at `ratio`.
///
/// # Errors
///
/// Same as [`coffee_for`].
pub fn coffee_mass_for(water: Mass, ratio: f64) -> Result<Mass, BrewError> {
    coffee_for(water.get::<gram>(), ratio).map(Mass::new::<gram>)
}

/// Returns the volume occupied by `water`.
#[must_use]
pub fn water_volume(water: Mass) -> Volume {
    Volume::new::<milliliter>(water.get::<gram>())
}

/// Returns the mass of a `volume` of water.
#[must_use]
pub fn water_mass(volume: Volume) -> Mass {
    Mass::new::<gram>(volume.get::<milliliter>())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass::kilogram, volume::liter};

    #[test]
    fn water_mass_for_dose() {
        let water = water_mass_for(Mass::new::<gram>(20.0), 16.0).unwrap();
        assert_relative_eq!(water.get::<gram>(), 320.0, epsilon = 1e-9);
    }

    #[test]
    fn coffee_mass_for_kilogram_batch() {
        let coffee = coffee_mass_for(Mass::new::<kilogram>(1.5), 15.0).unwrap();
        assert_relative_eq!(coffee.get::<gram>(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn coffee_mass_rejects_zero_ratio() {
        assert!(coffee_mass_for(Mass::new::<gram>(250.0), 0.0).is_err());
    }

    #[test]
    fn water_mass_and_volume_are_interchangeable() {
        let volume = water_volume(Mass::new::<gram>(500.0));
        assert_relative_eq!(volume.get::<liter>(), 0.5, epsilon = 1e-12);

        let mass = water_mass(Volume::new::<milliliter>(250.0));
        assert_relative_eq!(mass.get::<gram>(), 250.0, epsilon = 1e-9);
    }
}
