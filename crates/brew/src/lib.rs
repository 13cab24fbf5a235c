//! Brew math and timing for the Cupping coffee journal.
//!
//! - [`water_for`] and [`coffee_for`] convert between coffee dose, water and
//!   ratio; [`BrewRatio`] keeps all three consistent for a calculator view.
//! - [`units`] offers the same conversions over `uom` quantities.
//! - [`Stopwatch`] is the start/pause/reset state machine behind a brew timer.

mod error;
mod ratio;
mod stopwatch;
pub mod units;

pub use error::BrewError;
pub use ratio::{
    BrewRatio, RECOMMENDED_RATIOS, coffee_for, round_to_tenth, round_to_whole, water_for,
};
pub use stopwatch::{Phase, Stopwatch, StopwatchState, format};
