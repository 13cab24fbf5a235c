//! Preview a sensory profile as a radar chart.
//!
//! # Usage
//!
//! ```text
//! cargo run -p cupping-radar --example radar --features plot
//! cargo run -p cupping-radar --example radar --features plot -- 4.5 3 3.5 1.5 5
//! ```
//!
//! Positional arguments are acidity, body, sweetness, bitterness and aroma.
//! Missing or unparsable scores take their defaults.

use std::error::Error;

use cupping_core::{SensoryAttribute, SensoryProfile};
use cupping_radar::{
    plot::{self, ShowConfig},
    project_profile,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let args: Vec<Option<f64>> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse().ok())
        .collect();

    let profile = SensoryProfile::from_lookup(|attr| {
        let index = SensoryAttribute::ALL.iter().position(|a| *a == attr)?;
        args.get(index).copied().flatten()
    });
    tracing::info!(?profile, "charting profile");

    let geometry = project_profile(&profile, 400.0);
    plot::show(geometry, ShowConfig::new().title("Sensory profile"))?;
    Ok(())
}
