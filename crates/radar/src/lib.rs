//! Radar-chart geometry for sensory profiles.
//!
//! This crate turns an ordered list of bounded values into the coordinates a
//! UI needs to draw a radar (spider) chart: axis guides, concentric grid rings,
//! the filled data polygon, and label anchors. It never draws anything itself.
//!
//! - [`project_radar`]: project labeled values with the default layout
//! - [`project_profile`]: project a [`SensoryProfile`]
//! - [`RadarConfig`]: validated layout parameters for custom projections
//!
//! Coordinates use canvas conventions: the origin is the top-left corner of a
//! square canvas and `y` grows downward. Axis 0 points straight up and axes
//! proceed clockwise.
//!
//! # Features
//!
//! - `plot`: Enables [`plot::show`] for previewing geometry in an egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`SensoryProfile`]: cupping_core::SensoryProfile

mod config;
mod geometry;
mod projection;

#[cfg(feature = "plot")]
pub mod plot;

pub use config::{RadarConfig, RadarConfigError};
pub use geometry::{LabelAnchor, Point, RadarGeometry, Segment};
pub use projection::{project_profile, project_radar};
