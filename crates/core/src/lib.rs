//! Core types for the Cupping coffee journal.
//!
//! This crate defines the small vocabulary that the brew calculator, the radar
//! projection, and the journal records share:
//!
//! - [`constraint`]: numeric wrappers that enforce invariants such as
//!   "non-negative" or "strictly positive" at construction time
//! - [`SensoryProfile`]: the five-attribute taste description of a coffee
//! - [`Rating`]: an overall review score from one to five

pub mod constraint;
mod rating;
mod sensory;

pub use rating::Rating;
pub use sensory::{SCORE_MAX, SCORE_MIN, SCORE_STEP, SensoryAttribute, SensoryProfile};
