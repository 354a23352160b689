//! # quest-goal
//!
//! Goal model for the Quest tracker.
//!
//! A [`Goal`] is a trackable objective with one of three completion
//! semantics, fixed at construction: one-shot, endlessly recurring, or
//! counted with a completion bonus. Recording an accomplishment event
//! against a goal reports the points earned by that specific event, so a
//! completed goal can never be re-scored by a careless caller.
//!
//! ## Key components
//!
//! - [`Goal`] — shared attributes plus per-variant progress state
//! - [`Variant`] — the closed set of goal behaviors
//! - [`GoalError`] — creation-validation failures

pub mod error;
pub mod goal;

pub use error::GoalError;
pub use goal::{Goal, Variant};
