// error.rs — Creation-validation errors for goals.

use thiserror::Error;

/// Reasons a goal specification is rejected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    /// The goal name was empty or whitespace-only.
    #[error("goal name must not be empty")]
    EmptyName,

    /// Base points below zero.
    #[error("base points must not be negative (got {0})")]
    NegativePoints(i64),

    /// Checklist bonus points below zero.
    #[error("bonus points must not be negative (got {0})")]
    NegativeBonus(i64),

    /// Checklist target count of zero or below.
    #[error("target count must be positive (got {0})")]
    InvalidTarget(i64),
}
