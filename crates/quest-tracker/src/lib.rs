//! # quest-tracker
//!
//! Session state for the Quest goal tracker.
//!
//! One [`TrackerService`] per session owns the goal collection and the
//! [`ScoreLedger`], dispatches [`TrackerEvent`]s to notification sinks,
//! and round-trips sessions through the line-oriented save format in
//! [`codec`]. The save format is lossy on purpose (descriptions and
//! checklist progress are not written); decode is all-or-nothing so a
//! half-read document can never corrupt a live session.
//!
//! ## Key components
//!
//! - [`TrackerService`] — create goals, record events, project the list
//! - [`ScoreLedger`] — the monotone total and its derived level
//! - [`codec`] — encode/decode for the save format
//! - [`SaveFile`] — the file-backed persistence backend
//! - [`EventDispatcher`] / [`NotificationSink`] — lifecycle notifications
//! - [`TrackerConfig`] — file layout for a session directory

pub mod codec;
pub mod config;
pub mod error;
pub mod events;
pub mod ledger;
pub mod store;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::TrackerError;
pub use events::{EventDispatcher, LogSink, NotificationSink, TrackerEvent};
pub use ledger::{Score, ScoreLedger, LEVEL_STEP};
pub use store::SaveFile;
pub use tracker::{EventOutcome, GoalSpec, TrackerService};
