// events.rs — Lifecycle events and notification dispatch.
//
// The tracker emits an event at each scoring milestone: a goal joins the
// collection, an accomplishment is recorded, the level rises, a session
// is saved or loaded. Notification sinks subscribe to these events; the
// always-on JSONL log sink is the default, and a failing sink is logged
// but never interrupts the operation that produced the event.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use quest_goal::Variant;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::ledger::Score;

/// Events emitted at key points of a tracker session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum TrackerEvent {
    /// A goal was appended to the collection.
    GoalAdded {
        index: usize,
        variant: String,
        name: String,
        timestamp: DateTime<Utc>,
    },

    /// An accomplishment event was recorded against a goal.
    EventRecorded {
        index: usize,
        name: String,
        points_earned: i64,
        total_score: i64,
        timestamp: DateTime<Utc>,
    },

    /// The total score crossed a level boundary.
    LevelUp {
        level: i64,
        total_score: i64,
        timestamp: DateTime<Utc>,
    },

    /// The session was written to the save file.
    SessionSaved {
        goals: usize,
        total_score: i64,
        timestamp: DateTime<Utc>,
    },

    /// A saved session replaced the in-memory state.
    SessionLoaded {
        goals: usize,
        total_score: i64,
        timestamp: DateTime<Utc>,
    },
}

impl TrackerEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            TrackerEvent::GoalAdded { .. } => "goal_added",
            TrackerEvent::EventRecorded { .. } => "event_recorded",
            TrackerEvent::LevelUp { .. } => "level_up",
            TrackerEvent::SessionSaved { .. } => "session_saved",
            TrackerEvent::SessionLoaded { .. } => "session_loaded",
        }
    }

    pub fn goal_added(index: usize, variant: Variant, name: &str) -> Self {
        TrackerEvent::GoalAdded {
            index,
            variant: variant.tag().to_string(),
            name: name.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn event_recorded(index: usize, name: &str, points_earned: i64, score: Score) -> Self {
        TrackerEvent::EventRecorded {
            index,
            name: name.to_string(),
            points_earned,
            total_score: score.total,
            timestamp: Utc::now(),
        }
    }

    pub fn level_up(score: Score) -> Self {
        TrackerEvent::LevelUp {
            level: score.level,
            total_score: score.total,
            timestamp: Utc::now(),
        }
    }

    pub fn session_saved(goals: usize, total_score: i64) -> Self {
        TrackerEvent::SessionSaved {
            goals,
            total_score,
            timestamp: Utc::now(),
        }
    }

    pub fn session_loaded(goals: usize, total_score: i64) -> Self {
        TrackerEvent::SessionLoaded {
            goals,
            total_score,
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving tracker events.
///
/// Implementations decide what to do with each event: append to a log,
/// drive a desktop notification, feed a stats widget.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop the session.
    fn send(&self, event: &TrackerEvent) -> Result<(), TrackerError>;
}

/// Logs events as JSONL to a file (the always-on sink).
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &TrackerEvent) -> Result<(), TrackerError> {
        // Ensure parent directory exists.
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| TrackerError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| TrackerError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| TrackerError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't
/// prevent other sinks from receiving the event.
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &TrackerEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
