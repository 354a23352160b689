// tracker.rs — TrackerService: the session-level orchestrator.
//
// One TrackerService owns the goal collection, the score ledger, and the
// event dispatcher for the lifetime of a session. Goals live in creation
// order and are addressed by 0-based index; the 1-based numbering shown
// to humans is the calling layer's concern.
//
// Persistence is scoped to two moments: load() once at startup, save()
// once at shutdown. A failed load leaves the in-memory session exactly as
// it was; there is no partial replacement.

use quest_goal::{Goal, GoalError};

use crate::codec;
use crate::error::TrackerError;
use crate::events::{EventDispatcher, NotificationSink, TrackerEvent};
use crate::ledger::{Score, ScoreLedger};
use crate::store::SaveFile;

/// A goal creation request, validated on submission.
#[derive(Debug, Clone)]
pub enum GoalSpec {
    Simple {
        name: String,
        description: String,
        points: i64,
    },
    Eternal {
        name: String,
        description: String,
        points: i64,
    },
    Checklist {
        name: String,
        description: String,
        points: i64,
        target: i64,
        bonus: i64,
    },
}

impl GoalSpec {
    fn build(self) -> Result<Goal, GoalError> {
        match self {
            GoalSpec::Simple {
                name,
                description,
                points,
            } => Goal::simple(name, description, points),
            GoalSpec::Eternal {
                name,
                description,
                points,
            } => Goal::eternal(name, description, points),
            GoalSpec::Checklist {
                name,
                description,
                points,
                target,
                bonus,
            } => Goal::checklist(name, description, points, target, bonus),
        }
    }
}

/// Outcome of recording a single accomplishment event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventOutcome {
    /// Points earned by this call (0 when the goal had already completed).
    pub points_earned: i64,
    /// Score after the award.
    pub score: Score,
}

/// Session state: goal collection plus score ledger.
pub struct TrackerService {
    goals: Vec<Goal>,
    ledger: ScoreLedger,
    dispatcher: EventDispatcher,
}

impl TrackerService {
    /// Empty tracker with no notification sinks attached.
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            ledger: ScoreLedger::new(),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Attach a notification sink for lifecycle events.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.dispatcher.add_sink(sink);
    }

    /// Validate and append a goal. Returns the new goal's 0-based index;
    /// on failure nothing is appended.
    pub fn create_goal(&mut self, spec: GoalSpec) -> Result<usize, TrackerError> {
        let goal = spec.build()?;
        if goal.name().contains(codec::SEPARATOR) {
            return Err(TrackerError::InvalidName(goal.name().to_string()));
        }

        let index = self.goals.len();
        tracing::debug!(index, variant = goal.variant().tag(), "goal created");
        self.dispatcher
            .dispatch(&TrackerEvent::goal_added(index, goal.variant(), goal.name()));
        self.goals.push(goal);
        Ok(index)
    }

    /// Record an accomplishment event against the goal at `index` (0-based)
    /// and award the points that call earned, which is 0 for an
    /// already-complete goal. Out-of-range indices mutate nothing.
    pub fn record_event(&mut self, index: usize) -> Result<EventOutcome, TrackerError> {
        let len = self.goals.len();
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(TrackerError::IndexOutOfRange { index, len })?;

        let level_before = self.ledger.level();
        let points_earned = goal.record_event();
        let name = goal.name().to_string();
        self.ledger.award(points_earned);
        let score = self.ledger.score();

        tracing::debug!(index, points_earned, total = score.total, "event recorded");
        self.dispatcher
            .dispatch(&TrackerEvent::event_recorded(index, &name, points_earned, score));
        if score.level > level_before {
            self.dispatcher.dispatch(&TrackerEvent::level_up(score));
        }

        Ok(EventOutcome {
            points_earned,
            score,
        })
    }

    /// Lazy projection of the collection: `(index, progress, name)` in
    /// creation order. Restartable; never mutates.
    pub fn list(&self) -> impl Iterator<Item = (usize, String, &str)> + '_ {
        self.goals
            .iter()
            .enumerate()
            .map(|(i, g)| (i, g.progress(), g.name()))
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Current total and level.
    pub fn score(&self) -> Score {
        self.ledger.score()
    }

    /// Write the session to the save file. In-memory state is untouched
    /// whether or not the write succeeds.
    pub fn save(&self, file: &SaveFile) -> Result<(), TrackerError> {
        let text = codec::encode(&self.ledger, &self.goals);
        file.write(&text)?;

        tracing::info!(
            path = %file.path().display(),
            goals = self.goals.len(),
            "session saved"
        );
        self.dispatcher
            .dispatch(&TrackerEvent::session_saved(self.goals.len(), self.ledger.total()));
        Ok(())
    }

    /// Replace the session with the save file's contents. Returns `false`
    /// when no save file exists yet, leaving the fresh session in place.
    ///
    /// The decode is all-or-nothing: on a corrupt document or I/O failure
    /// the current collection and ledger stay exactly as they were.
    pub fn load(&mut self, file: &SaveFile) -> Result<bool, TrackerError> {
        let text = match file.read()? {
            Some(text) => text,
            None => return Ok(false),
        };
        let (ledger, goals) = codec::decode(&text)?;

        tracing::info!(
            path = %file.path().display(),
            goals = goals.len(),
            total = ledger.total(),
            "session loaded"
        );
        self.dispatcher
            .dispatch(&TrackerEvent::session_loaded(goals.len(), ledger.total()));
        self.ledger = ledger;
        self.goals = goals;
        Ok(true)
    }
}

impl Default for TrackerService {
    fn default() -> Self {
        Self::new()
    }
}
