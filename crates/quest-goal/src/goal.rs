// goal.rs — Goal: a trackable objective with per-variant scoring semantics.
//
// A Goal pairs the attributes every variant shares (name, description,
// base points) with a GoalKind carrying the variant's progress state.
// The variant is chosen at construction and never changes:
//
//   Simple    — one-shot; the first recorded event completes it
//   Eternal   — recurring habit; never completes, every event scores
//   Checklist — counted; the completing event also earns a one-time bonus
//
// record_event() returns the points earned by that specific call (0 once
// a terminal variant has completed). Callers add that return value to the
// ledger, never the base_points() constant, so a completed goal cannot be
// double-scored.

use std::fmt;

use crate::error::GoalError;

/// The closed set of goal behaviors.
///
/// The canonical names double as the record tags in the save format, so
/// they are spelled exactly the way they are written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Simple,
    Eternal,
    Checklist,
}

impl Variant {
    /// Canonical tag, as written to the save format.
    pub fn tag(&self) -> &'static str {
        match self {
            Variant::Simple => "SimpleGoal",
            Variant::Eternal => "EternalGoal",
            Variant::Checklist => "ChecklistGoal",
        }
    }

    /// Parse a save-format tag. Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "SimpleGoal" => Some(Variant::Simple),
            "EternalGoal" => Some(Variant::Eternal),
            "ChecklistGoal" => Some(Variant::Checklist),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Per-variant progress state.
///
/// Completion for Simple and Checklist is an explicit flag rather than a
/// derived comparison: a goal reloaded from a save record comes back with
/// a zero checklist target but must still be incomplete until its next
/// recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GoalKind {
    Simple {
        complete: bool,
    },
    Eternal,
    Checklist {
        target_count: i64,
        current_count: i64,
        bonus_points: i64,
        complete: bool,
    },
}

/// A trackable objective.
///
/// Progress state is private; all mutation goes through [`Goal::record_event`],
/// which keeps the completion flags monotone and the checklist count capped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    name: String,
    description: String,
    base_points: i64,
    kind: GoalKind,
}

impl Goal {
    /// One-shot goal: the first recorded event completes it and earns the
    /// base points; later events are defined no-ops.
    pub fn simple(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
    ) -> Result<Self, GoalError> {
        Self::build(name, description, points, GoalKind::Simple { complete: false })
    }

    /// Recurring goal with no finish line: every recorded event earns the
    /// base points and the goal never completes.
    pub fn eternal(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
    ) -> Result<Self, GoalError> {
        Self::build(name, description, points, GoalKind::Eternal)
    }

    /// Counted goal: each recorded event earns the base points, and the
    /// event that reaches `target` earns the bonus on top and completes
    /// the goal.
    pub fn checklist(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
        target: i64,
        bonus: i64,
    ) -> Result<Self, GoalError> {
        if target < 1 {
            return Err(GoalError::InvalidTarget(target));
        }
        if bonus < 0 {
            return Err(GoalError::NegativeBonus(bonus));
        }
        Self::build(
            name,
            description,
            points,
            GoalKind::Checklist {
                target_count: target,
                current_count: 0,
                bonus_points: bonus,
                complete: false,
            },
        )
    }

    /// Rebuild a goal from a save record.
    ///
    /// The save format keeps only the variant tag, name, and base points,
    /// so the description comes back empty and a Checklist goal comes back
    /// with a zero target and no bonus: its next recorded event completes
    /// it for base points alone. That lossiness is the save format's
    /// contract, not something to repair here.
    pub fn restored(
        variant: Variant,
        name: impl Into<String>,
        points: i64,
    ) -> Result<Self, GoalError> {
        let kind = match variant {
            Variant::Simple => GoalKind::Simple { complete: false },
            Variant::Eternal => GoalKind::Eternal,
            Variant::Checklist => GoalKind::Checklist {
                target_count: 0,
                current_count: 0,
                bonus_points: 0,
                complete: false,
            },
        };
        Self::build(name, "", points, kind)
    }

    fn build(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
        kind: GoalKind,
    ) -> Result<Self, GoalError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GoalError::EmptyName);
        }
        if points < 0 {
            return Err(GoalError::NegativePoints(points));
        }
        Ok(Self {
            name,
            description: description.into(),
            base_points: points,
            kind,
        })
    }

    /// Record one accomplishment event against this goal.
    ///
    /// Returns the points earned by this call. A Simple or Checklist goal
    /// that has already completed earns nothing and does not change state.
    pub fn record_event(&mut self) -> i64 {
        match &mut self.kind {
            GoalKind::Simple { complete } => {
                if *complete {
                    return 0;
                }
                *complete = true;
                self.base_points
            }
            GoalKind::Eternal => self.base_points,
            GoalKind::Checklist {
                target_count,
                current_count,
                bonus_points,
                complete,
            } => {
                if *complete {
                    return 0;
                }
                *current_count += 1;
                if *current_count >= *target_count {
                    *complete = true;
                    self.base_points + *bonus_points
                } else {
                    self.base_points
                }
            }
        }
    }

    /// Human-readable status line. Pure projection, no side effects.
    pub fn progress(&self) -> String {
        let marker = if self.is_complete() { "[X]" } else { "[ ]" };
        match &self.kind {
            GoalKind::Checklist {
                target_count,
                current_count,
                ..
            } => format!("{} Completed {}/{} times", marker, current_count, target_count),
            _ => marker.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The configured per-event award. Constant for the goal's lifetime;
    /// the points actually earned by a call come from [`Goal::record_event`].
    pub fn base_points(&self) -> i64 {
        self.base_points
    }

    pub fn is_complete(&self) -> bool {
        match &self.kind {
            GoalKind::Simple { complete } => *complete,
            GoalKind::Eternal => false,
            GoalKind::Checklist { complete, .. } => *complete,
        }
    }

    pub fn variant(&self) -> Variant {
        match self.kind {
            GoalKind::Simple { .. } => Variant::Simple,
            GoalKind::Eternal => Variant::Eternal,
            GoalKind::Checklist { .. } => Variant::Checklist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_goal_completes_on_first_event() {
        let mut goal = Goal::simple("Read a book", "cover to cover", 5).unwrap();
        assert!(!goal.is_complete());

        assert_eq!(goal.record_event(), 5);
        assert!(goal.is_complete());
    }

    #[test]
    fn simple_goal_second_event_earns_nothing() {
        let mut goal = Goal::simple("Read a book", "", 5).unwrap();
        goal.record_event();

        assert_eq!(goal.record_event(), 0);
        assert!(goal.is_complete());
    }

    #[test]
    fn eternal_goal_scores_every_event_and_never_completes() {
        let mut goal = Goal::eternal("Exercise", "30 minutes", 10).unwrap();

        for _ in 0..25 {
            assert_eq!(goal.record_event(), 10);
        }
        assert!(!goal.is_complete());
    }

    #[test]
    fn checklist_goal_bonus_on_completing_event_then_noop() {
        let mut goal = Goal::checklist("Attend class", "", 10, 3, 50).unwrap();

        assert_eq!(goal.record_event(), 10);
        assert!(!goal.is_complete());
        assert_eq!(goal.record_event(), 10);
        assert!(!goal.is_complete());

        // Third event reaches the target: base plus bonus, and completion.
        assert_eq!(goal.record_event(), 60);
        assert!(goal.is_complete());

        // Fourth event is a no-op.
        assert_eq!(goal.record_event(), 0);
        assert_eq!(goal.progress(), "[X] Completed 3/3 times");
    }

    #[test]
    fn base_points_stays_constant_after_completion() {
        let mut goal = Goal::checklist("Attend class", "", 10, 1, 50).unwrap();
        goal.record_event();
        assert_eq!(goal.base_points(), 10);
    }

    #[test]
    fn progress_markers() {
        let mut simple = Goal::simple("One", "", 1).unwrap();
        assert_eq!(simple.progress(), "[ ]");
        simple.record_event();
        assert_eq!(simple.progress(), "[X]");

        let eternal = Goal::eternal("Two", "", 1).unwrap();
        assert_eq!(eternal.progress(), "[ ]");

        let mut checklist = Goal::checklist("Three", "", 1, 5, 0).unwrap();
        assert_eq!(checklist.progress(), "[ ] Completed 0/5 times");
        checklist.record_event();
        checklist.record_event();
        assert_eq!(checklist.progress(), "[ ] Completed 2/5 times");
    }

    #[test]
    fn restored_checklist_is_incomplete_until_next_event() {
        let mut goal = Goal::restored(Variant::Checklist, "Attend class", 5).unwrap();
        assert!(!goal.is_complete());
        assert_eq!(goal.progress(), "[ ] Completed 0/0 times");

        // The zero target makes the next event the completing one, with a
        // zero bonus on top of the base points.
        assert_eq!(goal.record_event(), 5);
        assert!(goal.is_complete());
        assert_eq!(goal.record_event(), 0);
    }

    #[test]
    fn restored_simple_goal_loses_completion() {
        let mut goal = Goal::restored(Variant::Simple, "Read a book", 5).unwrap();
        assert!(!goal.is_complete());
        assert_eq!(goal.record_event(), 5);
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(Goal::simple("", "", 5), Err(GoalError::EmptyName));
        assert_eq!(Goal::eternal("   ", "", 5), Err(GoalError::EmptyName));
    }

    #[test]
    fn negative_points_rejected() {
        assert_eq!(Goal::simple("G", "", -1), Err(GoalError::NegativePoints(-1)));
        assert_eq!(
            Goal::restored(Variant::Eternal, "G", -3),
            Err(GoalError::NegativePoints(-3))
        );
    }

    #[test]
    fn checklist_validation() {
        assert_eq!(
            Goal::checklist("G", "", 5, 0, 10),
            Err(GoalError::InvalidTarget(0))
        );
        assert_eq!(
            Goal::checklist("G", "", 5, -2, 10),
            Err(GoalError::InvalidTarget(-2))
        );
        assert_eq!(
            Goal::checklist("G", "", 5, 3, -10),
            Err(GoalError::NegativeBonus(-10))
        );
    }

    #[test]
    fn variant_tags_round_trip() {
        for variant in [Variant::Simple, Variant::Eternal, Variant::Checklist] {
            assert_eq!(Variant::from_tag(variant.tag()), Some(variant));
        }
        assert_eq!(Variant::from_tag("MysteryGoal"), None);
    }
}
