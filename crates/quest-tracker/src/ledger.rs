// ledger.rs — ScoreLedger: the accumulating score and its derived level.

/// Points required to advance one level.
pub const LEVEL_STEP: i64 = 1000;

/// A point-in-time score projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub total: i64,
    pub level: i64,
}

/// The running score for a session.
///
/// The total only ever grows: goals report 0 earned once complete, so no
/// code path subtracts or re-awards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    total: i64,
}

impl ScoreLedger {
    /// Fresh ledger with a zero total.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger resuming from a previously saved total.
    pub fn with_total(total: i64) -> Self {
        Self { total }
    }

    /// Add earned points to the total.
    pub fn award(&mut self, points: i64) {
        self.total += points;
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// One level per [`LEVEL_STEP`] points, rounded down.
    pub fn level(&self) -> i64 {
        self.total / LEVEL_STEP
    }

    pub fn score(&self) -> Score {
        Score {
            total: self.total,
            level: self.level(),
        }
    }
}
