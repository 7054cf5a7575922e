//! Coverage band model.

use serde::{Deserialize, Serialize};

use super::TimeInterval;

/// Coverage status of one crew member over a stretch of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageKind {
    /// On duty, sole coverage.
    Working,
    /// Off duty while neither split shift is covering.
    ZeroCoverage,
    /// On duty while the other shift is also on duty.
    DoubleCoverage,
    /// Off duty: crew rest, or the other shift is covering.
    OtherShift,
    /// Rest days of the on/off cycle.
    DaysOff,
}

impl CoverageKind {
    /// Whether the crew member is on duty.
    pub fn is_on_duty(&self) -> bool {
        matches!(self, Self::Working | Self::DoubleCoverage)
    }
}

/// A maximal time range with constant coverage status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageBand {
    /// Band start (hours, inclusive).
    pub start: f64,
    /// Band end (hours, exclusive).
    pub end: f64,
    pub kind: CoverageKind,
}

impl CoverageBand {
    pub fn new(start: f64, end: f64, kind: CoverageKind) -> Self {
        Self { start, end, kind }
    }

    /// Band length (hours).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    #[inline]
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }
}
