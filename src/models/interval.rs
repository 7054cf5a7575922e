//! Time interval model.
//!
//! # Time Model
//! All times are floating-point hours relative to the simulation start
//! (t=0). They are not calendar dates; the consumer maps hour 0 to a wall
//! clock if it needs one.

use serde::{Deserialize, Serialize};

/// A time interval [start, end) in hours.
///
/// Half-open interval: includes start, excludes end. Touching intervals
/// (`a.end == b.start`) do not overlap and may share a lane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeInterval {
    /// Interval start (hours, inclusive).
    pub start: f64,
    /// Interval end (hours, exclusive).
    pub end: f64,
}

impl TimeInterval {
    /// Creates a new interval.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Duration of this interval (hours).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether a time point falls within this interval.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t < self.end
    }

    /// Whether two intervals overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the interval with `end < start` collapsed to zero width.
    ///
    /// Malformed intervals are still placed on a timeline; they just
    /// occupy no time.
    pub fn normalized(&self) -> Self {
        if self.end < self.start {
            Self::new(self.start, self.start)
        } else {
            *self
        }
    }

    /// Smallest interval covering both.
    pub fn hull(&self, other: &Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        let w = TimeInterval::new(1.0, 3.5);
        assert!((w.duration() - 2.5).abs() < 1e-10);
        assert!(w.contains(1.0));
        assert!(w.contains(3.49));
        assert!(!w.contains(3.5)); // exclusive end
        assert!(!w.contains(0.5));
    }

    #[test]
    fn test_interval_overlap() {
        let a = TimeInterval::new(0.0, 2.0);
        let b = TimeInterval::new(1.0, 3.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeInterval::new(2.0, 4.0); // touching
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_zero_width_never_overlaps_at_boundary() {
        let a = TimeInterval::new(0.0, 2.0);
        let p = TimeInterval::new(2.0, 2.0);
        assert!(!a.overlaps(&p));
    }

    #[test]
    fn test_normalized() {
        let bad = TimeInterval::new(5.0, 3.0).normalized();
        assert_eq!(bad, TimeInterval::new(5.0, 5.0));
        assert_eq!(bad.duration(), 0.0);

        let ok = TimeInterval::new(1.0, 2.0);
        assert_eq!(ok.normalized(), ok);
    }

    #[test]
    fn test_hull() {
        let a = TimeInterval::new(0.0, 1.0);
        let b = TimeInterval::new(3.0, 4.0);
        assert_eq!(a.hull(&b), TimeInterval::new(0.0, 4.0));
    }
}
