//! Coverage band totals.
//!
//! Summarizes a band sequence into hours per coverage kind.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Hours per kind | Sum of band durations of that kind |
//! | Total | Sum of all band durations |
//! | Coverage ratio | (working + double coverage) / total |
//! | Band count | Number of runs |

use serde::{Deserialize, Serialize};

use crate::models::{CoverageBand, CoverageKind};

/// Hour totals of one band sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub working_hours: f64,
    pub zero_coverage_hours: f64,
    pub double_coverage_hours: f64,
    pub other_shift_hours: f64,
    pub days_off_hours: f64,
    /// Working plus double coverage.
    pub on_duty_hours: f64,
    /// Sum of all band durations.
    pub total_hours: f64,
    pub band_count: usize,
}

impl CoverageSummary {
    /// Totals a band sequence.
    pub fn calculate(bands: &[CoverageBand]) -> Self {
        let mut summary = Self {
            band_count: bands.len(),
            ..Self::default()
        };
        for band in bands {
            let hours = band.duration().max(0.0);
            *summary.slot_mut(band.kind) += hours;
            if band.kind.is_on_duty() {
                summary.on_duty_hours += hours;
            }
            summary.total_hours += hours;
        }
        summary
    }

    /// Total hours of one kind.
    pub fn hours(&self, kind: CoverageKind) -> f64 {
        match kind {
            CoverageKind::Working => self.working_hours,
            CoverageKind::ZeroCoverage => self.zero_coverage_hours,
            CoverageKind::DoubleCoverage => self.double_coverage_hours,
            CoverageKind::OtherShift => self.other_shift_hours,
            CoverageKind::DaysOff => self.days_off_hours,
        }
    }

    /// Fraction of the horizon on duty (0.0..1.0). Zero for an empty sequence.
    pub fn coverage_ratio(&self) -> f64 {
        if self.total_hours <= 0.0 {
            return 0.0;
        }
        self.on_duty_hours / self.total_hours
    }

    fn slot_mut(&mut self, kind: CoverageKind) -> &mut f64 {
        match kind {
            CoverageKind::Working => &mut self.working_hours,
            CoverageKind::ZeroCoverage => &mut self.zero_coverage_hours,
            CoverageKind::DoubleCoverage => &mut self.double_coverage_hours,
            CoverageKind::OtherShift => &mut self.other_shift_hours,
            CoverageKind::DaysOff => &mut self.days_off_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::compute_bands;
    use crate::models::{ShiftSchedule, ShiftSlot};

    #[test]
    fn test_summary_single_shift_week() {
        let s = ShiftSchedule::new(5, 2)
            .with_start_hour(8.0)
            .with_crew_rest(14.0);
        let bands = compute_bands(&s, 0, ShiftSlot::First, 168.0);
        let summary = CoverageSummary::calculate(&bands);

        assert!((summary.working_hours - 50.0).abs() < 1e-10);
        assert!((summary.other_shift_hours - 70.0).abs() < 1e-10);
        assert!((summary.days_off_hours - 48.0).abs() < 1e-10);
        assert_eq!(summary.zero_coverage_hours, 0.0);
        assert!((summary.total_hours - 168.0).abs() < 1e-10);
        assert_eq!(summary.band_count, 12);
        assert!((summary.coverage_ratio() - 50.0 / 168.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_hours_by_kind() {
        let bands = vec![
            CoverageBand::new(0.0, 2.0, CoverageKind::DoubleCoverage),
            CoverageBand::new(2.0, 3.0, CoverageKind::ZeroCoverage),
            CoverageBand::new(3.0, 7.0, CoverageKind::Working),
        ];
        let summary = CoverageSummary::calculate(&bands);
        assert_eq!(summary.hours(CoverageKind::DoubleCoverage), 2.0);
        assert_eq!(summary.hours(CoverageKind::ZeroCoverage), 1.0);
        assert_eq!(summary.hours(CoverageKind::Working), 4.0);
        assert_eq!(summary.on_duty_hours, 6.0);
        assert!((summary.coverage_ratio() - 6.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let summary = CoverageSummary::calculate(&[]);
        assert_eq!(summary.total_hours, 0.0);
        assert_eq!(summary.band_count, 0);
        assert_eq!(summary.coverage_ratio(), 0.0);
    }
}
