//! Coverage band generator.
//!
//! # Algorithm
//!
//! Scans the horizon in one-hour slots. Each slot is first placed in the
//! crew member's on/off cycle (offset by the shift 1 start hour and the
//! member's stagger). A slot inside the days-off block emits the whole
//! remainder of the block at once and jumps past it. Other slots are
//! classified by which shifts are on duty at that hour of day. Slots are
//! merged into the previous band as they are produced.
//!
//! | own shift | other shift | split | kind |
//! |-----------|-------------|-------|------|
//! | on | on | yes | `DoubleCoverage` |
//! | on | off | - | `Working` |
//! | off | off | yes | `ZeroCoverage` |
//! | off | on | yes | `OtherShift` |
//! | off | - | no | `OtherShift` (crew rest) |
//!
//! # Complexity
//! O(horizon) per crew member.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CoverageBand, CoverageKind, ShiftSchedule, ShiftSlot, HOURS_PER_DAY};

/// Width of one scan slot (hours).
const SLOT_HOURS: f64 = 1.0;

/// Coverage bands of one roster member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewCoverage {
    pub crew_index: u32,
    pub shift: ShiftSlot,
    pub bands: Vec<CoverageBand>,
}

/// Computes coverage bands for crew members of one schedule.
///
/// # Example
///
/// ```
/// use mission_timeline::coverage::CoverageBandGenerator;
/// use mission_timeline::models::{CoverageKind, ShiftSchedule, ShiftSlot};
///
/// let schedule = ShiftSchedule::new(5, 2).with_start_hour(8.0).with_crew_rest(14.0);
/// let bands = CoverageBandGenerator::new(&schedule).bands_for(0, ShiftSlot::First, 168.0);
///
/// assert_eq!(bands.first().unwrap().start, 0.0);
/// assert_eq!(bands.last().unwrap().end, 168.0);
/// assert!(bands.iter().all(|b| b.kind != CoverageKind::ZeroCoverage));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoverageBandGenerator<'a> {
    schedule: &'a ShiftSchedule,
}

impl<'a> CoverageBandGenerator<'a> {
    pub fn new(schedule: &'a ShiftSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule bands are computed from.
    pub fn schedule(&self) -> &ShiftSchedule {
        self.schedule
    }

    /// Bands for one crew member. See [`compute_bands`].
    pub fn bands_for(
        &self,
        crew_index: u32,
        assigned_shift: ShiftSlot,
        horizon_hours: f64,
    ) -> Vec<CoverageBand> {
        compute_bands(self.schedule, crew_index, assigned_shift, horizon_hours)
    }

    /// Bands for every member of a crew of `crew_count`.
    ///
    /// Shift slots follow [`ShiftSchedule::shift_for_crew`].
    pub fn roster(&self, crew_count: u32, horizon_hours: f64) -> Vec<CrewCoverage> {
        (0..crew_count)
            .map(|crew_index| {
                let shift = self.schedule.shift_for_crew(crew_index, crew_count);
                CrewCoverage {
                    crew_index,
                    shift,
                    bands: self.bands_for(crew_index, shift, horizon_hours),
                }
            })
            .collect()
    }
}

/// Run-length accumulator for one band sequence.
#[derive(Debug, Default)]
struct BandBuilder {
    bands: Vec<CoverageBand>,
}

impl BandBuilder {
    fn push(&mut self, start: f64, end: f64, kind: CoverageKind) {
        if let Some(last) = self.bands.last_mut() {
            if last.kind == kind && last.end == start {
                last.end = end;
                return;
            }
        }
        self.bands.push(CoverageBand::new(start, end, kind));
    }

    fn finish(mut self, horizon_hours: f64) -> Vec<CoverageBand> {
        if let Some(last) = self.bands.last_mut() {
            last.end = last.end.min(horizon_hours);
        }
        self.bands
    }
}

/// Computes the coverage bands of one crew member over `[0, horizon_hours)`.
///
/// The result is contiguous, sorted, starts at 0, ends at `horizon_hours`,
/// and never has two adjacent bands of the same kind. A non-positive or
/// non-finite horizon yields no bands. The crew works the start hour of
/// `assigned_shift`; without a shift split the other shift is never active,
/// so off-duty hours are `OtherShift` rather than `ZeroCoverage`.
pub fn compute_bands(
    schedule: &ShiftSchedule,
    crew_index: u32,
    assigned_shift: ShiftSlot,
    horizon_hours: f64,
) -> Vec<CoverageBand> {
    if !horizon_hours.is_finite() || horizon_hours <= 0.0 {
        return Vec::new();
    }

    let split = schedule.shift_split_enabled;
    let own_start = schedule.shift_start(assigned_shift);
    let other_start = schedule.shift_start(assigned_shift.other());

    let cycle_hours = schedule.cycle_hours();
    let days_on_hours = schedule.days_on_hours();
    let has_days_off = schedule.days_off > 0 && cycle_hours > 0.0;
    let cycle_offset = schedule.stagger_offset_hours(crew_index) + schedule.shift1_start_hour();

    let mut builder = BandBuilder::default();
    let mut h = 0.0;
    while h < horizon_hours {
        if has_days_off {
            let pos = cycle_position(h - cycle_offset, cycle_hours);
            if pos >= days_on_hours {
                let mut end = h + (cycle_hours - pos);
                if end <= h {
                    end = h + SLOT_HOURS;
                }
                builder.push(h, end, CoverageKind::DaysOff);
                h = end;
                continue;
            }
        }

        let hour_of_day = h.rem_euclid(HOURS_PER_DAY);
        let own_on = schedule.is_on_duty(own_start, hour_of_day);
        let other_on = split && schedule.is_on_duty(other_start, hour_of_day);
        builder.push(h, h + SLOT_HOURS, classify(own_on, other_on, split));
        h += SLOT_HOURS;
    }

    let bands = builder.finish(horizon_hours);
    debug!(
        crew_index,
        shift = assigned_shift.number(),
        horizon_hours,
        bands = bands.len(),
        "computed coverage bands"
    );
    bands
}

/// Finds the band covering time `t`, if any.
pub fn band_at(bands: &[CoverageBand], t: f64) -> Option<&CoverageBand> {
    let idx = bands.partition_point(|b| b.end <= t);
    bands.get(idx).filter(|b| b.start <= t)
}

fn classify(own_on: bool, other_on: bool, split: bool) -> CoverageKind {
    match (own_on, other_on) {
        (true, true) => CoverageKind::DoubleCoverage,
        (true, false) => CoverageKind::Working,
        (false, false) if split => CoverageKind::ZeroCoverage,
        (false, _) => CoverageKind::OtherShift,
    }
}

/// Position within the cycle, always in [0, cycle_hours).
fn cycle_position(adjusted_hour: f64, cycle_hours: f64) -> f64 {
    let pos = adjusted_hour.rem_euclid(cycle_hours);
    // rem_euclid may round up to the modulus itself
    if pos >= cycle_hours {
        0.0
    } else {
        pos
    }
}
