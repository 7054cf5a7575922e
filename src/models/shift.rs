//! Cyclic personnel work-schedule model.
//!
//! A crew works `days_on` days then rests `days_off` days, repeating.
//! Within a working day each crew member is on duty for
//! `24 - crew_rest_hours` hours starting at their shift's start hour.
//! With a shift split, a second shift starts 12 hours after the first so
//! two crew members can cover one day between them.
//!
//! # Stagger
//! Crew member `i` has its cycle shifted by `stagger_days_off * i` days so
//! that rest days do not all coincide.

use serde::{Deserialize, Serialize};

/// Hours per day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Offset of shift 2 from shift 1 (hours).
pub const SHIFT_SPLIT_OFFSET_HOURS: f64 = 12.0;

/// Which half-day shift a crew member works.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftSlot {
    /// Starts at the schedule's daily start hour.
    #[default]
    First,
    /// Starts 12 hours after the first shift.
    Second,
}

impl ShiftSlot {
    /// Maps the dashboard's `1 | 2` shift number. Anything but 2 is `First`.
    pub fn from_number(n: u8) -> Self {
        if n == 2 {
            Self::Second
        } else {
            Self::First
        }
    }

    /// The dashboard's shift number.
    pub fn number(&self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    /// The other slot.
    pub fn other(&self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Cyclic work-schedule configuration.
///
/// Values are taken as given; range checks belong to
/// [`validate_schedule`](crate::validation::validate_schedule). Derived
/// quantities clamp out-of-range values so the band computation stays
/// total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftSchedule {
    /// Consecutive working days per cycle.
    pub days_on: u32,
    /// Consecutive rest days per cycle.
    pub days_off: u32,
    /// Start hour of shift 1, in [0, 24).
    pub daily_start_hour: f64,
    /// Whether the day is split between two shifts.
    pub shift_split_enabled: bool,
    /// Percentage of the crew on shift 1 when split, in [0, 100].
    pub shift_split_percent: f64,
    /// Per-person cycle offset (days).
    pub stagger_days_off: f64,
    /// Daily rest hours, in [0, 24].
    pub crew_rest_hours: f64,
}

impl Default for ShiftSchedule {
    fn default() -> Self {
        Self {
            days_on: 5,
            days_off: 2,
            daily_start_hour: 6.0,
            shift_split_enabled: false,
            shift_split_percent: 50.0,
            stagger_days_off: 0.0,
            crew_rest_hours: 12.0,
        }
    }
}

impl ShiftSchedule {
    /// Creates a schedule with the given on/off cycle and defaults elsewhere.
    pub fn new(days_on: u32, days_off: u32) -> Self {
        Self {
            days_on,
            days_off,
            ..Self::default()
        }
    }

    /// Sets the daily start hour of shift 1.
    pub fn with_start_hour(mut self, hour: f64) -> Self {
        self.daily_start_hour = hour;
        self
    }

    /// Sets the daily rest hours.
    pub fn with_crew_rest(mut self, hours: f64) -> Self {
        self.crew_rest_hours = hours;
        self
    }

    /// Enables the two-shift split with `percent` of the crew on shift 1.
    pub fn with_shift_split(mut self, percent: f64) -> Self {
        self.shift_split_enabled = true;
        self.shift_split_percent = percent;
        self
    }

    /// Sets the per-person stagger (days).
    pub fn with_stagger(mut self, days: f64) -> Self {
        self.stagger_days_off = days;
        self
    }

    /// On-duty hours per working day, clamped to [0, 24].
    #[inline]
    pub fn working_hours_per_day(&self) -> f64 {
        (HOURS_PER_DAY - self.crew_rest_hours).clamp(0.0, HOURS_PER_DAY)
    }

    /// Shift 1 start hour, normalized to [0, 24).
    #[inline]
    pub fn shift1_start_hour(&self) -> f64 {
        wrap_hour(self.daily_start_hour)
    }

    /// Shift 2 start hour: 12 hours after shift 1, modulo 24.
    #[inline]
    pub fn shift2_start_hour(&self) -> f64 {
        wrap_hour(self.daily_start_hour + SHIFT_SPLIT_OFFSET_HOURS)
    }

    /// Start hour of the given slot.
    pub fn shift_start(&self, slot: ShiftSlot) -> f64 {
        match slot {
            ShiftSlot::First => self.shift1_start_hour(),
            ShiftSlot::Second => self.shift2_start_hour(),
        }
    }

    /// Length of one on/off cycle (hours).
    #[inline]
    pub fn cycle_hours(&self) -> f64 {
        (f64::from(self.days_on) + f64::from(self.days_off)) * HOURS_PER_DAY
    }

    /// Hours into the cycle at which days off begin.
    #[inline]
    pub fn days_on_hours(&self) -> f64 {
        f64::from(self.days_on) * HOURS_PER_DAY
    }

    /// Cycle offset of crew member `crew_index` (hours).
    #[inline]
    pub fn stagger_offset_hours(&self, crew_index: u32) -> f64 {
        self.stagger_days_off.max(0.0) * f64::from(crew_index) * HOURS_PER_DAY
    }

    /// Whether a shift starting at `shift_start` is on duty at `hour_of_day`.
    ///
    /// Containment in `[shift_start, shift_start + working_hours)` taken
    /// modulo 24, so shifts may wrap past midnight.
    pub fn is_on_duty(&self, shift_start: f64, hour_of_day: f64) -> bool {
        let offset = (hour_of_day - shift_start).rem_euclid(HOURS_PER_DAY);
        offset < self.working_hours_per_day()
    }

    /// Shift slot for crew member `crew_index` out of `crew_count`.
    ///
    /// With the split enabled, the first `round(crew_count * percent / 100)`
    /// members work shift 1 and the rest work shift 2. Without a split
    /// everyone works shift 1.
    pub fn shift_for_crew(&self, crew_index: u32, crew_count: u32) -> ShiftSlot {
        if !self.shift_split_enabled {
            return ShiftSlot::First;
        }
        let percent = self.shift_split_percent.clamp(0.0, 100.0);
        let first_count = (f64::from(crew_count) * percent / 100.0).round() as u32;
        if crew_index < first_count {
            ShiftSlot::First
        } else {
            ShiftSlot::Second
        }
    }
}

/// Normalizes an hour value into [0, 24).
fn wrap_hour(hour: f64) -> f64 {
    let h = hour.rem_euclid(HOURS_PER_DAY);
    // rem_euclid may round up to the modulus itself
    if h >= HOURS_PER_DAY {
        0.0
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = ShiftSchedule::default();
        assert_eq!(s.days_on, 5);
        assert_eq!(s.days_off, 2);
        assert!(!s.shift_split_enabled);
        assert!((s.working_hours_per_day() - 12.0).abs() < 1e-10);
        assert!((s.cycle_hours() - 168.0).abs() < 1e-10);
    }

    #[test]
    fn test_shift_starts_wrap() {
        let s = ShiftSchedule::new(5, 2).with_start_hour(20.0);
        assert!((s.shift1_start_hour() - 20.0).abs() < 1e-10);
        assert!((s.shift2_start_hour() - 8.0).abs() < 1e-10);
        assert!((s.shift_start(ShiftSlot::Second) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_working_hours_clamped() {
        let s = ShiftSchedule::default().with_crew_rest(30.0);
        assert_eq!(s.working_hours_per_day(), 0.0);
        let s = ShiftSchedule::default().with_crew_rest(-2.0);
        assert_eq!(s.working_hours_per_day(), 24.0);
    }

    #[test]
    fn test_on_duty_wraps_midnight() {
        // 10h working from 20:00 → 20..24 and 0..6
        let s = ShiftSchedule::default().with_crew_rest(14.0);
        assert!(s.is_on_duty(20.0, 20.0));
        assert!(s.is_on_duty(20.0, 23.0));
        assert!(s.is_on_duty(20.0, 0.0));
        assert!(s.is_on_duty(20.0, 5.0));
        assert!(!s.is_on_duty(20.0, 6.0)); // exclusive end
        assert!(!s.is_on_duty(20.0, 12.0));
    }

    #[test]
    fn test_shift_for_crew_split() {
        let s = ShiftSchedule::default().with_shift_split(50.0);
        let slots: Vec<_> = (0..4).map(|i| s.shift_for_crew(i, 4)).collect();
        assert_eq!(
            slots,
            vec![ShiftSlot::First, ShiftSlot::First, ShiftSlot::Second, ShiftSlot::Second]
        );

        let all_first = ShiftSchedule::default().with_shift_split(100.0);
        assert_eq!(all_first.shift_for_crew(3, 4), ShiftSlot::First);
    }

    #[test]
    fn test_shift_for_crew_no_split() {
        let s = ShiftSchedule::default();
        assert!((0..6).all(|i| s.shift_for_crew(i, 6) == ShiftSlot::First));
    }

    #[test]
    fn test_slot_numbers() {
        assert_eq!(ShiftSlot::from_number(2), ShiftSlot::Second);
        assert_eq!(ShiftSlot::from_number(1), ShiftSlot::First);
        assert_eq!(ShiftSlot::from_number(9), ShiftSlot::First);
        assert_eq!(ShiftSlot::Second.number(), 2);
        assert_eq!(ShiftSlot::First.other(), ShiftSlot::Second);
    }

    #[test]
    fn test_camel_case_json() {
        let json = r#"{"daysOn":4,"daysOff":3,"dailyStartHour":7,"shiftSplitEnabled":true,"crewRestHours":10}"#;
        let s: ShiftSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(s.days_on, 4);
        assert_eq!(s.days_off, 3);
        assert!(s.shift_split_enabled);
        // Missing fields fall back to defaults
        assert!((s.shift_split_percent - 50.0).abs() < 1e-10);
        assert!((s.working_hours_per_day() - 14.0).abs() < 1e-10);
    }
}
