//! Input validation for dashboard configuration.
//!
//! The packing and coverage algorithms accept any input and normalize
//! degenerate values themselves. These checks belong to the configuration
//! layer: they report values a form should reject before they reach the
//! algorithms. Detects:
//! - Schedule fields outside their documented ranges
//! - Non-finite numbers
//! - Events ending before they start
//! - Non-positive horizons and horizons beyond [`MAX_HORIZON_HOURS`]

use crate::models::{Event, ShiftSchedule, HOURS_PER_DAY};
use std::fmt;

/// Largest accepted horizon: ten 366-day years. Band generation scans the
/// horizon hour by hour.
pub const MAX_HORIZON_HOURS: f64 = 10.0 * 366.0 * HOURS_PER_DAY;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A value lies outside its allowed range.
    OutOfRange,
    /// A value is NaN or infinite.
    NonFinite,
    /// An event ends before it starts.
    InvalidInterval,
    /// The horizon is not a positive finite number of hours.
    InvalidHorizon,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a shift schedule.
///
/// Checks:
/// 1. All fractional fields are finite
/// 2. `daily_start_hour` in [0, 24)
/// 3. `shift_split_percent` in [0, 100]
/// 4. `stagger_days_off` >= 0
/// 5. `crew_rest_hours` in [0, 24]
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(schedule: &ShiftSchedule) -> ValidationResult {
    let mut errors = Vec::new();

    let fields = [
        ("dailyStartHour", schedule.daily_start_hour, 0.0, HOURS_PER_DAY, false),
        ("shiftSplitPercent", schedule.shift_split_percent, 0.0, 100.0, true),
        ("crewRestHours", schedule.crew_rest_hours, 0.0, HOURS_PER_DAY, true),
    ];
    for (name, value, min, max, max_inclusive) in fields {
        if !value.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFinite,
                format!("{name} must be a finite number"),
            ));
            continue;
        }
        let above = if max_inclusive { value > max } else { value >= max };
        if value < min || above {
            let close = if max_inclusive { ']' } else { ')' };
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("{name} = {value} is outside [{min}, {max}{close}"),
            ));
        }
    }

    if !schedule.stagger_days_off.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFinite,
            "staggerDaysOff must be a finite number",
        ));
    } else if schedule.stagger_days_off < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "staggerDaysOff = {} must not be negative",
                schedule.stagger_days_off
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a simulation horizon (hours).
pub fn validate_horizon(horizon_hours: f64) -> ValidationResult {
    if !horizon_hours.is_finite() || horizon_hours <= 0.0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidHorizon,
            format!("horizon {horizon_hours} must be a positive number of hours"),
        )]);
    }
    if horizon_hours > MAX_HORIZON_HOURS {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidHorizon,
            format!("horizon {horizon_hours} exceeds the maximum of {MAX_HORIZON_HOURS} hours"),
        )]);
    }
    Ok(())
}

/// Validates timeline events.
///
/// Checks every event has finite, non-negative bounds with `start <= end`.
pub fn validate_events(events: &[Event]) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, event) in events.iter().enumerate() {
        if !event.start.is_finite() || !event.end.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFinite,
                format!("Event {idx} ({}) has non-finite bounds", event.phase()),
            ));
            continue;
        }
        if event.start < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Event {idx} ({}) starts before t=0", event.phase()),
            ));
        }
        if event.end < event.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Event {idx} ({}) ends at {} before its start {}",
                    event.phase(),
                    event.end,
                    event.start
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Collects the errors of several checks into one result.
pub(crate) fn merge_results(results: impl IntoIterator<Item = ValidationResult>) -> ValidationResult {
    let errors: Vec<ValidationError> = results
        .into_iter()
        .filter_map(Result::err)
        .flatten()
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;

    #[test]
    fn test_valid_schedule() {
        let s = ShiftSchedule::new(5, 2).with_shift_split(60.0).with_stagger(1.0);
        assert!(validate_schedule(&s).is_ok());
    }

    #[test]
    fn test_start_hour_upper_bound_exclusive() {
        let s = ShiftSchedule::default().with_start_hour(24.0);
        let errors = validate_schedule(&s).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::OutOfRange);
        assert!(errors[0].message.contains("dailyStartHour"));
    }

    #[test]
    fn test_crew_rest_upper_bound_inclusive() {
        let s = ShiftSchedule::default().with_crew_rest(24.0);
        assert!(validate_schedule(&s).is_ok());

        let s = ShiftSchedule::default().with_crew_rest(25.0);
        assert!(validate_schedule(&s).is_err());
    }

    #[test]
    fn test_multiple_schedule_errors() {
        let mut s = ShiftSchedule::default()
            .with_shift_split(150.0)
            .with_stagger(-1.0);
        s.crew_rest_hours = f64::NAN;

        let errors = validate_schedule(&s).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonFinite));
        assert!(errors
            .iter()
            .any(|e| e.message.contains("staggerDaysOff")));
    }

    #[test]
    fn test_horizon() {
        assert!(validate_horizon(168.0).is_ok());
        assert!(validate_horizon(MAX_HORIZON_HOURS).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, MAX_HORIZON_HOURS + 1.0, 1e17] {
            let errors = validate_horizon(bad).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidHorizon);
        }
    }

    #[test]
    fn test_events() {
        let events = vec![
            Event::new(0.0, 1.0, Phase::Flight),
            Event::new(3.0, 2.0, Phase::Turnaround),
            Event::new(-1.0, 0.0, Phase::Preflight),
            Event::new(f64::NAN, 1.0, Phase::Mount),
        ];
        let errors = validate_events(&events).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidInterval && e.message.contains("turnaround")));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OutOfRange));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonFinite));
    }

    #[test]
    fn test_merge_results() {
        assert!(merge_results([Ok(()), Ok(())]).is_ok());
        let merged = merge_results([validate_horizon(0.0), Ok(()), validate_horizon(-2.0)]);
        assert_eq!(merged.unwrap_err().len(), 2);
    }
}
