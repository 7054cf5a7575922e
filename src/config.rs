//! Dashboard configuration loading.
//!
//! The dashboard hands the core a resolved configuration: horizon, shift
//! schedule, crew size, and an optional lane cap. Loading parses the JSON
//! (camelCase keys, every field optional) and validates the result, so
//! the algorithms only ever see values a form would accept.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::lanes::LaneAssigner;
use crate::models::ShiftSchedule;
use crate::validation::{
    merge_results, validate_horizon, validate_schedule, ValidationError, ValidationErrorKind,
    ValidationResult,
};

/// Default horizon: one week.
pub const DEFAULT_HORIZON_HOURS: f64 = 168.0;

/// Errors that can occur while loading configuration or timeline data.
///
/// Shared by [`DashboardConfig`] loading and
/// [`parse_timeline`](crate::timeline::parse_timeline).
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading the file failed.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON did not match the expected shape.
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The values parsed but failed validation.
    #[error("Invalid configuration: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Resolved dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Simulation horizon (hours).
    pub horizon_hours: f64,
    /// Crew work schedule.
    pub schedule: ShiftSchedule,
    /// Number of crew members on the roster.
    pub crew_count: u32,
    /// Lane cap for timeline views. `None` = unlimited.
    pub max_lanes: Option<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            horizon_hours: DEFAULT_HORIZON_HOURS,
            schedule: ShiftSchedule::default(),
            crew_count: 1,
            max_lanes: None,
        }
    }
}

impl DashboardConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(LoadError::Invalid)?;
        debug!(
            horizon_hours = config.horizon_hours,
            crew_count = config.crew_count,
            "loaded dashboard config"
        );
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading dashboard config");
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks horizon, schedule, and lane cap.
    pub fn validate(&self) -> ValidationResult {
        let lanes = match self.max_lanes {
            Some(0) => Err(vec![ValidationError {
                kind: ValidationErrorKind::OutOfRange,
                message: "maxLanes must be at least 1".to_string(),
            }]),
            _ => Ok(()),
        };
        merge_results([
            validate_horizon(self.horizon_hours),
            validate_schedule(&self.schedule),
            lanes,
        ])
    }

    /// Lane assigner honoring the configured cap.
    pub fn lane_assigner(&self) -> LaneAssigner {
        match self.max_lanes {
            Some(cap) => LaneAssigner::new().with_max_lanes(cap),
            None => LaneAssigner::new(),
        }
    }
}
