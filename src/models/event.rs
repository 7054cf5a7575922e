//! Timeline event model.
//!
//! An event is one visual segment on a unit's timeline: a mission phase,
//! a duty block, or a zero-width rejection marker. Segments belonging to
//! the same mission share a `group_id` and are kept on one lane.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeInterval;

/// Identifier of a mission (or duty) whose segments must share a lane.
pub type GroupId = u64;

/// Mission phase carried by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Preflight,
    Mount,
    TransitIn,
    Flight,
    TransitOut,
    Postflight,
    Turnaround,
    /// Zero-width marker for a mission request that was turned down.
    Rejection,
}

impl Phase {
    /// Parses a backend segment name (`"preflight"`, `"transit_in"`, ...).
    ///
    /// Returns `None` for names this crate does not know.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "preflight" => Some(Self::Preflight),
            "mount" => Some(Self::Mount),
            "transit_in" | "transitin" => Some(Self::TransitIn),
            "flight" => Some(Self::Flight),
            "transit_out" | "transitout" => Some(Self::TransitOut),
            "postflight" => Some(Self::Postflight),
            "turnaround" => Some(Self::Turnaround),
            "rejection" => Some(Self::Rejection),
            _ => None,
        }
    }

    /// Backend name of this phase.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Preflight => "preflight",
            Self::Mount => "mount",
            Self::TransitIn => "transit_in",
            Self::Flight => "flight",
            Self::TransitOut => "transit_out",
            Self::Postflight => "postflight",
            Self::Turnaround => "turnaround",
            Self::Rejection => "rejection",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resource shortage that caused a mission rejection.
///
/// Serialized as the backend's reason string; unknown strings read as
/// `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RejectionReason {
    Aircraft,
    Pilot,
    /// Sensor operator (`"so"` on the wire).
    SensorOperator,
    Payload,
    Other,
}

impl RejectionReason {
    /// Parses a backend reason string. Unknown reasons map to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "aircraft" => Self::Aircraft,
            "pilot" => Self::Pilot,
            "so" | "sensor_operator" => Self::SensorOperator,
            "payload" => Self::Payload,
            _ => Self::Other,
        }
    }

    /// Backend name of this reason.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aircraft => "aircraft",
            Self::Pilot => "pilot",
            Self::SensorOperator => "so",
            Self::Payload => "payload",
            Self::Other => "other",
        }
    }
}

impl From<String> for RejectionReason {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<RejectionReason> for String {
    fn from(reason: RejectionReason) -> Self {
        reason.name().to_string()
    }
}

/// Mission or duty metadata attached to every segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionMeta {
    /// Owning unit.
    pub unit: String,
    /// Mission type name.
    pub mission_type: String,
    /// Why the mission was rejected, for rejection markers.
    pub reason: Option<RejectionReason>,
}

/// What an event depicts. Irrelevant to packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub phase: Phase,
    pub meta: MissionMeta,
}

impl EventPayload {
    /// Creates a payload with empty metadata.
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            meta: MissionMeta::default(),
        }
    }
}

/// A time-stamped timeline segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Segment start (hours).
    pub start: f64,
    /// Segment end (hours).
    pub end: f64,
    /// Owning mission/duty. Segments with equal ids share a lane.
    pub group_id: Option<GroupId>,
    pub payload: EventPayload,
}

impl Event {
    /// Creates an ungrouped event of the given phase.
    pub fn new(start: f64, end: f64, phase: Phase) -> Self {
        Self {
            start,
            end,
            group_id: None,
            payload: EventPayload::new(phase),
        }
    }

    /// Creates a zero-width rejection marker at `time`.
    pub fn rejection(time: f64, reason: RejectionReason) -> Self {
        let mut event = Self::new(time, time, Phase::Rejection);
        event.payload.meta.reason = Some(reason);
        event
    }

    /// Sets the owning group.
    pub fn with_group(mut self, group_id: GroupId) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Sets the owning unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.payload.meta.unit = unit.into();
        self
    }

    /// Sets the mission type.
    pub fn with_mission_type(mut self, mission_type: impl Into<String>) -> Self {
        self.payload.meta.mission_type = mission_type.into();
        self
    }

    /// The event's time span.
    #[inline]
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }

    /// Mission phase shortcut.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.payload.phase
    }

    /// Owning unit shortcut.
    #[inline]
    pub fn unit(&self) -> &str {
        &self.payload.meta.unit
    }
}
