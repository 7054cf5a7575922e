//! Backend timeline ingestion.
//!
//! The simulation backend reports a `timeline` array mixing completed
//! missions (with per-phase segments) and rejected mission requests:
//!
//! ```json
//! [
//!   {"type": "mission", "unit": "VMU-1", "mission_type": "ISR",
//!    "demand_time": 2.0, "finish_time": 9.5,
//!    "segments": [{"name": "preflight", "start": 2.0, "end": 3.0}, ...]},
//!   {"type": "rejection", "time": 4.0, "unit": "VMU-1",
//!    "mission_type": "ISR", "reason": "pilot"}
//! ]
//! ```
//!
//! [`flatten_timeline`] turns these into lane-packable [`Event`]s: one
//! group per mission, one zero-width marker per rejection.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LoadError;
use crate::models::{Event, EventPayload, GroupId, MissionMeta, Phase, RejectionReason};

/// One phase of a mission as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub name: String,
    pub start: f64,
    pub end: f64,
}

/// A backend timeline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineItem {
    /// A mission that started.
    Mission {
        unit: String,
        mission_type: String,
        demand_time: f64,
        finish_time: f64,
        #[serde(default)]
        segments: Vec<TimelineSegment>,
    },
    /// A mission request turned down for lack of a resource.
    Rejection {
        time: f64,
        unit: String,
        mission_type: String,
        reason: RejectionReason,
    },
}

impl TimelineItem {
    /// Owning unit.
    pub fn unit(&self) -> &str {
        match self {
            Self::Mission { unit, .. } | Self::Rejection { unit, .. } => unit,
        }
    }
}

/// Accepts either a bare timeline array or a results object holding one.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimelineSource {
    Items(Vec<TimelineItem>),
    Results { timeline: Vec<TimelineItem> },
}

/// Parses backend timeline JSON.
///
/// The input may be the `timeline` array itself or a full results object
/// with a `timeline` field.
pub fn parse_timeline(json: &str) -> Result<Vec<TimelineItem>, LoadError> {
    let items = match serde_json::from_str::<TimelineSource>(json)? {
        TimelineSource::Items(items) => items,
        TimelineSource::Results { timeline } => timeline,
    };
    debug!(items = items.len(), "parsed backend timeline");
    Ok(items)
}

/// Flattens timeline entries into events.
///
/// Mission `i` (counting missions only, in input order) becomes group `i`
/// with one event per recognized segment. Segments with unknown phase
/// names are skipped. Zero-length segments are kept as zero-width events.
/// Each rejection becomes an ungrouped zero-width event.
pub fn flatten_timeline(items: &[TimelineItem]) -> Vec<Event> {
    let mut events = Vec::new();
    let mut next_group: GroupId = 0;

    for item in items {
        match item {
            TimelineItem::Mission {
                unit,
                mission_type,
                segments,
                ..
            } => {
                let group_id = next_group;
                next_group += 1;
                for segment in segments {
                    let Some(phase) = Phase::from_name(&segment.name) else {
                        warn!(
                            segment = %segment.name,
                            unit = %unit,
                            "skipping segment with unknown phase"
                        );
                        continue;
                    };
                    events.push(Event {
                        start: segment.start,
                        end: segment.end,
                        group_id: Some(group_id),
                        payload: EventPayload {
                            phase,
                            meta: MissionMeta {
                                unit: unit.clone(),
                                mission_type: mission_type.clone(),
                                reason: None,
                            },
                        },
                    });
                }
            }
            TimelineItem::Rejection {
                time,
                unit,
                mission_type,
                reason,
            } => {
                events.push(
                    Event::rejection(*time, *reason)
                        .with_unit(unit.as_str())
                        .with_mission_type(mission_type.as_str()),
                );
            }
        }
    }

    debug!(
        items = items.len(),
        missions = next_group,
        events = events.len(),
        "flattened timeline"
    );
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::{assign_lanes_by_unit, lane_count, LaneAssigner};

    const SAMPLE: &str = r#"[
        {"type": "mission", "unit": "VMU-1", "mission_type": "ISR",
         "demand_time": 0.0, "finish_time": 6.0,
         "segments": [
            {"name": "preflight", "start": 0.0, "end": 1.0},
            {"name": "mount", "start": 1.0, "end": 1.0},
            {"name": "flight", "start": 1.0, "end": 4.0},
            {"name": "postflight", "start": 4.0, "end": 5.0},
            {"name": "turnaround", "start": 5.0, "end": 6.0}
         ]},
        {"type": "rejection", "time": 2.0, "unit": "VMU-1",
         "mission_type": "ISR", "reason": "aircraft"},
        {"type": "mission", "unit": "VMU-2", "mission_type": "Strike",
         "demand_time": 3.0, "finish_time": 5.0,
         "segments": [
            {"name": "flight", "start": 3.0, "end": 4.5},
            {"name": "refuel", "start": 4.5, "end": 5.0}
         ]}
    ]"#;

    #[test]
    fn test_parse_array() {
        let items = parse_timeline(SAMPLE).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].unit(), "VMU-1");
        assert!(matches!(
            items[1],
            TimelineItem::Rejection {
                reason: RejectionReason::Aircraft,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_results_object() {
        let json = format!(r#"{{"horizon_hours": 24.0, "timeline": {SAMPLE}}}"#);
        let items = parse_timeline(&json).unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_timeline(r#"[{"type": "maintenance"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse JSON"));
    }

    #[test]
    fn test_flatten() {
        let items = parse_timeline(SAMPLE).unwrap();
        let events = flatten_timeline(&items);

        // 5 phases + 1 rejection + 1 known phase (refuel skipped)
        assert_eq!(events.len(), 7);
        assert!(events[..5].iter().all(|e| e.group_id == Some(0)));
        assert_eq!(events[1].phase(), Phase::Mount);
        assert_eq!(events[1].start, events[1].end);

        let rejection = &events[5];
        assert_eq!(rejection.phase(), Phase::Rejection);
        assert!(rejection.group_id.is_none());
        assert_eq!(rejection.payload.meta.reason, Some(RejectionReason::Aircraft));

        assert_eq!(events[6].group_id, Some(1));
        assert_eq!(events[6].unit(), "VMU-2");
        assert_eq!(events[6].payload.meta.mission_type, "Strike");
    }

    #[test]
    fn test_flatten_then_pack_per_unit() {
        let events = flatten_timeline(&parse_timeline(SAMPLE).unwrap());
        let layout = assign_lanes_by_unit(&LaneAssigner::new(), &events);

        // The rejection at t=2 falls inside VMU-1's mission
        let vmu1 = &layout["VMU-1"];
        assert_eq!(lane_count(vmu1), 2);
        let mission_lanes: Vec<usize> = vmu1
            .iter()
            .filter(|a| a.event.group_id.is_some())
            .map(|a| a.lane)
            .collect();
        assert!(mission_lanes.iter().all(|&l| l == mission_lanes[0]));

        assert_eq!(lane_count(&layout["VMU-2"]), 1);
    }
}
