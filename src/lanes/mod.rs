//! Timeline lane packing.
//!
//! Places timeline events onto horizontal display lanes so that no two
//! events on one lane overlap, multi-segment missions stay on one lane,
//! and as few lanes as possible are used.
//!
//! # Usage
//!
//! ```
//! use mission_timeline::lanes::assign_lanes;
//! use mission_timeline::models::{Event, Phase};
//!
//! let events = vec![
//!     Event::new(0.0, 1.0, Phase::Preflight).with_group(1),
//!     Event::new(1.0, 4.0, Phase::Flight).with_group(1),
//!     Event::new(2.0, 2.0, Phase::Rejection),
//! ];
//! let lanes = assign_lanes(&events);
//! assert_eq!(lanes[0].lane, lanes[1].lane);
//! assert_ne!(lanes[2].lane, lanes[0].lane);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

mod assigner;

pub use assigner::LaneAssigner;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{Event, LaneAssignment};

/// Packs events with an uncapped [`LaneAssigner`].
pub fn assign_lanes(events: &[Event]) -> Vec<LaneAssignment> {
    LaneAssigner::new().assign(events)
}

/// Packs each unit's events independently.
///
/// Events are partitioned by `payload.meta.unit`; lane indices restart at
/// 0 for every unit.
pub fn assign_lanes_by_unit(
    assigner: &LaneAssigner,
    events: &[Event],
) -> BTreeMap<String, Vec<LaneAssignment>> {
    let mut by_unit: BTreeMap<&str, Vec<Event>> = BTreeMap::new();
    for event in events {
        by_unit.entry(event.unit()).or_default().push(event.clone());
    }

    by_unit
        .into_iter()
        .map(|(unit, unit_events)| (unit.to_string(), assigner.assign(&unit_events)))
        .collect()
}

/// Number of distinct lanes used (highest index + 1).
pub fn lane_count(assignments: &[LaneAssignment]) -> usize {
    assignments.iter().map(|a| a.lane + 1).max().unwrap_or(0)
}

/// Maximum number of mutually overlapping events.
///
/// Sweep over normalized half-open intervals. At equal times, ends are
/// processed before instants and instants before starts, so touching
/// intervals do not count as overlapping. This is the lower bound on the
/// lane count for ungrouped events.
pub fn max_concurrency(events: &[Event]) -> usize {
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Edge {
        End,
        Instant,
        Start,
    }

    let mut edges: Vec<(f64, Edge)> = Vec::with_capacity(events.len() * 2);
    for event in events {
        let iv = event.interval().normalized();
        if iv.start == iv.end {
            edges.push((iv.start, Edge::Instant));
        } else {
            edges.push((iv.start, Edge::Start));
            edges.push((iv.end, Edge::End));
        }
    }
    edges.sort_by(|a, b| match a.0.total_cmp(&b.0) {
        Ordering::Equal => a.1.cmp(&b.1),
        other => other,
    });

    let mut open = 0usize;
    let mut peak = 0usize;
    for (_, edge) in edges {
        match edge {
            Edge::End => open = open.saturating_sub(1),
            Edge::Instant => peak = peak.max(open + 1),
            Edge::Start => {
                open += 1;
                peak = peak.max(open);
            }
        }
    }
    peak
}
