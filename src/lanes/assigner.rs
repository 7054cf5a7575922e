//! Greedy first-fit lane assigner.
//!
//! # Algorithm
//!
//! 1. Collapse each group of segments into one placement unit spanning
//!    `[min start, max end]`; ungrouped events are their own unit.
//! 2. Sort units by start (ties: shorter first, then input order).
//! 3. For each unit, take the lowest-indexed lane whose last occupant has
//!    ended; otherwise open a new lane.
//! 4. Emit every segment of the unit on that lane, ordered by start.
//!
//! Processing in start order makes first-fit optimal for interval graphs:
//! the lane count equals the maximum number of simultaneously open units.
//!
//! # Complexity
//! O(n log n + n * L) where n=events, L=lanes.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1: Interval Partitioning

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::models::{Event, GroupId, LaneAssignment, TimeInterval};

/// Lane bookkeeping. Local to one `assign` call.
#[derive(Debug, Clone, Copy)]
struct Lane {
    index: usize,
    occupied_until: f64,
}

/// One group (or a lone event) placed as a single interval.
#[derive(Debug)]
struct PlacementUnit {
    bounds: TimeInterval,
    /// Index of the unit's first event in the input.
    first_index: usize,
    /// Input indices of the unit's segments.
    members: Vec<usize>,
}

impl PlacementUnit {
    fn new(index: usize, interval: TimeInterval) -> Self {
        Self {
            bounds: interval,
            first_index: index,
            members: vec![index],
        }
    }
}

/// Packs timeline events onto non-overlapping display lanes.
///
/// Segments sharing a `group_id` always land on the same lane. Malformed
/// intervals (`end < start`) are placed as zero-width.
///
/// # Example
///
/// ```
/// use mission_timeline::lanes::{lane_count, LaneAssigner};
/// use mission_timeline::models::{Event, Phase};
///
/// let events = vec![
///     Event::new(0.0, 2.0, Phase::Flight),
///     Event::new(1.0, 3.0, Phase::Flight),
///     Event::new(2.0, 4.0, Phase::Flight),
/// ];
/// let assignments = LaneAssigner::new().assign(&events);
/// assert_eq!(assignments.len(), 3);
/// assert_eq!(lane_count(&assignments), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LaneAssigner {
    max_lanes: Option<usize>,
}

impl LaneAssigner {
    /// Creates an assigner with no lane cap.
    pub fn new() -> Self {
        Self { max_lanes: None }
    }

    /// Caps the number of lanes.
    ///
    /// Once the cap is reached, a unit that fits no lane is drawn on lane 0
    /// overlapping its occupant. A cap of 0 is treated as 1.
    pub fn with_max_lanes(mut self, max_lanes: usize) -> Self {
        self.max_lanes = Some(max_lanes.max(1));
        self
    }

    /// Configured lane cap.
    pub fn max_lanes(&self) -> Option<usize> {
        self.max_lanes
    }

    /// Assigns every event to a lane.
    ///
    /// Each input event appears exactly once in the output. Output is
    /// ordered by placement: units in start order, segments of a group
    /// consecutively.
    pub fn assign(&self, events: &[Event]) -> Vec<LaneAssignment> {
        let intervals: Vec<TimeInterval> =
            events.iter().map(|e| e.interval().normalized()).collect();
        let units = build_units(events, &intervals);

        let mut lanes: Vec<Lane> = Vec::new();
        let mut assignments = Vec::with_capacity(events.len());

        for unit in &units {
            let lane = self.place(&mut lanes, unit.bounds);
            trace!(
                start = unit.bounds.start,
                end = unit.bounds.end,
                segments = unit.members.len(),
                lane,
                "placed unit"
            );

            let last = unit.members.len() - 1;
            for (pos, &idx) in unit.members.iter().enumerate() {
                assignments.push(LaneAssignment {
                    event: events[idx].clone(),
                    lane,
                    is_first_segment_of_group: pos == 0,
                    is_last_segment_of_group: pos == last,
                });
            }
        }

        debug!(
            events = events.len(),
            units = units.len(),
            lanes = lanes.len(),
            "assigned timeline lanes"
        );
        assignments
    }

    /// First-fit lane search; opens a lane or falls back to lane 0.
    fn place(&self, lanes: &mut Vec<Lane>, bounds: TimeInterval) -> usize {
        if let Some(lane) = lanes
            .iter_mut()
            .find(|l| l.occupied_until <= bounds.start)
        {
            lane.occupied_until = bounds.end;
            return lane.index;
        }

        if let Some(cap) = self.max_lanes {
            if lanes.len() >= cap {
                if let Some(first) = lanes.first_mut() {
                    debug!(
                        start = bounds.start,
                        cap, "lane cap reached, overlapping on lane 0"
                    );
                    first.occupied_until = first.occupied_until.max(bounds.end);
                    return first.index;
                }
            }
        }

        let index = lanes.len();
        lanes.push(Lane {
            index,
            occupied_until: bounds.end,
        });
        index
    }
}

/// Groups events into placement units sorted by start.
fn build_units(events: &[Event], intervals: &[TimeInterval]) -> Vec<PlacementUnit> {
    let mut units: Vec<PlacementUnit> = Vec::new();
    let mut group_slots: HashMap<GroupId, usize> = HashMap::new();

    for (idx, event) in events.iter().enumerate() {
        let interval = intervals[idx];
        match event.group_id {
            Some(group_id) => {
                if let Some(&slot) = group_slots.get(&group_id) {
                    let unit = &mut units[slot];
                    unit.bounds = unit.bounds.hull(&interval);
                    unit.members.push(idx);
                } else {
                    group_slots.insert(group_id, units.len());
                    units.push(PlacementUnit::new(idx, interval));
                }
            }
            None => units.push(PlacementUnit::new(idx, interval)),
        }
    }

    // Stable: equal starts keep input order
    for unit in &mut units {
        unit.members
            .sort_by(|&a, &b| intervals[a].start.total_cmp(&intervals[b].start));
    }

    // Shorter units first on equal starts so zero-width markers free their
    // lane for the unit that follows.
    units.sort_by(|a, b| {
        a.bounds
            .start
            .total_cmp(&b.bounds.start)
            .then(a.bounds.end.total_cmp(&b.bounds.end))
            .then(a.first_index.cmp(&b.first_index))
    });
    units
}
