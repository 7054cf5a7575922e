//! Lane assignment (packing output) model.

use serde::{Deserialize, Serialize};

use super::Event;

/// An event placed on a display lane.
///
/// Ungrouped events are both the first and the last segment of their own
/// one-element group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneAssignment {
    pub event: Event,
    /// Zero-based lane index.
    pub lane: usize,
    pub is_first_segment_of_group: bool,
    pub is_last_segment_of_group: bool,
}
