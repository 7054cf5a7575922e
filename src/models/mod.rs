//! Timeline domain models.
//!
//! Provides the data types shared by lane packing and coverage-band
//! computation. All records are plain serializable data with no behavior
//! beyond simple accessors, safe to hand to a rendering layer.
//!
//! # Domain Mappings
//!
//! | mission-timeline | Flight ops | Duty roster |
//! |------------------|-----------|-------------|
//! | Event | Mission phase | Duty block |
//! | LaneAssignment | Row on a unit's flight timeline | Row on a duty chart |
//! | GroupId | Mission | Duty assignment |
//! | ShiftSchedule | Aircrew cycle | Watch bill |
//! | CoverageBand | Crew status span | Watch status span |

mod band;
mod event;
mod interval;
mod lane;
mod shift;

pub use band::{CoverageBand, CoverageKind};
pub use event::{Event, EventPayload, GroupId, MissionMeta, Phase, RejectionReason};
pub use interval::TimeInterval;
pub use lane::LaneAssignment;
pub use shift::{ShiftSchedule, ShiftSlot, HOURS_PER_DAY, SHIFT_SPLIT_OFFSET_HOURS};
