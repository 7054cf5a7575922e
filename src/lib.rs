//! Timeline layout core for mission-scheduling dashboards.
//!
//! Turns simulation output into display-ready data: timeline events packed
//! onto lanes, and per-crew coverage bands derived from a cyclic work
//! schedule. Every computation is a pure function of its arguments; the
//! caller decides when to recompute.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeInterval`, `Event`, `Phase`,
//!   `LaneAssignment`, `ShiftSchedule`, `CoverageBand`
//! - **`lanes`**: Greedy first-fit lane packing with mission grouping
//! - **`coverage`**: Run-length-encoded coverage bands and their totals
//! - **`timeline`**: Backend timeline parsing and flattening to events
//! - **`config`**: Dashboard configuration loading
//! - **`validation`**: Configuration-layer range checks
//!
//! # Example
//!
//! ```
//! use mission_timeline::coverage::compute_bands;
//! use mission_timeline::lanes::{assign_lanes, lane_count};
//! use mission_timeline::models::{Event, Phase, ShiftSchedule, ShiftSlot};
//!
//! let events = vec![
//!     Event::new(0.0, 2.0, Phase::Flight),
//!     Event::new(1.0, 3.0, Phase::Flight),
//! ];
//! assert_eq!(lane_count(&assign_lanes(&events)), 2);
//!
//! let schedule = ShiftSchedule::new(5, 2);
//! let bands = compute_bands(&schedule, 0, ShiftSlot::First, 168.0);
//! assert_eq!(bands.last().unwrap().end, 168.0);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs"

pub mod config;
pub mod coverage;
pub mod lanes;
pub mod models;
pub mod timeline;
pub mod validation;
