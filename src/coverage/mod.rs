//! Crew coverage bands.
//!
//! Turns a cyclic [`ShiftSchedule`](crate::models::ShiftSchedule) into a
//! run-length-encoded sequence of [`CoverageBand`](crate::models::CoverageBand)s
//! per crew member, and totals those sequences.
//!
//! # Kinds
//!
//! - **Working**: on duty, sole coverage
//! - **DoubleCoverage**: on duty while the other split shift is also on
//! - **ZeroCoverage**: split schedule with nobody on duty
//! - **OtherShift**: off duty (crew rest, or the other shift covers)
//! - **DaysOff**: rest days of the on/off cycle
//!
//! Each crew member is computed independently, so a caller may fan out
//! over a roster in parallel and key results by crew index.

mod generator;
mod summary;

pub use generator::{band_at, compute_bands, CoverageBandGenerator, CrewCoverage};
pub use summary::CoverageSummary;
