//! Statistics for the line-based report sessions.
//!
//! Statistics always cover the whole filtered projection, never just the
//! visible page.

mod durations;
mod user_info;

pub use durations::{DurationStats, sort_by_duration_desc};
pub use user_info::{BirthYearStats, CountShare, UserStats};
