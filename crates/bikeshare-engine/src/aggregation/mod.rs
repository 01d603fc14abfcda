//! Per-view aggregations over a filtered projection.
//!
//! Every function here is pure: `(records, mode) -> AggregationResult`.
//! Results are recomputed on every frame and never cached.

mod stations;
mod travel_times;

pub use stations::{RankedEntry, STATION_LABEL_WIDTH, STATION_TOP_N, StationMode, aggregate_stations};
pub use travel_times::{TimeBucket, TravelMode, aggregate_travel_times};

/// Insight shown when the filtered projection has no records.
pub const NO_DATA_INSIGHT: &str = "No trips match the selected cities.";

/// Ordered entries plus a one or two line human readable insight.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult<E> {
    pub entries: Vec<E>,
    pub insight: String,
}

impl<E> AggregationResult<E> {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            insight: NO_DATA_INSIGHT.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
