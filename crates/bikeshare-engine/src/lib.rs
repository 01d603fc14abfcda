// Engine module - dataset queries and aggregation logic
// This layer sits between loaded trip records (types) and CLI presentation

pub mod aggregation;
pub mod city_filter;
pub mod dataset;
pub mod error;
pub mod mode;
pub mod pagination;
pub mod report;

pub use aggregation::{
    AggregationResult, NO_DATA_INSIGHT, RankedEntry, STATION_LABEL_WIDTH, STATION_TOP_N,
    StationMode, TimeBucket, TravelMode, aggregate_stations, aggregate_travel_times,
};
pub use city_filter::{CityFilter, CitySelection};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use mode::{ModeCycle, ViewMode};
pub use pagination::{PAGE_SIZE, PageCommand, PaginationState};
pub use report::{BirthYearStats, CountShare, DurationStats, UserStats, sort_by_duration_desc};
