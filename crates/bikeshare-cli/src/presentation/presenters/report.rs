use bikeshare_engine::{Dataset, DurationStats, PaginationState, UserStats};
use bikeshare_types::{CityId, TripRecord};

use crate::presentation::view_models::{
    AboutViewModel, DurationRowViewModel, DurationsReportViewModel, UserInfoReportViewModel,
    UserRowViewModel,
};

pub fn build_about(dataset: &Dataset) -> AboutViewModel {
    AboutViewModel {
        row_count: dataset.len(),
        memory_bytes: dataset.approx_memory_bytes(),
        cities: dataset
            .city_counts()
            .into_iter()
            .map(|(city, count)| (dataset.city_name(city).unwrap_or("?").to_string(), count))
            .collect(),
    }
}

pub fn city_names(dataset: &Dataset, cities: &[CityId]) -> Vec<String> {
    cities
        .iter()
        .filter_map(|city| dataset.city_name(*city))
        .map(str::to_string)
        .collect()
}

pub fn build_durations_report(
    cities: Vec<String>,
    stats: DurationStats,
    rows: &[&TripRecord],
    page: &PaginationState,
) -> DurationsReportViewModel {
    let rows = page
        .page(rows)
        .iter()
        .enumerate()
        .map(|(i, record)| DurationRowViewModel {
            position: page.offset() + i,
            start_time: record.start_time,
            end_time: record.end_time,
            trip_duration: record.trip_duration,
        })
        .collect();

    DurationsReportViewModel {
        cities,
        stats,
        rows,
    }
}

pub fn build_user_info_report(
    cities: Vec<String>,
    stats: UserStats,
    rows: &[&TripRecord],
    page: &PaginationState,
) -> UserInfoReportViewModel {
    let rows = page
        .page(rows)
        .iter()
        .enumerate()
        .map(|(i, record)| UserRowViewModel {
            position: page.offset() + i,
            user_type: record.user_type,
            gender: record.gender,
            birth_year: record.birth_year,
        })
        .collect();

    UserInfoReportViewModel {
        cities,
        stats,
        rows,
    }
}
