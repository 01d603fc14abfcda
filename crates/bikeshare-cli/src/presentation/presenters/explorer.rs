use bikeshare_engine::{
    CityFilter, Dataset, StationMode, TravelMode, ViewMode, aggregate_stations,
    aggregate_travel_times,
};
use bikeshare_types::TripRecord;

use crate::presentation::view_models::{
    ChartViewModel, CityToggleViewModel, ExplorerScreenViewModel, FrequencyRowViewModel,
    RankedRowViewModel,
};

/// One interactive view: its title, its modes and how a mode turns the
/// filtered records into a chart.
pub trait Explorer {
    type Mode: ViewMode;

    const TITLE: &'static str;

    /// Chart and insight text for `records` under `mode`.
    fn chart(records: &[&TripRecord], mode: Self::Mode) -> (ChartViewModel, String);
}

pub struct TravelTimesExplorer;

impl Explorer for TravelTimesExplorer {
    type Mode = TravelMode;

    const TITLE: &'static str = "POPULAR TRAVEL TIMES";

    fn chart(records: &[&TripRecord], mode: TravelMode) -> (ChartViewModel, String) {
        let result = aggregate_travel_times(records, mode);
        if result.is_empty() {
            return (ChartViewModel::Empty, result.insight);
        }

        let rows = result
            .entries
            .into_iter()
            .map(|bucket| FrequencyRowViewModel {
                key: bucket.key,
                label: bucket.label,
                count: bucket.count,
                rank: bucket.rank,
            })
            .collect();
        (ChartViewModel::Frequency(rows), result.insight)
    }
}

pub struct StationsExplorer;

impl Explorer for StationsExplorer {
    type Mode = StationMode;

    const TITLE: &'static str = "POPULAR STATIONS AND ROUTES";

    fn chart(records: &[&TripRecord], mode: StationMode) -> (ChartViewModel, String) {
        let result = aggregate_stations(records, mode);
        if result.is_empty() {
            return (ChartViewModel::Empty, result.insight);
        }

        let rows = result
            .entries
            .into_iter()
            .map(|entry| RankedRowViewModel {
                label: entry.label,
                count: entry.count,
            })
            .collect();
        (ChartViewModel::Ranked(rows), result.insight)
    }
}

/// Re-filter and re-aggregate from scratch for one frame.
pub fn build_screen_view_model<E: Explorer>(
    dataset: &Dataset,
    filter: &CityFilter,
    mode: E::Mode,
) -> ExplorerScreenViewModel {
    let records = dataset.filter_by_cities(&filter.included_cities());
    let (chart, insight) = E::chart(&records, mode);

    let cities = filter
        .entries()
        .iter()
        .map(|(city, included)| CityToggleViewModel {
            name: dataset.city_name(*city).unwrap_or("?").to_string(),
            included: *included,
        })
        .collect();

    ExplorerScreenViewModel {
        title: E::TITLE,
        insight,
        mode_name: mode.name(),
        chart,
        cities,
    }
}
