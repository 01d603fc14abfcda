use bikeshare_types::TripRecord;
use std::collections::HashMap;

use super::AggregationResult;
use crate::ViewMode;

/// Number of entries kept by the stations view.
pub const STATION_TOP_N: usize = 10;

/// Maximum label width in characters; downstream layout relies on it.
pub const STATION_LABEL_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationMode {
    StartStation,
    EndStation,
    Route,
}

impl ViewMode for StationMode {
    const ALL: &'static [Self] = &[
        StationMode::StartStation,
        StationMode::EndStation,
        StationMode::Route,
    ];

    fn name(self) -> &'static str {
        match self {
            StationMode::StartStation => "Start Station",
            StationMode::EndStation => "End Station",
            StationMode::Route => "Start -> End",
        }
    }
}

/// A counted station or route, labelled for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// Display label, at most `STATION_LABEL_WIDTH` characters.
    pub label: String,
    pub count: usize,
}

/// Top stations or routes by descending count.
///
/// Ties keep the order in which keys were first seen in `records`.
pub fn aggregate_stations(
    records: &[&TripRecord],
    mode: StationMode,
) -> AggregationResult<RankedEntry> {
    if records.is_empty() {
        return AggregationResult::empty();
    }

    match mode {
        StationMode::StartStation | StationMode::EndStation => {
            let (noun, ranked) = if mode == StationMode::StartStation {
                ("start", count_first_seen(records.iter().map(|r| r.start_station.as_str())))
            } else {
                ("end", count_first_seen(records.iter().map(|r| r.end_station.as_str())))
            };
            let insight = format!("The most common {} station is\n{}", noun, ranked[0].0);
            let entries = ranked
                .into_iter()
                .map(|(name, count)| RankedEntry {
                    label: truncate(name),
                    count,
                })
                .collect();
            AggregationResult { entries, insight }
        }
        StationMode::Route => {
            let ranked = count_first_seen(
                records
                    .iter()
                    .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
            );
            let (from, to) = ranked[0].0;
            let insight = format!("The most common route is\n{} to {}", from, to);
            let entries = ranked
                .into_iter()
                .map(|((from, to), count)| RankedEntry {
                    label: truncate(&format!("{} - {}", from, to)).trim_end().to_string(),
                    count,
                })
                .collect();
            AggregationResult { entries, insight }
        }
    }
}

/// Count keys, keep the top `STATION_TOP_N` by count with first-seen tie order.
fn count_first_seen<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: std::hash::Hash + Eq + Copy,
    I: Iterator<Item = K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counted: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match slots.get(&key) {
            Some(&slot) => counted[slot].1 += 1,
            None => {
                slots.insert(key, counted.len());
                counted.push((key, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted.truncate(STATION_TOP_N);
    counted
}

fn truncate(text: &str) -> String {
    text.chars().take(STATION_LABEL_WIDTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NO_DATA_INSIGHT;
    use crate::dataset::fixtures::{at, trip};

    fn run(records: &[TripRecord], mode: StationMode) -> AggregationResult<RankedEntry> {
        let refs: Vec<&TripRecord> = records.iter().collect();
        aggregate_stations(&refs, mode)
    }

    fn trips(pairs: &[(&str, &str)]) -> Vec<TripRecord> {
        pairs
            .iter()
            .map(|(from, to)| trip(0, at(2017, 1, 1, 8), from, to))
            .collect()
    }

    #[test]
    fn test_start_stations_sorted_by_count() {
        let records = trips(&[("A", "X"), ("B", "X"), ("B", "Y"), ("C", "Y"), ("B", "Z"), ("C", "Z")]);
        let result = run(&records, StationMode::StartStation);
        let got: Vec<(&str, usize)> = result
            .entries
            .iter()
            .map(|e| (e.label.as_str(), e.count))
            .collect();
        assert_eq!(got, vec![("B", 3), ("C", 2), ("A", 1)]);
        assert_eq!(result.insight, "The most common start station is\nB");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = trips(&[("Q", "E2"), ("P", "E1"), ("P", "E2"), ("Q", "E1")]);
        let result = run(&records, StationMode::EndStation);
        let labels: Vec<&str> = result.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["E2", "E1"]);
        assert_eq!(result.insight, "The most common end station is\nE2");
    }

    #[test]
    fn test_result_is_capped_at_top_n() {
        let names: Vec<String> = (0..15).map(|i| format!("Station {i}")).collect();
        let pairs: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "End")).collect();
        let result = run(&trips(&pairs), StationMode::StartStation);
        assert_eq!(result.entries.len(), STATION_TOP_N);
        assert_eq!(result.entries[0].label, "Station 0");
        assert_eq!(result.entries[9].label, "Station 9");

        let few = run(&trips(&pairs[..4]), StationMode::StartStation);
        assert_eq!(few.entries.len(), 4);
    }

    #[test]
    fn test_routes_group_by_pair() {
        let records = trips(&[("A", "B"), ("B", "A"), ("A", "B"), ("A", "C")]);
        let result = run(&records, StationMode::Route);
        assert_eq!(result.entries[0].label, "A - B");
        assert_eq!(result.entries[0].count, 2);
        assert_eq!(result.entries.len(), 3);
        assert_eq!(result.insight, "The most common route is\nA to B");
    }

    #[test]
    fn test_labels_capped_at_forty_chars() {
        let long = "Lake Shore Dr & Monroe St (Grant Park North Entrance)";
        let records = trips(&[(long, long)]);

        let station = run(&records, StationMode::StartStation);
        assert_eq!(station.entries[0].label.chars().count(), STATION_LABEL_WIDTH);
        assert!(station.insight.ends_with(long));

        let route = run(&records, StationMode::Route);
        assert!(route.entries[0].label.chars().count() <= STATION_LABEL_WIDTH);
        assert!(!route.entries[0].label.ends_with(' '));
    }

    #[test]
    fn test_empty_projection_reports_no_data() {
        for &mode in StationMode::ALL {
            let result = run(&[], mode);
            assert!(result.entries.is_empty());
            assert_eq!(result.insight, NO_DATA_INSIGHT);
        }
    }
}
