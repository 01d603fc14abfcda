use bikeshare_types::TripRecord;
use chrono::{Datelike, Month, Timelike};

use super::AggregationResult;
use crate::ViewMode;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Month,
    Day,
    Hour,
}

impl ViewMode for TravelMode {
    const ALL: &'static [Self] = &[TravelMode::Month, TravelMode::Day, TravelMode::Hour];

    fn name(self) -> &'static str {
        match self {
            TravelMode::Month => "Month",
            TravelMode::Day => "Day",
            TravelMode::Hour => "Hour",
        }
    }
}

impl TravelMode {
    /// Bucket key of a record: month 1-12, weekday 0-6 (Monday first), hour 0-23.
    fn bucket_of(self, record: &TripRecord) -> u32 {
        match self {
            TravelMode::Month => record.start_time.month(),
            TravelMode::Day => record.start_time.weekday().num_days_from_monday(),
            TravelMode::Hour => record.start_time.hour(),
        }
    }

    fn bucket_count(self) -> usize {
        match self {
            TravelMode::Month => 13,
            TravelMode::Day => 7,
            TravelMode::Hour => 24,
        }
    }

    fn short_label(self, key: u32) -> String {
        match self {
            TravelMode::Month => month_name(key).chars().take(3).collect(),
            TravelMode::Day => WEEKDAY_NAMES
                .get(key as usize)
                .map(|d| d.chars().take(3).collect())
                .unwrap_or_default(),
            TravelMode::Hour => format!(" {:02}", key),
        }
    }

    fn insight(self, key: u32) -> String {
        match self {
            TravelMode::Month => format!("The most common month is {}.", month_name(key)),
            TravelMode::Day => format!(
                "The most common day of the week is {}.",
                WEEKDAY_NAMES.get(key as usize).copied().unwrap_or("?")
            ),
            TravelMode::Hour => format!(
                "The most common time is the hour starting at {}.",
                twelve_hour(key)
            ),
        }
    }
}

fn month_name(key: u32) -> &'static str {
    u8::try_from(key)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("?")
}

fn twelve_hour(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:00 {}", display, suffix)
}

/// One present time bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBucket {
    pub key: u32,
    pub label: String,
    pub count: usize,
    /// Average rank of `count` among all present buckets; 1 = smallest.
    /// Tied counts share the mean of the ranks they span.
    pub rank: f64,
}

/// Group records by a component of their start time.
///
/// Buckets come back in natural key order and only for keys that occur.
/// The insight names the bucket with the highest raw count; on a tie the
/// earliest bucket in key order wins.
pub fn aggregate_travel_times(
    records: &[&TripRecord],
    mode: TravelMode,
) -> AggregationResult<TimeBucket> {
    if records.is_empty() {
        return AggregationResult::empty();
    }

    let mut counts = vec![0usize; mode.bucket_count()];
    for record in records {
        counts[mode.bucket_of(record) as usize] += 1;
    }

    let present: Vec<(u32, usize)> = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(key, count)| (key as u32, *count))
        .collect();

    let mut top = present[0];
    for &(key, count) in &present[1..] {
        if count > top.1 {
            top = (key, count);
        }
    }

    let entries = present
        .iter()
        .map(|&(key, count)| TimeBucket {
            key,
            label: mode.short_label(key),
            count,
            rank: average_rank(count, &present),
        })
        .collect();

    AggregationResult {
        entries,
        insight: mode.insight(top.0),
    }
}

fn average_rank(count: usize, present: &[(u32, usize)]) -> f64 {
    let below = present.iter().filter(|(_, c)| *c < count).count();
    let tied = present.iter().filter(|(_, c)| *c == count).count();
    below as f64 + (tied as f64 + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{at, trip};

    fn run(records: &[TripRecord], mode: TravelMode) -> AggregationResult<TimeBucket> {
        let refs: Vec<&TripRecord> = records.iter().collect();
        aggregate_travel_times(&refs, mode)
    }

    #[test]
    fn test_month_insight_picks_highest_count() {
        let records = vec![
            trip(0, at(2017, 3, 1, 8), "A", "B"),
            trip(0, at(2017, 5, 1, 8), "A", "B"),
            trip(0, at(2017, 5, 2, 8), "A", "B"),
        ];
        let result = run(&records, TravelMode::Month);
        assert_eq!(result.insight, "The most common month is May.");
        let keys: Vec<u32> = result.entries.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec![3, 5]);
        assert_eq!(result.entries[0].label, "Mar");
    }

    #[test]
    fn test_month_tie_goes_to_earlier_month() {
        let records = vec![
            trip(0, at(2017, 5, 1, 8), "A", "B"),
            trip(0, at(2017, 3, 1, 8), "A", "B"),
        ];
        let result = run(&records, TravelMode::Month);
        assert_eq!(result.insight, "The most common month is March.");
    }

    #[test]
    fn test_day_buckets_are_monday_first() {
        // 2017-01-02 is a Monday, 2017-01-08 a Sunday
        let records = vec![
            trip(0, at(2017, 1, 8, 8), "A", "B"),
            trip(0, at(2017, 1, 8, 9), "A", "B"),
            trip(0, at(2017, 1, 2, 8), "A", "B"),
        ];
        let result = run(&records, TravelMode::Day);
        let labels: Vec<&str> = result.entries.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Mon", "Sun"]);
        assert_eq!(result.entries[1].key, 6);
        assert_eq!(result.insight, "The most common day of the week is Sunday.");
    }

    #[test]
    fn test_hour_labels_and_insight() {
        let records = vec![
            trip(0, at(2017, 1, 2, 0), "A", "B"),
            trip(0, at(2017, 1, 2, 17), "A", "B"),
            trip(0, at(2017, 1, 3, 17), "A", "B"),
        ];
        let result = run(&records, TravelMode::Hour);
        assert_eq!(result.entries[0].label, " 00");
        assert_eq!(result.entries[1].label, " 17");
        assert_eq!(
            result.insight,
            "The most common time is the hour starting at 05:00 PM."
        );
    }

    #[test]
    fn test_midnight_and_noon_formatting() {
        assert_eq!(twelve_hour(0), "12:00 AM");
        assert_eq!(twelve_hour(12), "12:00 PM");
        assert_eq!(twelve_hour(9), "09:00 AM");
    }

    #[test]
    fn test_rank_is_monotonic_in_count_with_shared_ties() {
        let mut records = Vec::new();
        for _ in 0..3 {
            records.push(trip(0, at(2017, 1, 2, 8), "A", "B"));
        }
        records.push(trip(0, at(2017, 2, 2, 8), "A", "B"));
        records.push(trip(0, at(2017, 3, 2, 8), "A", "B"));

        let result = run(&records, TravelMode::Month);
        let ranks: Vec<f64> = result.entries.iter().map(|b| b.rank).collect();
        assert_eq!(ranks, vec![3.0, 1.5, 1.5]);
        assert_eq!(result.entries[0].count, 3);
    }

    #[test]
    fn test_insight_bucket_has_max_count_in_every_mode() {
        let records: Vec<TripRecord> = (0..40u32)
            .map(|i| trip(0, at(2017, 1 + (i * 7) % 12, 1 + (i * 3) % 28, (i * 5) % 24), "A", "B"))
            .collect();

        for &mode in TravelMode::ALL {
            let result = run(&records, mode);
            let max = result.entries.iter().map(|b| b.count).max().unwrap();
            let top = result.entries.iter().find(|b| b.count == max).unwrap();
            assert_eq!(result.insight, mode.insight(top.key), "mode {:?}", mode);
        }
    }

    #[test]
    fn test_empty_projection_reports_no_data() {
        let result = run(&[], TravelMode::Hour);
        assert!(result.is_empty());
        assert_eq!(result.insight, super::super::NO_DATA_INSIGHT);
    }
}
