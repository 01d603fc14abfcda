use bikeshare_types::TripRecord;

/// Durations projection: longest trips first.
///
/// The sort is stable, so equal durations keep dataset order.
pub fn sort_by_duration_desc<'a>(mut rows: Vec<&'a TripRecord>) -> Vec<&'a TripRecord> {
    rows.sort_by(|a, b| b.trip_duration.total_cmp(&a.trip_duration));
    rows
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub row_count: usize,
    pub total_hours: f64,
    /// `None` when there are no rows.
    pub mean_seconds: Option<f64>,
}

impl DurationStats {
    pub fn compute(rows: &[&TripRecord]) -> Self {
        let total_seconds: f64 = rows.iter().map(|r| r.trip_duration).sum();
        let mean_seconds = if rows.is_empty() {
            None
        } else {
            Some(total_seconds / rows.len() as f64)
        };

        Self {
            row_count: rows.len(),
            total_hours: total_seconds / 3600.0,
            mean_seconds,
        }
    }
}
