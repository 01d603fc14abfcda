use bikeshare_engine::{DurationStats, UserStats};
use bikeshare_types::{Gender, UserType};
use chrono::NaiveDateTime;

// --------------------------------------------------------
// Interactive explorer
// --------------------------------------------------------

/// Text emphasis supported by the explorer screen. No colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    Bold,
    Underline,
    Reverse,
}

/// Text at a screen position. Coordinates may fall outside the visible
/// area; the renderer clips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedText {
    pub row: i32,
    pub col: i32,
    pub text: String,
    pub emphasis: Emphasis,
}

impl PlacedText {
    pub fn new(row: i32, col: i32, text: impl Into<String>) -> Self {
        Self {
            row,
            col,
            text: text.into(),
            emphasis: Emphasis::Normal,
        }
    }

    pub fn with(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityToggleViewModel {
    pub name: String,
    pub included: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRowViewModel {
    pub key: u32,
    pub label: String,
    pub count: usize,
    pub rank: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRowViewModel {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartViewModel {
    /// Nothing matched the filter
    Empty,
    /// Travel Times: one row per present time bucket
    Frequency(Vec<FrequencyRowViewModel>),
    /// Stations & Routes: top entries by count
    Ranked(Vec<RankedRowViewModel>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerScreenViewModel {
    pub title: &'static str,
    pub insight: String,
    pub mode_name: &'static str,
    pub chart: ChartViewModel,
    pub cities: Vec<CityToggleViewModel>,
}

// --------------------------------------------------------
// Console reports
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AboutViewModel {
    pub row_count: usize,
    pub memory_bytes: usize,
    pub cities: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationRowViewModel {
    pub position: usize,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub trip_duration: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationsReportViewModel {
    pub cities: Vec<String>,
    pub stats: DurationStats,
    pub rows: Vec<DurationRowViewModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRowViewModel {
    pub position: usize,
    pub user_type: UserType,
    pub gender: Gender,
    pub birth_year: Option<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserInfoReportViewModel {
    pub cities: Vec<String>,
    pub stats: UserStats,
    pub rows: Vec<UserRowViewModel>,
}
