//! Shared fixtures for the CLI integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)`.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use bikeshare_cli::console::Console;
use bikeshare_cli::presentation::renderers::{Key, KeySource};
use bikeshare_engine::Dataset;
use bikeshare_types::{CityId, Gender, TripRecord, UserType};
use chrono::NaiveDate;
use ratatui::{Terminal, backend::TestBackend, style::Modifier};

/// Console fed from a fixed list of input lines; `None` once they run out.
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push_str(prompt);
        Ok(self.input.pop_front())
    }
}

/// Key source that fails once the script is exhausted, so a broken exit
/// path shows up as an error instead of a hang.
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: &[Key]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> anyhow::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("key script exhausted"))
    }
}

pub struct Rider {
    pub user_type: UserType,
    pub gender: Gender,
    pub birth_year: Option<u16>,
}

pub fn trip(
    city: u16,
    (year, month, day, hour): (i32, u32, u32, u32),
    route: (&str, &str),
    seconds: i64,
    rider: Rider,
) -> TripRecord {
    let start = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid fixture timestamp");
    TripRecord {
        city: CityId::new(city),
        start_time: start,
        end_time: start + chrono::Duration::seconds(seconds),
        trip_duration: seconds as f64,
        start_station: route.0.to_string(),
        end_station: route.1.to_string(),
        user_type: rider.user_type,
        gender: rider.gender,
        birth_year: rider.birth_year,
    }
}

fn rider(user_type: UserType, gender: Gender, birth_year: Option<u16>) -> Rider {
    Rider {
        user_type,
        gender,
        birth_year,
    }
}

/// Chicago: three trips in March and May. New York City: two Sunday trips
/// in June. Washington: configured but empty.
pub fn sample_dataset() -> Dataset {
    use Gender::{Female, Male};
    use UserType::{Customer, Subscriber};

    let records = vec![
        trip(0, (2017, 3, 5, 8), ("Clark St", "Lake St"), 300, rider(Subscriber, Male, Some(1980))),
        trip(0, (2017, 3, 12, 17), ("Clark St", "State St"), 1200, rider(Customer, Female, Some(1990))),
        trip(0, (2017, 5, 20, 8), ("Lake St", "Clark St"), 60, rider(Subscriber, Male, Some(1980))),
        trip(1, (2017, 6, 4, 9), ("Broadway", "Wall St"), 3600, rider(Subscriber, Gender::Unknown, None)),
        trip(1, (2017, 6, 11, 9), ("Broadway", "Wall St"), 900, rider(Customer, Male, Some(1975))),
    ];

    Dataset::new(
        vec![
            "Chicago".to_string(),
            "New York City".to_string(),
            "Washington".to_string(),
        ],
        records,
    )
    .expect("fixture dataset is consistent")
}

pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test terminal")
}

/// Every row of the last drawn frame as plain text.
pub fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

/// Whether the cell at `(col, row)` is drawn in reverse video.
pub fn is_reversed(terminal: &Terminal<TestBackend>, col: u16, row: u16) -> bool {
    terminal.backend().buffer()[(col, row)]
        .modifier
        .contains(Modifier::REVERSED)
}

/// Column of `needle` within `row`, or panic.
pub fn column_of(rows: &[String], row: usize, needle: &str) -> u16 {
    rows[row]
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not on row {row}: {:?}", rows[row])) as u16
}
