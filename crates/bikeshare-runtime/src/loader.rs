//! CSV ingestion: one trip log per configured city.
//!
//! The city of a record comes from the file it was read from. Columns other
//! than the trip schema (such as the unnamed index column in the published
//! logs) are ignored.

use bikeshare_engine::Dataset;
use bikeshare_types::{CityId, Gender, TripRecord, UserType, columns};
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::fs::File;
use std::path::Path;

use crate::{CitySource, Error, Result};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Load every city in order. Fails on the first unreadable or invalid file.
pub fn load(sources: &[CitySource]) -> Result<Dataset> {
    let mut names = Vec::with_capacity(sources.len());
    let mut records = Vec::new();

    for (index, source) in sources.iter().enumerate() {
        let city = u16::try_from(index)
            .map(CityId::new)
            .map_err(|_| Error::Config(format!("too many cities: {}", sources.len())))?;
        let before = records.len();
        load_city(city, &source.path, &mut records)?;
        tracing::info!(
            city = %source.name,
            path = %source.path.display(),
            rows = records.len() - before,
            "loaded city"
        );
        names.push(source.name.clone());
    }

    Ok(Dataset::new(names, records)?)
}

/// Column positions resolved from the header row.
struct ColumnMap {
    start_time: usize,
    end_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| {
            find(name).ok_or_else(|| Error::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
        };

        Ok(Self {
            start_time: require(columns::START_TIME)?,
            end_time: require(columns::END_TIME)?,
            trip_duration: require(columns::TRIP_DURATION)?,
            start_station: require(columns::START_STATION)?,
            end_station: require(columns::END_STATION)?,
            user_type: find(columns::USER_TYPE),
            gender: find(columns::GENDER),
            birth_year: find(columns::BIRTH_YEAR),
        })
    }
}

/// Parses the cells of one CSV row, reporting errors against file and line.
struct RowReader<'a> {
    path: &'a Path,
    line: u64,
    row: &'a StringRecord,
}

impl RowReader<'_> {
    fn optional(&self, index: Option<usize>) -> Option<&str> {
        index
            .and_then(|i| self.row.get(i))
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
    }

    fn required(&self, index: usize, column: &'static str) -> Result<&str> {
        self.optional(Some(index)).ok_or_else(|| Error::MissingField {
            path: self.path.to_path_buf(),
            line: self.line,
            column,
        })
    }

    fn timestamp(&self, index: usize, column: &'static str) -> Result<NaiveDateTime> {
        let value = self.required(index, column)?;
        TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .ok_or_else(|| Error::InvalidTimestamp {
                path: self.path.to_path_buf(),
                line: self.line,
                column,
                value: value.to_string(),
            })
    }

    fn invalid_number(&self, column: &'static str, value: &str) -> Error {
        Error::InvalidNumber {
            path: self.path.to_path_buf(),
            line: self.line,
            column,
            value: value.to_string(),
        }
    }

    fn duration(&self, index: usize) -> Result<f64> {
        let column = columns::TRIP_DURATION;
        let value = self.required(index, column)?;
        match value.parse::<f64>() {
            Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(seconds),
            _ => Err(self.invalid_number(column, value)),
        }
    }

    /// Birth years appear as floats (`1989.0`) in some published logs.
    fn birth_year(&self, index: Option<usize>) -> Result<Option<u16>> {
        let column = columns::BIRTH_YEAR;
        let Some(value) = self.optional(index) else {
            return Ok(None);
        };
        match value.parse::<f64>() {
            Ok(year) if year.is_finite() && year >= 1.0 && year <= f64::from(u16::MAX) => {
                Ok(Some(year.round() as u16))
            }
            _ => Err(self.invalid_number(column, value)),
        }
    }
}

/// Append the records of one city file to `out`.
pub fn load_city(city: CityId, path: &Path, out: &mut Vec<TripRecord>) -> Result<()> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_error = |source: csv::Error| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers = reader.headers().map_err(csv_error)?.clone();
    let cols = ColumnMap::from_headers(&headers, path)?;

    let mut row = StringRecord::new();
    let mut line = 0u64;
    while reader.read_record(&mut row).map_err(csv_error)? {
        // 1-based data line; the header is not counted
        line += 1;
        let cells = RowReader {
            path,
            line,
            row: &row,
        };

        out.push(TripRecord {
            city,
            start_time: cells.timestamp(cols.start_time, columns::START_TIME)?,
            end_time: cells.timestamp(cols.end_time, columns::END_TIME)?,
            trip_duration: cells.duration(cols.trip_duration)?,
            start_station: cells.required(cols.start_station, columns::START_STATION)?.to_string(),
            end_station: cells.required(cols.end_station, columns::END_STATION)?.to_string(),
            user_type: cells.optional(cols.user_type).map(UserType::from_label).unwrap_or_default(),
            gender: cells.optional(cols.gender).map(Gender::from_label).unwrap_or_default(),
            birth_year: cells.birth_year(cols.birth_year)?,
        });
    }

    Ok(())
}
