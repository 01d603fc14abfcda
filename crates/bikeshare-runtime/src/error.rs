use std::fmt;
use std::path::PathBuf;

/// Result type for bikeshare-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring or loading the dataset.
///
/// Every load error is fatal: the explorer never starts with a partial
/// dataset.
#[derive(Debug)]
pub enum Error {
    /// Source file missing or unreadable
    Io { path: PathBuf, source: std::io::Error },

    /// Malformed CSV framing (bad quoting, ragged rows, invalid UTF-8)
    Csv { path: PathBuf, source: csv::Error },

    /// Required column absent from the header row
    MissingColumn { path: PathBuf, column: &'static str },

    /// Required cell is empty
    MissingField {
        path: PathBuf,
        line: u64,
        column: &'static str,
    },

    /// Timestamp cell does not parse
    InvalidTimestamp {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },

    /// Numeric cell does not parse or is out of range
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },

    /// Configuration error
    Config(String),

    /// Loaded records do not form a valid dataset
    Dataset(bikeshare_engine::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "Cannot read {}: {}", path.display(), source)
            }
            Error::Csv { path, source } => {
                write!(f, "Malformed CSV in {}: {}", path.display(), source)
            }
            Error::MissingColumn { path, column } => {
                write!(f, "{} has no '{}' column", path.display(), column)
            }
            Error::MissingField { path, line, column } => write!(
                f,
                "{}:{}: required field '{}' is empty",
                path.display(),
                line,
                column
            ),
            Error::InvalidTimestamp {
                path,
                line,
                column,
                value,
            } => write!(
                f,
                "{}:{}: invalid timestamp in '{}': {:?}",
                path.display(),
                line,
                column,
                value
            ),
            Error::InvalidNumber {
                path,
                line,
                column,
                value,
            } => write!(
                f,
                "{}:{}: invalid number in '{}': {:?}",
                path.display(),
                line,
                column,
                value
            ),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Dataset(err) => write!(f, "Dataset error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Csv { source, .. } => Some(source),
            Error::Dataset(err) => Some(err),
            Error::MissingColumn { .. }
            | Error::MissingField { .. }
            | Error::InvalidTimestamp { .. }
            | Error::InvalidNumber { .. }
            | Error::Config(_) => None,
        }
    }
}

impl From<bikeshare_engine::Error> for Error {
    fn from(err: bikeshare_engine::Error) -> Self {
        Error::Dataset(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
