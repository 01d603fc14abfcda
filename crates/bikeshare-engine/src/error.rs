use bikeshare_types::CityId;
use std::fmt;

/// Result type for bikeshare-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling a dataset
#[derive(Debug)]
pub enum Error {
    /// A record refers to a city that is not in the registry
    UnknownCity { city: CityId, registered: usize },

    /// The registry has more cities than a `CityId` can address
    TooManyCities(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCity { city, registered } => write!(
                f,
                "Record refers to city {} but only {} cities are registered",
                city, registered
            ),
            Error::TooManyCities(count) => write!(f, "Too many cities configured: {}", count),
        }
    }
}

impl std::error::Error for Error {}
