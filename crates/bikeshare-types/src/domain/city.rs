use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a city in the configured city list.
///
/// Records carry this id instead of the city name; the name lives in the
/// dataset's city registry. The id is assigned from the source file a record
/// was read from, never from file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(u16);

impl CityId {
    pub fn new(index: u16) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u16> for CityId {
    fn from(index: u16) -> Self {
        Self(index)
    }
}
