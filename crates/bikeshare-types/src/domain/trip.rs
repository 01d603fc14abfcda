use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::CityId;

/// Column names of the trip log schema shared by every city file.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    pub const REQUIRED: [&str; 5] = [START_TIME, END_TIME, TRIP_DURATION, START_STATION, END_STATION];
}

/// One row of a city's trip log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub city: CityId,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Seconds, never negative.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: UserType,
    pub gender: Gender,
    pub birth_year: Option<u16>,
}

impl TripRecord {
    /// Heap bytes owned by this record beyond its inline size.
    pub fn heap_bytes(&self) -> usize {
        self.start_station.capacity() + self.end_station.capacity()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserType {
    Subscriber,
    Customer,
    #[default]
    Unknown,
}

impl UserType {
    /// Anything other than the two known labels (including blanks) is unknown.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Subscriber" => UserType::Subscriber,
            "Customer" => UserType::Customer,
            _ => UserType::Unknown,
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            UserType::Subscriber => Some("Subscriber"),
            UserType::Customer => Some("Customer"),
            UserType::Unknown => None,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().unwrap_or("-"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Unknown,
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            Gender::Male => Some("Male"),
            Gender::Female => Some("Female"),
            Gender::Unknown => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().unwrap_or("-"))
    }
}
