use bikeshare_types::{CityId, TripRecord};
use std::mem::size_of;

use crate::{Error, Result};

/// All loaded trip records plus the registry of city names they refer to.
///
/// Immutable once built. Views borrow it and derive their own filtered
/// projections, so a single instance is shared by every session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    cities: Vec<String>,
    records: Vec<TripRecord>,
}

impl Dataset {
    /// Build a dataset, checking that every record's city is registered.
    pub fn new(cities: Vec<String>, records: Vec<TripRecord>) -> Result<Self> {
        if cities.len() > usize::from(u16::MAX) + 1 {
            return Err(Error::TooManyCities(cities.len()));
        }

        if let Some(bad) = records.iter().find(|r| r.city.index() >= cities.len()) {
            return Err(Error::UnknownCity {
                city: bad.city,
                registered: cities.len(),
            });
        }

        Ok(Self { cities, records })
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// City ids in registration (load) order.
    pub fn city_ids(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.cities.len()).map(|i| CityId::new(i as u16))
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn city_name(&self, city: CityId) -> Option<&str> {
        self.cities.get(city.index()).map(String::as_str)
    }

    pub fn city_names(&self) -> &[String] {
        &self.cities
    }

    /// Number of records per city, in registration order.
    pub fn city_counts(&self) -> Vec<(CityId, usize)> {
        let mut counts = vec![0usize; self.cities.len()];
        for record in &self.records {
            counts[record.city.index()] += 1;
        }
        self.city_ids().zip(counts).collect()
    }

    /// Records whose city is in `included`, in dataset order.
    pub fn filter_by_cities(&self, included: &[CityId]) -> Vec<&TripRecord> {
        let mut mask = vec![false; self.cities.len()];
        for city in included {
            if let Some(slot) = mask.get_mut(city.index()) {
                *slot = true;
            }
        }

        self.records
            .iter()
            .filter(|r| mask[r.city.index()])
            .collect()
    }

    /// Rough in-memory footprint: inline record size plus owned string bytes.
    pub fn approx_memory_bytes(&self) -> usize {
        let inline = self.records.capacity() * size_of::<TripRecord>();
        let heap: usize = self.records.iter().map(TripRecord::heap_bytes).sum();
        let names: usize = self.cities.iter().map(|c| c.capacity() + size_of::<String>()).sum();
        inline + heap + names
    }
}
