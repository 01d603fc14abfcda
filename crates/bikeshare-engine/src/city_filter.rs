use bikeshare_types::CityId;

use crate::Dataset;

/// Multi-select city filter for the interactive views.
///
/// Invariant: at least one city is always included. Toggling off the last
/// included city resets every city to included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityFilter {
    entries: Vec<(CityId, bool)>,
}

impl CityFilter {
    /// All cities included, in the given order.
    pub fn new(cities: impl IntoIterator<Item = CityId>) -> Self {
        Self {
            entries: cities.into_iter().map(|c| (c, true)).collect(),
        }
    }

    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::new(dataset.city_ids())
    }

    /// Flip the city at `position` (0-based menu position).
    ///
    /// Returns `false` and leaves the filter untouched when no city sits at
    /// that position.
    pub fn toggle(&mut self, position: usize) -> bool {
        let Some(entry) = self.entries.get_mut(position) else {
            return false;
        };
        entry.1 = !entry.1;

        if !self.any_included() {
            tracing::debug!("city filter emptied, resetting to all cities");
            self.reset();
        }
        true
    }

    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.1 = true;
        }
    }

    pub fn any_included(&self) -> bool {
        self.entries.iter().any(|(_, included)| *included)
    }

    pub fn is_included(&self, position: usize) -> bool {
        self.entries.get(position).is_some_and(|(_, included)| *included)
    }

    /// Included cities in menu order.
    pub fn included_cities(&self) -> Vec<CityId> {
        self.entries
            .iter()
            .filter(|(_, included)| *included)
            .map(|(city, _)| *city)
            .collect()
    }

    /// Every city with its inclusion flag, in menu order.
    pub fn entries(&self) -> &[(CityId, bool)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single-choice city selection used by the report sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitySelection {
    All,
    One(CityId),
}

impl CitySelection {
    /// Map a 1-based prompt choice (`1` = All, `2..` = cities) to a selection.
    pub fn from_choice(choice: usize, dataset: &Dataset) -> Option<Self> {
        match choice {
            0 => None,
            1 => Some(CitySelection::All),
            n if n - 2 < dataset.city_count() => Some(CitySelection::One(CityId::new((n - 2) as u16))),
            _ => None,
        }
    }

    pub fn cities(self, dataset: &Dataset) -> Vec<CityId> {
        match self {
            CitySelection::All => dataset.city_ids().collect(),
            CitySelection::One(city) => vec![city],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u16]) -> Vec<CityId> {
        raw.iter().copied().map(CityId::new).collect()
    }

    #[test]
    fn test_starts_with_everything_included() {
        let filter = CityFilter::new(ids(&[0, 1, 2]));
        assert_eq!(filter.included_cities(), ids(&[0, 1, 2]));
    }

    #[test]
    fn test_toggle_flips_inclusion() {
        let mut filter = CityFilter::new(ids(&[0, 1, 2]));
        assert!(filter.toggle(1));
        assert_eq!(filter.included_cities(), ids(&[0, 2]));
        assert!(filter.toggle(1));
        assert_eq!(filter.included_cities(), ids(&[0, 1, 2]));
    }

    #[test]
    fn test_toggling_last_city_resets_all() {
        let mut filter = CityFilter::new(ids(&[0, 1, 2]));
        filter.toggle(0);
        filter.toggle(1);
        assert_eq!(filter.included_cities(), ids(&[2]));

        filter.toggle(2);
        assert_eq!(filter.included_cities(), ids(&[0, 1, 2]));
    }

    #[test]
    fn test_unknown_position_is_ignored() {
        let mut filter = CityFilter::new(ids(&[0, 1]));
        assert!(!filter.toggle(5));
        assert_eq!(filter.included_cities(), ids(&[0, 1]));
    }

    #[test]
    fn test_never_empty_over_any_toggle_sequence() {
        let mut filter = CityFilter::new(ids(&[0, 1, 2]));
        for step in 0..50usize {
            filter.toggle((step * 7 + step / 3) % 4);
            assert!(filter.any_included(), "emptied at step {step}");
            assert!(!filter.included_cities().is_empty());
        }
    }

    #[test]
    fn test_single_city_filter_cannot_be_emptied() {
        let mut filter = CityFilter::new(ids(&[0]));
        filter.toggle(0);
        assert!(filter.is_included(0));
    }

    #[test]
    fn test_selection_from_choice() {
        let ds = Dataset::new(vec!["A".into(), "B".into()], vec![]).unwrap();
        assert_eq!(CitySelection::from_choice(1, &ds), Some(CitySelection::All));
        assert_eq!(
            CitySelection::from_choice(3, &ds),
            Some(CitySelection::One(CityId::new(1)))
        );
        assert_eq!(CitySelection::from_choice(0, &ds), None);
        assert_eq!(CitySelection::from_choice(4, &ds), None);
        assert_eq!(CitySelection::All.cities(&ds), ids(&[0, 1]));
    }
}
