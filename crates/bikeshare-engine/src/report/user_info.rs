use bikeshare_types::{Gender, TripRecord, UserType};
use std::collections::BTreeMap;

/// A count and its share of the projection, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountShare {
    pub count: usize,
    /// `None` when the projection has no rows.
    pub percent: Option<f64>,
}

impl CountShare {
    fn of(count: usize, total: usize) -> Self {
        let percent = (total > 0).then(|| 100.0 * count as f64 / total as f64);
        Self { count, percent }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: u16,
    pub most_recent: u16,
    /// Smallest year among those sharing the highest count.
    pub most_common: u16,
}

impl BirthYearStats {
    /// `None` when no row carries a birth year.
    pub fn compute(rows: &[&TripRecord]) -> Option<Self> {
        let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
        for year in rows.iter().filter_map(|r| r.birth_year) {
            *counts.entry(year).or_default() += 1;
        }

        let earliest = *counts.keys().next()?;
        let most_recent = *counts.keys().next_back()?;
        let mut most_common = (earliest, 0usize);
        for (&year, &count) in &counts {
            if count > most_common.1 {
                most_common = (year, count);
            }
        }

        Some(Self {
            earliest,
            most_recent,
            most_common: most_common.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub row_count: usize,
    pub subscriber: CountShare,
    pub customer: CountShare,
    pub unknown_user_type: CountShare,
    pub male: CountShare,
    pub female: CountShare,
    pub unknown_gender: CountShare,
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    pub fn compute(rows: &[&TripRecord]) -> Self {
        let total = rows.len();
        let user_type = |wanted: UserType| rows.iter().filter(|r| r.user_type == wanted).count();
        let gender = |wanted: Gender| rows.iter().filter(|r| r.gender == wanted).count();

        Self {
            row_count: total,
            subscriber: CountShare::of(user_type(UserType::Subscriber), total),
            customer: CountShare::of(user_type(UserType::Customer), total),
            unknown_user_type: CountShare::of(user_type(UserType::Unknown), total),
            male: CountShare::of(gender(Gender::Male), total),
            female: CountShare::of(gender(Gender::Female), total),
            unknown_gender: CountShare::of(gender(Gender::Unknown), total),
            birth_years: BirthYearStats::compute(rows),
        }
    }

    pub fn has_birth_years(&self) -> bool {
        self.birth_years.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{at, trip};

    fn user(user_type: UserType, gender: Gender, birth_year: Option<u16>) -> TripRecord {
        let mut record = trip(0, at(2017, 1, 1, 9), "A", "B");
        record.user_type = user_type;
        record.gender = gender;
        record.birth_year = birth_year;
        record
    }

    #[test]
    fn test_counts_and_percentages() {
        let records = vec![
            user(UserType::Subscriber, Gender::Male, Some(1980)),
            user(UserType::Subscriber, Gender::Female, Some(1990)),
            user(UserType::Customer, Gender::Unknown, None),
            user(UserType::Unknown, Gender::Male, Some(1990)),
        ];
        let refs: Vec<&TripRecord> = records.iter().collect();
        let stats = UserStats::compute(&refs);

        assert_eq!(stats.subscriber.count, 2);
        assert_eq!(stats.subscriber.percent, Some(50.0));
        assert_eq!(stats.customer.count, 1);
        assert_eq!(stats.unknown_user_type.percent, Some(25.0));
        assert_eq!(stats.male.count, 2);
        assert_eq!(stats.female.count, 1);
        assert_eq!(stats.unknown_gender.count, 1);

        let years = stats.birth_years.unwrap();
        assert_eq!(years.earliest, 1980);
        assert_eq!(years.most_recent, 1990);
        assert_eq!(years.most_common, 1990);
    }

    #[test]
    fn test_user_type_shares_sum_to_hundred() {
        let records: Vec<TripRecord> = (0..7)
            .map(|i| {
                let kind = match i % 3 {
                    0 => UserType::Subscriber,
                    1 => UserType::Customer,
                    _ => UserType::Unknown,
                };
                user(kind, Gender::Unknown, None)
            })
            .collect();
        let refs: Vec<&TripRecord> = records.iter().collect();
        let stats = UserStats::compute(&refs);

        let sum: f64 = [stats.subscriber, stats.customer, stats.unknown_user_type]
            .iter()
            .filter_map(|s| s.percent)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn test_empty_projection_has_undefined_percentages() {
        let stats = UserStats::compute(&[]);
        assert_eq!(stats.row_count, 0);
        assert_eq!(stats.subscriber.percent, None);
        assert_eq!(stats.customer.percent, None);
        assert_eq!(stats.unknown_user_type.percent, None);
        assert!(!stats.has_birth_years());
    }

    #[test]
    fn test_birth_year_mode_tie_picks_smallest_year() {
        let records = vec![
            user(UserType::Customer, Gender::Male, Some(1995)),
            user(UserType::Customer, Gender::Male, Some(1975)),
        ];
        let refs: Vec<&TripRecord> = records.iter().collect();
        let years = BirthYearStats::compute(&refs).unwrap();
        assert_eq!(years.most_common, 1975);
    }

    #[test]
    fn test_no_birth_years_means_no_year_stats() {
        let records = vec![user(UserType::Subscriber, Gender::Female, None)];
        let refs: Vec<&TripRecord> = records.iter().collect();
        assert!(!UserStats::compute(&refs).has_birth_years());
    }
}
