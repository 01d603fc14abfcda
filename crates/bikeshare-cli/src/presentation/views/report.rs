use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{
    AboutViewModel, DurationsReportViewModel, UserInfoReportViewModel,
};
use bikeshare_engine::CountShare;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn heading(f: &mut fmt::Formatter<'_>, title: &str, color: bool) -> fmt::Result {
    let rule = "-".repeat(title.chars().count());
    if color {
        writeln!(f, "{}\n{}", title.bold().cyan(), rule.dimmed())
    } else {
        writeln!(f, "{}\n{}", title, rule)
    }
}

fn share(value: &CountShare) -> String {
    match value.percent {
        Some(pct) => format!("{} ({:.1}%)", value.count, pct),
        None => format!("{} (n/a)", value.count),
    }
}

// --------------------------------------------------------
// About View
// --------------------------------------------------------

pub struct AboutView<'a> {
    data: &'a AboutViewModel,
    color: bool,
}

impl<'a> AboutView<'a> {
    pub fn new(data: &'a AboutViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl fmt::Display for AboutView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = "US Bikeshare Data Explorer";
        let rule = "-".repeat(title.len());
        writeln!(f, "\n{}", rule)?;
        if self.color {
            writeln!(f, "{}", title.bold())?;
        } else {
            writeln!(f, "{}", title)?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f, "Dataset Size = {}MB", self.data.memory_bytes / 1024 / 1024)?;
        writeln!(f, "Number of Records = {}", self.data.row_count)?;
        for (city, count) in &self.data.cities {
            writeln!(f, "  {}: {}", city, count)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Durations Report View
// --------------------------------------------------------

pub struct DurationsReportView<'a> {
    data: &'a DurationsReportViewModel,
    color: bool,
}

impl<'a> DurationsReportView<'a> {
    pub fn new(data: &'a DurationsReportViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl fmt::Display for DurationsReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        heading(f, "Travel Durations", self.color)?;
        writeln!(f, "Cities: {}", self.data.cities.join(", "))?;
        writeln!(f, "Total travel time = {:.2} hours", self.data.stats.total_hours)?;
        match self.data.stats.mean_seconds {
            Some(mean) => writeln!(f, "Average trip duration = {:.1} sec", mean)?,
            None => writeln!(f, "Average trip duration = n/a")?,
        }

        writeln!(f, "Raw data:")?;
        writeln!(
            f,
            "{:>6}  {:<19}  {:<19}  {:>13}",
            "#", "Start Time", "End Time", "Trip Duration"
        )?;
        if self.data.rows.is_empty() {
            writeln!(f, "{:>6}  (no rows)", "")?;
        }
        for row in &self.data.rows {
            writeln!(
                f,
                "{:>6}  {:<19}  {:<19}  {:>13.1}",
                row.position,
                row.start_time.format(TIMESTAMP_FORMAT).to_string(),
                row.end_time.format(TIMESTAMP_FORMAT).to_string(),
                row.trip_duration
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// User Info Report View
// --------------------------------------------------------

pub struct UserInfoReportView<'a> {
    data: &'a UserInfoReportViewModel,
    color: bool,
}

impl<'a> UserInfoReportView<'a> {
    pub fn new(data: &'a UserInfoReportViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl fmt::Display for UserInfoReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.data.stats;

        writeln!(f)?;
        heading(f, "User Stats", self.color)?;
        writeln!(f, "Cities: {}", self.data.cities.join(", "))?;
        writeln!(f, "Count for user type 'Subscriber' = {}", share(&stats.subscriber))?;
        writeln!(f, "Count for user type 'Customer' = {}", share(&stats.customer))?;
        writeln!(f, "Count of user with unknown type = {}", share(&stats.unknown_user_type))?;
        writeln!(f, "Count for gender 'Male' = {}", share(&stats.male))?;
        writeln!(f, "Count for gender 'Female' = {}", share(&stats.female))?;
        writeln!(f, "Count for unknown gender = {}", share(&stats.unknown_gender))?;

        if let Some(years) = &stats.birth_years {
            writeln!(f, "Earliest year of birth = {}", years.earliest)?;
            writeln!(f, "Most recent year of birth = {}", years.most_recent)?;
            writeln!(f, "Most common year of birth = {}", years.most_common)?;
        }

        writeln!(f, "Raw data:")?;
        writeln!(f, "{:>6}  {:<10}  {:<6}  {:>10}", "#", "User Type", "Gender", "Birth Year")?;
        if self.data.rows.is_empty() {
            writeln!(f, "{:>6}  (no rows)", "")?;
        }
        for row in &self.data.rows {
            let year = row
                .birth_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:>6}  {:<10}  {:<6}  {:>10}",
                row.position,
                row.user_type.to_string(),
                row.gender.to_string(),
                year
            )?;
        }
        Ok(())
    }
}
