pub mod explorer;
pub mod report;

pub use explorer::{Explorer, StationsExplorer, TravelTimesExplorer, build_screen_view_model};
pub use report::{build_about, build_durations_report, build_user_info_report, city_names};
