pub mod explorer;
pub mod menu;
pub mod report;

pub use explorer::layout;
pub use menu::{CityPromptView, MainMenuView};
pub use report::{AboutView, DurationsReportView, UserInfoReportView};
