pub mod config;
pub mod error;
pub mod loader;

pub use config::{CityConfig, CitySource, Config, resolve_config_path};
pub use error::{Error, Result};
pub use loader::{load, load_city};
