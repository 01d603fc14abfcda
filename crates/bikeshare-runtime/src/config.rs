use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "bikeshare.toml";
pub const CONFIG_ENV_VAR: &str = "BIKESHARE_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BIKESHARE_CONFIG environment variable (with tilde expansion)
/// 3. ./bikeshare.toml
/// 4. <user config dir>/bikeshare/bikeshare.toml
///
/// Returns `None` when nothing exists and the built-in default applies.
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(expand_tilde(&env_path));
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("bikeshare").join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityConfig {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base directory for relative city paths.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Cities in menu order.
    #[serde(default)]
    pub cities: Vec<CityConfig>,
}

/// A city name paired with its fully resolved source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitySource {
    pub name: String,
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let city = |name: &str, file: &str| CityConfig {
            name: name.to_string(),
            path: PathBuf::from(file),
        };

        Self {
            data_dir: None,
            cities: vec![
                city("Chicago", "chicago.csv"),
                city("New York City", "new_york_city.csv"),
                city("Washington", "washington.csv"),
            ],
        }
    }
}

impl Config {
    /// Load from `path`, or the built-in default when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), cities = config.cities.len(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cities.is_empty() {
            return Err(Error::Config("no cities configured".to_string()));
        }

        let mut seen = HashSet::new();
        for city in &self.cities {
            if city.name.trim().is_empty() {
                return Err(Error::Config("city name must not be empty".to_string()));
            }
            if !seen.insert(city.name.as_str()) {
                return Err(Error::Config(format!("city '{}' is configured twice", city.name)));
            }
        }
        Ok(())
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }

    /// Cities with paths resolved against `data_dir`, in menu order.
    pub fn city_sources(&self) -> Vec<CitySource> {
        self.cities
            .iter()
            .map(|city| {
                let path = expand_tilde(&city.path.to_string_lossy());
                let path = match &self.data_dir {
                    Some(dir) if path.is_relative() => {
                        expand_tilde(&dir.to_string_lossy()).join(path)
                    }
                    _ => path,
                };
                CitySource {
                    name: city.name.clone(),
                    path,
                }
            })
            .collect()
    }
}
