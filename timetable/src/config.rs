//! Application configuration for the `timetable` binary.

use std::path::PathBuf;

use crate::domain::BellSchedule;

/// Environment variable naming the catalog file.
pub const CATALOG_ENV: &str = "TIMETABLE_CATALOG";

/// Environment variable naming the user's timetable file.
pub const STORE_ENV: &str = "TIMETABLE_STORE";

/// Where the binary finds its data, and how periods map onto the clock.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON file listing every course on offer.
    pub catalog_path: PathBuf,

    /// JSON file holding the user's enrolled courses.
    pub store_path: PathBuf,

    /// Period grid used to interpret `--period` arguments.
    pub bells: BellSchedule,
}

impl AppConfig {
    /// Create a configuration with the given paths and the default bells.
    pub fn new(catalog_path: impl Into<PathBuf>, store_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            store_path: store_path.into(),
            bells: BellSchedule::default(),
        }
    }

    /// Read paths from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            catalog_path: lookup(CATALOG_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            store_path: lookup(STORE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            bells: defaults.bells,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new("catalog.json", "timetable.json")
    }
}
