//! Application configuration. Storage backend and paging defaults.

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Name of the JSON catalog file inside `data_dir`.
pub const CATALOG_FILE: &str = "catalog.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    Json,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Backend: `memory` or `json`. Read from CATALOGO_STORE.
    #[serde(default)]
    pub store: Option<StoreKind>,

    /// Directory holding the JSON catalog. Read from CATALOGO_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Page size when a caller does not pick one. Read from CATALOGO_DEFAULT_PER_PAGE.
    #[serde(default)]
    pub default_per_page: Option<u32>,
}

impl AppConfig {
    /// Any unreadable key fails the whole load.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::from_sources(
            config::Environment::with_prefix("CATALOGO"),
            std::env::var("CATALOGO_CONFIG").ok(),
        )
    }

    fn from_sources(
        env: config::Environment,
        file: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder().add_source(env);
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn store_or_default(&self) -> StoreKind {
        self.store.unwrap_or_default()
    }

    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir_or_default().join(CATALOG_FILE)
    }

    /// Falls back to DEFAULT_PER_PAGE when unset or zero.
    pub fn default_per_page_or_default(&self) -> u32 {
        self.default_per_page
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PER_PAGE)
    }
}
