//! # Application configuration: `billed.toml`
//!
//! Read once at startup by the web app (the file is embedded at build time)
//! and handed to the UI through the Dioxus context.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5678"   # empty = offline demo store
//!
//! [demo]
//! seed_fixtures = true                 # preload demo bills in the offline store
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`BilledConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Backend base url. Empty selects [`crate::MemoryStore`]. |
//! | [`DemoConfig`] | Offline store options. `seed_fixtures` defaults to **true**. |
//!
//! All sections are optional; a missing or empty file equals the default
//! configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `billed.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BilledConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Backend configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base url of the REST backend, without the `/bills` suffix.
    #[serde(default)]
    pub base_url: String,
}

/// Offline store configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

fn default_seed_fixtures() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: default_seed_fixtures(),
        }
    }
}

impl BilledConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            demo: DemoConfig::default(),
        }
    }

    /// Builder method to toggle the demo fixtures.
    pub fn with_seed_fixtures(mut self, seed: bool) -> Self {
        self.demo.seed_fixtures = seed;
        self
    }

    /// Whether a REST backend is configured.
    pub fn uses_backend(&self) -> bool {
        !self.api.base_url.trim().is_empty()
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "billed.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
