//! Scribe configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults, so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scribe_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ScribeConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use scribe_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// Validation problems are logged by the loader and the parsed values are
/// kept; only a missing override file or a parse failure is an error.
pub fn load_config(path: Option<&Path>) -> Result<ScribeConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ScribeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
