//! Configuration validation.
//!
//! Collects every error into a single `ConfigError` instead of stopping
//! at the first one.

mod helpers;


use crate::schema::ScribeConfig;
use scribe_common::ConfigError;

use helpers::{validate_not_blank, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ScribeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "keyboard.debounce_ms",
        config.keyboard.debounce_ms,
        1,
        1000,
    );
    validate_not_blank(&mut errors, "webview.assets_dir", &config.webview.assets_dir);
    validate_not_blank(&mut errors, "webview.entry", &config.webview.entry);
    if let Some(placeholder) = &config.editor.placeholder {
        validate_not_blank(&mut errors, "editor.placeholder", placeholder);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
