//! On-screen keyboard coordination.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Delay before a keyboard-show signal collapses the format panel,
    /// in milliseconds (valid range: 1-1000).
    pub debounce_ms: u32,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self { debounce_ms: 100 }
    }
}
