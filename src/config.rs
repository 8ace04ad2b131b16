//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! We try to find a chat-outline.toml, and if present we load settings from there. This provides
//! the site identity along with the extraction, export and scheduling thresholds. Missing fields
//! fall back to their defaults, and a file that fails to parse is reported and ignored.

use facet::Facet;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "chat-outline.toml";

/// Default minimum length of a code block, shorter blocks count as inline snippets.
pub const MIN_CODE_LEN: usize = 10;
/// Default number of characters kept from a code block's text.
pub const CODE_PREVIEW_LEN: usize = 100;
/// Default number of characters kept from any text leaving the crate.
pub const EXPORT_PREVIEW_LEN: usize = 50;
/// Default quiet period before a re-extraction pass fires.
pub const DEBOUNCE_MS: u64 = 500;
/// Default wait for filesystem events between checks of the quiet period.
pub const POLL_INTERVAL_MS: u64 = 100;

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from chat-outline.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "localhost".to_string())]
    /// Host identifier used to select an extraction strategy.
    pub site: String,
    #[facet(default = 10)]
    /// Code blocks with fewer characters are skipped.
    pub min_code_len: usize,
    #[facet(default = 100)]
    /// Characters kept from a code block before an ellipsis.
    pub code_preview_len: usize,
    #[facet(default = 50)]
    /// Characters kept from unit text and section titles in exported snapshots.
    pub export_preview_len: usize,
    #[facet(default = 500)]
    /// Quiet period in milliseconds before a watched document is re-extracted.
    pub debounce_ms: u64,
    #[facet(default = 100)]
    /// Milliseconds to wait for filesystem events before checking the quiet period again.
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: "localhost".to_string(),
            min_code_len: MIN_CODE_LEN,
            code_preview_len: CODE_PREVIEW_LEN,
            export_preview_len: EXPORT_PREVIEW_LEN,
            debounce_ms: DEBOUNCE_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from chat-outline.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from the given path, using defaults when it is absent or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Extraction thresholds handed to the strategies.
    pub fn policy(&self) -> Policy {
        Policy {
            min_code_len: self.min_code_len,
            code_preview_len: self.code_preview_len,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Thresholds applied while classifying content.
pub struct Policy {
    /// Code blocks with fewer characters are skipped.
    pub min_code_len: usize,
    /// Characters kept from a code block before an ellipsis.
    pub code_preview_len: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_code_len: MIN_CODE_LEN,
            code_preview_len: CODE_PREVIEW_LEN,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
