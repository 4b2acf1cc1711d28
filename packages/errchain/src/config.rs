//! Process-wide formatting and capture settings
//!
//! Construction and rendering read a [`Config`]. The `*_with` operations take one
//! explicitly; everything else reads the process-wide slot managed here.
//!
//! The slot is meant to be written once during startup, before the first error
//! is created. Swapping it later is memory-safe, but errors built or rendered
//! concurrently with the swap may observe either configuration.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::call_site::{default_capturer, Capture};

static CONFIG: Lazy<ArcSwap<Config>> = Lazy::new(|| ArcSwap::from_pointee(Config::default()));

/// Errors raised while loading a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not a valid configuration document
    #[error("invalid error-chain configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Formatting and call-site capture settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name reported by [`ChainLogger`](crate::ChainLogger) events
    pub package: Cow<'static, str>,
    /// Record the application call site of every node built while this is set
    #[serde(alias = "caller")]
    pub capture_call_site: bool,
    /// Joins the texts inside one node
    pub messages_separator: Cow<'static, str>,
    /// Joins an upper node and its cause
    #[serde(alias = "error_chain_separator")]
    pub chain_separator: Cow<'static, str>,
    /// Host primitive used when `capture_call_site` is set
    #[serde(skip, default = "default_capturer")]
    pub capturer: Arc<dyn Capture>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: Cow::Borrowed("errchain"),
            capture_call_site: false,
            messages_separator: Cow::Borrowed(", "),
            chain_separator: Cow::Borrowed(" <= "),
            capturer: default_capturer(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("package", &self.package)
            .field("capture_call_site", &self.capture_call_site)
            .field("messages_separator", &self.messages_separator)
            .field("chain_separator", &self.chain_separator)
            .field("capturer", &self.capturer)
            .finish()
    }
}

impl Config {
    /// Parse a JSON document; missing keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `input` is not valid JSON or a key
    /// has the wrong type.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Enable or disable call-site capture
    #[must_use]
    pub fn with_call_site(mut self, enabled: bool) -> Self {
        self.capture_call_site = enabled;
        self
    }

    /// Replace the capture primitive
    #[must_use]
    pub fn with_capturer(mut self, capturer: Arc<dyn Capture>) -> Self {
        self.capturer = capturer;
        self
    }

    /// Replace the in-node separator
    #[must_use]
    pub fn with_messages_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.messages_separator = separator.into();
        self
    }

    /// Replace the between-nodes separator
    #[must_use]
    pub fn with_chain_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.chain_separator = separator.into();
        self
    }
}

/// Snapshot of the process-wide configuration
#[must_use]
pub fn current() -> Arc<Config> {
    CONFIG.load_full()
}

/// Replace the process-wide configuration
///
/// Call during startup, before errors are created.
pub fn install(config: Config) {
    tracing::debug!(
        package = %config.package,
        capture_call_site = config.capture_call_site,
        messages_separator = ?config.messages_separator,
        chain_separator = ?config.chain_separator,
        "error-chain configuration installed"
    );
    CONFIG.store(Arc::new(config));
}

/// Restore the process-wide configuration to [`Config::default`]
pub fn reset() {
    install(Config::default());
}
