use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Configuration for a split run.
///
/// Use [`SplitConfig::builder()`] for ergonomic construction, or
/// [`SplitConfig::default()`] for the literal behaviour (empty items kept,
/// no cancellation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    /// Drop items that are empty after trimming (e.g. from `"a,,b"`).
    pub skip_empty: bool,

    /// Shared flag checked before each fragment is requested.
    #[serde(skip)]
    pub cancellation: Option<Arc<AtomicBool>>,
}

impl SplitConfig {
    /// Start building a config with the builder pattern.
    pub fn builder() -> SplitConfigBuilder {
        SplitConfigBuilder::default()
    }

    /// Parse a config from JSON, e.g. `{"skip_empty": true}`.
    ///
    /// Unknown fields are rejected. The cancellation flag cannot be set
    /// from JSON; attach one afterwards with [`SplitConfigBuilder`] or by
    /// assigning the field.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check whether cancellation has been requested.
    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|cancel| cancel.load(Ordering::Relaxed))
    }
}

/// Builder for [`SplitConfig`].
#[derive(Default)]
pub struct SplitConfigBuilder {
    config: SplitConfig,
}

impl SplitConfigBuilder {
    /// Drop empty items instead of emitting `""`.
    pub fn with_skip_empty(mut self, enabled: bool) -> Self {
        self.config.skip_empty = enabled;
        self
    }

    /// Set a cancellation flag that can be used to abort a run.
    pub fn with_cancellation(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.config.cancellation = Some(cancel);
        self
    }

    /// Build the final [`SplitConfig`].
    pub fn build(self) -> SplitConfig {
        self.config
    }
}
