//! Capture configuration and the process-wide default tracer
//!
//! Constructors never read a mutable global. They read a [`Tracer`], either
//! one the caller built from a [`TraceConfig`] or the default tracer, which
//! can be configured exactly once and is frozen on first use.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of frames captured per error
pub const DEFAULT_MAX_DEPTH: usize = 32;

static DEFAULT_TRACER: OnceCell<Tracer> = OnceCell::new();

/// Errors raised while configuring capture
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A depth of zero would produce empty traces
    #[error("max stack depth must be at least 1")]
    InvalidDepth,

    /// The default tracer was already configured or already used
    #[error("default tracer already initialized with max depth {max_depth}")]
    AlreadyConfigured {
        /// Depth of the tracer that is in effect
        max_depth: usize,
    },
}

/// Capture settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Maximum number of frames kept per snapshot
    pub max_depth: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TraceConfig {
    /// Config with the given depth
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        Ok(())
    }
}

/// Handle every traced error is built through
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracer {
    config: TraceConfig,
}

impl Tracer {
    /// Build a tracer from validated settings
    pub fn from_config(config: TraceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The process-wide default tracer
    ///
    /// If nothing was configured this freezes the default at
    /// [`DEFAULT_MAX_DEPTH`].
    pub fn global() -> &'static Self {
        DEFAULT_TRACER.get_or_init(Self::default)
    }

    /// Settings in effect
    #[must_use]
    pub const fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Maximum frames per snapshot
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.config.max_depth
    }
}

/// Set the default tracer's settings
///
/// Must run once at startup, before any error is built through the default
/// tracer. Later calls fail with [`ConfigError::AlreadyConfigured`].
pub fn configure(config: TraceConfig) -> Result<(), ConfigError> {
    let tracer = Tracer::from_config(config)?;
    match DEFAULT_TRACER.set(tracer) {
        Ok(()) => {
            tracing::debug!(max_depth = config.max_depth, "configured default tracer");
            Ok(())
        }
        Err(_) => {
            let max_depth = Tracer::global().max_depth();
            tracing::warn!(
                requested = config.max_depth,
                max_depth,
                "default tracer already initialized"
            );
            Err(ConfigError::AlreadyConfigured { max_depth })
        }
    }
}

/// Set the default tracer's maximum stack depth
pub fn configure_max_depth(max_depth: usize) -> Result<(), ConfigError> {
    configure(TraceConfig::with_max_depth(max_depth))
}
