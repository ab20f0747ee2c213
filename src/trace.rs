//! Diagnostic tracing of stream traversals.
//!
//! Tracing is opt-in per call: a [`TraceConfig`] is handed to
//! [`LazyStream::traced`](crate::stream::LazyStream::traced), and every
//! internal step of the traversal then emits a `tracing` event under the
//! [`TRACE_TARGET`] target. There is no process-wide switch, so the plain
//! stream methods stay silent and referentially transparent.
//!
//! Events are only visible when a subscriber is installed and accepts the
//! `TRACE` level for [`TRACE_TARGET`], e.g. `RUST_LOG=lazy_stream::trace=trace`.
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::stream::LazyStream;
//! use lazy_stream::trace::TraceConfig;
//!
//! let stream = LazyStream::of(vec![1, 2, 3]);
//! let traced = stream.traced(&TraceConfig::enabled()).take(2).to_list_eager();
//! assert_eq!(traced, stream.take(2).to_list_eager());
//! ```

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Target of every event emitted by traced traversals.
pub const TRACE_TARGET: &str = "lazy_stream::trace";

/// Environment variable read by [`TraceConfig::from_env`].
pub const TRACE_ENV_VARIABLE: &str = "LAZY_STREAM_TRACE";

/// Whether traversal steps are traced.
///
/// The default is disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceConfig {
    enabled: bool,
}

impl TraceConfig {
    /// A configuration that traces every step.
    #[inline]
    #[must_use]
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// A configuration that traces nothing.
    #[inline]
    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Returns whether steps are traced.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Reads the toggle from `LAZY_STREAM_TRACE`.
    ///
    /// An unset variable yields the disabled configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable is set to something that is
    /// not a boolean spelling, or is not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(TRACE_ENV_VARIABLE) {
            Ok(value) => value.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::disabled()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                variable: TRACE_ENV_VARIABLE,
            }),
        }
    }

    /// Emits one traversal step.
    #[inline]
    pub(crate) fn step(self, operation: &'static str, index: usize) {
        if self.enabled {
            tracing::trace!(target: TRACE_TARGET, operation, index, "step");
        }
    }

    /// Emits the end of a traversal.
    #[inline]
    pub(crate) fn finish(self, operation: &'static str, reason: &'static str) {
        if self.enabled {
            tracing::trace!(target: TRACE_TARGET, operation, reason, "finish");
        }
    }
}

impl FromStr for TraceConfig {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Ok(Self::enabled()),
            "0" | "false" | "off" | "no" => Ok(Self::disabled()),
            _ => Err(ConfigError::InvalidToggle {
                value: value.to_string(),
            }),
        }
    }
}
