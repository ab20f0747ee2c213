//! Error types.
//!
//! Stream operations themselves never fail: absence is `Option` and
//! out-of-range counts are no-ops. The only fallible surface is reading the
//! diagnostic configuration.

use thiserror::Error;

/// Error raised when a trace configuration value cannot be understood.
///
/// # Examples
///
/// ```
/// use lazy_stream::error::ConfigError;
/// use lazy_stream::trace::TraceConfig;
///
/// let error = "maybe".parse::<TraceConfig>().unwrap_err();
/// assert_eq!(
///     error,
///     ConfigError::InvalidToggle {
///         value: "maybe".to_string()
///     }
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The toggle value is not a recognised boolean spelling.
    #[error("invalid trace toggle {value:?}: expected one of 1, 0, true, false, on, off, yes, no")]
    InvalidToggle {
        /// The rejected value
        value: String,
    },

    /// The environment variable holds non-UTF-8 data.
    #[error("environment variable {variable} is not valid unicode")]
    NotUnicode {
        /// Name of the variable
        variable: &'static str,
    },
}
