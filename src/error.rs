//! Error types.
//!
//! The algorithms themselves never fail: precondition violations are the
//! caller's responsibility and kernel panics propagate as they are. The only
//! fallible surface is runtime configuration.

use alloc::string::String;

use thiserror::Error;

/// Rejected parallel-kernel configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable did not parse as an unsigned integer.
    #[error("invalid value for {var}: {value:?} (expected an unsigned integer)")]
    InvalidValue { var: &'static str, value: String },

    /// `min_len` of zero would let rayon split down to empty chunks.
    #[error("min_len must be at least 1")]
    ZeroMinLen,

    /// `install` was called after the configuration was already fixed.
    #[error("parallel configuration already installed")]
    AlreadyInstalled,
}
