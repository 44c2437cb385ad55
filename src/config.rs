//! Runtime tuning for the rayon kernels.
//!
//! The configuration is process-wide and fixed on first use: either by an
//! explicit [`ParallelConfig::install`] or, lazily, from the environment.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `TOLA_SEQ_MIN_LEN` | `min_len` | 1024 |
//! | `TOLA_SEQ_SEQUENTIAL_CUTOFF` | `sequential_cutoff` | 4096 |

use once_cell::sync::OnceCell;
use tracing::warn;

use crate::error::ConfigError;

pub const MIN_LEN_VAR: &str = "TOLA_SEQ_MIN_LEN";
pub const SEQUENTIAL_CUTOFF_VAR: &str = "TOLA_SEQ_SEQUENTIAL_CUTOFF";

static CONFIG: OnceCell<ParallelConfig> = OnceCell::new();

/// Tuning for `ParallelCopy` and `ParallelFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Smallest chunk rayon may split a slice into.
    pub min_len: usize,
    /// Inputs shorter than this run the sequential kernel instead.
    pub sequential_cutoff: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParallelConfig {
    pub const DEFAULT: Self = Self { min_len: 1024, sequential_cutoff: 4096 };

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_sequential_cutoff(mut self, sequential_cutoff: usize) -> Self {
        self.sequential_cutoff = sequential_cutoff;
        self
    }

    /// Reads `TOLA_SEQ_*` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    /// Unset variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::DEFAULT;
        if let Some(min_len) = parse_var(&lookup, MIN_LEN_VAR)? {
            config.min_len = min_len;
        }
        if let Some(cutoff) = parse_var(&lookup, SEQUENTIAL_CUTOFF_VAR)? {
            config.sequential_cutoff = cutoff;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len == 0 {
            return Err(ConfigError::ZeroMinLen);
        }
        Ok(())
    }

    /// Fixes the process-wide configuration.
    ///
    /// Fails if it was already installed or already read by a kernel.
    pub fn install(self) -> Result<(), ConfigError> {
        self.validate()?;
        CONFIG.set(self).map_err(|_| ConfigError::AlreadyInstalled)
    }

    /// The process-wide configuration.
    ///
    /// First use without a prior `install` reads the environment; an invalid
    /// environment is logged and replaced by the defaults.
    pub fn current() -> &'static Self {
        CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|err| {
                warn!(%err, "invalid parallel configuration, using defaults");
                Self::DEFAULT
            })
        })
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<usize>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}
