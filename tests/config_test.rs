//! Tests for the process-wide parallel configuration.
//!
//! Installation is global, so this binary installs exactly once.

#![cfg(feature = "parallel")]

use tola_seq::config::{MIN_LEN_VAR, SEQUENTIAL_CUTOFF_VAR};
use tola_seq::{ConfigError, ParallelConfig};

#[test]
fn test_install_then_already_installed() {
    let config = ParallelConfig::DEFAULT.with_min_len(8).with_sequential_cutoff(32);
    config.install().unwrap();
    assert_eq!(*ParallelConfig::current(), config);

    let again = ParallelConfig::DEFAULT.install();
    assert!(matches!(again, Err(ConfigError::AlreadyInstalled)));
    assert_eq!(ParallelConfig::current().min_len, 8);
}

#[test]
fn test_lookup_overrides_defaults() {
    let config = ParallelConfig::from_lookup(|var| match var {
        v if v == MIN_LEN_VAR => Some("64".into()),
        v if v == SEQUENTIAL_CUTOFF_VAR => Some(" 256 ".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config, ParallelConfig { min_len: 64, sequential_cutoff: 256 });
}

#[test]
fn test_lookup_rejects_garbage() {
    let err = ParallelConfig::from_lookup(|var| (var == MIN_LEN_VAR).then(|| "lots".into())).unwrap_err();
    match err {
        ConfigError::InvalidValue { var, value } => {
            assert_eq!(var, MIN_LEN_VAR);
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_zero_min_len_rejected() {
    let err = ParallelConfig::DEFAULT.with_min_len(0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::ZeroMinLen));
    assert!(err.to_string().contains("min_len"));
}
