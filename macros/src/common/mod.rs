// Common utilities shared between macros
//
// This module contains:
// - parse_utils: attribute marker helpers

mod parse_utils;

pub use parse_utils::*;
