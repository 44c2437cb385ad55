//! # Layer 0: Primitives
//!
//! - `bool.rs`: Type-level boolean logic (Present/Absent) used to compute
//!   strategy types from capability tags.

pub mod bool;

pub use bool::{Absent, And, Bool, If, Not, Or, Present};
