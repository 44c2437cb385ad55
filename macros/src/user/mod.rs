//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Truthy)]` | on struct/enum | Boolean reading for stencils |

pub mod truthy;

pub use truthy::expand_derive_truthy;
