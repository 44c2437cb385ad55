//! # Algorithms
//!
//! ```text
//! copy_if ──> copy_if_stencil ──> copy_when_by ──> transform_if ──> SelectFilter ──> kernel
//! copy_when ────────────────────┘
//! copy ─────────────────────────────────────────────────────────> SelectCopy ────> kernel
//! ```
//!
//! Every predicate copy funnels into one `transform_if` call with the
//! identity mapping.

pub mod copy;
pub mod copy_if;
pub mod copy_when;
pub mod filter;

pub use copy::copy;
pub use copy_if::{copy_if, copy_if_stencil};
pub use copy_when::{copy_when, copy_when_by};
pub use filter::transform_if;
