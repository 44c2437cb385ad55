#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: device buffers, single-pass self-filtering
// - parallel: rayon kernels and ParallelConfig
// - derive: #[derive(Truthy)]

//! # tola-seq
//!
//! Sequence algorithms whose implementation is chosen at compile time from
//! the **capabilities** of the sequences involved.
//!
//! ## Architecture
//!
//! Every range and cursor carries a capability tag: a traversal class and a
//! residency.
//!
//! ```text
//! Traversal:  SinglePass < Forward < Bidirectional < RandomAccess
//! Residency:  Host | Device
//! ```
//!
//! Selectors map tag tuples to strategy types through type-level booleans,
//! so the choice costs nothing at runtime and an unsupported combination
//! fails to compile.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), If, And, Or, Not                        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities                                            |
//! |  - Tag<Traversal, Residency>, Capability, ranges, cursors         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatch + Kernels                                      |
//! |  - SelectCopy, SelectFilter, SelectSelfStencil                    |
//! |  - Elementwise / Block / Parallel copy, Sequential / Indexed /    |
//! |    Parallel filter                                                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Algorithms                                              |
//! |  - copy, copy_when(_by), copy_if(_stencil), transform_if          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_seq::prelude::*;
//!
//! // Unconditional copy between host slices: block strategy.
//! let mut out = [0; 5];
//! copy(&[3, 0, 5, 0, 7][..], SliceCursor::new(&mut out));
//!
//! // Filter by a stencil with the default "is truthy" predicate.
//! let mut picked = Vec::new();
//! copy_when(&['a', 'b', 'c'][..], &[1, 0, 1][..], back_inserter(&mut picked));
//! assert_eq!(picked, ['a', 'c']);
//!
//! // Filter a sequence by its own values.
//! let mut nonzero = Vec::new();
//! copy_if(&out[..], back_inserter(&mut nonzero), |x: &i32| *x != 0);
//! assert_eq!(nonzero, [3, 5, 7]);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// Allow `::tola_seq` paths from the derive macro to resolve inside the crate.
extern crate self as tola_seq;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capabilities and sequences
// =============================================================================
pub mod tag;
pub mod range;
#[cfg(feature = "alloc")]
pub mod device;
pub mod func;

// =============================================================================
// Layer 2: Dispatch and kernels
// =============================================================================
pub mod dispatch;
pub mod kernel;

#[cfg(feature = "parallel")]
pub mod config;
#[cfg(feature = "alloc")]
pub mod error;

// =============================================================================
// Layer 3: Algorithms
// =============================================================================
pub mod algo;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use algo::{copy, copy_if, copy_if_stencil, copy_when, copy_when_by, transform_if};
pub use dispatch::{CopyStrategyFor, FilterStrategyFor, SelfStencilFor, Strategy};
pub use func::Truthy;
pub use tag::{Capability, TagOf};

#[cfg(feature = "parallel")]
pub use config::ParallelConfig;
#[cfg(feature = "alloc")]
pub use device::DeviceVec;
#[cfg(feature = "alloc")]
pub use error::ConfigError;

// Re-export proc-macros
#[cfg(feature = "derive")]
pub use macros::Truthy;

/// Common items for the algorithms.
pub mod prelude {
    pub use crate::algo::{copy, copy_if, copy_if_stencil, copy_when, copy_when_by, transform_if};
    pub use crate::func::Truthy;
    pub use crate::range::{
        back_inserter, BackInserter, Bidirectional, Forward, InputRange, OutputCursor, SinglePass,
        SliceCursor,
    };
    pub use crate::tag::Capability;

    #[cfg(feature = "alloc")]
    pub use crate::device::DeviceVec;
    #[cfg(feature = "derive")]
    pub use macros::Truthy;
}
