//! # Strategy kernels
//!
//! One `CopyStrategy` / `FilterStrategy` impl per strategy marker from
//! [`crate::dispatch`]. The bounds on each impl are the capabilities that
//! strategy needs; the selector only ever routes a call here when the tags
//! promise them.
//!
//! ```text
//! kernel/
//! ├── copy.rs    - ElementwiseCopy, BlockCopy, ParallelCopy
//! └── filter.rs  - SequentialFilter, IndexedFilter, ParallelFilter
//! ```
//!
//! Without the `parallel` feature the `Parallel*` strategies run their
//! single-threaded counterparts.

pub mod copy;
pub mod filter;
