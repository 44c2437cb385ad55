//! Copy kernels.

use crate::dispatch::{BlockCopy, CopyStrategy, ElementwiseCopy, ParallelCopy};
use crate::range::{ContiguousCursor, ContiguousRange, InputRange, OutputCursor};

impl<S, D> CopyStrategy<S, D> for ElementwiseCopy
where
    S: InputRange,
    D: OutputCursor<S::Item>,
{
    #[inline]
    fn copy(src: S, mut dst: D) -> D {
        for value in src.into_cursor() {
            dst.put(value);
        }
        dst
    }
}

impl<S, D> CopyStrategy<S, D> for BlockCopy
where
    S: ContiguousRange,
    S::Item: Clone,
    D: ContiguousCursor<S::Item>,
{
    #[inline]
    fn copy(src: S, mut dst: D) -> D {
        block_copy(src.as_slice(), &mut dst);
        dst
    }
}

/// `clone_from_slice` into the unwritten tail of `dst`.
///
/// Panics if `dst` has fewer than `src.len()` slots left.
#[inline]
pub(crate) fn block_copy<T, D>(src: &[T], dst: &mut D)
where
    T: Clone,
    D: ContiguousCursor<T>,
{
    let n = src.len();
    dst.unwritten()[..n].clone_from_slice(src);
    dst.advance(n);
}

#[cfg(feature = "parallel")]
impl<S, D> CopyStrategy<S, D> for ParallelCopy
where
    S: ContiguousRange,
    S::Item: Clone + Send + Sync,
    D: ContiguousCursor<S::Item>,
{
    fn copy(src: S, mut dst: D) -> D {
        use rayon::prelude::*;
        use tracing::debug;

        let values = src.as_slice();
        let n = values.len();
        let config = crate::config::ParallelConfig::current();
        if n < config.sequential_cutoff {
            debug!(len = n, cutoff = config.sequential_cutoff, "parallel-copy below cutoff, copying in place");
            block_copy(values, &mut dst);
            return dst;
        }

        dst.unwritten()[..n]
            .par_iter_mut()
            .zip(values.par_iter())
            .with_min_len(config.min_len)
            .for_each(|(slot, value)| slot.clone_from(value));
        dst.advance(n);
        dst
    }
}

#[cfg(not(feature = "parallel"))]
impl<S, D> CopyStrategy<S, D> for ParallelCopy
where
    S: ContiguousRange,
    S::Item: Clone,
    D: ContiguousCursor<S::Item>,
{
    #[inline]
    fn copy(src: S, dst: D) -> D {
        <BlockCopy as CopyStrategy<S, D>>::copy(src, dst)
    }
}
