//! Filter kernels: the order-preserving map-and-select behind every
//! predicate copy.

use crate::dispatch::{FilterStrategy, IndexedFilter, ParallelFilter, SequentialFilter};
use crate::range::{ContiguousRange, InputRange, OutputCursor};

impl<S, St, D, F, P, O> FilterStrategy<S, St, D, F, P, O> for SequentialFilter
where
    S: InputRange,
    St: InputRange,
    D: OutputCursor<O>,
    F: Fn(S::Item) -> O,
    P: Fn(&St::Item) -> bool,
{
    fn transform_if(src: S, stencil: St, mut dst: D, map: F, pred: P) -> D {
        for (value, key) in src.into_cursor().zip(stencil.into_cursor()) {
            if pred(&key) {
                dst.put(map(value));
            }
        }
        dst
    }
}

impl<S, St, D, F, P, O> FilterStrategy<S, St, D, F, P, O> for IndexedFilter
where
    S: ContiguousRange,
    S::Item: Clone,
    St: ContiguousRange,
    D: OutputCursor<O>,
    F: Fn(S::Item) -> O,
    P: Fn(&St::Item) -> bool,
{
    #[inline]
    fn transform_if(src: S, stencil: St, mut dst: D, map: F, pred: P) -> D {
        indexed_filter(src.as_slice(), stencil.as_slice(), &mut dst, &map, &pred);
        dst
    }
}

/// Tests `keys[i]`, writes `map(values[i].clone())` on success.
#[inline]
pub(crate) fn indexed_filter<T, K, O, D, F, P>(values: &[T], keys: &[K], dst: &mut D, map: &F, pred: &P)
where
    T: Clone,
    D: OutputCursor<O>,
    F: Fn(T) -> O,
    P: Fn(&K) -> bool,
{
    for (value, key) in values.iter().zip(keys) {
        if pred(key) {
            dst.put(map(value.clone()));
        }
    }
}

#[cfg(feature = "parallel")]
impl<S, St, D, F, P, O> FilterStrategy<S, St, D, F, P, O> for ParallelFilter
where
    S: ContiguousRange,
    S::Item: Clone + Send + Sync,
    St: ContiguousRange,
    St::Item: Sync,
    D: crate::range::ContiguousCursor<O>,
    F: Fn(S::Item) -> O + Sync,
    P: Fn(&St::Item) -> bool + Sync,
    O: Send,
{
    fn transform_if(src: S, stencil: St, mut dst: D, map: F, pred: P) -> D {
        use rayon::prelude::*;
        use tracing::debug;

        use crate::range::ContiguousCursor;

        let values = src.as_slice();
        let keys = stencil.as_slice();
        let n = values.len().min(keys.len());
        let config = crate::config::ParallelConfig::current();
        if n < config.sequential_cutoff {
            debug!(len = n, cutoff = config.sequential_cutoff, "parallel-filter below cutoff, filtering in place");
            indexed_filter(values, keys, &mut dst, &map, &pred);
            return dst;
        }

        // Rayon's collect keeps source order across chunks.
        let staged: Vec<O> = values[..n]
            .par_iter()
            .zip(keys[..n].par_iter())
            .with_min_len(config.min_len)
            .filter(|(_, key)| pred(*key))
            .map(|(value, _)| map(value.clone()))
            .collect();

        let written = staged.len();
        for (slot, value) in dst.unwritten()[..written].iter_mut().zip(staged) {
            *slot = value;
        }
        dst.advance(written);
        dst
    }
}

#[cfg(not(feature = "parallel"))]
impl<S, St, D, F, P, O> FilterStrategy<S, St, D, F, P, O> for ParallelFilter
where
    S: ContiguousRange,
    S::Item: Clone,
    St: ContiguousRange,
    D: OutputCursor<O>,
    F: Fn(S::Item) -> O,
    P: Fn(&St::Item) -> bool,
{
    #[inline]
    fn transform_if(src: S, stencil: St, dst: D, map: F, pred: P) -> D {
        <IndexedFilter as FilterStrategy<S, St, D, F, P, O>>::transform_if(src, stencil, dst, map, pred)
    }
}
