//! The filter primitive.

use tracing::trace;

use crate::dispatch::{FilterStrategy, FilterStrategyFor, Strategy};
use crate::range::{InputRange, OutputCursor};
use crate::tag::TagOf;

/// Writes `map(src[i])` to `dst` for every `i` where `pred(&stencil[i])`
/// holds, in source order, and returns the cursor after the last write.
///
/// Elements whose stencil entry fails the predicate are neither mapped nor
/// counted. Iteration stops at the shorter of `src` and `stencil`.
///
/// The kernel is chosen at compile time from the tags of all three
/// sequences; see [`SelectFilter`](crate::dispatch::SelectFilter).
///
/// ```
/// use tola_seq::transform_if;
/// use tola_seq::range::back_inserter;
///
/// let mut out = Vec::new();
/// transform_if(&[1, 2, 3][..], &[0, 1, 1][..], back_inserter(&mut out), |x: i32| x * 10, |k: &i32| *k == 1);
/// assert_eq!(out, [20, 30]);
/// ```
#[inline]
pub fn transform_if<S, St, D, F, P, O>(src: S, stencil: St, dst: D, map: F, pred: P) -> D
where
    S: InputRange,
    St: InputRange,
    D: OutputCursor<O>,
    F: Fn(S::Item) -> O,
    P: Fn(&St::Item) -> bool,
    FilterStrategyFor<S, St, D>: FilterStrategy<S, St, D, F, P, O>,
{
    trace!(
        strategy = <FilterStrategyFor<S, St, D> as Strategy>::NAME,
        src = ?<TagOf<S>>::names(),
        stencil = ?<TagOf<St>>::names(),
        dst = ?<TagOf<D>>::names(),
        "transform_if"
    );
    <FilterStrategyFor<S, St, D> as FilterStrategy<S, St, D, F, P, O>>::transform_if(src, stencil, dst, map, pred)
}
