//! Stencil-filtered copy.

use crate::algo::filter::transform_if;
use crate::dispatch::{FilterStrategy, FilterStrategyFor};
use crate::func::{identity_fn, truthy_fn, IdentityFn, Truthy, TruthyFn};
use crate::range::{InputRange, OutputCursor};

/// Copies `src[i]` for every `i` where `stencil[i]` is truthy.
///
/// Same as [`copy_when_by`] with [`truthy`](crate::func::truthy).
///
/// ```
/// use tola_seq::copy_when;
/// use tola_seq::range::back_inserter;
///
/// let mut out = Vec::new();
/// copy_when(&['a', 'b', 'c'][..], &[1, 0, 1][..], back_inserter(&mut out));
/// assert_eq!(out, ['a', 'c']);
/// ```
#[inline]
pub fn copy_when<S, St, D>(src: S, stencil: St, dst: D) -> D
where
    S: InputRange,
    St: InputRange,
    St::Item: Truthy,
    D: OutputCursor<S::Item>,
    FilterStrategyFor<S, St, D>: FilterStrategy<S, St, D, IdentityFn<S::Item>, TruthyFn<St::Item>, S::Item>,
{
    copy_when_by(src, stencil, dst, truthy_fn::<St::Item>())
}

/// Copies `src[i]`, unchanged, for every `i` where `pred(&stencil[i])`.
///
/// Order is preserved; failing elements are skipped. `src` and `stencil` are
/// expected to have the same length; a shorter stencil ends the copy early.
#[inline]
pub fn copy_when_by<S, St, D, P>(src: S, stencil: St, dst: D, pred: P) -> D
where
    S: InputRange,
    St: InputRange,
    D: OutputCursor<S::Item>,
    P: Fn(&St::Item) -> bool,
    FilterStrategyFor<S, St, D>: FilterStrategy<S, St, D, IdentityFn<S::Item>, P, S::Item>,
{
    transform_if(src, stencil, dst, identity_fn::<S::Item>(), pred)
}
