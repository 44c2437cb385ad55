//! Self-filtered copy.
//!
//! `copy_if(src, dst, pred)` is `copy_if_stencil(src, src, dst, pred)`. How
//! the source is made available twice depends on its traversal:
//!
//! - multi-pass ranges are cloned and walked twice ([`Replay`]);
//! - single-pass ranges are read once into a host buffer that then serves as
//!   both data and stencil ([`Buffer`], feature `alloc`).
//!
//! Both paths produce the same output in the same order.

use tracing::trace;

use crate::algo::copy_when::copy_when_by;
use crate::dispatch::{FilterStrategy, FilterStrategyFor, Replay, SelfStencil, SelfStencilFor, Strategy};
use crate::func::IdentityFn;
use crate::range::{InputRange, OutputCursor};
use crate::tag::TagOf;

/// Copies the elements of `src` that satisfy `pred`, in order.
///
/// ```
/// use tola_seq::copy_if;
/// use tola_seq::range::back_inserter;
///
/// let mut out = Vec::new();
/// copy_if(&[3, 0, 5, 0, 7][..], back_inserter(&mut out), |x: &i32| *x != 0);
/// assert_eq!(out, [3, 5, 7]);
/// ```
#[inline]
pub fn copy_if<S, D, P>(src: S, dst: D, pred: P) -> D
where
    S: InputRange,
    D: OutputCursor<S::Item>,
    P: Fn(&S::Item) -> bool,
    SelfStencilFor<S>: SelfStencil<S, D, P>,
{
    trace!(strategy = <SelfStencilFor<S> as Strategy>::NAME, src = ?<TagOf<S>>::names(), "copy_if");
    <SelfStencilFor<S> as SelfStencil<S, D, P>>::copy_if(src, dst, pred)
}

/// Copies `src[i]` for every `i` where `pred(&stencil[i])`, in order.
///
/// The general two-sequence form; runs on the kernel selected for the
/// (source, stencil, destination) tag triple.
#[inline]
pub fn copy_if_stencil<S, St, D, P>(src: S, stencil: St, dst: D, pred: P) -> D
where
    S: InputRange,
    St: InputRange,
    D: OutputCursor<S::Item>,
    P: Fn(&St::Item) -> bool,
    FilterStrategyFor<S, St, D>: FilterStrategy<S, St, D, IdentityFn<S::Item>, P, S::Item>,
{
    copy_when_by(src, stencil, dst, pred)
}

impl<S, D, P> SelfStencil<S, D, P> for Replay
where
    S: InputRange + Clone,
    D: OutputCursor<S::Item>,
    P: Fn(&S::Item) -> bool,
    FilterStrategyFor<S, S, D>: FilterStrategy<S, S, D, IdentityFn<S::Item>, P, S::Item>,
{
    #[inline]
    fn copy_if(src: S, dst: D, pred: P) -> D {
        copy_if_stencil(src.clone(), src, dst, pred)
    }
}

#[cfg(feature = "alloc")]
impl<S, D, P> SelfStencil<S, D, P> for crate::dispatch::Buffer
where
    S: InputRange,
    S::Item: Clone,
    D: OutputCursor<S::Item>,
    P: Fn(&S::Item) -> bool,
    for<'x> FilterStrategyFor<&'x [S::Item], &'x [S::Item], D>:
        FilterStrategy<&'x [S::Item], &'x [S::Item], D, IdentityFn<S::Item>, P, S::Item>,
{
    fn copy_if(src: S, dst: D, pred: P) -> D {
        use alloc::vec::Vec;

        let buffered: Vec<S::Item> = src.into_cursor().collect();
        let view: &[S::Item] = &buffered;
        copy_if_stencil(view, view, dst, pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{back_inserter, SinglePass};

    #[test]
    fn buffer_reads_single_pass_once() {
        let mut reads = 0;
        let source = [4, 1, 6, 3].into_iter().inspect(|_| reads += 1);
        let mut out = Vec::new();
        copy_if(SinglePass::new(source), back_inserter(&mut out), |x: &i32| x % 2 == 0);
        assert_eq!(out, vec![4, 6]);
        assert_eq!(reads, 4);
    }

    #[test]
    fn stencil_form_ignores_source_values() {
        let mut out = Vec::new();
        copy_if_stencil(&[10, 20, 30][..], &[-1, 2, -3][..], back_inserter(&mut out), |k: &i32| *k > 0);
        assert_eq!(out, vec![20]);
    }
}
