//! Unconditional copy.

use tracing::trace;

use crate::dispatch::{CopyStrategy, CopyStrategyFor, Strategy};
use crate::range::{InputRange, OutputCursor};
use crate::tag::TagOf;

/// Copies every element of `src` into `dst`, in order, and returns the cursor
/// one past the last written element.
///
/// An empty `src` returns `dst` unchanged without running any strategy.
/// Otherwise exactly one strategy runs, chosen from the tags of `src` and
/// `dst` (see [`SelectCopy`](crate::dispatch::SelectCopy)).
///
/// ```
/// use tola_seq::copy;
/// use tola_seq::range::SliceCursor;
///
/// let mut out = [0; 3];
/// let end = copy(&[1, 2, 3][..], SliceCursor::new(&mut out));
/// assert_eq!(end.position(), 3);
/// assert_eq!(out, [1, 2, 3]);
/// ```
#[inline]
pub fn copy<S, D>(mut src: S, dst: D) -> D
where
    S: InputRange,
    D: OutputCursor<S::Item>,
    CopyStrategyFor<S, D>: CopyStrategy<S, D>,
{
    if src.is_empty() {
        return dst;
    }
    trace!(
        strategy = <CopyStrategyFor<S, D> as Strategy>::NAME,
        src = ?<TagOf<S>>::names(),
        dst = ?<TagOf<D>>::names(),
        "copy"
    );
    <CopyStrategyFor<S, D> as CopyStrategy<S, D>>::copy(src, dst)
}
