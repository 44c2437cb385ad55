//! Type-Level Dispatch
//!
//! Picks one strategy per call from the capability tags of the sequences
//! involved. Selection is a type computation over
//! [`Bool`](crate::primitives::Bool); there is no runtime branch on a tag.
//!
//! ```text
//! copy:          Tag<S> x Tag<D>          --SelectCopy-------->  CopyStrategy
//! transform_if:  Tag<S> x Tag<St> x Tag<D> --SelectFilter------>  FilterStrategy
//! copy_if:       Tag<S>                    --SelectSelfStencil->  SelfStencil
//! ```
//!
//! Every selector has one blanket impl over the sealed tag set, so each
//! combination resolves to exactly one strategy. Whether that strategy can
//! actually run on the concrete types (its kernel impl's bounds) is checked
//! at the call site; a mismatch is a compile error.

use crate::primitives::{And, If};
use crate::tag::{Residency, Tag, TagOf, Traversal};

// =============================================================================
// Strategy traits
// =============================================================================

/// A selectable implementation.
pub trait Strategy {
    /// Stable name, used in trace output and tests.
    const NAME: &'static str;
}

/// Copies every element of `S` into `D`, in order.
pub trait CopyStrategy<S, D>: Strategy {
    fn copy(src: S, dst: D) -> D;
}

/// Writes `map(src[i])` for every `i` where `pred(&stencil[i])`, in order.
///
/// `O` is the mapped element type.
pub trait FilterStrategy<S, St, D, F, P, O>: Strategy {
    fn transform_if(src: S, stencil: St, dst: D, map: F, pred: P) -> D;
}

/// Filters `S` with a predicate evaluated on its own elements.
pub trait SelfStencil<S, D, P>: Strategy {
    fn copy_if(src: S, dst: D, pred: P) -> D;
}

// =============================================================================
// Strategy markers
// =============================================================================

macro_rules! strategies {
    ($($(#[$doc:meta])* $name:ident => $label:literal;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Strategy for $name {
                const NAME: &'static str = $label;
            }
        )*
    };
}

strategies! {
    /// One `put` per element. Needs nothing beyond `InputRange` and
    /// `OutputCursor`.
    ElementwiseCopy => "elementwise-copy";
    /// Slice-to-slice `clone_from_slice`. Both sides contiguous.
    BlockCopy => "block-copy";
    /// Rayon bulk copy. Both sides contiguous and device-resident.
    ParallelCopy => "parallel-copy";

    /// Zip two cursors. Any traversal.
    SequentialFilter => "sequential-filter";
    /// Index source and stencil slices; clones accepted elements only.
    IndexedFilter => "indexed-filter";
    /// Rayon filter-map into a staging buffer. All three device-resident,
    /// all three contiguous.
    ParallelFilter => "parallel-filter";

    /// Traverse the source twice: once as data, once as stencil.
    Replay => "replay";
    /// Read the source once into a host buffer used in both roles.
    Buffer => "buffer";
}

// =============================================================================
// Selectors
// =============================================================================

/// `Tag<S>: SelectCopy<Tag<D>>`.
///
/// The destination is tested first: a destination that is not random access
/// gets the elementwise strategy whatever the source offers.
pub trait SelectCopy<Dst> {
    type Strategy;
}

impl<STr, SRe, DTr, DRe> SelectCopy<Tag<DTr, DRe>> for Tag<STr, SRe>
where
    STr: Traversal,
    SRe: Residency,
    DTr: Traversal,
    DRe: Residency,
{
    type Strategy = If<
        And<<DTr as Traversal>::RandomAccess, <STr as Traversal>::RandomAccess>,
        If<And<<DRe as Residency>::Device, <SRe as Residency>::Device>, ParallelCopy, BlockCopy>,
        ElementwiseCopy,
    >;
}

/// `Tag<S>: SelectFilter<Tag<St>, Tag<D>>`.
///
/// The indexed strategy places no requirement on the destination, so it wins
/// over the parallel one unless the destination is contiguous device memory
/// too.
pub trait SelectFilter<Stencil, Dst> {
    type Strategy;
}

impl<STr, SRe, KTr, KRe, DTr, DRe> SelectFilter<Tag<KTr, KRe>, Tag<DTr, DRe>> for Tag<STr, SRe>
where
    STr: Traversal,
    SRe: Residency,
    KTr: Traversal,
    KRe: Residency,
    DTr: Traversal,
    DRe: Residency,
{
    type Strategy = If<
        And<<STr as Traversal>::RandomAccess, <KTr as Traversal>::RandomAccess>,
        If<
            And<
                And<<SRe as Residency>::Device, <KRe as Residency>::Device>,
                And<<DRe as Residency>::Device, <DTr as Traversal>::RandomAccess>,
            >,
            ParallelFilter,
            IndexedFilter,
        >,
        SequentialFilter,
    >;
}

/// `Tag<S>: SelectSelfStencil`.
pub trait SelectSelfStencil {
    type Strategy;
}

impl<Tr: Traversal, Re: Residency> SelectSelfStencil for Tag<Tr, Re> {
    type Strategy = If<<Tr as Traversal>::MultiPass, Replay, Buffer>;
}

// =============================================================================
// Aliases
// =============================================================================

/// Strategy `copy` uses for source `S` and destination `D`.
pub type CopyStrategyFor<S, D> = <TagOf<S> as SelectCopy<TagOf<D>>>::Strategy;

/// Strategy `transform_if` uses for source `S`, stencil `St`, destination `D`.
pub type FilterStrategyFor<S, St, D> = <TagOf<S> as SelectFilter<TagOf<St>, TagOf<D>>>::Strategy;

/// Strategy `copy_if` uses to supply `S` as its own stencil.
pub type SelfStencilFor<S> = <TagOf<S> as SelectSelfStencil>::Strategy;

/// Name of the strategy a selector resolves to.
pub const fn strategy_name<T: Strategy>() -> &'static str {
    T::NAME
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::*;

    type CopyOf<S, D> = <S as SelectCopy<D>>::Strategy;

    #[test]
    fn copy_table_host() {
        assert_eq!(strategy_name::<CopyOf<RandomAccessHost, RandomAccessHost>>(), "block-copy");
        assert_eq!(strategy_name::<CopyOf<ForwardHost, RandomAccessHost>>(), "elementwise-copy");
        assert_eq!(strategy_name::<CopyOf<RandomAccessHost, SinglePassHost>>(), "elementwise-copy");
    }

    #[test]
    fn copy_table_device() {
        assert_eq!(strategy_name::<CopyOf<RandomAccessDevice, RandomAccessDevice>>(), "parallel-copy");
        assert_eq!(strategy_name::<CopyOf<RandomAccessHost, RandomAccessDevice>>(), "block-copy");
        assert_eq!(strategy_name::<CopyOf<RandomAccessDevice, RandomAccessHost>>(), "block-copy");
        assert_eq!(strategy_name::<CopyOf<BidirectionalDevice, RandomAccessDevice>>(), "elementwise-copy");
    }

    #[test]
    fn self_stencil_table() {
        type Sel<S> = <S as SelectSelfStencil>::Strategy;
        assert_eq!(strategy_name::<Sel<SinglePassHost>>(), "buffer");
        assert_eq!(strategy_name::<Sel<ForwardHost>>(), "replay");
        assert_eq!(strategy_name::<Sel<RandomAccessDevice>>(), "replay");
    }
}
