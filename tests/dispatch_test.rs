//! Tests for compile-time strategy selection on concrete types.

use tola_seq::device::{DeviceCursor, DeviceRange};
use tola_seq::dispatch::{
    strategy_name, BlockCopy, Buffer, ElementwiseCopy, IndexedFilter, ParallelCopy, ParallelFilter, Replay,
    SequentialFilter,
};
use tola_seq::prelude::*;
use tola_seq::{CopyStrategyFor, FilterStrategyFor, SelfStencilFor, Strategy};

type Slice<'a> = &'a [i32];
type Out<'a> = SliceCursor<'a, i32>;
type Push<'a> = BackInserter<'a, Vec<i32>>;
type Dev<'a> = DeviceRange<'a, i32>;
type DevOut<'a> = DeviceCursor<'a, i32>;
type Once = SinglePass<std::vec::IntoIter<i32>>;
type Multi = Forward<std::ops::Range<i32>>;

fn same<A: Strategy, B: Strategy>() -> bool {
    A::NAME == B::NAME
}

#[test]
fn test_copy_selection() {
    assert!(same::<CopyStrategyFor<Slice, Out>, BlockCopy>());
    assert!(same::<CopyStrategyFor<Dev, DevOut>, ParallelCopy>());
    assert!(same::<CopyStrategyFor<Slice, DevOut>, BlockCopy>());
    assert!(same::<CopyStrategyFor<Dev, Out>, BlockCopy>());
    assert!(same::<CopyStrategyFor<Slice, Push>, ElementwiseCopy>());
    assert!(same::<CopyStrategyFor<Once, Out>, ElementwiseCopy>());
    assert!(same::<CopyStrategyFor<Multi, Push>, ElementwiseCopy>());
}

#[test]
fn test_filter_selection() {
    assert!(same::<FilterStrategyFor<Slice, Slice, Push>, IndexedFilter>());
    assert!(same::<FilterStrategyFor<Slice, Slice, Out>, IndexedFilter>());
    assert!(same::<FilterStrategyFor<Dev, Dev, DevOut>, ParallelFilter>());
    assert!(same::<FilterStrategyFor<Dev, Slice, DevOut>, IndexedFilter>());
    assert!(same::<FilterStrategyFor<Dev, Dev, Out>, IndexedFilter>());
    assert!(same::<FilterStrategyFor<Slice, Multi, Push>, SequentialFilter>());
    assert!(same::<FilterStrategyFor<Once, Slice, Out>, SequentialFilter>());
}

#[test]
fn test_self_stencil_selection() {
    assert!(same::<SelfStencilFor<Slice>, Replay>());
    assert!(same::<SelfStencilFor<Multi>, Replay>());
    assert!(same::<SelfStencilFor<Dev>, Replay>());
    assert!(same::<SelfStencilFor<Once>, Buffer>());
}

#[test]
fn test_strategy_names() {
    assert_eq!(strategy_name::<ElementwiseCopy>(), "elementwise-copy");
    assert_eq!(strategy_name::<BlockCopy>(), "block-copy");
    assert_eq!(strategy_name::<ParallelCopy>(), "parallel-copy");
    assert_eq!(strategy_name::<SequentialFilter>(), "sequential-filter");
    assert_eq!(strategy_name::<IndexedFilter>(), "indexed-filter");
    assert_eq!(strategy_name::<ParallelFilter>(), "parallel-filter");
    assert_eq!(strategy_name::<Replay>(), "replay");
    assert_eq!(strategy_name::<Buffer>(), "buffer");
}
