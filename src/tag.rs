//! Capability tags.
//!
//! A tag classifies a sequence on two axes:
//!
//! ```text
//! Traversal:  SinglePass < Forward < Bidirectional < RandomAccess
//! Residency:  Host | Device
//! ```
//!
//! Both axes are sealed, so the tag set is closed at 4 x 2 and every
//! selector in [`crate::dispatch`] is a total function over it. New sequence
//! types pick one of the existing markers through [`Capability`]; they cannot
//! add a dispatch axis.

use core::marker::PhantomData;

use crate::primitives::{Absent, Bool, Present};

mod sealed {
    pub trait Sealed {}
}

/// Traversal power of a cursor.
pub trait Traversal: sealed::Sealed + 'static {
    const NAME: &'static str;
    /// The range can be traversed more than once (it is `Clone`).
    type MultiPass: Bool;
    /// Elements are addressable by index as one contiguous slice.
    type RandomAccess: Bool;
}

/// Where the backing storage of a sequence lives.
pub trait Residency: sealed::Sealed + 'static {
    const NAME: &'static str;
    type Device: Bool;
}

macro_rules! traversal {
    ($(#[$doc:meta])* $name:ident, $multi:ty, $random:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl Traversal for $name {
            const NAME: &'static str = stringify!($name);
            type MultiPass = $multi;
            type RandomAccess = $random;
        }
    };
}

traversal!(
    /// One forward pass; the range is consumed by iterating it.
    SinglePass, Absent, Absent
);
traversal!(
    /// Repeatable forward passes.
    Forward, Present, Absent
);
traversal!(
    /// Repeatable passes in either direction.
    Bidirectional, Present, Absent
);
traversal!(
    /// Contiguous, indexable storage.
    RandomAccess, Present, Present
);

/// Local (host) memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Host;

/// Device (remote / accelerator) memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Device;

impl sealed::Sealed for Host {}
impl sealed::Sealed for Device {}

impl Residency for Host {
    const NAME: &'static str = "Host";
    type Device = Absent;
}

impl Residency for Device {
    const NAME: &'static str = "Device";
    type Device = Present;
}

/// A capability tag: traversal x residency.
pub struct Tag<Tr, Re>(PhantomData<(Tr, Re)>);

impl<Tr: Traversal, Re: Residency> Tag<Tr, Re> {
    /// `(traversal, residency)` names, attached to the algorithms' trace
    /// events.
    pub const fn names() -> (&'static str, &'static str) {
        (Tr::NAME, Re::NAME)
    }
}

/// Capability resolver: maps a range or cursor type to its tag.
///
/// Implemented by every adaptor in [`crate::range`] and [`crate::device`].
/// A type that declares `RandomAccess` must also implement the contiguous
/// trait for its role ([`ContiguousRange`](crate::range::ContiguousRange) or
/// [`ContiguousCursor`](crate::range::ContiguousCursor)); otherwise the
/// strategies selected for it have no impl and the call does not compile.
pub trait Capability {
    type Traversal: Traversal;
    type Residency: Residency;
}

/// The tag of `T`.
pub type TagOf<T> = Tag<<T as Capability>::Traversal, <T as Capability>::Residency>;

macro_rules! tag_aliases {
    ([$($tr:ident),*] x $res:tt) => {
        $( tag_aliases!(@row $tr $res); )*
    };
    (@row $tr:ident [$($re:ident),*]) => {
        ::paste::paste! {
            $(
                #[doc = concat!("`Tag<", stringify!($tr), ", ", stringify!($re), ">`")]
                pub type [<$tr $re>] = Tag<$tr, $re>;
            )*
        }
    };
}

tag_aliases!([SinglePass, Forward, Bidirectional, RandomAccess] x [Host, Device]);
