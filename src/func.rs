//! Default mapping and predicate for the filtering algorithms.
//!
//! Kernels take plain `Fn` bounds. The two defaults are function pointers so
//! they can be named in where-clauses:
//!
//! - [`IdentityFn<T>`]: `core::convert::identity`, used by every
//!   filter-without-transform call.
//! - [`TruthyFn<T>`]: [`truthy`], the default stencil predicate.

/// The identity mapping as a nameable type.
pub type IdentityFn<T> = fn(T) -> T;

/// The truthiness predicate as a nameable type.
pub type TruthyFn<T> = fn(&T) -> bool;

/// `core::convert::identity` as an [`IdentityFn`].
#[inline(always)]
pub fn identity_fn<T>() -> IdentityFn<T> {
    core::convert::identity::<T>
}

/// "The value is truthy".
#[inline(always)]
pub fn truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

/// [`truthy`] as a [`TruthyFn`].
#[inline(always)]
pub fn truthy_fn<T: Truthy>() -> TruthyFn<T> {
    truthy::<T>
}

/// Values with a boolean reading: non-zero, non-false, non-empty.
///
/// Derivable with `#[derive(Truthy)]` (feature `derive`).
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                #[inline(always)]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// NaN is truthy: it compares unequal to zero.
macro_rules! impl_truthy_float {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                #[inline(always)]
                fn is_truthy(&self) -> bool {
                    *self != 0.0
                }
            }
        )*
    };
}

impl_truthy_float!(f32, f64);

impl Truthy for char {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(feature = "alloc")]
impl Truthy for alloc::string::String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(feature = "alloc")]
impl<T> Truthy for alloc::vec::Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(feature = "alloc")]
impl<T: Truthy + ?Sized> Truthy for alloc::boxed::Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
