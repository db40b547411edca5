#![no_std]
#![forbid(unsafe_code)]
#![allow(non_snake_case)]

//! Type-level concatenation of tuples.
//!
//! Values are carried around as *value tuples*: `()` holds nothing, `(T,)`
//! holds one value, `(A, B, ..)` holds several. Joining two value tuples with
//! [`Tupler`] appends them into one flat tuple instead of nesting them, and
//! [`Flatten`] turns a value tuple into the shape a user expects to see:
//!
//! | left | right | [`Flatten::Flat`] of the result |
//! |---|---|---|
//! | `()` | `(U,)` | `U` |
//! | `(T,)` | `()` | `T` |
//! | `(T,)` | `(U,)` | `(T, U)` |
//! | `(T1, .., Tn)` | `(U,)` | `(T1, .., Tn, U)` |
//!
//! A single value that is itself a tuple, such as `((A, B),)`, is never
//! spliced into its neighbours.
//!
//! Tuples of up to 16 elements are supported. Combining past that limit is a
//! compile error.
//!
//! ```rust
//! use flat_tuple::{Flatten, Tupler};
//!
//! let combined = (1, "a").apply((true,));
//! assert_eq!(combined, (1, "a", true));
//! let (left, right) = <(i32, &str) as Tupler<(bool,)>>::unapply(combined);
//! assert_eq!(left, (1, "a"));
//! assert_eq!(right, (true,));
//!
//! let single: i32 = ().apply((42,)).flatten();
//! assert_eq!(single, 42);
//! ```

mod hlist;

pub use hlist::{Combine, HCons, HList, HNil, Tuple};

/// Joins two value tuples into one flat tuple, and splits it back apart.
pub trait Tupler<U>: Sized {
    /// The flat tuple holding every element of `Self` followed by every
    /// element of `U`.
    type Out;

    /// Appends `other` to `self`.
    fn apply(self, other: U) -> Self::Out;

    /// Splits a joined tuple back into its two halves.
    ///
    /// For any `t` and `u`, `Self::unapply(t.apply(u)) == (t, u)`.
    fn unapply(out: Self::Out) -> (Self, U);
}

impl<T, U> Tupler<U> for T
where
    T: Tuple,
    U: Tuple,
    T::HList: Combine<U::HList>,
{
    type Out = <<T::HList as Combine<U::HList>>::Output as HList>::Tuple;

    #[inline(always)]
    fn apply(self, other: U) -> Self::Out {
        self.into_hlist().combine(other.into_hlist()).into_tuple()
    }

    #[inline(always)]
    fn unapply(out: Self::Out) -> (Self, U) {
        let (left, right) =
            <T::HList as Combine<U::HList>>::split(out.into_hlist());
        (left.into_tuple(), right.into_tuple())
    }
}

/// Unwraps a value tuple into the value it represents.
///
/// `()` stays `()`, a one-element tuple becomes its element, and longer
/// tuples are left as they are.
pub trait Flatten: Tuple {
    /// The flattened value.
    type Flat;

    fn flatten(self) -> Self::Flat;

    fn unflatten(flat: Self::Flat) -> Self;
}

impl Flatten for () {
    type Flat = ();

    #[inline(always)]
    fn flatten(self) -> Self::Flat {}

    #[inline(always)]
    fn unflatten(_flat: Self::Flat) -> Self {}
}

impl<A> Flatten for (A,) {
    type Flat = A;

    #[inline(always)]
    fn flatten(self) -> Self::Flat {
        self.0
    }

    #[inline(always)]
    fn unflatten(flat: Self::Flat) -> Self {
        (flat,)
    }
}

macro_rules! impl_flatten {
    ($($ty:ident),*) => {
        impl<$($ty),*> Flatten for ($($ty,)*) {
            type Flat = Self;

            #[inline(always)]
            fn flatten(self) -> Self::Flat {
                self
            }

            #[inline(always)]
            fn unflatten(flat: Self::Flat) -> Self {
                flat
            }
        }
    };
}

impl_flatten!(A, B);
impl_flatten!(A, B, C);
impl_flatten!(A, B, C, D);
impl_flatten!(A, B, C, D, E);
impl_flatten!(A, B, C, D, E, F);
impl_flatten!(A, B, C, D, E, F, G);
impl_flatten!(A, B, C, D, E, F, G, H);
impl_flatten!(A, B, C, D, E, F, G, H, I);
impl_flatten!(A, B, C, D, E, F, G, H, I, J);
impl_flatten!(A, B, C, D, E, F, G, H, I, J, K);
impl_flatten!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_flatten!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_flatten!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_flatten!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_flatten!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);
