//! Inductive heterogeneous lists, the representation that tuple concatenation
//! is computed on.

/// The empty list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HNil;

/// A list with a head element and a tail list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HCons<H, T>(pub H, pub T);

/// Converts a tuple into its corresponding heterogeneous list.
pub trait Tuple: Sized {
    /// The corresponding list.
    type HList: HList<Tuple = Self>;

    fn into_hlist(self) -> Self::HList;
}

/// Converts a heterogeneous list into its corresponding tuple.
pub trait HList: Sized {
    /// The corresponding tuple.
    type Tuple: Tuple<HList = Self>;

    fn into_tuple(self) -> Self::Tuple;
}

/// Appends one list to another, and splits the result back at the same point.
///
/// The split point is determined entirely by the length of `Self`, so
/// `split(combine(a, b)) == (a, b)` for any `a` and `b`.
pub trait Combine<U: HList>: HList {
    type Output: HList;

    fn combine(self, other: U) -> Self::Output;

    fn split(combined: Self::Output) -> (Self, U);
}

impl<U: HList> Combine<U> for HNil {
    type Output = U;

    #[inline(always)]
    fn combine(self, other: U) -> Self::Output {
        other
    }

    #[inline(always)]
    fn split(combined: Self::Output) -> (Self, U) {
        (HNil, combined)
    }
}

impl<H, T, U> Combine<U> for HCons<H, T>
where
    T: Combine<U>,
    U: HList,
    HCons<H, T>: HList,
    HCons<H, T::Output>: HList,
{
    type Output = HCons<H, T::Output>;

    #[inline(always)]
    fn combine(self, other: U) -> Self::Output {
        HCons(self.0, self.1.combine(other))
    }

    #[inline(always)]
    fn split(combined: Self::Output) -> (Self, U) {
        let HCons(head, rest) = combined;
        let (tail, other) = T::split(rest);
        (HCons(head, tail), other)
    }
}

macro_rules! hlist_ty {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => { HCons<$head, hlist_ty!($($tail),*)> };
}

macro_rules! hlist_pat {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => { HCons($head, hlist_pat!($($tail),*)) };
}

macro_rules! impl_tuple {
    ($($ty:ident),*) => {
        impl<$($ty),*> Tuple for ($($ty,)*) {
            type HList = hlist_ty!($($ty),*);

            #[inline(always)]
            fn into_hlist(self) -> Self::HList {
                let ($($ty,)*) = self;
                hlist_pat!($($ty),*)
            }
        }

        impl<$($ty),*> HList for hlist_ty!($($ty),*) {
            type Tuple = ($($ty,)*);

            #[inline(always)]
            fn into_tuple(self) -> Self::Tuple {
                let hlist_pat!($($ty),*) = self;
                ($($ty,)*)
            }
        }
    };
}

impl_tuple!();
impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
impl_tuple!(A, B, C, D, E, F, G, H, I);
impl_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

#[cfg(test)]
mod tests {
    use super::{Combine, HCons, HList, HNil, Tuple};

    #[test]
    fn tuples_convert_to_lists_and_back() {
        let list = (1, "two", 3.0).into_hlist();
        assert_eq!(list, HCons(1, HCons("two", HCons(3.0, HNil))));
        assert_eq!(list.into_tuple(), (1, "two", 3.0));
        assert_eq!(().into_hlist(), HNil);
    }

    #[test]
    fn split_undoes_combine() {
        let left = HCons(1, HCons('a', HNil));
        let right = HCons(true, HNil);
        let combined = left.combine(right);
        assert_eq!(combined, HCons(1, HCons('a', HCons(true, HNil))));
        let (l, r) = <HCons<i32, HCons<char, HNil>> as Combine<
            HCons<bool, HNil>,
        >>::split(combined);
        assert_eq!(l, left);
        assert_eq!(r, right);
    }

    #[test]
    fn empty_left_list_splits_off_nothing() {
        let (l, r) = <HNil as Combine<HCons<u8, HNil>>>::split(HCons(7, HNil));
        assert_eq!(l, HNil);
        assert_eq!(r, HCons(7, HNil));
    }
}
