use super::PathSegment;
use crate::{Codec, Token};
use either_of::Either;
use flat_tuple::{Flatten, Tupler};
use std::ops::{BitOr, Div};

impl<T, E> PathSegment<T, E>
where
    T: Flatten + 'static,
    E: 'static,
{
    /// Tries `self`, and `other` if `self` fails.
    ///
    /// A value matched by `self` is returned as [`Either::Left`], one matched
    /// by `other` as [`Either::Right`]. When both fail, only the error of
    /// `other` is returned.
    ///
    /// Values encoded from the `Right` case only round-trip if `self` does
    /// not also match their tokens.
    pub fn or<U>(
        self,
        other: PathSegment<U, E>,
    ) -> PathSegment<(Either<T::Flat, U::Flat>,), E>
    where
        U: Flatten + 'static,
    {
        let (left, right) = (self.clone(), other.clone());
        PathSegment::<(Either<T::Flat, U::Flat>,), E>::new(
            move |tokens| match left.match_tokens(tokens) {
                Ok(outcome) => Ok(outcome.map(Either::Left)),
                Err(_) => right
                    .match_tokens(tokens)
                    .map(|outcome| outcome.map(Either::Right)),
            },
            move |value| match value {
                Either::Left(value) => self.create(value),
                Either::Right(value) => other.create(value),
            },
        )
    }

    /// Keeps only the matches whose value satisfies `predicate`.
    ///
    /// A match rejected by the predicate fails with `error` applied to the
    /// tokens this segment was given, not to the decoded value.
    pub fn filter(
        self,
        predicate: impl Fn(&T::Flat) -> bool + Send + Sync + 'static,
        error: impl Fn(&[Token]) -> E + Send + Sync + 'static,
    ) -> Self {
        let inner = self.clone();
        Self::new(
            move |tokens| {
                let outcome = inner.match_tokens(tokens)?;
                if predicate(&outcome.value) {
                    Ok(outcome)
                } else {
                    Err(error(tokens))
                }
            },
            move |value| self.create(value),
        )
    }

    /// Re-types the decoded value through a bijection.
    ///
    /// ```rust
    /// use path_codec::{segment, Codec, PathSegment, SegmentError};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq)]
    /// struct UserId(u32);
    ///
    /// let user_id: PathSegment<(UserId,), SegmentError> =
    ///     segment::<u32, _>().cast(Codec::new(UserId, |id: UserId| id.0));
    /// assert_eq!(user_id.match_path("7").map(|m| m.value), Ok(UserId(7)));
    /// assert_eq!(user_id.create_path(UserId(7)), "7");
    /// ```
    pub fn cast<U>(self, codec: Codec<T::Flat, U>) -> PathSegment<(U,), E>
    where
        U: 'static,
    {
        let inner = self.clone();
        let back = codec.clone();
        PathSegment::<(U,), E>::new(
            move |tokens| {
                inner
                    .match_tokens(tokens)
                    .map(|outcome| outcome.map(|v| codec.left_to_right(v)))
            },
            move |value| self.create(back.right_to_left(value)),
        )
    }
}

impl<T, U, E> Div<PathSegment<U, E>> for PathSegment<T, E>
where
    T: Flatten + Tupler<U> + 'static,
    U: Flatten + 'static,
    T::Out: Flatten,
    E: 'static,
{
    type Output = PathSegment<T::Out, E>;

    /// Matches `self`, then `rhs` on what `self` left over.
    ///
    /// The two values are joined into one flat tuple. The first failure is
    /// returned unchanged.
    fn div(self, rhs: PathSegment<U, E>) -> Self::Output {
        let (left, right) = (self.clone(), rhs.clone());
        PathSegment::<T::Out, E>::new(
            move |tokens| {
                let (first, outcome) = left
                    .match_tokens(tokens)?
                    .chain(|rest| right.match_tokens(rest))?;
                Ok(outcome.map(|second| {
                    <T as Tupler<U>>::apply(
                        T::unflatten(first),
                        U::unflatten(second),
                    )
                    .flatten()
                }))
            },
            move |value| {
                let (first, second) =
                    <T as Tupler<U>>::unapply(<T::Out>::unflatten(value));
                let mut tokens = self.create(first.flatten());
                tokens.extend(rhs.create(second.flatten()));
                tokens
            },
        )
    }
}

impl<T, U, E> BitOr<PathSegment<U, E>> for PathSegment<T, E>
where
    T: Flatten + 'static,
    U: Flatten + 'static,
    E: 'static,
{
    type Output = PathSegment<(Either<T::Flat, U::Flat>,), E>;

    /// See [`PathSegment::or`].
    fn bitor(self, rhs: PathSegment<U, E>) -> Self::Output {
        self.or(rhs)
    }
}
