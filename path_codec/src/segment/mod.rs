use crate::{MatchOutcome, Token};
use flat_tuple::Flatten;
use std::{fmt, sync::Arc};

mod combinators;
mod primitives;
pub use primitives::*;

type MatchFn<T, E> =
    dyn for<'a> Fn(&'a [Token]) -> Result<MatchOutcome<'a, T>, E> + Send + Sync;

type CreateFn<T> = dyn Fn(T) -> Vec<Token> + Send + Sync;

/// A bidirectional matcher for a prefix of a URL path.
///
/// A segment decodes a sequence of [`Token`]s into a value, consuming some
/// prefix of it, and encodes a value back into tokens. Every segment built
/// from the primitives and combinators of this crate obeys the round-trip
/// law:
///
/// ```text
/// segment.match_tokens(&segment.create(t)) == Ok(MatchOutcome::complete(t))
/// ```
///
/// `T` is the *value tuple* of the segment: `()` when it decodes nothing,
/// `(A,)` when it decodes one `A`, `(A, B, ..)` when it decodes several. The
/// values that [`match_tokens`](Self::match_tokens) returns and
/// [`create`](Self::create) accepts are the [flattened](Flatten) form of that
/// tuple, so a `PathSegment<(u32,), E>` produces a plain `u32`.
///
/// `E` is the application's error type. One tree of segments always shares a
/// single error type.
///
/// Segments are cheap to clone and can be shared between threads. Build a
/// tree once and reuse it.
///
/// ```rust
/// use path_codec::{root, segment, static_segment, PathSegment, SegmentError};
///
/// let user: PathSegment<_, SegmentError> =
///     root() / static_segment("users") / segment::<u32, _>();
///
/// assert_eq!(user.match_path("/users/42").map(|m| m.value), Ok(42));
/// assert_eq!(user.create_path(42), "users/42");
/// ```
pub struct PathSegment<T: Flatten, E> {
    matcher: Arc<MatchFn<T::Flat, E>>,
    creator: Arc<CreateFn<T::Flat>>,
}

impl<T: Flatten, E> PathSegment<T, E> {
    /// Wraps a pair of raw functions into a segment.
    ///
    /// Nothing checks that `create_fn` and `match_fn` are inverses of each
    /// other; a segment built this way only round-trips if they are.
    pub fn new(
        match_fn: impl for<'a> Fn(
                &'a [Token],
            ) -> Result<MatchOutcome<'a, T::Flat>, E>
            + Send
            + Sync
            + 'static,
        create_fn: impl Fn(T::Flat) -> Vec<Token> + Send + Sync + 'static,
    ) -> Self {
        Self {
            matcher: Arc::new(match_fn),
            creator: Arc::new(create_fn),
        }
    }

    /// Decodes a prefix of `tokens`.
    pub fn match_tokens<'a>(
        &self,
        tokens: &'a [Token],
    ) -> Result<MatchOutcome<'a, T::Flat>, E> {
        (self.matcher)(tokens)
    }

    /// Encodes `value` into tokens.
    pub fn create(&self, value: T::Flat) -> Vec<Token> {
        (self.creator)(value)
    }

    /// Splits `path` into tokens with [`Token::from_path`], then matches them.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self))
    )]
    pub fn match_path(
        &self,
        path: &str,
    ) -> Result<MatchOutcome<'static, T::Flat>, E> {
        let tokens = Token::from_path(path);
        let outcome = self.match_tokens(&tokens)?;
        Ok(outcome.into_owned())
    }

    /// Tokenizes a whole URL, then matches its path.
    ///
    /// Query string and fragment are ignored here; use
    /// [`with_params`](Self::with_params) to match query parameters too. A URL
    /// that cannot be parsed is reported as
    /// [`malformed`](crate::PathMatchingError::malformed).
    #[cfg(feature = "url")]
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self))
    )]
    pub fn match_raw_url(
        &self,
        url: &str,
    ) -> Result<MatchOutcome<'static, T::Flat>, E>
    where
        E: crate::PathMatchingError,
    {
        let parts = crate::url::UrlParts::parse(url)
            .map_err(|_| E::malformed(url))?;
        let outcome = self.match_tokens(&parts.segments)?;
        Ok(outcome.into_owned())
    }

    /// Encodes `value` and joins the tokens with `/`.
    ///
    /// Token contents are not escaped.
    pub fn create_path(&self, value: T::Flat) -> String {
        Token::join(&self.create(value))
    }
}

impl<T: Flatten, E> Clone for PathSegment<T, E> {
    fn clone(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
            creator: Arc::clone(&self.creator),
        }
    }
}

impl<T: Flatten, E> fmt::Debug for PathSegment<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSegment")
            .field("value", &std::any::type_name::<T::Flat>())
            .field("error", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}
