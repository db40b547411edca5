//! Query parameters, and matchers for a path together with its parameters.

use crate::{
    FromSegment, MatchOutcome, ParamMatchingError, ParamsMap, PathSegment,
    ToSegment, Token,
};
use flat_tuple::{Flatten, Tupler};
use std::{borrow::Cow, fmt, ops::BitAnd, sync::Arc};

type ParamMatchFn<T, E> = dyn Fn(&ParamsMap) -> Result<T, E> + Send + Sync;

type ParamCreateFn<T> = dyn Fn(T) -> ParamsMap + Send + Sync;

/// A bidirectional matcher for query parameters.
///
/// Works like [`PathSegment`], with a [`ParamsMap`] in place of the token
/// sequence: `T` is the value tuple, and parameter matchers combined with `&`
/// produce one flat value.
///
/// ```rust
/// use path_codec::{
///     optional_param, param, ParamsMap, QueryParameters, SegmentError,
/// };
///
/// let page: QueryParameters<_, SegmentError> =
///     param::<u32, _>("page") & optional_param::<String, _>("sort");
///
/// let query: ParamsMap = [("page", "2")].into_iter().collect();
/// assert_eq!(page.match_params(&query), Ok((2, None)));
/// assert_eq!(page.create_params((2, None)), query);
/// ```
pub struct QueryParameters<T: Flatten, E> {
    matcher: Arc<ParamMatchFn<T::Flat, E>>,
    creator: Arc<ParamCreateFn<T::Flat>>,
}

impl<T: Flatten, E> QueryParameters<T, E> {
    pub fn new(
        match_fn: impl Fn(&ParamsMap) -> Result<T::Flat, E>
            + Send
            + Sync
            + 'static,
        create_fn: impl Fn(T::Flat) -> ParamsMap + Send + Sync + 'static,
    ) -> Self {
        Self {
            matcher: Arc::new(match_fn),
            creator: Arc::new(create_fn),
        }
    }

    pub fn match_params(&self, params: &ParamsMap) -> Result<T::Flat, E> {
        (self.matcher)(params)
    }

    pub fn create_params(&self, value: T::Flat) -> ParamsMap {
        (self.creator)(value)
    }
}

impl<T: Flatten, E> Clone for QueryParameters<T, E> {
    fn clone(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
            creator: Arc::clone(&self.creator),
        }
    }
}

impl<T: Flatten, E> fmt::Debug for QueryParameters<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryParameters")
            .field("value", &std::any::type_name::<T::Flat>())
            .finish_non_exhaustive()
    }
}

/// Matches any parameters and decodes to `()`.
pub fn no_params<E: 'static>() -> QueryParameters<(), E> {
    QueryParameters::<(), E>::new(|_| Ok(()), |()| ParamsMap::new())
}

/// A required parameter.
///
/// When the parameter is given several times, the last value is used.
pub fn param<T, E>(
    name: impl Into<Cow<'static, str>>,
) -> QueryParameters<(T,), E>
where
    T: FromSegment + ToSegment + 'static,
    E: ParamMatchingError + 'static,
{
    let name = name.into();
    let key = name.clone();
    QueryParameters::<(T,), E>::new(
        move |params| {
            let raw = params
                .get_str(&name)
                .ok_or_else(|| E::missing_parameter(&name))?;
            decode(raw)
        },
        move |value| single(&key, &value),
    )
}

/// A parameter that may be absent.
pub fn optional_param<T, E>(
    name: impl Into<Cow<'static, str>>,
) -> QueryParameters<(Option<T>,), E>
where
    T: FromSegment + ToSegment + 'static,
    E: ParamMatchingError + 'static,
{
    let name = name.into();
    let key = name.clone();
    QueryParameters::<(Option<T>,), E>::new(
        move |params| params.get_str(&name).map(decode).transpose(),
        move |value| match value {
            Some(value) => single(&key, &value),
            None => ParamsMap::new(),
        },
    )
}

/// Every value given for a parameter, in order. Absent means empty.
pub fn repeated_param<T, E>(
    name: impl Into<Cow<'static, str>>,
) -> QueryParameters<(Vec<T>,), E>
where
    T: FromSegment + ToSegment + 'static,
    E: ParamMatchingError + 'static,
{
    let name = name.into();
    let key = name.clone();
    QueryParameters::<(Vec<T>,), E>::new(
        move |params| {
            params
                .get_all(&name)
                .unwrap_or_default()
                .iter()
                .map(|raw| decode(raw))
                .collect()
        },
        move |values| {
            values
                .iter()
                .map(|value| (key.clone(), value.to_segment()))
                .collect()
        },
    )
}

fn decode<T, E>(raw: &str) -> Result<T, E>
where
    T: FromSegment,
    E: ParamMatchingError,
{
    T::from_segment(raw).map_err(|err| E::from_throwable(Box::new(err)))
}

fn single<T: ToSegment>(key: &Cow<'static, str>, value: &T) -> ParamsMap {
    let mut params = ParamsMap::new();
    params.insert(key.clone(), value.to_segment());
    params
}

impl<T, U, E> BitAnd<QueryParameters<U, E>> for QueryParameters<T, E>
where
    T: Flatten + Tupler<U> + 'static,
    U: Flatten + 'static,
    T::Out: Flatten,
    E: 'static,
{
    type Output = QueryParameters<T::Out, E>;

    /// Matches both sets of parameters, left first.
    fn bitand(self, rhs: QueryParameters<U, E>) -> Self::Output {
        let (left, right) = (self.clone(), rhs.clone());
        QueryParameters::<T::Out, E>::new(
            move |params| {
                let first = left.match_params(params)?;
                let second = right.match_params(params)?;
                Ok(<T as Tupler<U>>::apply(
                    T::unflatten(first),
                    U::unflatten(second),
                )
                .flatten())
            },
            move |value| {
                let (first, second) =
                    <T as Tupler<U>>::unapply(<T::Out>::unflatten(value));
                let mut params = self.create_params(first.flatten());
                params.extend(rhs.create_params(second.flatten()));
                params
            },
        )
    }
}

type UrlMatchFn<T, E> = dyn for<'a> Fn(
        &'a [Token],
        &ParamsMap,
    ) -> Result<MatchOutcome<'a, T>, E>
    + Send
    + Sync;

type UrlCreateFn<T> = dyn Fn(T) -> (Vec<Token>, ParamsMap) + Send + Sync;

/// A path matcher together with a query-parameter matcher, built with
/// [`PathSegment::with_params`].
pub struct UrlMatcher<T: Flatten, E> {
    matcher: Arc<UrlMatchFn<T::Flat, E>>,
    creator: Arc<UrlCreateFn<T::Flat>>,
}

impl<T: Flatten, E> UrlMatcher<T, E> {
    pub fn new(
        match_fn: impl for<'a> Fn(
                &'a [Token],
                &ParamsMap,
            ) -> Result<MatchOutcome<'a, T::Flat>, E>
            + Send
            + Sync
            + 'static,
        create_fn: impl Fn(T::Flat) -> (Vec<Token>, ParamsMap)
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            matcher: Arc::new(match_fn),
            creator: Arc::new(create_fn),
        }
    }

    /// Matches the path first, then the parameters.
    pub fn match_parts<'a>(
        &self,
        tokens: &'a [Token],
        params: &ParamsMap,
    ) -> Result<MatchOutcome<'a, T::Flat>, E> {
        (self.matcher)(tokens, params)
    }

    pub fn create_parts(&self, value: T::Flat) -> (Vec<Token>, ParamsMap) {
        (self.creator)(value)
    }

    /// Tokenizes a whole URL, then matches its path and query parameters.
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
        let outcome = self.match_parts(&parts.segments, &parts.params)?;
        Ok(outcome.into_owned())
    }

    /// Encodes `value` as a percent-encoded URL with
    /// [`make_url`](crate::url::make_url).
    #[cfg(feature = "url")]
    pub fn create_url(&self, value: T::Flat) -> String {
        let (tokens, params) = self.create_parts(value);
        crate::url::make_url(&tokens, &params)
    }
}

impl<T: Flatten, E> Clone for UrlMatcher<T, E> {
    fn clone(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
            creator: Arc::clone(&self.creator),
        }
    }
}

impl<T: Flatten, E> fmt::Debug for UrlMatcher<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlMatcher")
            .field("value", &std::any::type_name::<T::Flat>())
            .finish_non_exhaustive()
    }
}

impl<T, E> PathSegment<T, E>
where
    T: Flatten + 'static,
    E: 'static,
{
    /// Attaches a query-parameter matcher to this path.
    ///
    /// The path's value and the parameters' value are joined into one flat
    /// value, path first.
    pub fn with_params<Q>(
        self,
        params: QueryParameters<Q, E>,
    ) -> UrlMatcher<T::Out, E>
    where
        T: Tupler<Q>,
        Q: Flatten + 'static,
        T::Out: Flatten,
    {
        let (path, query) = (self.clone(), params.clone());
        UrlMatcher::<T::Out, E>::new(
            move |tokens, map| {
                let outcome = path.match_tokens(tokens)?;
                let second = query.match_params(map)?;
                Ok(outcome.map(|first| {
                    <T as Tupler<Q>>::apply(
                        T::unflatten(first),
                        Q::unflatten(second),
                    )
                    .flatten()
                }))
            },
            move |value| {
                let (first, second) =
                    <T as Tupler<Q>>::unapply(<T::Out>::unflatten(value));
                (
                    self.create(first.flatten()),
                    params.create_params(second.flatten()),
                )
            },
        )
    }
}
