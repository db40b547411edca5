use super::PathSegment;
use crate::{
    BoxError, FromSegment, MatchOutcome, PathMatchingError, ToSegment, Token,
};

/// Matches without consuming anything and decodes to `()`.
pub fn root<E: 'static>() -> PathSegment<(), E> {
    PathSegment::<(), E>::new(
        |tokens| Ok(MatchOutcome::new((), tokens)),
        |()| Vec::new(),
    )
}

/// The same segment as [`root`].
pub fn empty<E: 'static>() -> PathSegment<(), E> {
    root()
}

/// Matches only when there are no tokens left.
///
/// Use it to reject trailing path components.
pub fn end_of_segments<E>() -> PathSegment<(), E>
where
    E: PathMatchingError + 'static,
{
    PathSegment::<(), E>::new(
        |tokens| {
            if tokens.is_empty() {
                Ok(MatchOutcome::new((), tokens))
            } else {
                Err(E::end_of_segment_required(tokens))
            }
        },
        |()| Vec::new(),
    )
}

/// Consumes exactly one token, decoding it with `decode`.
///
/// A failure returned by `decode` is adapted through
/// [`from_throwable`](crate::ErrorFromThrowable::from_throwable).
pub fn simple<T, E>(
    decode: impl Fn(&str) -> Result<T, BoxError> + Send + Sync + 'static,
    encode: impl Fn(&T) -> String + Send + Sync + 'static,
) -> PathSegment<(T,), E>
where
    T: 'static,
    E: PathMatchingError + 'static,
{
    segment_with(move |raw| decode(raw).map_err(E::from_throwable), encode)
}

/// Consumes one token and decodes it as a `T`.
///
/// Content that `T` cannot be decoded from is reported as
/// [`malformed`](PathMatchingError::malformed).
pub fn segment<T, E>() -> PathSegment<(T,), E>
where
    T: FromSegment + ToSegment + 'static,
    E: PathMatchingError + 'static,
{
    segment_with(
        |raw| T::from_segment(raw).map_err(|_| E::malformed(raw)),
        T::to_segment,
    )
}

/// Consumes one token, decoding it with `decode` and printing values with
/// `print`.
pub fn segment_with<T, E>(
    decode: impl Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    print: impl Fn(&T) -> String + Send + Sync + 'static,
) -> PathSegment<(T,), E>
where
    T: 'static,
    E: PathMatchingError + 'static,
{
    PathSegment::<(T,), E>::new(
        move |tokens| match tokens.split_first() {
            None => Err(E::missing_segment()),
            Some((first, rest)) => decode(first.as_str())
                .map(|value| MatchOutcome::new(value, rest)),
        },
        move |value| vec![Token::new(print(&value))],
    )
}

/// Matches one token equal to `value`, and decodes to `()`.
///
/// ```rust
/// use path_codec::{literal, PathSegment, SegmentError};
///
/// let yes: PathSegment<(), SegmentError> = literal(true);
/// assert!(yes.match_path("true").is_ok());
/// assert_eq!(
///     yes.match_path("false"),
///     Err(SegmentError::WrongValue {
///         expected: "true".into(),
///         actual: "false".into()
///     })
/// );
/// ```
pub fn literal<T, E>(value: T) -> PathSegment<(), E>
where
    T: FromSegment + ToSegment + PartialEq + Send + Sync + 'static,
    E: PathMatchingError + 'static,
{
    literal_with(
        value,
        |raw| T::from_segment(raw).map_err(|_| E::malformed(raw)),
        T::to_segment,
    )
}

/// Like [`literal`], with an explicit decoder and printer.
///
/// Whether the token fails to decode or decodes to another value, the
/// failure is [`wrong_value`](PathMatchingError::wrong_value) with the
/// printed literal as `expected` and the raw token as `actual`.
pub fn literal_with<T, E>(
    value: T,
    decode: impl Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    print: impl Fn(&T) -> String,
) -> PathSegment<(), E>
where
    T: PartialEq + Send + Sync + 'static,
    E: PathMatchingError + 'static,
{
    let expected = print(&value);
    let printed = Token::new(expected.clone());
    PathSegment::<(), E>::new(
        move |tokens| match tokens.split_first() {
            None => Err(E::missing_segment()),
            Some((first, rest)) => match decode(first.as_str()) {
                Ok(decoded) if decoded == value => {
                    Ok(MatchOutcome::new((), rest))
                }
                _ => Err(E::wrong_value(&expected, first.as_str())),
            },
        },
        move |()| vec![printed.clone()],
    )
}

/// Matches one token with exactly the text `path`.
pub fn static_segment<E>(path: impl Into<String>) -> PathSegment<(), E>
where
    E: PathMatchingError + 'static,
{
    literal::<String, E>(path.into())
}

/// Consumes every remaining token, decoding them to their raw contents.
///
/// ```rust
/// use path_codec::{remaining_segments, static_segment, NoMatch, PathSegment};
///
/// let assets: PathSegment<_, NoMatch> =
///     static_segment("static") / remaining_segments();
/// let matched = assets.match_path("/static/css/site.css").unwrap();
/// assert_eq!(matched.value, ["css", "site.css"]);
/// ```
pub fn remaining_segments<E: 'static>() -> PathSegment<(Vec<String>,), E> {
    PathSegment::<(Vec<String>,), E>::new(
        |tokens| {
            let values: Vec<String> =
                tokens.iter().map(|token| token.as_str().to_owned()).collect();
            Ok(MatchOutcome::new(values, &tokens[tokens.len()..]))
        },
        |values: Vec<String>| values.into_iter().map(Token::from).collect(),
    )
}
