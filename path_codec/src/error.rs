//! Pluggable error representations.
//!
//! The engine never builds a concrete error itself. Instead, every matcher is
//! generic over an error type `E` and asks `E` to construct the failure it
//! needs through these factory traits, so an application can use its own
//! error type throughout a whole segment tree.

use crate::Token;
use thiserror::Error;

/// A failure raised by a user-supplied decoder.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Adapts a decoder's own failure into the matcher's error type.
pub trait ErrorFromThrowable {
    fn from_throwable(cause: BoxError) -> Self;
}

/// The errors a path matcher can report.
pub trait PathMatchingError: ErrorFromThrowable {
    /// A typed decoder rejected the raw content of a token.
    fn malformed(raw: &str) -> Self;

    /// Tokens were left over where the path was required to end.
    fn end_of_segment_required(remaining: &[Token]) -> Self;

    /// A literal segment did not find the value it expects.
    ///
    /// `actual` is always the raw token, whether it failed to decode or
    /// decoded to a different value.
    fn wrong_value(expected: &str, actual: &str) -> Self;

    /// A segment needed a token but the path had already ended.
    fn missing_segment() -> Self;
}

/// The errors a query-parameter matcher can report.
pub trait ParamMatchingError: ErrorFromThrowable {
    fn missing_parameter(name: &str) -> Self;
}

/// An error that only says that matching failed.
#[derive(Error, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[error("no match")]
pub struct NoMatch;

impl ErrorFromThrowable for NoMatch {
    fn from_throwable(_cause: BoxError) -> Self {
        NoMatch
    }
}

impl PathMatchingError for NoMatch {
    fn malformed(_raw: &str) -> Self {
        NoMatch
    }

    fn end_of_segment_required(_remaining: &[Token]) -> Self {
        NoMatch
    }

    fn wrong_value(_expected: &str, _actual: &str) -> Self {
        NoMatch
    }

    fn missing_segment() -> Self {
        NoMatch
    }
}

impl ParamMatchingError for NoMatch {
    fn missing_parameter(_name: &str) -> Self {
        NoMatch
    }
}

/// A descriptive error with one variant per kind of failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("malformed path segment {0:?}")]
    Malformed(String),
    #[error("expected the path to end, found {} more segment(s)", .0.len())]
    EndOfSegmentRequired(Vec<Token>),
    #[error("expected path segment {expected:?}, found {actual:?}")]
    WrongValue { expected: String, actual: String },
    #[error("missing path segment")]
    MissingSegment,
    #[error("missing query parameter {0:?}")]
    MissingParameter(String),
    #[error("decoder failed: {0}")]
    Thrown(String),
}

impl ErrorFromThrowable for SegmentError {
    fn from_throwable(cause: BoxError) -> Self {
        SegmentError::Thrown(cause.to_string())
    }
}

impl PathMatchingError for SegmentError {
    fn malformed(raw: &str) -> Self {
        SegmentError::Malformed(raw.to_owned())
    }

    fn end_of_segment_required(remaining: &[Token]) -> Self {
        SegmentError::EndOfSegmentRequired(remaining.to_vec())
    }

    fn wrong_value(expected: &str, actual: &str) -> Self {
        SegmentError::WrongValue {
            expected: expected.to_owned(),
            actual: actual.to_owned(),
        }
    }

    fn missing_segment() -> Self {
        SegmentError::MissingSegment
    }
}

impl ParamMatchingError for SegmentError {
    fn missing_parameter(name: &str) -> Self {
        SegmentError::MissingParameter(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ErrorFromThrowable, NoMatch, PathMatchingError, SegmentError,
    };
    use crate::Token;

    #[test]
    fn every_constructor_of_no_match_is_the_same_value() {
        assert_eq!(NoMatch::malformed("x"), NoMatch);
        assert_eq!(NoMatch::missing_segment(), NoMatch);
        assert_eq!(NoMatch::wrong_value("a", "b"), NoMatch);
        assert_eq!(NoMatch::end_of_segment_required(&[]), NoMatch);
        assert_eq!(NoMatch::from_throwable("boom".into()), NoMatch);
    }

    #[test]
    fn segment_error_messages() {
        let err = SegmentError::end_of_segment_required(&[
            Token::new("a"),
            Token::new("b"),
        ]);
        assert_eq!(
            err.to_string(),
            "expected the path to end, found 2 more segment(s)"
        );
        assert_eq!(
            SegmentError::wrong_value("true", "false").to_string(),
            r#"expected path segment "true", found "false""#
        );
    }

    #[test]
    fn thrown_errors_keep_their_message() {
        let cause = "abc".parse::<u8>().unwrap_err();
        assert_eq!(
            SegmentError::from_throwable(Box::new(cause)),
            SegmentError::Thrown("invalid digit found in string".into())
        );
    }
}
