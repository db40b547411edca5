use crate::Token;
use std::borrow::Cow;

/// A successful match: the decoded value and the tokens that were not
/// consumed.
///
/// When produced by [`PathSegment::match_tokens`](crate::PathSegment::match_tokens),
/// `remaining` borrows a suffix of the slice that was passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome<'a, T> {
    pub value: T,
    pub remaining: Cow<'a, [Token]>,
}

impl<'a, T> MatchOutcome<'a, T> {
    pub fn new(value: T, remaining: impl Into<Cow<'a, [Token]>>) -> Self {
        Self {
            value,
            remaining: remaining.into(),
        }
    }

    /// An outcome that consumed every token.
    pub fn complete(value: T) -> Self {
        Self {
            value,
            remaining: Cow::Borrowed(&[]),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn remaining(&self) -> &[Token] {
        &self.remaining
    }

    pub fn map<U>(self, fun: impl FnOnce(T) -> U) -> MatchOutcome<'a, U> {
        MatchOutcome {
            value: fun(self.value),
            remaining: self.remaining,
        }
    }

    pub fn into_owned(self) -> MatchOutcome<'static, T> {
        MatchOutcome {
            value: self.value,
            remaining: Cow::Owned(self.remaining.into_owned()),
        }
    }

    /// Runs `next` on the remaining tokens, keeping this outcome's value.
    ///
    /// The remainder of the result borrows from the same input as `self`
    /// when `self` borrows; otherwise it is owned.
    pub(crate) fn chain<U, E>(
        self,
        next: impl for<'b> FnOnce(
            &'b [Token],
        ) -> Result<MatchOutcome<'b, U>, E>,
    ) -> Result<(T, MatchOutcome<'a, U>), E> {
        let MatchOutcome { value, remaining } = self;
        let next = match remaining {
            Cow::Borrowed(rest) => next(rest)?,
            Cow::Owned(rest) => next(&rest)?.into_owned(),
        };
        Ok((value, next))
    }
}

#[cfg(test)]
mod tests {
    use super::MatchOutcome;
    use crate::Token;
    use std::borrow::Cow;

    #[test]
    fn chain_keeps_borrowing_the_input() {
        let tokens = Token::from_path("a/b/c");
        let first = MatchOutcome::new(1, &tokens[1..]);
        let (value, next) = first
            .chain(|rest| {
                Ok::<_, ()>(MatchOutcome::new(rest[0].to_string(), &rest[1..]))
            })
            .expect("chain should succeed");
        assert_eq!(value, 1);
        assert_eq!(next.value, "b");
        assert!(matches!(next.remaining, Cow::Borrowed(_)));
        assert_eq!(next.remaining(), &tokens[2..]);
    }

    #[test]
    fn chain_stays_owned_when_the_input_was_owned() {
        let tokens = Token::from_path("a/b");
        let first = MatchOutcome::new((), tokens);
        let (_, next) = first
            .chain(|rest| Ok::<_, ()>(MatchOutcome::new((), &rest[1..])))
            .expect("chain should succeed");
        assert!(matches!(next.remaining, Cow::Owned(_)));
        assert_eq!(next.remaining(), &[Token::new("b")]);
    }

    #[test]
    fn complete_has_nothing_left() {
        let outcome = MatchOutcome::complete(5);
        assert!(outcome.is_complete());
        assert_eq!(outcome.map(|n| n * 2).value, 10);
    }
}
