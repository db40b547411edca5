use std::fmt;

/// The character that separates path components.
pub const SEPARATOR: char = '/';

/// One component of a URL path.
///
/// A token is opaque: it carries the raw (already decoded) text of a single
/// path component and nothing else.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Splits a path into tokens.
    ///
    /// Empty components are dropped, so leading, trailing and repeated
    /// separators never produce empty tokens.
    ///
    /// ```rust
    /// use path_codec::Token;
    ///
    /// let tokens = Token::from_path("//users/42/");
    /// assert_eq!(tokens, vec![Token::new("users"), Token::new("42")]);
    /// assert!(Token::from_path("/").is_empty());
    /// ```
    pub fn from_path(path: &str) -> Vec<Token> {
        path.split(SEPARATOR)
            .filter(|component| !component.is_empty())
            .map(Token::new)
            .collect()
    }

    /// Joins the raw contents of `tokens` with the separator.
    ///
    /// Nothing is escaped; see [`make_path`](crate::url::make_path) for the
    /// percent-encoded form.
    pub fn join(tokens: &[Token]) -> String {
        let mut buf = String::new();
        for (idx, token) in tokens.iter().enumerate() {
            if idx > 0 {
                buf.push(SEPARATOR);
            }
            buf.push_str(token.as_str());
        }
        buf
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}
