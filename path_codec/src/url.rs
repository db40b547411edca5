//! Splitting URLs into tokens and parameters, and generating URLs from them.

use crate::{ParamsMap, Token};
use percent_encoding::{
    percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS,
    NON_ALPHANUMERIC,
};

/// Relative URLs are resolved against this before parsing; only their path
/// and query are kept.
const BASE: &str = "http://localhost";

/// Characters escaped inside one path component.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The parts of a URL that matchers work on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Decoded, non-empty path components.
    pub segments: Vec<Token>,
    /// Decoded query parameters.
    pub params: ParamsMap,
}

impl UrlParts {
    /// Parses an absolute URL, or a relative one such as `/users/42?page=2`.
    ///
    /// Host and fragment are discarded. Path components are percent-decoded
    /// and empty ones dropped, the same way [`Token::from_path`] drops them.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    pub fn parse(raw: &str) -> Result<Self, ::url::ParseError> {
        let base = ::url::Url::parse(BASE)?;
        let parsed = ::url::Url::options().base_url(Some(&base)).parse(raw);
        let url = match parsed {
            Ok(url) => url,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("could not parse {raw:?} as a URL: {e}");
                return Err(e);
            }
        };

        let segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|component| !component.is_empty())
            .map(|component| {
                Token::new(percent_decode_str(component).decode_utf8_lossy())
            })
            .collect();
        let params = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Ok(Self { segments, params })
    }
}

/// Percent-encodes each token and joins them with `/`.
///
/// Tokens that encode to nothing are left out, so the result splits back into
/// the same non-empty tokens.
pub fn make_path(segments: &[Token]) -> String {
    let encoded = segments
        .iter()
        .map(|token| utf8_percent_encode(token.as_str(), PATH_SEGMENT))
        .map(|component| component.to_string())
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>();
    encoded.join("/")
}

/// Renders one `key=value` pair per value, joined with `&`.
///
/// Keys with several values are repeated.
pub fn make_params(params: &ParamsMap) -> String {
    let mut buf = String::new();
    for (k, vs) in params.iter() {
        for v in vs {
            if !buf.is_empty() {
                buf.push('&');
            }
            buf.push_str(&escape(k));
            buf.push('=');
            buf.push_str(&escape(v));
        }
    }
    buf
}

/// Joins [`make_path`] and [`make_params`] with `?`.
///
/// The `?` and the parameters are only added when there is at least one
/// parameter value.
pub fn make_url(segments: &[Token], params: &ParamsMap) -> String {
    let mut url = make_path(segments);
    let query = make_params(params);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}

fn escape(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::{make_params, make_path, make_url, UrlParts};
    use crate::{ParamsMap, Token};

    #[test]
    fn parses_relative_urls() {
        let parts = UrlParts::parse("/users/42?page=2&tag=a&tag=b#top")
            .expect("couldn't parse url");
        assert_eq!(parts.segments, Token::from_path("users/42"));
        assert_eq!(parts.params.get_str("page"), Some("2"));
        assert_eq!(
            parts.params.get_all("tag"),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn parses_absolute_urls_ignoring_the_host() {
        let parts = UrlParts::parse("https://example.com//a//b/")
            .expect("couldn't parse url");
        assert_eq!(parts.segments, Token::from_path("a/b"));
        assert!(parts.params.is_empty());
    }

    #[test]
    fn decodes_percent_encoded_components() {
        let parts = UrlParts::parse("/files/a%20b/c%2Fd?q=x%26y")
            .expect("couldn't parse url");
        assert_eq!(
            parts.segments,
            vec![Token::new("files"), Token::new("a b"), Token::new("c/d")]
        );
        assert_eq!(parts.params.get_str("q"), Some("x&y"));
    }

    #[test]
    fn make_path_escapes_and_drops_empty_tokens() {
        let tokens = vec![
            Token::new("files"),
            Token::new(""),
            Token::new("a b"),
            Token::new("c/d"),
        ];
        assert_eq!(make_path(&tokens), "files/a%20b/c%2Fd");
    }

    #[test]
    fn make_params_repeats_keys() {
        let params: ParamsMap = [("tag", "a"), ("tag", "b"), ("q", "x y")]
            .into_iter()
            .collect();
        assert_eq!(make_params(&params), "tag=a&tag=b&q=x%20y");
        assert_eq!(make_params(&ParamsMap::new()), "");
    }

    #[test]
    fn make_url_appends_params_once() {
        let tokens = Token::from_path("users/42");
        let params: ParamsMap = [("page", "2")].into_iter().collect();
        assert_eq!(make_url(&tokens, &params), "users/42?page=2");
        assert_eq!(make_url(&tokens, &ParamsMap::new()), "users/42");
    }

    #[test]
    fn generated_urls_parse_back() {
        let tokens = vec![
            Token::new("a:b"),
            Token::new("ü"),
            Token::new("?"),
            Token::new("c\\d"),
        ];
        let params: ParamsMap =
            [("k&", "v=1"), ("k&", "w")].into_iter().collect();
        let parts = UrlParts::parse(&make_url(&tokens, &params))
            .expect("couldn't parse generated url");
        assert_eq!(parts, UrlParts { segments: tokens, params });
    }
}
