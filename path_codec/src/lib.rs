#![forbid(unsafe_code)]

//! Statically-typed URL path matchers that work in both directions.
//!
//! A [`PathSegment`] decodes a sequence of path [`Token`]s into a typed value
//! and encodes that value back into tokens. Segments are built from a few
//! primitives and composed with combinators:
//!
//! - `a / b` matches `a`, then `b` on what is left, joining both values into
//!   one flat tuple (see [`Tupler`]).
//! - `a | b` tries `a`, then `b`, returning an [`Either`].
//! - [`filter`](PathSegment::filter) rejects values, [`cast`](PathSegment::cast)
//!   re-types them through a [`Codec`].
//! - [`with_params`](PathSegment::with_params) adds [`QueryParameters`].
//!
//! Every segment satisfies the round-trip law: matching what
//! [`create`](PathSegment::create) produced gives back the same value with no
//! tokens left over.
//!
//! ```rust
//! use path_codec::{
//!     end_of_segments, root, segment, static_segment, Either, PathSegment,
//!     SegmentError,
//! };
//!
//! let post: PathSegment<_, SegmentError> = root()
//!     / static_segment("users")
//!     / segment::<u32, _>()
//!     / static_segment("posts")
//!     / (segment::<u64, _>() | static_segment("latest"))
//!     / end_of_segments();
//!
//! let matched = post.match_path("/users/42/posts/latest").unwrap();
//! assert_eq!(matched.value, (42, Either::Right(())));
//!
//! let path = post.create_path((7, Either::Left(1001)));
//! assert_eq!(path, "users/7/posts/1001");
//! assert_eq!(post.match_path(&path).unwrap().value, (7, Either::Left(1001)));
//! ```
//!
//! Errors are produced through the factory traits in [`error`], so any type
//! implementing them can be used. [`SegmentError`] describes each failure,
//! [`NoMatch`] only reports that matching failed.
//!
//! ## Features
//!
//! - `url` (default): [`UrlParts`](crate::url::UrlParts) tokenization, URL
//!   generation, and the `match_raw_url` methods.
//! - `tracing`: trace-level spans around the tokenizing entry points.

mod codec;
mod convert;
pub mod error;
mod outcome;
pub mod params;
mod query;
mod segment;
mod token;
#[cfg(feature = "url")]
pub mod url;

pub use codec::Codec;
pub use convert::*;
#[doc(inline)]
pub use either_of::Either;
pub use error::{
    BoxError, ErrorFromThrowable, NoMatch, ParamMatchingError,
    PathMatchingError, SegmentError,
};
#[doc(inline)]
pub use flat_tuple::{Flatten, Tupler};
pub use outcome::MatchOutcome;
pub use params::ParamsMap;
pub use query::*;
pub use segment::*;
pub use token::*;
