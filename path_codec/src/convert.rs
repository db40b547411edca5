use std::{convert::Infallible, error::Error};

/// Decodes a value from the raw content of one path component.
pub trait FromSegment: Sized {
    type Err: Error + Send + Sync + 'static;

    fn from_segment(raw: &str) -> Result<Self, Self::Err>;
}

/// Prints a value as the raw content of one path component.
///
/// For every value an application produces, printing and then decoding it
/// with [`FromSegment`] is expected to give the same value back.
pub trait ToSegment {
    fn to_segment(&self) -> String;
}

impl FromSegment for String {
    type Err = Infallible;

    fn from_segment(raw: &str) -> Result<Self, Self::Err> {
        Ok(raw.to_owned())
    }
}

impl ToSegment for String {
    fn to_segment(&self) -> String {
        self.clone()
    }
}

impl ToSegment for &str {
    fn to_segment(&self) -> String {
        (*self).to_owned()
    }
}

macro_rules! from_str_segments {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromSegment for $ty {
                type Err = <$ty as std::str::FromStr>::Err;

                fn from_segment(raw: &str) -> Result<Self, Self::Err> {
                    raw.parse()
                }
            }

            impl ToSegment for $ty {
                fn to_segment(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

from_str_segments!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

#[cfg(test)]
mod tests {
    use super::{FromSegment, ToSegment};

    #[test]
    fn numbers_decode_and_print() {
        assert_eq!(i32::from_segment("-42").ok(), Some(-42));
        assert!(u8::from_segment("256").is_err());
        assert!(i64::from_segment("abc").is_err());
        assert_eq!(1.5f64.to_segment(), "1.5");
    }

    #[test]
    fn booleans_only_accept_lowercase_words() {
        assert_eq!(bool::from_segment("true").ok(), Some(true));
        assert!(bool::from_segment("True").is_err());
        assert_eq!(false.to_segment(), "false");
    }

    #[test]
    fn strings_are_taken_verbatim() {
        assert_eq!(String::from_segment("a b").ok().as_deref(), Some("a b"));
        assert_eq!("x/y".to_segment(), "x/y");
    }
}
