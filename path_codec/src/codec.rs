use std::{fmt, sync::Arc};

/// A bijection between `T` and `U`, used to re-type a matcher with
/// [`PathSegment::cast`](crate::PathSegment::cast).
///
/// Both directions must be true inverses of each other:
///
/// ```text
/// codec.right_to_left(codec.left_to_right(t)) == t
/// codec.left_to_right(codec.right_to_left(u)) == u
/// ```
///
/// An injective-only conversion is not enough: any segment cast through a
/// codec that breaks either law stops round-tripping.
///
/// ```rust
/// use path_codec::Codec;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct UserId(u32);
///
/// let codec = Codec::new(UserId, |id: UserId| id.0);
/// assert_eq!(codec.left_to_right(7), UserId(7));
/// assert_eq!(codec.right_to_left(UserId(7)), 7);
/// ```
pub struct Codec<T, U> {
    forward: Arc<dyn Fn(T) -> U + Send + Sync>,
    backward: Arc<dyn Fn(U) -> T + Send + Sync>,
}

impl<T, U> Codec<T, U> {
    pub fn new(
        left_to_right: impl Fn(T) -> U + Send + Sync + 'static,
        right_to_left: impl Fn(U) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            forward: Arc::new(left_to_right),
            backward: Arc::new(right_to_left),
        }
    }

    pub fn left_to_right(&self, value: T) -> U {
        (self.forward)(value)
    }

    pub fn right_to_left(&self, value: U) -> T {
        (self.backward)(value)
    }

    /// The same bijection, read in the other direction.
    pub fn inverse(&self) -> Codec<U, T> {
        Codec {
            forward: Arc::clone(&self.backward),
            backward: Arc::clone(&self.forward),
        }
    }

    /// Chains this codec with another one, going `T -> U -> V`.
    pub fn compose<V>(&self, next: &Codec<U, V>) -> Codec<T, V>
    where
        T: 'static,
        U: 'static,
        V: 'static,
    {
        let (f1, f2) = (Arc::clone(&self.forward), Arc::clone(&next.forward));
        let (b1, b2) = (Arc::clone(&next.backward), Arc::clone(&self.backward));
        Codec::new(move |t| f2(f1(t)), move |v| b2(b1(v)))
    }
}

impl<T, U> Clone for Codec<T, U> {
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            backward: Arc::clone(&self.backward),
        }
    }
}

impl<T, U> fmt::Debug for Codec<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("left", &std::any::type_name::<T>())
            .field("right", &std::any::type_name::<U>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Codec;

    fn celsius_tenths() -> Codec<i64, String> {
        Codec::new(
            |tenths: i64| format!("{}.{}", tenths / 10, tenths % 10),
            |s: String| {
                let (whole, frac) =
                    s.split_once('.').unwrap_or((s.as_str(), "0"));
                whole.parse::<i64>().unwrap_or_default() * 10
                    + frac.parse::<i64>().unwrap_or_default()
            },
        )
    }

    #[test]
    fn both_directions_are_inverse() {
        let codec = celsius_tenths();
        assert_eq!(codec.left_to_right(215), "21.5");
        assert_eq!(codec.right_to_left("21.5".to_string()), 215);
        assert_eq!(codec.right_to_left(codec.left_to_right(42)), 42);
    }

    #[test]
    fn inverse_swaps_directions() {
        let codec = celsius_tenths().inverse();
        assert_eq!(codec.left_to_right("3.0".to_string()), 30);
        assert_eq!(codec.right_to_left(30), "3.0");
    }

    #[test]
    fn compose_chains_forward_and_unwinds_backward() {
        let doubled = Codec::new(|n: i64| n * 2, |n: i64| n / 2);
        let codec = doubled.compose(&celsius_tenths());
        assert_eq!(codec.left_to_right(50), "10.0");
        assert_eq!(codec.right_to_left("10.0".to_string()), 50);
    }
}
