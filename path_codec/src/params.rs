use std::borrow::Cow;

type ParamsMapInner = Vec<(Cow<'static, str>, Vec<String>)>;

/// The query parameters of a URL.
///
/// Keys keep the order in which they were first inserted, and every key can
/// hold several values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ParamsMap(ParamsMapInner);

impl ParamsMap {
    /// Creates an empty map.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value into the map.
    ///
    /// If a value with that key already exists, the new value will be added to it.
    /// To replace the value instead, see [`replace`](Self::replace).
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: String) {
        let key = key.into();
        if let Some(prev) = self.0.iter_mut().find(|(k, _)| k == &key) {
            prev.1.push(value);
        } else {
            self.0.push((key, vec![value]));
        }
    }

    /// Inserts a value into the map, replacing any existing value for that key.
    pub fn replace(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: String,
    ) {
        let key = key.into();
        if let Some(prev) = self.0.iter_mut().find(|(k, _)| k == &key) {
            prev.1.clear();
            prev.1.push(value);
        } else {
            self.0.push((key, vec![value]));
        }
    }

    /// Gets the most-recently-added value of this param from the map.
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_str(key).map(ToOwned::to_owned)
    }

    /// Gets all values of this param, in insertion order.
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_slice()))
    }

    /// Gets a reference to the most-recently-added value of this param from the map.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.iter().find_map(|(k, v)| {
            if k == key {
                v.last().map(|i| i.as_str())
            } else {
                None
            }
        })
    }

    /// Removes a value from the map.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        let idx = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(idx).1)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over every key and its values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.0.iter().map(|(k, v)| (k.as_ref(), v.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for ParamsMap
where
    K: Into<Cow<'static, str>>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for ParamsMap
where
    K: Into<Cow<'static, str>>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value.into());
        }
    }
}

impl IntoIterator for ParamsMap {
    type Item = (Cow<'static, str>, String);
    type IntoIter = ParamsMapIter;

    fn into_iter(self) -> Self::IntoIter {
        let inner = self.0.into_iter().fold(vec![], |mut c, (k, vs)| {
            for v in vs {
                c.push((k.clone(), v));
            }
            c
        });
        ParamsMapIter(inner.into_iter())
    }
}

/// An iterator over the keys and values of a [`ParamsMap`].
#[derive(Debug)]
pub struct ParamsMapIter(
    <Vec<(Cow<'static, str>, String)> as IntoIterator>::IntoIter,
);

impl Iterator for ParamsMapIter {
    type Item = (Cow<'static, str>, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

#[cfg(test)]
mod tests {
    use super::ParamsMap;

    #[test]
    fn repeated_keys_collect_values() {
        let map: ParamsMap =
            [("tag", "a"), ("page", "2"), ("tag", "b")].into_iter().collect();
        assert_eq!(
            map.get_all("tag"),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(map.get_str("tag"), Some("b"));
        assert_eq!(map.get("page").as_deref(), Some("2"));
        assert_eq!(map.get_str("missing"), None);
    }

    #[test]
    fn keys_keep_first_insertion_order() {
        let map: ParamsMap =
            [("b", "1"), ("a", "2"), ("b", "3")].into_iter().collect();
        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
        let pairs: Vec<(String, String)> =
            map.into_iter().map(|(k, v)| (k.into_owned(), v)).collect();
        assert_eq!(
            pairs,
            [
                ("b".to_string(), "1".to_string()),
                ("b".to_string(), "3".to_string()),
                ("a".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn replace_and_remove() {
        let mut map = ParamsMap::new();
        map.insert("q", "one".into());
        map.insert("q", "two".into());
        map.replace("q", "three".into());
        assert_eq!(map.get_all("q"), Some(&["three".to_string()][..]));
        assert_eq!(map.remove("q"), Some(vec!["three".to_string()]));
        assert!(map.is_empty());
        assert_eq!(map.remove("q"), None);
    }
}
