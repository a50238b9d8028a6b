use crate::compat::{String, ToString, Vec};
use crate::unicode::charset::Charset;
use crate::unicode::percent_encode::form_encode_into;

/// Query parameters of a `Site`.
/// Keys are unique and keep the order they were first inserted in;
/// putting an existing key replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Parameters {
    params: Vec<(String, String)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Split a raw query string (with or without leading `?`) on `&` and `=`.
    /// Keys and values are kept as-is, without percent-decoding.
    /// A token without `=` maps to an empty value; later duplicates win.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut parameters = Self::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) => parameters.put(key, value),
                None => parameters.put(pair, ""),
            }
        }
        parameters
    }

    /// Insert a key, or overwrite the value of an existing one in place.
    pub fn put(&mut self, key: &str, value: &str) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.params.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(index).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    /// Write `k=v&k=v` (no leading `?`) into `buffer`, each side form-encoded.
    pub(crate) fn serialize_into(&self, buffer: &mut String, charset: Option<Charset>) {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            form_encode_into(buffer, key, charset);
            buffer.push('=');
            form_encode_into(buffer, value, charset);
        }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut parameters = Self::new();
        parameters.extend(iter);
        parameters
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for Parameters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key.as_ref(), value.as_ref());
        }
    }
}

impl From<&str> for Parameters {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
