use std::fmt::{self, Display, Formatter};

/// Ordered `key=value` pairs for `GET /products`.
///
/// Keys keep insertion order, empty values are dropped on the way in and
/// values are percent-encoded on the way out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(Vec<(&'static str, String)>);

impl SearchQuery {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `key=value` unless `value` is blank.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.0.push((key, value));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={}", urlencoding::encode(value))?;
        }
        Ok(())
    }
}
