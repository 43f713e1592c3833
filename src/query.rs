//! Case-insensitive query options for connection strings.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::case_fold;

/// Query options from a connection string.
///
/// An ordered list of `name=value` pairs with URLSearchParams semantics,
/// except that every name lookup is case-insensitive: a name resolves to the
/// first stored name that matches it ignoring case, and that stored casing is
/// kept for display.
///
/// Until the first mutation the query serializes exactly as it was parsed.
/// After that it is re-serialized as `application/x-www-form-urlencoded`.
///
/// # Examples
///
/// ```
/// use mongodb_connection_string::QueryParams;
///
/// let mut params = QueryParams::parse("SERVERSELECTIONTIMEOUTMS=100");
/// params.set("serverSelectionTimeoutMS", "200");
/// params.append("serverselectiontimeoutms", "300");
///
/// assert_eq!(params.get_all("ServerSelectionTimeoutMS"), vec!["200", "300"]);
/// assert_eq!(
///     params.to_string(),
///     "SERVERSELECTIONTIMEOUTMS=200&SERVERSELECTIONTIMEOUTMS=300"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
    /// Query text as the URL parser left it, valid while `modified` is false
    original: Option<String>,
    modified: bool,
}

impl QueryParams {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a form-urlencoded query string. A leading `?` is ignored.
    ///
    /// Parsing never fails; undecodable escapes are kept literally.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        Self::from_url_query(Some(input))
    }

    /// Builds the container from the query component reported by the URL
    /// parser, remembering the original text for verbatim serialization.
    pub(crate) fn from_url_query(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            pairs,
            original: query.map(str::to_string),
            modified: false,
        }
    }

    fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        case_fold::resolve(self.pairs.iter().map(|(k, _)| k.as_str()), name)
    }

    fn touch(&mut self) {
        self.modified = true;
        self.original = None;
    }

    /// Returns the value of the first pair under `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = self.resolve(name);
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value stored under `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        let key = self.resolve(name);
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if at least one pair is stored under `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        let key = self.resolve(name);
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Adds a pair without touching existing pairs under the same name.
    pub fn append(&mut self, name: &str, value: &str) {
        let key = self.resolve(name).to_string();
        self.pairs.push((key, value.to_string()));
        self.touch();
    }

    /// Sets `name` to a single value.
    ///
    /// The first existing pair keeps its position and casing and receives the
    /// new value; any further pairs under that name are removed. Without an
    /// existing pair, a new one is appended.
    pub fn set(&mut self, name: &str, value: &str) {
        let key = self.resolve(name).to_string();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || *k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key, value.to_string())),
        }
        self.touch();
    }

    /// Rewrites the value of every pair whose name matches `name` ignoring
    /// case, whatever casing each pair was stored under.
    ///
    /// `rewrite` returns `None` to leave a value as it is. The query keeps
    /// its original text unless at least one value changed.
    pub(crate) fn rewrite_matching<F>(&mut self, name: &str, mut rewrite: F)
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut changed = false;
        for (key, value) in &mut self.pairs {
            if !case_fold::fold_eq(key, name) {
                continue;
            }
            if let Some(new_value) = rewrite(value.as_str()) {
                *value = new_value;
                changed = true;
            }
        }
        if changed {
            self.touch();
        }
    }

    /// Removes every pair stored under `name`.
    pub fn delete(&mut self, name: &str) {
        let key = self.resolve(name).to_string();
        self.pairs.retain(|(k, _)| *k != key);
        self.touch();
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over all pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns an iterator over the names of all pairs, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Query component to write back into a URL, `None` for no `?` at all.
    pub(crate) fn query_string(&self) -> Option<String> {
        if !self.modified {
            return self.original.clone();
        }
        if self.pairs.is_empty() {
            return None;
        }
        Some(self.encode())
    }

    fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.query_string() {
            Some(q) => write!(f, "{q}"),
            None => Ok(()),
        }
    }
}

impl FromStr for QueryParams {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
