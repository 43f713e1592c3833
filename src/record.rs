//! Comma-and-colon separated option values.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::case_fold;

/// A case-insensitive record parsed from a `key:value,key:value` option.
///
/// This is the format of the `authMechanismProperties` and
/// `readPreferenceTags` connection string options. Everything after the first
/// colon of an entry is its value, so values may themselves contain colons.
/// An entry without a colon has an empty value.
///
/// Keys resolve case-insensitively to the first stored casing, and a later
/// entry for the same key overwrites the earlier value in place.
///
/// # Examples
///
/// ```
/// use mongodb_connection_string::CommaColonRecord;
///
/// let record = CommaColonRecord::parse(Some("A:B:C,D"));
/// assert_eq!(record.get("a"), Some("B:C"));
/// assert_eq!(record.get("D"), Some(""));
/// assert_eq!(record.to_string(), "A:B:C,D:");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommaColonRecord {
    entries: IndexMap<String, String>,
}

impl CommaColonRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a record. `None` and the empty string yield an empty record.
    #[must_use]
    pub fn parse(input: Option<&str>) -> Self {
        let mut record = Self::new();
        for entry in input.unwrap_or_default().split(',') {
            if entry.is_empty() {
                continue;
            }
            match entry.split_once(':') {
                Some((key, value)) => record.set(key, value),
                None => record.set(entry, ""),
            }
        }
        record
    }

    fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        case_fold::resolve(self.entries.keys().map(String::as_str), key)
    }

    /// Returns the value stored under `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(self.resolve(key)).map(String::as_str)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(self.resolve(key))
    }

    /// Stores `value` under `key`, keeping the existing casing and position.
    pub fn set(&mut self, key: &str, value: &str) {
        let key = self.resolve(key).to_string();
        self.entries.insert(key, value.to_string());
    }

    /// Removes `key`, returning its value if it was present.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        let key = self.resolve(key).to_string();
        self.entries.shift_remove(&key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for CommaColonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}:{value}")?;
        }
        Ok(())
    }
}

impl FromStr for CommaColonRecord {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(Some(s)))
    }
}

impl From<Option<&str>> for CommaColonRecord {
    fn from(input: Option<&str>) -> Self {
        Self::parse(input)
    }
}
