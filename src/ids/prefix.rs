//! Validated category tags.

use std::fmt;
use std::str::FromStr;

/// A category tag that can round-trip through [`super::count_for_day`].
///
/// The generator accepts any string, but a tag containing `-` splits into
/// extra segments and its own ids would never be counted. `Prefix` rules
/// such tags out where user input enters the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Validates `raw` as a prefix.
    ///
    /// # Errors
    ///
    /// Returns an error string if `raw` is empty or contains `-` or whitespace.
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.is_empty() {
            return Err("Prefix must not be empty".to_string());
        }
        if let Some(bad) = raw.chars().find(|c| *c == '-' || c.is_whitespace()) {
            return Err(format!("Prefix {raw:?} contains invalid character {bad:?}"));
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Prefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
