//! Runtime configuration read from the environment.
//!
//! | Variable      | Meaning                                   | Default |
//! |---------------|-------------------------------------------|---------|
//! | `ALMA_STORE`  | Directory holding the record files        | `.alma` |
//! | `ALMA_TODAY`  | Pins the calendar day (`YYYY-MM-DD`)      | unset   |
//!
//! The binary loads a `.env` file first, so either source works.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Environment variable naming the store directory.
pub const STORE_VAR: &str = "ALMA_STORE";
/// Environment variable pinning the calendar day.
pub const TODAY_VAR: &str = "ALMA_TODAY";

const DEFAULT_STORE: &str = ".alma";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the record store lives in.
    pub store_root: PathBuf,
    /// Calendar day to use instead of the system clock.
    pub today: Option<NaiveDate>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error string if `ALMA_TODAY` is set but not a valid date.
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the pinned day is set but not a valid date.
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_root = lookup(STORE_VAR)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE), PathBuf::from);
        let today = match lookup(TODAY_VAR).filter(|v| !v.is_empty()) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|e| format!("Invalid {TODAY_VAR} {raw:?}: {e}"))?,
            ),
            None => None,
        };
        Ok(Self { store_root, today })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| pairs.iter().find(|(k, _)| *k == name).map(|(_, v)| (*v).to_string())
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.store_root, PathBuf::from(".alma"));
        assert_eq!(config.today, None);
    }

    #[test]
    fn reads_store_and_today() {
        let config =
            Config::from_vars(vars(&[("ALMA_STORE", "/tmp/alma"), ("ALMA_TODAY", "2024-01-01")]))
                .unwrap();
        assert_eq!(config.store_root, PathBuf::from("/tmp/alma"));
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn rejects_bad_today() {
        let err = Config::from_vars(vars(&[("ALMA_TODAY", "01/01/2024")])).unwrap_err();
        assert!(err.contains("ALMA_TODAY"));
    }

    #[test]
    fn empty_values_fall_back() {
        let config = Config::from_vars(vars(&[("ALMA_STORE", ""), ("ALMA_TODAY", "")])).unwrap();
        assert_eq!(config.store_root, PathBuf::from(".alma"));
        assert_eq!(config.today, None);
    }
}
