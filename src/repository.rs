//! Owned, in-memory record collections.
//!
//! A `Repository` is the single owner of one kind's records. Identifiers are
//! generated and inserted under the same `&mut` borrow, so two callers can
//! never both count against the same stale list.

use chrono::NaiveDate;

use crate::ids::{generate_daily_id, HasIdentifier};

/// Records of one kind, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: HasIdentifier> Repository<T> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps previously loaded records.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the id the next record under `prefix` would receive on `date`.
    ///
    /// Nothing is reserved; a later insert may take this id first.
    #[must_use]
    pub fn next_id(&self, prefix: &str, date: NaiveDate) -> String {
        generate_daily_id(prefix, &self.items, date)
    }

    /// Appends `record`.
    ///
    /// # Errors
    ///
    /// Returns an error string if a record with the same id is already held.
    pub fn insert(&mut self, record: T) -> Result<&T, String> {
        if self.get(record.id()).is_some() {
            return Err(format!("Record {} already exists", record.id()));
        }
        self.items.push(record);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Generates the next id for `prefix` on `date`, builds a record from it
    /// and inserts the result.
    ///
    /// # Errors
    ///
    /// Returns an error string if `build` returns a record whose id differs
    /// from the one it was given, or if that id is already taken.
    pub fn create_with<F>(&mut self, prefix: &str, date: NaiveDate, build: F) -> Result<&T, String>
    where
        F: FnOnce(String) -> T,
    {
        let id = self.next_id(prefix, date);
        let record = build(id.clone());
        if record.id() != id {
            return Err(format!("Record built for {id} carries id {}", record.id()));
        }
        log::info!("created {id}");
        self.insert(record)
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Looks up a record by id for modification.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Iterates over records in insertion order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the repository, returning its records.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T: HasIdentifier> IntoIterator for &'a Repository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn create_with_assigns_consecutive_ids() {
        let mut repo: Repository<String> = Repository::new();
        let today = day(2024, 1, 1);
        for _ in 0..3 {
            repo.create_with("REQ", today, |id| id).unwrap();
        }
        let ids: Vec<&str> = repo.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["REQ-001-01012024", "REQ-002-01012024", "REQ-003-01012024"]);
    }

    #[test]
    fn prefixes_share_a_repository_without_interfering() {
        let mut repo: Repository<String> = Repository::new();
        let today = day(2024, 1, 1);
        repo.create_with("REQ", today, |id| id).unwrap();
        repo.create_with("LOSS", today, |id| id).unwrap();
        repo.create_with("REQ", today, |id| id).unwrap();
        assert_eq!(repo.next_id("LOSS", today), "LOSS-002-01012024");
        assert_eq!(repo.next_id("REQ", today), "REQ-003-01012024");
    }

    #[test]
    fn sequence_restarts_on_a_new_day() {
        let mut repo: Repository<String> = Repository::new();
        repo.create_with("REQ", day(2024, 1, 1), |id| id).unwrap();
        repo.create_with("REQ", day(2024, 1, 1), |id| id).unwrap();
        let next = repo.create_with("REQ", day(2024, 1, 2), |id| id).unwrap();
        assert_eq!(next, "REQ-001-02012024");
    }

    #[test]
    fn next_id_does_not_reserve() {
        let repo: Repository<String> = Repository::new();
        let today = day(2024, 1, 1);
        assert_eq!(repo.next_id("REQ", today), repo.next_id("REQ", today));
        assert!(repo.is_empty());
    }

    #[test]
    fn insert_refuses_duplicates() {
        let mut repo = Repository::from_vec(vec!["REQ-001-01012024".to_string()]);
        let err = repo.insert("REQ-001-01012024".to_string()).unwrap_err();
        assert!(err.contains("already exists"));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn create_with_refuses_foreign_id() {
        let mut repo: Repository<String> = Repository::new();
        let err = repo.create_with("REQ", day(2024, 1, 1), |_| "other".to_string()).unwrap_err();
        assert!(err.contains("carries id other"));
        assert!(repo.is_empty());
    }

    #[test]
    fn malformed_loaded_ids_do_not_block_creation() {
        let mut repo =
            Repository::from_vec(vec!["garbage".to_string(), "REQ-001".to_string()]);
        let created = repo.create_with("REQ", day(2024, 1, 1), |id| id).unwrap();
        assert_eq!(created, "REQ-001-01012024");
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn get_mut_finds_by_id() {
        let mut repo = Repository::from_vec(vec!["A".to_string(), "B".to_string()]);
        repo.get_mut("B").unwrap().push('!');
        assert!(repo.get("B").is_none());
        assert!(repo.get("B!").is_some());
    }
}
