use std::collections::HashMap;

use tracing::debug;

use super::person::Person;
use super::PersonStore;
use crate::error::Result;

/// Local in-memory store, one entry per name. Saves copy the record in, so
/// callers keep ownership of what they pass.
#[derive(Default)]
pub struct MemoryStore {
    data: HashMap<String, Person>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    fn select(&self, predicate: impl Fn(&Person) -> bool) -> Vec<Person> {
        let mut rows: Vec<Person> = self
            .data
            .values()
            .filter(|person| predicate(person))
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; sort by key for stable output.
        rows.sort_by(|a, b| a.name().cmp(b.name()));
        rows
    }
}

impl PersonStore for MemoryStore {
    fn save(&mut self, person: &Person) -> Result<()> {
        self.data.insert(person.name().to_string(), person.clone());
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Person>> {
        let row = self.data.get(name).cloned();
        debug!(name, found = row.is_some(), "find_by_name");
        Ok(row)
    }

    fn find_by_age_greater_than(&self, threshold: u32) -> Result<Vec<Person>> {
        let rows = self.select(|person| person.age() > threshold);
        debug!(threshold, rows = rows.len(), "find_by_age_greater_than");
        Ok(rows)
    }

    fn find_by_age_less_than(&self, threshold: u32) -> Result<Vec<Person>> {
        let rows = self.select(|person| person.age() < threshold);
        debug!(threshold, rows = rows.len(), "find_by_age_less_than");
        Ok(rows)
    }

    fn find_by_age_between(&self, low: u32, high: u32) -> Result<Vec<Person>> {
        let rows = self.select(|person| low < person.age() && person.age() < high);
        debug!(low, high, rows = rows.len(), "find_by_age_between");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(people: &[(&str, i64)]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for (name, age) in people {
            store.save(&Person::new(*name, *age).unwrap()).unwrap();
        }
        store
    }

    #[test]
    fn save_then_find_by_name_returns_saved_record() {
        let store = store_with(&[("Adult Alice", 40)]);
        let found = store.find_by_name("Adult Alice").unwrap().unwrap();
        assert_eq!(found.name(), "Adult Alice");
        assert_eq!(found.age(), 40);
    }

    #[test]
    fn find_by_name_miss_is_none_not_error() {
        let store = store_with(&[]);
        assert!(store.find_by_name("Nobody").unwrap().is_none());
    }

    #[test]
    fn repeated_find_by_name_is_idempotent() {
        let store = store_with(&[("Teen Carol", 13)]);
        let first = store.find_by_name("Teen Carol").unwrap().unwrap();
        let second = store.find_by_name("Teen Carol").unwrap().unwrap();
        assert_eq!(first.age(), second.age());
    }

    #[test]
    fn save_with_same_name_overwrites() {
        let mut store = store_with(&[("X", 1)]);
        store.save(&Person::new("X", 2).unwrap()).unwrap();
        assert_eq!(store.find_by_name("X").unwrap().unwrap().age(), 2);
        assert_eq!(store.find_by_age_greater_than(0).unwrap().len(), 1);
    }

    #[test]
    fn greater_than_excludes_the_boundary() {
        let store = store_with(&[("A", 17), ("B", 18), ("C", 19)]);
        let rows = store.find_by_age_greater_than(18).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "C");
    }

    #[test]
    fn less_than_excludes_the_boundary() {
        let store = store_with(&[("A", 4), ("B", 5), ("C", 6)]);
        let rows = store.find_by_age_less_than(5).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "A");
    }

    #[test]
    fn between_excludes_both_bounds() {
        let store = store_with(&[("Low", 12), ("Mid", 13), ("High", 20)]);
        let rows = store.find_by_age_between(12, 20).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "Mid");
    }

    #[test]
    fn range_results_are_sorted_by_name() {
        let store = store_with(&[("Zed", 30), ("Ann", 31), ("Mia", 32)]);
        let rows = store.find_by_age_greater_than(0).unwrap();
        let names: Vec<&str> = rows.iter().map(|person| person.name()).collect();
        assert_eq!(names, ["Ann", "Mia", "Zed"]);
    }
}
