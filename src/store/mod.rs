use crate::error::Result;

pub mod memory;
pub mod person;

use self::person::Person;

/// The persistence seam. `MemoryStore` is the only implementation here; a
/// networked grid client would slot in behind the same methods and surface
/// unavailability through `StoreError::Unavailable`.
pub trait PersonStore {
    /// Inserts or overwrites the record keyed by its name.
    fn save(&mut self, person: &Person) -> Result<()>;

    /// Exact-match lookup. A miss is `Ok(None)`, not an error.
    fn find_by_name(&self, name: &str) -> Result<Option<Person>>;

    /// All records with `age > threshold`.
    fn find_by_age_greater_than(&self, threshold: u32) -> Result<Vec<Person>>;

    /// All records with `age < threshold`.
    fn find_by_age_less_than(&self, threshold: u32) -> Result<Vec<Person>>;

    /// All records with `low < age < high`, both bounds exclusive.
    fn find_by_age_between(&self, low: u32, high: u32) -> Result<Vec<Person>>;
}
