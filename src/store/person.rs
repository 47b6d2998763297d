use std::fmt;

use crate::error::{Result, StoreError};

/// A name/age record. The name doubles as the store key, so two records
/// with the same name refer to the same entry.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// Builds a record, rejecting out-of-range ages up front.
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self> {
        let age = u32::try_from(age).map_err(|_| StoreError::InvalidAge(age))?;
        Ok(Self {
            name: name.into(),
            age,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

// Identity follows the store key: name only.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Person {}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} years old", self.name, self.age)
    }
}
