use std::io::Write;

use crate::error::Result;
use crate::store::person::Person;
use crate::store::PersonStore;

/// Drives the demo scenario against whatever store it was handed: save three
/// records, then run the four lookup queries, writing labelled results to
/// the given sink.
pub struct Runner<S> {
    store: S,
}

impl<S: PersonStore> Runner<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn run(&mut self, out: &mut impl Write) -> Result<()> {
        let alice = Person::new("Adult Alice", 40)?;
        let bob = Person::new("Baby Bob", 1)?;
        let carol = Person::new("Teen Carol", 13)?;

        writeln!(out, "Before accessing data in the cache...")?;
        for person in [&alice, &bob, &carol] {
            writeln!(out, "\t{person}")?;
        }

        writeln!(out, "Saving Alice, Bob and Carol to the cache...")?;
        self.store.save(&alice)?;
        self.store.save(&bob)?;
        self.store.save(&carol)?;

        writeln!(out, "Lookup each person by name...")?;
        for name in [alice.name(), bob.name(), carol.name()] {
            match self.store.find_by_name(name)? {
                Some(person) => writeln!(out, "\t{person}")?,
                None => writeln!(out, "\t{name} not found")?,
            }
        }

        writeln!(out, "Query adults (over 18):")?;
        for person in self.store.find_by_age_greater_than(18)? {
            writeln!(out, "\t{person}")?;
        }

        writeln!(out, "Query babies (less than 5):")?;
        for person in self.store.find_by_age_less_than(5)? {
            writeln!(out, "\t{person}")?;
        }

        writeln!(out, "Query teens (between 12 and 20):")?;
        for person in self.store.find_by_age_between(12, 20)? {
            writeln!(out, "\t{person}")?;
        }

        Ok(())
    }
}
