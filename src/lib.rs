pub mod config;
pub mod error;
pub mod runner;
pub mod store;

pub use error::{Result, StoreError};
pub use runner::Runner;
pub use store::memory::MemoryStore;
pub use store::person::Person;
pub use store::PersonStore;
