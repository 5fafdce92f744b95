//! Test utilities
//!
//! Manual in-memory implementations of the repository ports and test
//! fixtures. Services are unit tested against the in-memory stores; the SQL
//! adapters and HTTP routes are tested against a temporary SQLite file.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
