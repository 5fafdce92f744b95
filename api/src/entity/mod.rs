//! SeaORM entities
//!
//! Table definitions for `donors`, `donations` and `stock`.

pub mod donations;
pub mod donors;
pub mod stock;
