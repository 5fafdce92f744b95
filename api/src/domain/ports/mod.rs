//! Domain ports
//!
//! Persistence traits for donors, donations and stock. The SQL adapters and
//! the in-memory test stores both implement them.

pub mod repositories;

pub use repositories::{DonationRepository, DonorRepository, StockRepository};
