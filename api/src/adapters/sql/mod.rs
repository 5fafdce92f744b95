//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same code runs
//! against SQLite (the default local store) and PostgreSQL.

pub mod donation_repo;
pub mod donor_repo;
pub mod schema;
pub mod seed;
pub mod stock_repo;


pub use donation_repo::SqlDonationRepository;
pub use donor_repo::SqlDonorRepository;
pub use schema::{create_schema, reset_schema};
pub use seed::seed_sample_data;
pub use stock_repo::SqlStockRepository;

use crate::domain::entities::BloodGroup;
use crate::error::DomainError;

/// Parse a blood group column value
fn parse_group(raw: &str) -> Result<BloodGroup, DomainError> {
    raw.parse()
        .map_err(|e: String| DomainError::Database(format!("corrupt row: {}", e)))
}
