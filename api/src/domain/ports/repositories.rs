//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over SQLite or PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    BloodGroup, Donation, DonationWithDonor, Donor, DonorId, DonorPage, DonorSearch, NewDonation,
    NewDonor, StockLevel,
};
use crate::error::DomainError;

/// Repository for Donor entities
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Find a donor by ID
    async fn find_by_id(&self, id: &DonorId) -> Result<Option<Donor>, DomainError>;

    /// Create a new donor
    async fn create(&self, donor: &NewDonor) -> Result<Donor, DomainError>;

    /// Search donors by name substring and blood group, one page at a time,
    /// ordered by name
    async fn search(&self, search: &DonorSearch) -> Result<DonorPage, DomainError>;

    /// All donors ordered by name
    async fn list_all(&self) -> Result<Vec<Donor>, DomainError>;
}

/// Repository for Donation entities
#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Persist a donation and credit the stock of its blood group.
    ///
    /// Both writes commit together or not at all.
    async fn record(&self, donation: &NewDonation) -> Result<Donation, DomainError>;

    /// Every donation ordered by ID, with its donor if any
    async fn list_with_donors(&self) -> Result<Vec<DonationWithDonor>, DomainError>;
}

/// Repository for per-group Stock rows
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Create any missing rows with zero units and the default threshold
    async fn ensure_rows(&self) -> Result<(), DomainError>;

    /// All rows ordered by blood group label
    async fn list(&self) -> Result<Vec<StockLevel>, DomainError>;

    /// Add units to a group
    async fn credit(&self, group: BloodGroup, units: i32) -> Result<(), DomainError>;

    /// Remove units from a group as one atomic check-and-write.
    ///
    /// Fails with `DomainError::InsufficientStock` and leaves the row
    /// untouched when fewer than `units` are on hand.
    async fn debit(&self, group: BloodGroup, units: i32) -> Result<StockLevel, DomainError>;
}
