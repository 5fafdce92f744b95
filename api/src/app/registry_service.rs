//! Registry service
//!
//! Donor registration and search, and the donation ledger.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{
    BloodGroup, DonationWithDonor, Donor, DonorPage, DonorSearch, NewDonor,
};
use crate::domain::ports::{DonationRepository, DonorRepository};
use crate::error::AppError;

/// Service for donor and donation records
pub struct RegistryService<DR, DNR>
where
    DR: DonorRepository,
    DNR: DonationRepository,
{
    donors: Arc<DR>,
    donations: Arc<DNR>,
}

impl<DR, DNR> RegistryService<DR, DNR>
where
    DR: DonorRepository,
    DNR: DonationRepository,
{
    pub fn new(donors: Arc<DR>, donations: Arc<DNR>) -> Self {
        Self { donors, donations }
    }

    /// Register a new donor
    pub async fn add_donor(
        &self,
        name: &str,
        blood_group: &str,
        last_donation: Option<NaiveDate>,
    ) -> Result<Donor, AppError> {
        let new_donor = NewDonor::new(name, blood_group, last_donation)?;
        let donor = self.donors.create(&new_donor).await?;
        tracing::info!("Added donor {} ({})", donor.id, donor.blood_group);
        Ok(donor)
    }

    /// Search donors, ten per page, ordered by name.
    ///
    /// A blank name matches everyone; an unknown blood group is ignored.
    /// Page numbers below 1 are treated as 1.
    pub async fn search_donors(
        &self,
        name: Option<&str>,
        blood_group: Option<&str>,
        page: u64,
    ) -> Result<DonorPage, AppError> {
        let search = DonorSearch {
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            blood_group: blood_group.and_then(|g| g.parse::<BloodGroup>().ok()),
            page: page.max(1),
        };

        Ok(self.donors.search(&search).await?)
    }

    /// All donors ordered by name
    pub async fn list_donors(&self) -> Result<Vec<Donor>, AppError> {
        Ok(self.donors.list_all().await?)
    }

    /// Every donation in recording order, with its donor
    pub async fn list_donations(&self) -> Result<Vec<DonationWithDonor>, AppError> {
        Ok(self.donations.list_with_donors().await?)
    }
}
