//! Inventory service
//!
//! Keeps per-group unit counts: donations credit stock, issuance debits it,
//! and the dashboard and reports read snapshots and low-stock alerts.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::domain::entities::{
    validate_units, BloodGroup, Donation, DonorId, NewDonation, StockLevel,
};
use crate::domain::ports::{DonationRepository, DonorRepository, StockRepository};
use crate::error::{AppError, DomainError};

/// Service for stock bookkeeping
pub struct InventoryService<SR, DNR, DR>
where
    SR: StockRepository,
    DNR: DonationRepository,
    DR: DonorRepository,
{
    stock: Arc<SR>,
    donations: Arc<DNR>,
    donors: Arc<DR>,
}

impl<SR, DNR, DR> InventoryService<SR, DNR, DR>
where
    SR: StockRepository,
    DNR: DonationRepository,
    DR: DonorRepository,
{
    pub fn new(stock: Arc<SR>, donations: Arc<DNR>, donors: Arc<DR>) -> Self {
        Self {
            stock,
            donations,
            donors,
        }
    }

    /// Create the stock row of every blood group that lacks one.
    ///
    /// Idempotent. Run once at startup; request paths assume the rows exist.
    pub async fn ensure_stock_rows(&self) -> Result<(), AppError> {
        self.stock.ensure_rows().await?;
        Ok(())
    }

    /// Record a donation and credit its units to stock.
    ///
    /// A donor ID that does not resolve is recorded as an anonymous donation.
    /// The date defaults to today.
    pub async fn record_donation(
        &self,
        donor_id: Option<DonorId>,
        blood_group: &str,
        units: i32,
        date: Option<NaiveDate>,
    ) -> Result<Donation, AppError> {
        let blood_group = parse_group(blood_group)?;
        let units = validate_units(units)?;

        let donor_id = match donor_id {
            Some(id) => match self.donors.find_by_id(&id).await? {
                Some(donor) => Some(donor.id),
                None => {
                    tracing::warn!("Donor {} not found, recording donation as anonymous", id);
                    None
                }
            },
            None => None,
        };

        let new_donation = NewDonation {
            donor_id,
            blood_group,
            units,
            date: date.unwrap_or_else(|| Local::now().date_naive()),
        };

        let donation = self.donations.record(&new_donation).await?;
        tracing::info!(
            "Recorded donation {}: {} unit(s) of {}",
            donation.id,
            donation.units,
            donation.blood_group
        );

        Ok(donation)
    }

    /// Issue units of a blood group.
    ///
    /// Rejected, never clamped, when stock on hand is short.
    pub async fn issue_units(&self, blood_group: &str, units: i32) -> Result<StockLevel, AppError> {
        let blood_group = parse_group(blood_group)
            .map_err(|_| DomainError::Validation("Please select a valid blood group.".to_string()))?;
        let units = validate_units(units)?;

        match self.stock.debit(blood_group, units).await {
            Ok(level) => {
                tracing::info!(
                    "Issued {} unit(s) of {}, {} remaining",
                    units,
                    blood_group,
                    level.units
                );
                Ok(level)
            }
            Err(e @ DomainError::InsufficientStock { .. }) => {
                tracing::warn!("Issuance rejected: {}", e);
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Every stock row ordered by blood group label
    pub async fn stock_levels(&self) -> Result<Vec<StockLevel>, AppError> {
        Ok(self.stock.list().await?)
    }

    /// Rows at or below their threshold, ordered by blood group label.
    ///
    /// Re-queried on every call.
    pub async fn low_stock_alerts(&self) -> Result<Vec<StockLevel>, AppError> {
        let levels = self.stock.list().await?;
        Ok(levels.into_iter().filter(StockLevel::is_low).collect())
    }

    /// Units on hand for all eight groups, zero-filled
    pub async fn stock_snapshot(&self) -> Result<BTreeMap<BloodGroup, i32>, AppError> {
        let mut snapshot: BTreeMap<BloodGroup, i32> =
            BloodGroup::ALL.into_iter().map(|g| (g, 0)).collect();

        for level in self.stock.list().await? {
            snapshot.insert(level.blood_group, level.units);
        }
        Ok(snapshot)
    }
}

fn parse_group(raw: &str) -> Result<BloodGroup, DomainError> {
    raw.trim().parse().map_err(DomainError::Validation)
}
