//! Sample data for `--initdb`

use chrono::NaiveDate;

use crate::domain::entities::{BloodGroup, NewDonation, NewDonor};
use crate::domain::ports::{DonationRepository, DonorRepository, StockRepository};
use crate::error::DomainError;

/// Seed two donors, one donation and baseline stock.
///
/// Expects freshly created tables.
pub async fn seed_sample_data<DR, DNR, SR>(
    donors: &DR,
    donations: &DNR,
    stock: &SR,
) -> Result<(), DomainError>
where
    DR: DonorRepository,
    DNR: DonationRepository,
    SR: StockRepository,
{
    stock.ensure_rows().await?;

    let rahul = donors
        .create(&NewDonor {
            name: "Rahul".to_string(),
            blood_group: BloodGroup::APositive,
            last_donation: Some(seed_date(2025, 6, 25)?),
        })
        .await?;
    donors
        .create(&NewDonor {
            name: "Sneha".to_string(),
            blood_group: BloodGroup::ONegative,
            last_donation: Some(seed_date(2025, 7, 1)?),
        })
        .await?;

    // Credits A+ by one unit
    donations
        .record(&NewDonation {
            donor_id: Some(rahul.id),
            blood_group: BloodGroup::APositive,
            units: 1,
            date: seed_date(2025, 7, 1)?,
        })
        .await?;

    // Baseline unit with no donation record behind it
    stock.credit(BloodGroup::ONegative, 1).await?;

    Ok(())
}

fn seed_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::Validation(format!("invalid seed date {year}-{month}-{day}")))
}
