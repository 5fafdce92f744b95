//! SQL adapter for DonationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set, TransactionTrait,
};

use super::parse_group;
use super::stock_repo::credit_stock;
use crate::domain::entities::{
    Donation, DonationId, DonationWithDonor, Donor, DonorId, NewDonation,
};
use crate::domain::ports::DonationRepository;
use crate::entity::{donations, donors};
use crate::error::DomainError;

/// SeaORM implementation of DonationRepository
pub struct SqlDonationRepository {
    db: DatabaseConnection,
}

impl SqlDonationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DonationRepository for SqlDonationRepository {
    async fn record(&self, donation: &NewDonation) -> Result<Donation, DomainError> {
        // Dropping the transaction on an early return rolls it back
        let txn = self.db.begin().await?;

        let model = donations::ActiveModel {
            id: NotSet,
            donor_id: Set(donation.donor_id.map(|d| d.0)),
            blood_group: Set(donation.blood_group.to_string()),
            units: Set(donation.units),
            date: Set(donation.date),
        }
        .insert(&txn)
        .await?;

        credit_stock(&txn, donation.blood_group, donation.units).await?;

        txn.commit().await?;
        Donation::try_from(model)
    }

    async fn list_with_donors(&self) -> Result<Vec<DonationWithDonor>, DomainError> {
        let results = donations::Entity::find()
            .find_also_related(donors::Entity)
            .order_by_asc(donations::Column::Id)
            .all(&self.db)
            .await?;

        results
            .into_iter()
            .map(|(donation, donor)| {
                Ok(DonationWithDonor {
                    donation: Donation::try_from(donation)?,
                    donor: donor.map(Donor::try_from).transpose()?,
                })
            })
            .collect()
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<donations::Model> for Donation {
    type Error = DomainError;

    fn try_from(model: donations::Model) -> Result<Self, Self::Error> {
        Ok(Donation {
            id: DonationId(model.id),
            donor_id: model.donor_id.map(DonorId),
            blood_group: parse_group(&model.blood_group)?,
            units: model.units,
            date: model.date,
        })
    }
}
