//! Donation domain entity
//!
//! An intake event that credits units to a blood group's stock.
//! The donor reference is optional so anonymous and proxy entries are allowed.

use chrono::NaiveDate;
use serde::Serialize;

use super::blood_group::BloodGroup;
use super::donor::{Donor, DonorId};
use crate::error::DomainError;

/// Surrogate identifier for a donation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DonationId(pub i32);

impl std::fmt::Display for DonationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded donation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Donation {
    pub id: DonationId,
    pub donor_id: Option<DonorId>,
    /// Independent of the donor's own group
    pub blood_group: BloodGroup,
    pub units: i32,
    pub date: NaiveDate,
}

/// A donation together with its donor, for listings
#[derive(Debug, Clone, Serialize)]
pub struct DonationWithDonor {
    pub donation: Donation,
    pub donor: Option<Donor>,
}

/// Data needed to record a donation
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub donor_id: Option<DonorId>,
    pub blood_group: BloodGroup,
    pub units: i32,
    pub date: NaiveDate,
}

/// Check that a unit count is a positive integer
pub fn validate_units(units: i32) -> Result<i32, DomainError> {
    if units < 1 {
        return Err(DomainError::Validation(
            "Units must be a positive whole number.".to_string(),
        ));
    }
    Ok(units)
}
