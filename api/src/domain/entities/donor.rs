//! Donor domain entity
//!
//! A registered blood donor. Donors are created once and never edited.

use chrono::NaiveDate;
use serde::Serialize;

use super::blood_group::BloodGroup;
use crate::error::DomainError;

/// Number of donors shown per registry page
pub const DONORS_PER_PAGE: u64 = 10;

/// Surrogate identifier for a donor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DonorId(pub i32);

impl From<i32> for DonorId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DonorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered donor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Donor {
    pub id: DonorId,
    pub name: String,
    pub blood_group: BloodGroup,
    pub last_donation: Option<NaiveDate>,
}

/// Validated data needed to register a donor
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonor {
    pub name: String,
    pub blood_group: BloodGroup,
    pub last_donation: Option<NaiveDate>,
}

impl NewDonor {
    /// Validate raw registration input.
    ///
    /// Both fields are trimmed. The name must not be empty and the blood
    /// group must be one of the eight known labels.
    pub fn new(
        name: &str,
        blood_group: &str,
        last_donation: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        let blood_group = blood_group.trim().parse::<BloodGroup>().ok();

        match (name.is_empty(), blood_group) {
            (false, Some(blood_group)) => Ok(Self {
                name: name.to_string(),
                blood_group,
                last_donation,
            }),
            _ => Err(DomainError::Validation(
                "Please provide a valid name and blood group.".to_string(),
            )),
        }
    }
}

/// Registry search criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonorSearch {
    /// Case-insensitive substring of the donor name
    pub name: Option<String>,
    pub blood_group: Option<BloodGroup>,
    /// 1-based page number
    pub page: u64,
}

/// One page of donor search results
#[derive(Debug, Clone, Serialize)]
pub struct DonorPage {
    pub donors: Vec<Donor>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl DonorPage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
