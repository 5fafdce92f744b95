//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    BloodGroup, Donation, DonationId, DonationWithDonor, Donor, DonorId, DonorPage, DonorSearch,
    NewDonation, NewDonor, StockLevel, DEFAULT_THRESHOLD, DONORS_PER_PAGE,
    STOCK_CAPACITY_EXCEEDED,
};
use crate::domain::ports::{DonationRepository, DonorRepository, StockRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Donor Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryDonorRepository {
    donors: RwLock<Vec<Donor>>,
}

impl InMemoryDonorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a donor for testing
    pub fn with_donor(self, donor: Donor) -> Self {
        self.donors.write().unwrap().push(donor);
        self
    }

    fn sorted(&self) -> Vec<Donor> {
        let mut donors = self.donors.read().unwrap().clone();
        donors.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.0.cmp(&b.id.0)));
        donors
    }
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn find_by_id(&self, id: &DonorId) -> Result<Option<Donor>, DomainError> {
        let donors = self.donors.read().unwrap();
        Ok(donors.iter().find(|d| d.id == *id).cloned())
    }

    async fn create(&self, new_donor: &NewDonor) -> Result<Donor, DomainError> {
        let mut donors = self.donors.write().unwrap();
        let next_id = donors.iter().map(|d| d.id.0).max().unwrap_or(0) + 1;
        let donor = Donor {
            id: DonorId(next_id),
            name: new_donor.name.clone(),
            blood_group: new_donor.blood_group,
            last_donation: new_donor.last_donation,
        };
        donors.push(donor.clone());
        Ok(donor)
    }

    async fn search(&self, search: &DonorSearch) -> Result<DonorPage, DomainError> {
        let needle = search.name.as_deref().map(str::to_lowercase);
        let matching: Vec<Donor> = self
            .sorted()
            .into_iter()
            .filter(|d| match &needle {
                Some(n) => d.name.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .filter(|d| search.blood_group.map_or(true, |g| d.blood_group == g))
            .collect();

        let page = search.page.max(1);
        let total_items = matching.len() as u64;
        let total_pages = total_items.div_ceil(DONORS_PER_PAGE);
        let donors = if page > total_pages {
            Vec::new()
        } else {
            matching
                .into_iter()
                .skip(((page - 1) * DONORS_PER_PAGE) as usize)
                .take(DONORS_PER_PAGE as usize)
                .collect()
        };

        Ok(DonorPage {
            donors,
            page,
            per_page: DONORS_PER_PAGE,
            total_items,
            total_pages,
        })
    }

    async fn list_all(&self) -> Result<Vec<Donor>, DomainError> {
        Ok(self.sorted())
    }
}

// ============================================================================
// In-Memory Stock Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryStockRepository {
    levels: RwLock<BTreeMap<BloodGroup, StockLevel>>,
}

impl InMemoryStockRepository {
    /// Empty store, as before startup initialization
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with all eight rows at zero units
    pub fn with_all_groups() -> Self {
        let repo = Self::new();
        {
            let mut levels = repo.levels.write().unwrap();
            for group in BloodGroup::ALL {
                levels.insert(group, empty_level(group));
            }
        }
        repo
    }

    /// Overwrite the units of a group
    pub fn set_units(&self, group: BloodGroup, units: i32) {
        let mut levels = self.levels.write().unwrap();
        levels.entry(group).or_insert_with(|| empty_level(group)).units = units;
    }
}

fn empty_level(group: BloodGroup) -> StockLevel {
    StockLevel {
        blood_group: group,
        units: 0,
        threshold: DEFAULT_THRESHOLD,
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn ensure_rows(&self) -> Result<(), DomainError> {
        let mut levels = self.levels.write().unwrap();
        for group in BloodGroup::ALL {
            levels.entry(group).or_insert_with(|| empty_level(group));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StockLevel>, DomainError> {
        let mut levels: Vec<StockLevel> = self.levels.read().unwrap().values().copied().collect();
        levels.sort_by_key(|l| l.blood_group.as_str());
        Ok(levels)
    }

    async fn credit(&self, group: BloodGroup, units: i32) -> Result<(), DomainError> {
        let mut levels = self.levels.write().unwrap();
        let level = levels
            .get_mut(&group)
            .ok_or_else(|| DomainError::NotFound(format!("Stock row for {}", group)))?;
        level.units = level
            .units
            .checked_add(units)
            .ok_or_else(|| DomainError::Validation(STOCK_CAPACITY_EXCEEDED.to_string()))?;
        Ok(())
    }

    async fn debit(&self, group: BloodGroup, units: i32) -> Result<StockLevel, DomainError> {
        let mut levels = self.levels.write().unwrap();
        let level = levels
            .get_mut(&group)
            .ok_or_else(|| DomainError::NotFound(format!("Stock row for {}", group)))?;
        if level.units < units {
            return Err(DomainError::InsufficientStock {
                blood_group: group,
                requested: units,
                available: level.units,
            });
        }
        level.units -= units;
        Ok(*level)
    }
}

// ============================================================================
// In-Memory Donation Repository
// ============================================================================

pub struct InMemoryDonationRepository {
    donations: RwLock<Vec<Donation>>,
    stock: Arc<InMemoryStockRepository>,
    donors: Option<Arc<InMemoryDonorRepository>>,
}

impl InMemoryDonationRepository {
    /// Donations credit the given stock store
    pub fn new(stock: Arc<InMemoryStockRepository>) -> Self {
        Self {
            donations: RwLock::new(Vec::new()),
            stock,
            donors: None,
        }
    }

    /// Resolve donors from the given store when listing
    pub fn with_donors(mut self, donors: Arc<InMemoryDonorRepository>) -> Self {
        self.donors = Some(donors);
        self
    }

    pub fn count(&self) -> usize {
        self.donations.read().unwrap().len()
    }
}

#[async_trait]
impl DonationRepository for InMemoryDonationRepository {
    async fn record(&self, new_donation: &NewDonation) -> Result<Donation, DomainError> {
        // Credit first so a failed credit leaves no donation behind
        self.stock
            .credit(new_donation.blood_group, new_donation.units)
            .await?;

        let mut donations = self.donations.write().unwrap();
        let donation = Donation {
            id: DonationId(donations.len() as i32 + 1),
            donor_id: new_donation.donor_id,
            blood_group: new_donation.blood_group,
            units: new_donation.units,
            date: new_donation.date,
        };
        donations.push(donation.clone());
        Ok(donation)
    }

    async fn list_with_donors(&self) -> Result<Vec<DonationWithDonor>, DomainError> {
        let donations = self.donations.read().unwrap().clone();
        let mut result = Vec::with_capacity(donations.len());
        for donation in donations {
            let donor = match (&self.donors, donation.donor_id) {
                (Some(donors), Some(id)) => donors.find_by_id(&id).await?,
                _ => None,
            };
            result.push(DonationWithDonor { donation, donor });
        }
        Ok(result)
    }
}
