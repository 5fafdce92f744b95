//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod blood_group;
pub mod donation;
pub mod donor;
pub mod stock;

pub use blood_group::BloodGroup;
pub use donation::{validate_units, Donation, DonationId, DonationWithDonor, NewDonation};
pub use donor::{Donor, DonorId, DonorPage, DonorSearch, NewDonor, DONORS_PER_PAGE};
pub use stock::{StockLevel, DEFAULT_THRESHOLD, STOCK_CAPACITY_EXCEEDED};
