//! Stock domain entity
//!
//! Aggregate unit count per blood group with its low-stock threshold.

use serde::Serialize;

use super::blood_group::BloodGroup;

/// Threshold given to stock rows created at initialization
pub const DEFAULT_THRESHOLD: i32 = 5;

/// Rejection message for a credit that would overflow a stock row
pub const STOCK_CAPACITY_EXCEEDED: &str = "Units exceed stock capacity.";

/// Current stock for one blood group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockLevel {
    pub blood_group: BloodGroup,
    pub units: i32,
    pub threshold: i32,
}

impl StockLevel {
    /// A blood group is low when its units are at or below the threshold
    pub fn is_low(&self) -> bool {
        self.units <= self.threshold
    }

    pub fn status(&self) -> &'static str {
        if self.is_low() {
            "LOW"
        } else {
            "OK"
        }
    }
}
