//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::atomic::{AtomicI32, Ordering};

use sea_orm::{Database, DatabaseConnection};
use tempfile::TempDir;

use crate::adapters::sql::create_schema;
use crate::domain::entities::{BloodGroup, Donor, DonorId};

static NEXT_DONOR_ID: AtomicI32 = AtomicI32::new(1);

/// Create a test donor with a unique ID
pub fn test_donor(name: &str, blood_group: BloodGroup) -> Donor {
    Donor {
        id: DonorId(NEXT_DONOR_ID.fetch_add(1, Ordering::Relaxed)),
        name: name.to_string(),
        blood_group,
        last_donation: None,
    }
}

/// Fresh SQLite database file with the schema applied.
///
/// Keep the returned directory alive for as long as the connection is used.
pub async fn sqlite_test_db() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to test database");
    create_schema(&db).await.expect("Failed to create schema");

    (dir, db)
}
