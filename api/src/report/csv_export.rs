//! Donor CSV export

use crate::domain::entities::Donor;
use crate::error::ReportError;

pub const DONORS_CSV_HEADER: [&str; 4] = ["id", "name", "blood_group", "last_donation"];

/// Render donors as CSV with a header row.
///
/// `last_donation` is an ISO 8601 date or empty.
pub fn donors_csv(donors: &[Donor]) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(DONORS_CSV_HEADER)?;

    for donor in donors {
        writer.write_record([
            donor.id.to_string(),
            donor.name.clone(),
            donor.blood_group.to_string(),
            donor
                .last_donation
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ReportError::CsvBuffer(e.to_string()))
}
