//! Reports
//!
//! Renders the donor registry as CSV and the stock status as a PDF.

pub mod csv_export;
pub mod pdf_report;

pub use csv_export::donors_csv;
pub use pdf_report::{status_report_pdf, StatusReport};
