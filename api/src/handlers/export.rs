//! Download handlers
//!
//! CSV export of the donor registry and the PDF status report.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::Local;

use crate::error::AppError;
use crate::report::{donors_csv, status_report_pdf, StatusReport};
use crate::AppState;

/// GET /export/donors.csv
pub async fn export_donors_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let donors = state.registry.list_donors().await?;
    let body = donors_csv(&donors)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"donors.csv\"",
            ),
        ],
        body,
    ))
}

/// GET /report/pdf
pub async fn report_pdf(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stock = state.inventory.stock_levels().await?;
    let alerts = state.inventory.low_stock_alerts().await?;

    let body = status_report_pdf(&StatusReport {
        generated_at: Local::now().naive_local(),
        stock: &stock,
        alerts: &alerts,
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"blood_bank_report.pdf\"",
            ),
        ],
        body,
    ))
}
