//! Donation intake and ledger handlers

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use chrono::Local;
use serde::Deserialize;

use super::forms::{parse_donor_id, parse_optional_date, parse_units};
use super::{flash_redirect, validation_message, FlashQuery};
use crate::domain::entities::Donation;
use crate::error::AppError;
use crate::views::{self, FlashLevel};
use crate::AppState;

/// Donation intake form
#[derive(Debug, Deserialize)]
pub struct DonationForm {
    /// Donor ID, or `none` for an anonymous donation
    pub donor_id: Option<String>,
    #[serde(default)]
    pub blood_group: String,
    pub units: Option<String>,
    pub date: Option<String>,
}

/// GET /donate
pub async fn donate_form(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>, AppError> {
    let donors = state.registry.list_donors().await?;
    let today = Local::now().date_naive();

    Ok(Html(views::donate_page(
        &donors,
        today,
        query.flash().as_ref(),
    )))
}

/// POST /donate
pub async fn record_donation(
    State(state): State<AppState>,
    Form(form): Form<DonationForm>,
) -> Result<Redirect, AppError> {
    match submit_donation(&state, &form).await {
        Ok(_) => Ok(flash_redirect(
            "/donations",
            FlashLevel::Success,
            "Donation recorded successfully!",
        )),
        Err(e) => {
            let message = validation_message(e)?;
            Ok(flash_redirect("/donate", FlashLevel::Danger, &message))
        }
    }
}

async fn submit_donation(state: &AppState, form: &DonationForm) -> Result<Donation, AppError> {
    let donor_id = parse_donor_id(form.donor_id.as_deref())?;
    let units = parse_units(form.units.as_deref(), 1)?;
    let date = parse_optional_date(form.date.as_deref())?;

    state
        .inventory
        .record_donation(donor_id, &form.blood_group, units, date)
        .await
}

/// GET /donations
pub async fn list_donations(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>, AppError> {
    let donations = state.registry.list_donations().await?;

    Ok(Html(views::donations_page(
        &donations,
        query.flash().as_ref(),
    )))
}
