//! Issuance handlers
//!
//! Withdraw units from stock. Short stock is reported back on the form and
//! changes nothing.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use super::forms::parse_units;
use super::{flash_redirect, validation_message, FlashQuery};
use crate::error::{AppError, DomainError};
use crate::views::{self, FlashLevel};
use crate::AppState;

/// Issuance form
#[derive(Debug, Deserialize)]
pub struct IssueForm {
    #[serde(default)]
    pub blood_group: String,
    pub units: Option<String>,
}

/// GET /use
pub async fn issue_form(Query(query): Query<FlashQuery>) -> Html<String> {
    Html(views::use_page(query.flash().as_ref()))
}

/// POST /use
pub async fn issue_units(
    State(state): State<AppState>,
    Form(form): Form<IssueForm>,
) -> Result<Redirect, AppError> {
    let result = match parse_units(form.units.as_deref(), 1) {
        Ok(units) => state
            .inventory
            .issue_units(&form.blood_group, units)
            .await
            .map(|level| (units, level.blood_group)),
        Err(e) => Err(e.into()),
    };

    match result {
        Ok((units, blood_group)) => Ok(flash_redirect(
            "/",
            FlashLevel::Success,
            &format!("Issued {} unit(s) of {}.", units, blood_group),
        )),
        Err(AppError::Domain(DomainError::InsufficientStock { .. })) => Ok(flash_redirect(
            "/use",
            FlashLevel::Danger,
            "Not enough stock to issue.",
        )),
        Err(e) => {
            let message = validation_message(e)?;
            Ok(flash_redirect("/use", FlashLevel::Danger, &message))
        }
    }
}
