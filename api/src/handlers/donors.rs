//! Donor registry handlers

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use super::forms::parse_optional_date;
use super::{flash_redirect, validation_message};
use crate::error::AppError;
use crate::views::{self, DonorFilters, Flash, FlashLevel};
use crate::AppState;

/// Query parameters for the registry page
#[derive(Debug, Default, Deserialize)]
pub struct ListDonorsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub group: String,
    /// Kept as text: anything that is not a positive number means page 1
    pub page: Option<String>,
    pub flash: Option<String>,
    pub level: Option<String>,
}

impl ListDonorsQuery {
    fn page_number(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u64>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1)
    }
}

/// Donor registration form
#[derive(Debug, Deserialize)]
pub struct AddDonorForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub blood_group: String,
    pub last_donation: Option<String>,
}

/// GET /donors
pub async fn list_donors(
    State(state): State<AppState>,
    Query(query): Query<ListDonorsQuery>,
) -> Result<Html<String>, AppError> {
    let filters = DonorFilters {
        search: query.search.trim().to_string(),
        group: query.group.clone(),
    };

    let page = state
        .registry
        .search_donors(
            Some(filters.search.as_str()),
            Some(filters.group.as_str()),
            query.page_number(),
        )
        .await?;

    let flash = Flash::from_query(query.flash.as_deref(), query.level.as_deref());
    Ok(Html(views::donors_page(&page, &filters, flash.as_ref())))
}

/// POST /donors
pub async fn add_donor(
    State(state): State<AppState>,
    Form(form): Form<AddDonorForm>,
) -> Result<Redirect, AppError> {
    let result = match parse_optional_date(form.last_donation.as_deref()) {
        Ok(last_donation) => {
            state
                .registry
                .add_donor(&form.name, &form.blood_group, last_donation)
                .await
        }
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(_) => Ok(flash_redirect("/donors", FlashLevel::Success, "Donor added.")),
        Err(e) => {
            let message = validation_message(e)?;
            Ok(flash_redirect("/donors", FlashLevel::Danger, &message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_with_page(page: Option<&str>) -> ListDonorsQuery {
        ListDonorsQuery {
            page: page.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(query_with_page(None).page_number(), 1);
        assert_eq!(query_with_page(Some("abc")).page_number(), 1);
        assert_eq!(query_with_page(Some("0")).page_number(), 1);
        assert_eq!(query_with_page(Some("-4")).page_number(), 1);
    }

    #[test]
    fn page_parses_number() {
        assert_eq!(query_with_page(Some("3")).page_number(), 3);
    }
}
