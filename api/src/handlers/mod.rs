//! HTTP handlers
//!
//! Axum request handlers for the pages and downloads. Form handlers answer
//! with a redirect carrying a flash message; only unexpected failures become
//! error responses.

pub mod dashboard;
pub mod donations;
pub mod donors;
pub mod export;
pub mod forms;
pub mod issue;

pub use dashboard::{dashboard, stock_chart};
pub use donations::{donate_form, list_donations, record_donation};
pub use donors::{add_donor, list_donors};
pub use export::{export_donors_csv, report_pdf};
pub use issue::{issue_form, issue_units};

use axum::response::Redirect;
use serde::Deserialize;

use crate::error::{AppError, DomainError};
use crate::views::{Flash, FlashLevel};

/// Flash parameters appended by `flash_redirect`
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
    pub level: Option<String>,
}

impl FlashQuery {
    pub fn flash(&self) -> Option<Flash> {
        Flash::from_query(self.flash.as_deref(), self.level.as_deref())
    }
}

/// 303 redirect to `path` showing `message` on arrival
pub fn flash_redirect(path: &str, level: FlashLevel, message: &str) -> Redirect {
    let flash = Flash {
        level,
        message: message.to_string(),
    };
    Redirect::to(&format!("{}?{}", path, flash.to_query()))
}

/// Split user-correctable failures from unexpected ones.
///
/// Validation failures come back as their message; everything else is
/// returned as the error to propagate.
pub fn validation_message(err: AppError) -> Result<String, AppError> {
    match err {
        AppError::Domain(DomainError::Validation(msg)) => Ok(msg),
        other => Err(other),
    }
}
