//! Dashboard handlers
//!
//! Stock levels with low-stock alerts, as a page and as chart data.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Serialize;

use super::FlashQuery;
use crate::domain::entities::StockLevel;
use crate::error::AppError;
use crate::views;
use crate::AppState;

/// Chart payload: one label and value per blood group in canonical order
#[derive(Debug, Serialize)]
pub struct StockChartResponse {
    pub labels: Vec<&'static str>,
    pub data: Vec<i32>,
    pub alerts: Vec<StockLevel>,
}

/// GET /
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>, AppError> {
    let stock = state.inventory.stock_levels().await?;
    let alerts = state.inventory.low_stock_alerts().await?;

    Ok(Html(views::dashboard_page(
        &stock,
        &alerts,
        query.flash().as_ref(),
    )))
}

/// GET /api/stock
pub async fn stock_chart(State(state): State<AppState>) -> Result<Json<StockChartResponse>, AppError> {
    let snapshot = state.inventory.stock_snapshot().await?;
    let alerts = state.inventory.low_stock_alerts().await?;

    Ok(Json(StockChartResponse {
        labels: snapshot.keys().map(|g| g.as_str()).collect(),
        data: snapshot.values().copied().collect(),
        alerts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BloodGroup;

    #[test]
    fn serialize_chart_response() {
        let response = StockChartResponse {
            labels: vec!["A+"],
            data: vec![3],
            alerts: vec![StockLevel {
                blood_group: BloodGroup::APositive,
                units: 3,
                threshold: 5,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["labels"][0], "A+");
        assert_eq!(json["data"][0], 3);
        assert_eq!(json["alerts"][0]["blood_group"], "A+");
        assert_eq!(json["alerts"][0]["threshold"], 5);
    }
}
