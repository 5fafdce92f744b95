//! SQL adapter for StockRepository
//!
//! Credits and debits are single UPDATE statements so concurrent requests
//! against the same blood group never lose an update.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::parse_group;
use crate::domain::entities::{
    BloodGroup, StockLevel, DEFAULT_THRESHOLD, STOCK_CAPACITY_EXCEEDED,
};
use crate::domain::ports::StockRepository;
use crate::entity::stock;
use crate::error::DomainError;

/// SeaORM implementation of StockRepository
pub struct SqlStockRepository {
    db: DatabaseConnection,
}

impl SqlStockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Add units to a group's row on any connection or open transaction.
///
/// The total must stay within `i32`; a credit that would exceed it is a
/// validation error and changes nothing.
pub(super) async fn credit_stock<C>(conn: &C, group: BloodGroup, units: i32) -> Result<(), DomainError>
where
    C: ConnectionTrait,
{
    let result = stock::Entity::update_many()
        .col_expr(stock::Column::Units, Expr::col(stock::Column::Units).add(units))
        .filter(stock::Column::BloodGroup.eq(group.as_str()))
        .filter(stock::Column::Units.lte(i32::MAX.saturating_sub(units)))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        let row = stock::Entity::find_by_id(group.as_str()).one(conn).await?;
        return Err(match row {
            Some(_) => DomainError::Validation(STOCK_CAPACITY_EXCEEDED.to_string()),
            None => DomainError::NotFound(format!("Stock row for {}", group)),
        });
    }
    Ok(())
}

#[async_trait]
impl StockRepository for SqlStockRepository {
    async fn ensure_rows(&self) -> Result<(), DomainError> {
        for group in BloodGroup::ALL {
            let existing = stock::Entity::find_by_id(group.as_str())
                .one(&self.db)
                .await?;
            if existing.is_some() {
                continue;
            }

            stock::ActiveModel {
                blood_group: Set(group.to_string()),
                units: Set(0),
                threshold: Set(DEFAULT_THRESHOLD),
            }
            .insert(&self.db)
            .await?;
            tracing::debug!("Created stock row for {}", group);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StockLevel>, DomainError> {
        let results = stock::Entity::find()
            .order_by_asc(stock::Column::BloodGroup)
            .all(&self.db)
            .await?;

        results.into_iter().map(StockLevel::try_from).collect()
    }

    async fn credit(&self, group: BloodGroup, units: i32) -> Result<(), DomainError> {
        credit_stock(&self.db, group, units).await
    }

    async fn debit(&self, group: BloodGroup, units: i32) -> Result<StockLevel, DomainError> {
        let txn = self.db.begin().await?;

        let result = stock::Entity::update_many()
            .col_expr(stock::Column::Units, Expr::col(stock::Column::Units).sub(units))
            .filter(stock::Column::BloodGroup.eq(group.as_str()))
            .filter(stock::Column::Units.gte(units))
            .exec(&txn)
            .await?;

        let row = stock::Entity::find_by_id(group.as_str())
            .one(&txn)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Stock row for {}", group)))?;

        if result.rows_affected == 0 {
            return Err(DomainError::InsufficientStock {
                blood_group: group,
                requested: units,
                available: row.units,
            });
        }

        txn.commit().await?;
        StockLevel::try_from(row)
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<stock::Model> for StockLevel {
    type Error = DomainError;

    fn try_from(model: stock::Model) -> Result<Self, Self::Error> {
        Ok(StockLevel {
            blood_group: parse_group(&model.blood_group)?,
            units: model.units,
            threshold: model.threshold,
        })
    }
}
