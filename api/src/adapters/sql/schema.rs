//! Schema management
//!
//! Tables are derived from the SeaORM entities. `create_schema` runs on every
//! startup; `reset_schema` backs the `--initdb` flag.

use sea_orm::sea_query::Table;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::{donations, donors, stock};

/// Create any missing tables
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // donors first: donations references it
    let statements = [
        schema
            .create_table_from_entity(donors::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(donations::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(stock::Entity)
            .if_not_exists()
            .to_owned(),
    ];

    for statement in &statements {
        db.execute(backend.build(statement)).await?;
    }
    Ok(())
}

/// Drop every table and create them again, empty
pub async fn reset_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let drops = [
        Table::drop().table(donations::Entity).if_exists().to_owned(),
        Table::drop().table(stock::Entity).if_exists().to_owned(),
        Table::drop().table(donors::Entity).if_exists().to_owned(),
    ];

    for statement in &drops {
        db.execute(backend.build(statement)).await?;
    }

    create_schema(db).await
}
