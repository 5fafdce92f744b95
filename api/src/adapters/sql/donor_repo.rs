//! SQL adapter for DonorRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::parse_group;
use crate::domain::entities::{Donor, DonorId, DonorPage, DonorSearch, NewDonor, DONORS_PER_PAGE};
use crate::domain::ports::DonorRepository;
use crate::entity::donors;
use crate::error::DomainError;

/// SeaORM implementation of DonorRepository
pub struct SqlDonorRepository {
    db: DatabaseConnection,
}

impl SqlDonorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DonorRepository for SqlDonorRepository {
    async fn find_by_id(&self, id: &DonorId) -> Result<Option<Donor>, DomainError> {
        let result = donors::Entity::find_by_id(id.0).one(&self.db).await?;

        result.map(Donor::try_from).transpose()
    }

    async fn create(&self, donor: &NewDonor) -> Result<Donor, DomainError> {
        let model = donors::ActiveModel {
            id: NotSet,
            name: Set(donor.name.clone()),
            blood_group: Set(donor.blood_group.to_string()),
            last_donation: Set(donor.last_donation),
        };

        let result = model.insert(&self.db).await?;

        Donor::try_from(result)
    }

    async fn search(&self, search: &DonorSearch) -> Result<DonorPage, DomainError> {
        let mut query = donors::Entity::find();

        if let Some(name) = search.name.as_deref().filter(|n| !n.is_empty()) {
            let pattern = format!("%{}%", escape_like(&name.to_lowercase()));
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(donors::Column::Name)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }
        if let Some(group) = search.blood_group {
            query = query.filter(donors::Column::BloodGroup.eq(group.as_str()));
        }

        // Ties on name fall back to id so pages never overlap
        let paginator = query
            .order_by_asc(donors::Column::Name)
            .order_by_asc(donors::Column::Id)
            .paginate(&self.db, DONORS_PER_PAGE);

        let page = search.page.max(1);
        let total_items = paginator.num_items().await?;
        let total_pages = total_items.div_ceil(DONORS_PER_PAGE);

        // Past the last page there is nothing to fetch, and the offset
        // of a huge page number would not fit in a u64
        let donors = if page > total_pages {
            Vec::new()
        } else {
            paginator
                .fetch_page(page - 1)
                .await?
                .into_iter()
                .map(Donor::try_from)
                .collect::<Result<_, _>>()?
        };

        Ok(DonorPage {
            donors,
            page,
            per_page: DONORS_PER_PAGE,
            total_items,
            total_pages,
        })
    }

    async fn list_all(&self) -> Result<Vec<Donor>, DomainError> {
        let results = donors::Entity::find()
            .order_by_asc(donors::Column::Name)
            .order_by_asc(donors::Column::Id)
            .all(&self.db)
            .await?;

        results.into_iter().map(Donor::try_from).collect()
    }
}

/// Escape LIKE wildcards so user input only matches literally
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Convert SeaORM model to domain entity
impl TryFrom<donors::Model> for Donor {
    type Error = DomainError;

    fn try_from(model: donors::Model) -> Result<Self, Self::Error> {
        Ok(Donor {
            id: DonorId(model.id),
            blood_group: parse_group(&model.blood_group)?,
            name: model.name,
            last_donation: model.last_donation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn escape_like_leaves_plain_text() {
        assert_eq!(escape_like("ra"), "ra");
    }

    #[test]
    fn corrupt_group_is_a_database_error() {
        let model = donors::Model {
            id: 1,
            name: "Rahul".to_string(),
            blood_group: "Q".to_string(),
            last_donation: None,
        };
        assert!(matches!(
            Donor::try_from(model),
            Err(DomainError::Database(_))
        ));
    }
}
