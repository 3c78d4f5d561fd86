use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Statement, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::FoodRecord, ports::FoodRepository, value_objects::SearchFoodsFilter},
};
use crate::entity::foods::{
    ActiveModel as FoodActiveModel, Column as FoodColumn, Entity as FoodEntity,
};

const SEARCH_FOODS_SQL: &str = r#"
    SELECT f.*
    FROM foods f
    WHERE (
        f.food_name ILIKE $1
        OR f.food_code ILIKE $1
        OR EXISTS (
            SELECT 1
            FROM jsonb_array_elements(f.ingredients) AS ingredient
            WHERE ingredient ->> 'name' ILIKE $1
        )
    )
      AND ($2::text IS NULL OR f.category = $2)
      AND ($3::text IS NULL OR f.source = $3)
    ORDER BY f.food_name ASC
    LIMIT $4
"#;

/// `%dal%`, with LIKE wildcards in the user's text escaped.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[derive(Debug, Clone)]
pub struct PostgresFoodRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodRepository for PostgresFoodRepository {
    async fn get_by_id(&self, food_id: Uuid) -> Result<Option<FoodRecord>, CoreError> {
        FoodEntity::find_by_id(food_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(FoodRecord::try_from)
            .transpose()
    }

    async fn get_by_ids(&self, food_ids: Vec<Uuid>) -> Result<Vec<FoodRecord>, CoreError> {
        if food_ids.is_empty() {
            return Ok(Vec::new());
        }

        FoodEntity::find()
            .filter(FoodColumn::Id.is_in(food_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get foods by ids: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(FoodRecord::try_from)
            .collect()
    }

    async fn search(&self, filter: SearchFoodsFilter) -> Result<Vec<FoodRecord>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            SEARCH_FOODS_SQL,
            [
                like_pattern(&filter.query).into(),
                filter.category.clone().into(),
                filter.normalized_source().into(),
                i64::from(filter.effective_limit()).into(),
            ],
        );

        FoodEntity::find()
            .from_raw_sql(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search foods: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(FoodRecord::try_from)
            .collect()
    }

    async fn count(&self) -> Result<u64, CoreError> {
        FoodEntity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count foods: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn create_batch(&self, foods: Vec<FoodRecord>) -> Result<usize, CoreError> {
        if foods.is_empty() {
            return Ok(0);
        }

        let models = foods
            .iter()
            .map(FoodActiveModel::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let inserted = FoodEntity::insert_many(models)
            .on_conflict(
                OnConflict::column(FoodColumn::FoodCode)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to insert foods: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(inserted as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("dal"), "%dal%");
        assert_eq!(like_pattern("100%_pure"), "%100\\%\\_pure%");
    }
}
