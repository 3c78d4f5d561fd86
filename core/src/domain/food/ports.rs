use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::FoodRecord,
        value_objects::{
            AyurvedicProfile, GetAyurvedicProfileInput, NewFoodRecord, SearchFoodsFilter,
        },
    },
};

/// Read access to the food catalog, plus the bulk insert used by imports.
#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    fn get_by_id(
        &self,
        food_id: Uuid,
    ) -> impl Future<Output = Result<Option<FoodRecord>, CoreError>> + Send;

    fn get_by_ids(
        &self,
        food_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<FoodRecord>, CoreError>> + Send;

    fn search(
        &self,
        filter: SearchFoodsFilter,
    ) -> impl Future<Output = Result<Vec<FoodRecord>, CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn create_batch(
        &self,
        foods: Vec<FoodRecord>,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodCatalogService: Send + Sync {
    fn get_food(
        &self,
        food_id: Uuid,
    ) -> impl Future<Output = Result<FoodRecord, CoreError>> + Send;

    fn search_foods(
        &self,
        filter: SearchFoodsFilter,
    ) -> impl Future<Output = Result<Vec<FoodRecord>, CoreError>> + Send;

    fn ayurvedic_profile(
        &self,
        input: GetAyurvedicProfileInput,
    ) -> impl Future<Output = Result<AyurvedicProfile, CoreError>> + Send;

    /// Loads an initial catalog. Does nothing when the catalog is not empty.
    fn seed_catalog(
        &self,
        foods: Vec<NewFoodRecord>,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
