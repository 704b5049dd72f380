mod client;

pub use client::{MealDbClient, MealDbClientBuilder};

use crate::error::FinderError;
use crate::model::{Category, MealDetail, MealSummary};
use async_trait::async_trait;
use serde::Deserialize;

/// Endpoint paths, relative to the configured base URL
pub const CATEGORIES_PATH: &str = "categories.php";
pub const SEARCH_PATH: &str = "search.php";
pub const FILTER_PATH: &str = "filter.php";
pub const LOOKUP_PATH: &str = "lookup.php";

/// The four read operations the finder needs from the recipe database
#[async_trait]
pub trait MealApi: Send + Sync {
    /// All categories, in API order
    async fn fetch_categories(&self) -> Result<Vec<Category>, FinderError>;

    /// Meals whose name matches `term`. Empty when the API reports no match.
    async fn search_meals_by_name(&self, term: &str) -> Result<Vec<MealSummary>, FinderError>;

    /// Meals in the named category. Empty when the API reports no match.
    async fn fetch_meals_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, FinderError>;

    /// The single meal with this id
    async fn fetch_meal_detail(&self, id: &str) -> Result<MealDetail, FinderError>;
}

/// `{ "categories": [...] }`
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    pub categories: Option<Vec<Category>>,
}

/// `{ "meals": [...] | null }`
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}
