//! Browse TheMealDB categories, search dishes and render recipe details.
//!
//! [`MealFinder`] fetches through a [`MealApi`] (usually [`MealDbClient`]),
//! turns the results into view models with [`render`], and pushes them to a
//! [`UiPorts`] host such as [`HtmlDocument`].
//!
//! ```no_run
//! use meal_finder::{HtmlDocument, MealDbClient, MealFinder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let finder = MealFinder::new(MealDbClient::builder().build()?, HtmlDocument::default());
//! finder.load_categories().await;
//! finder.search_meals("Arrabiata").await;
//! println!("{}", finder.ui().render_page());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod model;
pub mod ports;
pub mod render;
pub mod view;

pub use api::{MealApi, MealDbClient, MealDbClientBuilder};
pub use config::{ApiConfig, FinderConfig};
pub use controller::{MealFinder, Outcome};
pub use document::HtmlDocument;
pub use error::FinderError;
pub use model::{Category, Ingredient, MealDetail, MealSummary};
pub use ports::UiPorts;
pub use view::{Action, Region, ViewState};

/// Build a finder that renders into an [`HtmlDocument`], configured from
/// `meal-finder.toml` and `MEAL_FINDER__*` environment variables
pub fn finder_from_env() -> Result<MealFinder<MealDbClient, HtmlDocument>, FinderError> {
    let config = FinderConfig::load()?;
    let client = MealDbClient::from_config(&config.api)?;
    Ok(MealFinder::new(client, HtmlDocument::default()))
}
