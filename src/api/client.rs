use super::{
    CategoriesEnvelope, MealApi, MealsEnvelope, CATEGORIES_PATH, FILTER_PATH, LOOKUP_PATH,
    SEARCH_PATH,
};
use crate::config::{default_base_url, default_user_agent, ApiConfig};
use crate::error::FinderError;
use crate::model::{Category, MealDetail, MealSummary, RawMealDetail};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// reqwest-backed client for TheMealDB
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

/// Builder for [`MealDbClient`]
#[derive(Debug, Default)]
pub struct MealDbClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MealDbClientBuilder {
    /// Set the base URL the endpoints are resolved against
    ///
    /// # Example
    /// ```
    /// use meal_finder::MealDbClient;
    ///
    /// let client = MealDbClient::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests. Requests never time out by default.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `FinderError::BuilderError` if the base URL is not an absolute
    /// http(s) URL or the HTTP client cannot be created.
    pub fn build(self) -> Result<MealDbClient, FinderError> {
        let base_url = self.base_url.unwrap_or_else(default_base_url);
        let parsed = Url::parse(&base_url)
            .map_err(|e| FinderError::BuilderError(format!("Invalid base URL {base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FinderError::BuilderError(format!(
                "Unsupported scheme in base URL {base_url}"
            )));
        }

        let mut builder =
            Client::builder().user_agent(self.user_agent.unwrap_or_else(default_user_agent));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FinderError::BuilderError(format!("Failed to create HTTP client: {e}")))?;

        Ok(MealDbClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl MealDbClient {
    pub fn builder() -> MealDbClientBuilder {
        MealDbClientBuilder::default()
    }

    /// Create a client from the `[api]` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self, FinderError> {
        let mut builder = Self::builder()
            .base_url(&config.base_url)
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with optional query pair and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<T, FinderError> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }
        debug!("GET {} {:?}", url, query);

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MealApi for MealDbClient {
    async fn fetch_categories(&self) -> Result<Vec<Category>, FinderError> {
        let envelope: CategoriesEnvelope = self.get_json(CATEGORIES_PATH, None).await?;
        Ok(envelope.categories.unwrap_or_default())
    }

    async fn search_meals_by_name(&self, term: &str) -> Result<Vec<MealSummary>, FinderError> {
        let envelope: MealsEnvelope<MealSummary> =
            self.get_json(SEARCH_PATH, Some(("s", term))).await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    async fn fetch_meals_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, FinderError> {
        let envelope: MealsEnvelope<MealSummary> =
            self.get_json(FILTER_PATH, Some(("c", category))).await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    async fn fetch_meal_detail(&self, id: &str) -> Result<MealDetail, FinderError> {
        let envelope: MealsEnvelope<RawMealDetail> =
            self.get_json(LOOKUP_PATH, Some(("i", id))).await?;
        envelope
            .meals
            .and_then(|meals| meals.into_iter().next())
            .map(MealDetail::from)
            .ok_or_else(|| FinderError::MealNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = MealDbClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "https://www.themealdb.com/api/json/v1/1");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = MealDbClient::builder()
            .base_url("http://localhost:1234/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/api");
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = MealDbClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(FinderError::BuilderError(_))));

        let result = MealDbClient::builder().base_url("ftp://example.com").build();
        assert!(matches!(result, Err(FinderError::BuilderError(_))));
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9/v1".to_string(),
            timeout_secs: Some(3),
            ..Default::default()
        };
        let client = MealDbClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/v1");
    }
}
