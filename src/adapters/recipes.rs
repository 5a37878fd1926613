use crate::config::toml_config::RecipeConfig;
use crate::domain::model::Recipe;
use crate::domain::ports::RecipeSource;
use crate::utils::error::{PantryError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoundRecipe {
    id: u64,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    used_ingredients: Vec<IngredientRef>,
    #[serde(default)]
    missed_ingredients: Vec<IngredientRef>,
}

#[derive(Debug, Deserialize)]
struct IngredientRef {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeInformation {
    id: u64,
    #[serde(default)]
    ready_in_minutes: Option<u32>,
    #[serde(default)]
    servings: Option<u32>,
    #[serde(default)]
    source_url: Option<String>,
}

/// Client for a Spoonacular-compatible recipe service.
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    max_results: usize,
}

impl RecipeApiClient {
    pub fn new(config: &RecipeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.resolved_api_key().map(str::to_string),
            max_results: config.max_results,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        mut query: Vec<(&'static str, String)>,
    ) -> Result<T> {
        if let Some(key) = &self.api_key {
            query.push(("apiKey", key.clone()));
        }
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!("Making recipe API request to: {}", url);

        let response = self.client.get(&url).query(&query).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("Recipe API response status: {}", status);
        if !status.is_success() {
            return Err(PantryError::UnexpectedResponse {
                service: "recipe service".to_string(),
                message: format!("HTTP {}", status),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeSource for RecipeApiClient {
    async fn find_by_ingredients(&self, ingredients: &[String]) -> Result<Vec<Recipe>> {
        let found: Vec<FoundRecipe> = self
            .get_json(
                "/recipes/findByIngredients",
                vec![
                    ("ingredients", ingredients.join(",")),
                    ("number", self.max_results.to_string()),
                    ("ranking", "1".to_string()),
                    ("ignorePantry", "true".to_string()),
                ],
            )
            .await?;

        if found.is_empty() {
            return Ok(Vec::new());
        }

        let ids = found
            .iter()
            .map(|r| r.id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let details: Vec<RecipeInformation> = self
            .get_json("/recipes/informationBulk", vec![("ids", ids)])
            .await?;
        let mut details: HashMap<u64, RecipeInformation> =
            details.into_iter().map(|info| (info.id, info)).collect();

        Ok(found
            .into_iter()
            .map(|r| {
                let info = details.remove(&r.id);
                Recipe {
                    id: r.id,
                    title: r.title,
                    image: r.image.unwrap_or_default(),
                    ready_in_minutes: info.as_ref().and_then(|i| i.ready_in_minutes).unwrap_or(0),
                    servings: info.as_ref().and_then(|i| i.servings).unwrap_or(0),
                    used_ingredients: r.used_ingredients.into_iter().map(|i| i.name).collect(),
                    missed_ingredients: r.missed_ingredients.into_iter().map(|i| i.name).collect(),
                    source_url: info.and_then(|i| i.source_url).unwrap_or_default(),
                }
            })
            .collect())
    }
}
