use crate::config::toml_config::ProductLookupConfig;
use crate::domain::model::{Category, ProductInfo};
use crate::domain::ports::ProductLookup;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Provider tag to category, checked in this order. The first entry whose tag
/// appears anywhere in the product's tag list decides the category.
pub const CATEGORY_TAGS: &[(&str, Category)] = &[
    ("en:dairy", Category::Dairy),
    ("en:milk", Category::Dairy),
    ("en:yogurt", Category::Dairy),
    ("en:cheese", Category::Dairy),
    ("en:meat", Category::Meat),
    ("en:poultry", Category::Meat),
    ("en:fish", Category::Meat),
    ("en:seafood", Category::Meat),
    ("en:vegetables", Category::Vegetables),
    ("en:fruits", Category::Fruits),
    ("en:cereals", Category::Grains),
    ("en:bread", Category::Grains),
    ("en:pasta", Category::Grains),
    ("en:rice", Category::Grains),
    ("en:snacks", Category::Snacks),
    ("en:beverages", Category::Beverages),
    ("en:water", Category::Beverages),
    ("en:soft-drinks", Category::Beverages),
    ("en:condiments", Category::Condiments),
    ("en:sauces", Category::Condiments),
    ("en:frozen-foods", Category::Frozen),
    ("en:canned-foods", Category::Canned),
];

pub fn map_to_category(tags: &[String]) -> Category {
    CATEGORY_TAGS
        .iter()
        .find(|(tag, _)| tags.iter().any(|t| t == tag))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}

/// Estimated shelf life in days for a freshly bought product.
pub fn default_expiry_days(category: Category) -> u32 {
    match category {
        Category::Dairy => 7,
        Category::Meat => 3,
        Category::Vegetables => 7,
        Category::Fruits => 5,
        Category::Grains => 30,
        Category::Snacks => 90,
        Category::Beverages => 365,
        Category::Condiments => 180,
        Category::Frozen => 90,
        Category::Canned => 365,
        Category::Other => 30,
    }
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    status: Option<i64>,
    product: Option<RawProduct>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    product_name: Option<String>,
    #[serde(default)]
    categories_tags: Vec<String>,
    #[serde(flatten)]
    extra: HashMap<String, serde_json::Value>,
}

impl RawProduct {
    fn display_name(&self, language: &str) -> String {
        let localized = self
            .extra
            .get(&format!("product_name_{}", language))
            .and_then(|v| v.as_str());
        self.product_name
            .as_deref()
            .into_iter()
            .chain(localized)
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_PRODUCT)
            .to_string()
    }
}

/// Remaps a raw provider body; `None` for misses and malformed payloads.
pub fn parse_product(body: &str, language: &str) -> Option<ProductInfo> {
    let response: ProductResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Malformed product payload: {}", e);
            return None;
        }
    };
    if response.status != Some(1) {
        return None;
    }
    let product = response.product?;
    let category = map_to_category(&product.categories_tags);
    Some(ProductInfo {
        name: product.display_name(language),
        category,
        expiry_days: Some(default_expiry_days(category)),
    })
}

#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    client: Client,
    endpoint: String,
    language: String,
}

impl OpenFoodFactsClient {
    pub fn new(config: &ProductLookupConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("pantry-tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        })
    }

    fn product_url(&self, barcode: &str) -> String {
        format!("{}/api/v0/product/{}.json", self.endpoint, barcode)
    }
}

#[async_trait]
impl ProductLookup for OpenFoodFactsClient {
    async fn try_lookup(&self, barcode: &str) -> Result<Option<ProductInfo>> {
        let barcode = barcode.trim();
        if barcode.is_empty() || !barcode.chars().all(|c| c.is_ascii_alphanumeric()) {
            tracing::warn!("Rejecting barcode {:?}", barcode);
            return Ok(None);
        }

        let url = self.product_url(barcode);
        tracing::debug!("Looking up product: {}", url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("Product lookup response status: {}", response.status());
        if !response.status().is_success() {
            return Ok(None);
        }

        let body = response.text().await?;
        Ok(parse_product(&body, &self.language))
    }
}
