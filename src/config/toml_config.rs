use crate::domain::model::{Category, FoodItem};
use crate::utils::error::{PantryError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_PRODUCT_ENDPOINT: &str = "https://world.openfoodfacts.org";
pub const DEFAULT_RECIPE_ENDPOINT: &str = "https://api.spoonacular.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub product_lookup: ProductLookupConfig,
    #[serde(default)]
    pub recipes: RecipeConfig,
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductLookupConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    /// Suffix of the localized product-name field used when `product_name` is empty.
    pub language: String,
}

impl Default for ProductLookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PRODUCT_ENDPOINT.to_string(),
            timeout_seconds: 10,
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub max_results: usize,
    pub timeout_seconds: u64,
}

impl RecipeConfig {
    /// The configured key, unless it is blank or an unresolved `${VAR}` placeholder.
    pub fn resolved_api_key(&self) -> Option<&str> {
        let key = self.api_key.as_deref()?.trim();
        if key.is_empty() {
            return None;
        }
        if key.starts_with("${") {
            tracing::warn!("Recipe API key {} is not set; requests go out without a key", key);
            return None;
        }
        Some(key)
    }
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RECIPE_ENDPOINT.to_string(),
            api_key: None,
            max_results: 6,
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

/// A pantry entry listed in the config file, loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub expiry_date: NaiveDate,
    pub added_date: Option<NaiveDate>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PantryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PantryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PantryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// Builds the initial pantry. Seed items without an id get the first free `seed-<n>`.
    pub fn pantry_items(&self, today: NaiveDate) -> Result<Vec<FoodItem>> {
        let mut taken: HashSet<String> = HashSet::new();
        for (index, seed) in self.items.iter().enumerate() {
            if let Some(id) = &seed.id {
                if !taken.insert(id.clone()) {
                    return Err(PantryError::InvalidConfigValueError {
                        field: format!("items[{}].id", index),
                        value: id.clone(),
                        reason: "Duplicate item id".to_string(),
                    });
                }
            }
        }

        let mut next_seed = 0;
        let mut items = Vec::with_capacity(self.items.len());
        for (index, seed) in self.items.iter().enumerate() {
            let category: Category =
                seed.category
                    .parse()
                    .map_err(|reason| PantryError::InvalidConfigValueError {
                        field: format!("items[{}].category", index),
                        value: seed.category.clone(),
                        reason,
                    })?;
            let id = match &seed.id {
                Some(id) => id.clone(),
                None => loop {
                    next_seed += 1;
                    let candidate = format!("seed-{}", next_seed);
                    if taken.insert(candidate.clone()) {
                        break candidate;
                    }
                },
            };
            items.push(FoodItem {
                id,
                name: seed.name.trim().to_string(),
                category,
                expiry_date: seed.expiry_date,
                added_date: seed.added_date.unwrap_or(today),
            });
        }
        Ok(items)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("product_lookup.endpoint", &self.product_lookup.endpoint)?;
        validation::validate_non_empty_string(
            "product_lookup.language",
            &self.product_lookup.language,
        )?;
        validation::validate_range(
            "product_lookup.timeout_seconds",
            self.product_lookup.timeout_seconds,
            1,
            300,
        )?;

        validation::validate_url("recipes.endpoint", &self.recipes.endpoint)?;
        validation::validate_range("recipes.max_results", self.recipes.max_results, 1, 100)?;
        validation::validate_range("recipes.timeout_seconds", self.recipes.timeout_seconds, 1, 300)?;

        for (index, seed) in self.items.iter().enumerate() {
            validation::validate_non_empty_string(&format!("items[{}].name", index), &seed.name)?;
        }
        // ids and category names are checked when the pantry is built
        self.pantry_items(NaiveDate::MIN).map(|_| ())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
