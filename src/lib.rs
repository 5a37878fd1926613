pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{OpenFoodFactsClient, RecipeApiClient};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    expiry::{classify, days_until},
    pantry::{attention_set, summarize},
    store::ItemStore,
    suggestions::{suggest, RecipeSuggestions},
};
pub use utils::error::{PantryError, Result};
