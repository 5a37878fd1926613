// Adapters layer: HTTP implementations of the domain ports.

pub mod open_food_facts;
pub mod recipes;

pub use open_food_facts::OpenFoodFactsClient;
pub use recipes::RecipeApiClient;
