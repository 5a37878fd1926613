pub mod expiry;
pub mod form;
pub mod pantry;
pub mod store;
pub mod suggestions;

pub use crate::domain::model::{
    Category, ExpiryStatus, FoodItem, NewFoodItem, PantrySummary, ProductInfo, Recipe, StatusKind,
};
pub use crate::domain::ports::{Clock, FixedClock, ProductLookup, RecipeSource, SystemClock};
pub use crate::utils::error::Result;
