use crate::domain::model::{ProductInfo, Recipe};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};

/// Source of "today" in the local calendar.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// `Ok(None)` is an ordinary miss; `Err` is a transport failure.
    async fn try_lookup(&self, barcode: &str) -> Result<Option<ProductInfo>>;

    async fn lookup(&self, barcode: &str) -> Option<ProductInfo> {
        match self.try_lookup(barcode).await {
            Ok(Some(info)) => Some(info),
            Ok(None) => {
                tracing::info!("No product match for barcode {}", barcode);
                None
            }
            Err(e) => {
                tracing::warn!("Product lookup for barcode {} failed: {}", barcode, e);
                None
            }
        }
    }
}

#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn find_by_ingredients(&self, ingredients: &[String]) -> Result<Vec<Recipe>>;
}
