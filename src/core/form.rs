//! Add-item form state: draft fields, submit gating and barcode prefill.

use crate::domain::model::{Category, NewFoodItem, ProductInfo};
use crate::utils::error::Result;
use chrono::{Days, NaiveDate};

/// What to tell the user after a scan. The form stays open in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanNotice {
    Found { name: String },
    NotFound,
    Failed,
}

impl ScanNotice {
    pub fn title(&self) -> &'static str {
        match self {
            ScanNotice::Found { .. } => "Product found!",
            ScanNotice::NotFound => "Product not found",
            ScanNotice::Failed => "Scan failed",
        }
    }

    pub fn description(&self) -> String {
        match self {
            ScanNotice::Found { name } => format!("Added {} to the form", name),
            ScanNotice::NotFound => "Please enter the details manually".to_string(),
            ScanNotice::Failed => "Please try again or enter details manually".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, ScanNotice::Found { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodForm {
    pub name: String,
    pub category: Option<Category>,
    pub expiry_date: Option<NaiveDate>,
    pub loading: bool,
}

impl FoodForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self, today: NaiveDate) -> bool {
        !self.loading
            && !self.name.trim().is_empty()
            && self.category.is_some()
            && self.expiry_date.is_some_and(|d| d >= today)
    }

    /// Returns the candidate and clears the draft, or `None` while the form is incomplete.
    pub fn submit(&mut self, today: NaiveDate) -> Option<NewFoodItem> {
        if !self.can_submit(today) {
            return None;
        }
        let item = NewFoodItem {
            name: self.name.trim().to_string(),
            category: self.category?,
            expiry_date: self.expiry_date?,
        };
        *self = Self::default();
        Some(item)
    }

    /// Marks a lookup as in flight. Returns false if one already is.
    pub fn begin_scan(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Applies a lookup outcome: `Ok(None)` is a miss, `Err` a transport failure.
    pub fn apply_scan(
        &mut self,
        outcome: Result<Option<ProductInfo>>,
        today: NaiveDate,
    ) -> ScanNotice {
        self.loading = false;
        match outcome {
            Ok(Some(info)) => {
                self.name = info.name.clone();
                self.category = Some(info.category);
                if let Some(days) = info.expiry_days.filter(|d| *d > 0) {
                    if let Some(expiry) = today.checked_add_days(Days::new(u64::from(days))) {
                        self.expiry_date = Some(expiry);
                    }
                }
                ScanNotice::Found { name: info.name }
            }
            Ok(None) => ScanNotice::NotFound,
            Err(e) => {
                tracing::warn!("Barcode scan lookup failed: {}", e);
                ScanNotice::Failed
            }
        }
    }
}
