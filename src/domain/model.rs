use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Food categories in the order the add-item form offers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dairy,
    Meat,
    Vegetables,
    Fruits,
    Grains,
    Snacks,
    Beverages,
    Condiments,
    Frozen,
    Canned,
    Other,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Dairy,
        Category::Meat,
        Category::Vegetables,
        Category::Fruits,
        Category::Grains,
        Category::Snacks,
        Category::Beverages,
        Category::Condiments,
        Category::Frozen,
        Category::Canned,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::Grains => "Grains",
            Category::Snacks => "Snacks",
            Category::Beverages => "Beverages",
            Category::Condiments => "Condiments",
            Category::Frozen => "Frozen",
            Category::Canned => "Canned",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// A tracked pantry entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub expiry_date: NaiveDate,
    pub added_date: NaiveDate,
}

/// Form output before the store assigns an id and added date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoodItem {
    pub name: String,
    pub category: Category,
    pub expiry_date: NaiveDate,
}

/// Bare three-way freshness bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Fresh,
    Expiring,
    Expired,
}

/// Freshness of an item relative to a reference date. Derived on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// More than three days left.
    Fresh(u32),
    /// Zero to three days left; zero means it expires today.
    Expiring(u32),
    /// Days since the expiry date, at least one.
    Expired(u32),
}

impl ExpiryStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            ExpiryStatus::Fresh(_) => StatusKind::Fresh,
            ExpiryStatus::Expiring(_) => StatusKind::Expiring,
            ExpiryStatus::Expired(_) => StatusKind::Expired,
        }
    }

    pub fn needs_attention(&self) -> bool {
        !matches!(self, ExpiryStatus::Fresh(_))
    }

    pub fn label(&self) -> String {
        match self {
            ExpiryStatus::Expiring(0) => "Expires today!".to_string(),
            ExpiryStatus::Fresh(days) | ExpiryStatus::Expiring(days) => {
                format!("{} days left", days)
            }
            ExpiryStatus::Expired(days) => format!("Expired {} days ago", days),
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            StatusKind::Fresh => "fresh",
            StatusKind::Expiring => "expiring",
            StatusKind::Expired => "expired",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantrySummary {
    pub total: usize,
    pub fresh: usize,
    pub expiring: usize,
    pub expired: usize,
}

/// Best-guess product data from a barcode lookup, used to pre-fill the add form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub category: Category,
    pub expiry_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub used_ingredients: Vec<String>,
    pub missed_ingredients: Vec<String>,
    pub source_url: String,
}
