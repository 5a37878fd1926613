use crate::core::expiry::classify;
use crate::domain::model::{ExpiryStatus, FoodItem, PantrySummary};
use chrono::NaiveDate;

/// Matches every category in [`filter_items`].
pub const ALL_CATEGORIES: &str = "All";

pub fn summarize(items: &[FoodItem], reference: NaiveDate) -> PantrySummary {
    items
        .iter()
        .fold(PantrySummary::default(), |mut acc, item| {
            match classify(item.expiry_date, reference) {
                ExpiryStatus::Fresh(_) => acc.fresh += 1,
                ExpiryStatus::Expiring(_) => acc.expiring += 1,
                ExpiryStatus::Expired(_) => acc.expired += 1,
            }
            acc.total += 1;
            acc
        })
}

/// Items that are expiring or expired, in input order.
pub fn attention_set(items: &[FoodItem], reference: NaiveDate) -> Vec<FoodItem> {
    items
        .iter()
        .filter(|item| classify(item.expiry_date, reference).needs_attention())
        .cloned()
        .collect()
}

pub fn filter_items<'a>(items: &'a [FoodItem], search: &str, category: &str) -> Vec<&'a FoodItem> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .filter(|item| {
            category == ALL_CATEGORIES || item.category.as_str().eq_ignore_ascii_case(category)
        })
        .collect()
}

/// "All" followed by the categories present, in first-seen order.
pub fn category_options(items: &[FoodItem]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        let name = item.category.as_str();
        if !options.iter().any(|o| o == name) {
            options.push(name.to_string());
        }
    }
    options
}
