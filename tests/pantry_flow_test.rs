use chrono::NaiveDate;
use pantry_tracker::core::form::FoodForm;
use pantry_tracker::core::pantry::{category_options, filter_items, ALL_CATEGORIES};
use pantry_tracker::core::{Category, ExpiryStatus, FixedClock, PantrySummary};
use pantry_tracker::utils::validation::Validate;
use pantry_tracker::{attention_set, classify, summarize, ItemStore, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const PANTRY_TOML: &str = r#"
[product_lookup]
endpoint = "https://world.openfoodfacts.org"

[[items]]
id = "1"
name = "Greek Yogurt"
category = "Dairy"
expiry_date = "2024-09-25"
added_date = "2024-09-18"

[[items]]
id = "2"
name = "Whole Milk"
category = "Dairy"
expiry_date = "2024-09-22"
added_date = "2024-09-15"

[[items]]
id = "3"
name = "Fresh Spinach"
category = "Vegetables"
expiry_date = "2024-09-28"
added_date = "2024-09-19"
"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn load_store(today: NaiveDate) -> ItemStore<FixedClock> {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PANTRY_TOML.as_bytes()).unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();
    ItemStore::with_items(FixedClock(today), config.pantry_items(today).unwrap())
}

#[test]
fn test_dashboard_counts_follow_the_reference_date() {
    let store = load_store(date(2024, 9, 20));
    assert_eq!(
        summarize(store.items(), date(2024, 9, 20)),
        PantrySummary {
            total: 3,
            fresh: 2,
            expiring: 1,
            expired: 0,
        }
    );

    // nothing on the items changes, only "today" moves
    assert_eq!(
        summarize(store.items(), date(2024, 9, 26)),
        PantrySummary {
            total: 3,
            fresh: 0,
            expiring: 1,
            expired: 2,
        }
    );
}

#[test]
fn test_add_and_remove_update_attention_set() {
    let today = date(2024, 9, 20);
    let mut store = load_store(today);

    let mut form = FoodForm::new();
    form.name = "Ground Beef".to_string();
    form.category = Some(Category::Meat);
    form.expiry_date = Some(today);
    let added = store.add(form.submit(today).unwrap());
    assert_eq!(added.added_date, today);
    assert_eq!(classify(added.expiry_date, today), ExpiryStatus::Expiring(0));

    let attention: Vec<String> = attention_set(store.items(), today)
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(attention, vec!["Whole Milk", "Ground Beef"]);

    store.remove("2");
    store.remove("2");
    let attention = attention_set(store.items(), today);
    assert_eq!(attention.len(), 1);
    assert_eq!(attention[0].id, added.id);

    let summary = summarize(store.items(), today);
    assert_eq!(summary.total, store.len());
    assert_eq!(summary.fresh + summary.expiring + summary.expired, summary.total);
}

#[test]
fn test_search_and_category_filters() -> anyhow::Result<()> {
    let store = load_store(date(2024, 9, 20));

    assert_eq!(
        category_options(store.items()),
        vec!["All", "Dairy", "Vegetables"]
    );
    assert_eq!(filter_items(store.items(), "yog", ALL_CATEGORIES).len(), 1);
    assert_eq!(filter_items(store.items(), "", "Vegetables").len(), 1);
    assert!(filter_items(store.items(), "milk", "Vegetables").is_empty());

    let stale = TomlConfig::from_toml_str(
        "[[items]]\nname = \"Old Bread\"\ncategory = \"Grains\"\nexpiry_date = \"2024-09-01\"\n",
    )?;
    let items = stale.pantry_items(date(2024, 9, 20))?;
    assert_eq!(filter_items(&items, "BREAD", "grains").len(), 1);
    Ok(())
}

#[test]
fn test_seed_ids_stay_unique_for_removal() {
    let config = TomlConfig::from_toml_str(
        r#"
[[items]]
id = "seed-2"
name = "Rice"
category = "Grains"
expiry_date = "2025-01-01"

[[items]]
name = "Pasta"
category = "Grains"
expiry_date = "2025-01-01"
"#,
    )
    .unwrap();
    config.validate().unwrap();

    let today = date(2024, 9, 20);
    let mut store = ItemStore::with_items(FixedClock(today), config.pantry_items(today).unwrap());
    store.remove("seed-2");

    let left: Vec<(&str, &str)> = store
        .items()
        .iter()
        .map(|item| (item.id.as_str(), item.name.as_str()))
        .collect();
    assert_eq!(left, vec![("seed-1", "Pasta")]);
}
