use clap::Parser;
use pantry_tracker::config::Command;
use pantry_tracker::core::expiry::classify;
use pantry_tracker::core::form::FoodForm;
use pantry_tracker::core::pantry::{
    attention_set, category_options, filter_items, summarize, ALL_CATEGORIES,
};
use pantry_tracker::core::{Clock, FixedClock, FoodItem, ProductLookup, SystemClock};
use pantry_tracker::utils::error::ErrorSeverity;
use pantry_tracker::utils::logger;
use pantry_tracker::utils::validation::{parse_date, Validate};
use pantry_tracker::{
    CliConfig, ItemStore, OpenFoodFactsClient, PantryError, RecipeApiClient, RecipeSuggestions,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    let verbose = cli.verbose || config.verbose();
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: &TomlConfig) -> Result<(), PantryError> {
    config.validate()?;

    let today = match &cli.today {
        Some(value) => parse_date("--today", value)?,
        None => SystemClock.today(),
    };
    let mut store = ItemStore::with_items(FixedClock(today), config.pantry_items(today)?);
    tracing::info!("Loaded {} pantry items (today is {})", store.len(), today);

    match &cli.command {
        Command::Stats => {
            let stats = summarize(store.items(), today);
            println!("Total items: {:>4}  in your pantry", stats.total);
            println!("Fresh:       {:>4}  items still fresh", stats.fresh);
            println!("Expiring:    {:>4}  use within 3 days", stats.expiring);
            println!("Expired:     {:>4}  should be removed", stats.expired);
        }
        Command::List { search, category } => {
            let matches = filter_items(store.items(), search, category);
            if matches.is_empty() {
                println!("No food items found");
                if !search.is_empty() || category != ALL_CATEGORIES {
                    println!("Try adjusting your search filters");
                    println!("Categories: {}", category_options(store.items()).join(", "));
                } else {
                    println!("Add your first food item to get started");
                }
            }
            for item in matches {
                print_item(item, today);
            }
        }
        Command::Attention => {
            let attention = attention_set(store.items(), today);
            println!("{} items expiring soon", attention.len());
            for item in &attention {
                print_item(item, today);
            }
        }
        Command::Lookup { barcode } => {
            let client = OpenFoodFactsClient::new(&config.product_lookup)?;
            let mut form = FoodForm::new();
            if !form.begin_scan() {
                return Ok(());
            }
            let outcome = client.try_lookup(barcode).await;
            let notice = form.apply_scan(outcome, today);
            println!("{}: {}", notice.title(), notice.description());

            if let Some(candidate) = form.submit(today) {
                let item = store.add(candidate);
                print_item(&item, today);
            }
        }
        Command::Recipes => {
            let client = RecipeApiClient::new(&config.recipes)?;
            let attention = attention_set(store.items(), today);
            if attention.is_empty() {
                println!("Nothing is expiring soon");
                return Ok(());
            }

            let mut suggestions = RecipeSuggestions::new();
            let recipes = suggestions.refresh(&client, &attention).await;
            if recipes.is_empty() {
                println!("No recipes found for your expiring ingredients. Try adding more items to your pantry!");
            }
            for recipe in recipes {
                println!(
                    "{} ({} min, serves {})",
                    recipe.title, recipe.ready_in_minutes, recipe.servings
                );
                if !recipe.used_ingredients.is_empty() {
                    println!("  Using: {}", recipe.used_ingredients.join(", "));
                }
                if !recipe.missed_ingredients.is_empty() {
                    println!("  Need:  {}", recipe.missed_ingredients.join(", "));
                }
                if !recipe.source_url.is_empty() {
                    println!("  {}", recipe.source_url);
                }
            }
        }
    }

    Ok(())
}

fn print_item(item: &FoodItem, today: chrono::NaiveDate) {
    let status = classify(item.expiry_date, today);
    println!(
        "[{:<8}] {:<24} {:<10} expires {}  {}",
        status.kind(),
        item.name,
        item.category,
        item.expiry_date,
        status.label()
    );
}
