//! Best-effort recipe suggestions for the attention set.
//!
//! Requests are numbered; a response is only shown if it belongs to the most
//! recently issued request, so a slow reply for an old snapshot cannot
//! overwrite a newer one.

use crate::domain::model::{FoodItem, Recipe};
use crate::domain::ports::RecipeSource;

/// Item names to search with, case-insensitively deduplicated, first occurrence wins.
pub fn ingredient_names(items: &[FoodItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut names: Vec<String> = Vec::new();
    for item in items {
        let name = item.name.trim();
        let key = name.to_lowercase();
        if !name.is_empty() && !seen.contains(&key) {
            seen.push(key);
            names.push(name.to_string());
        }
    }
    names
}

/// Never fails: errors are logged and produce no suggestions.
pub async fn suggest<R: RecipeSource + ?Sized>(source: &R, items: &[FoodItem]) -> Vec<Recipe> {
    suggest_for(source, &ingredient_names(items)).await
}

async fn suggest_for<R: RecipeSource + ?Sized>(source: &R, ingredients: &[String]) -> Vec<Recipe> {
    if ingredients.is_empty() {
        return Vec::new();
    }
    match source.find_by_ingredients(ingredients).await {
        Ok(recipes) => {
            tracing::debug!(
                "Found {} recipes for {} ingredients",
                recipes.len(),
                ingredients.len()
            );
            recipes
        }
        Err(e) => {
            tracing::warn!("Error fetching recipes: {}", e);
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub seq: u64,
    pub ingredients: Vec<String>,
}

impl SuggestionRequest {
    pub async fn fetch<R: RecipeSource + ?Sized>(&self, source: &R) -> Vec<Recipe> {
        suggest_for(source, &self.ingredients).await
    }
}

#[derive(Debug, Default)]
pub struct RecipeSuggestions {
    latest_seq: u64,
    snapshot: Option<Vec<String>>,
    recipes: Vec<Recipe>,
    loading: bool,
}

impl RecipeSuggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request for a new attention-set snapshot.
    ///
    /// Returns `None` when the snapshot is unchanged, or when it is empty, in
    /// which case the shown list is cleared and any in-flight request goes stale.
    pub fn begin(&mut self, attention: &[FoodItem]) -> Option<SuggestionRequest> {
        let ids: Vec<String> = attention.iter().map(|item| item.id.clone()).collect();
        if self.snapshot.as_ref() == Some(&ids) {
            return None;
        }
        self.snapshot = Some(ids);
        self.latest_seq += 1;

        if attention.is_empty() {
            self.recipes.clear();
            self.loading = false;
            return None;
        }

        self.loading = true;
        Some(SuggestionRequest {
            seq: self.latest_seq,
            ingredients: ingredient_names(attention),
        })
    }

    /// Applies a response; returns false and discards it if a newer request was issued.
    pub fn complete(&mut self, seq: u64, recipes: Vec<Recipe>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(
                "Ignoring stale recipe response {} (latest {})",
                seq,
                self.latest_seq
            );
            return false;
        }
        self.recipes = recipes;
        self.loading = false;
        true
    }

    pub async fn refresh<R: RecipeSource + ?Sized>(
        &mut self,
        source: &R,
        attention: &[FoodItem],
    ) -> &[Recipe] {
        if let Some(request) = self.begin(attention) {
            let recipes = request.fetch(source).await;
            self.complete(request.seq, recipes);
        }
        &self.recipes
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
