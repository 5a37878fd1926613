use crate::domain::model::{FoodItem, NewFoodItem};
use crate::domain::ports::Clock;
use chrono::Utc;

/// In-memory pantry contents. Lives as long as the owning view.
pub struct ItemStore<C: Clock> {
    items: Vec<FoodItem>,
    clock: C,
    last_id: i64,
}

impl<C: Clock> ItemStore<C> {
    pub fn new(clock: C) -> Self {
        Self::with_items(clock, Vec::new())
    }

    pub fn with_items(clock: C, items: Vec<FoodItem>) -> Self {
        Self {
            items,
            clock,
            last_id: 0,
        }
    }

    /// Stores a new item with a fresh id and today's date as its added date.
    pub fn add(&mut self, candidate: NewFoodItem) -> FoodItem {
        let item = FoodItem {
            id: self.next_id(),
            name: candidate.name.trim().to_string(),
            category: candidate.category,
            expiry_date: candidate.expiry_date,
            added_date: self.clock.today(),
        };
        tracing::debug!("Adding pantry item {} ({})", item.name, item.id);
        self.items.push(item.clone());
        item
    }

    /// Removes the item with `id`, if any.
    pub fn remove(&mut self, id: &str) {
        if let Some(pos) = self.items.iter().position(|item| item.id == id) {
            let removed = self.items.remove(pos);
            tracing::debug!("Removed pantry item {} ({})", removed.name, removed.id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // Millisecond timestamps, bumped so two adds in the same millisecond still differ.
    fn next_id(&mut self) -> String {
        let mut id = Utc::now().timestamp_millis().max(self.last_id + 1);
        while self.items.iter().any(|item| item.id == id.to_string()) {
            id += 1;
        }
        self.last_id = id;
        id.to_string()
    }
}
