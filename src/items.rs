// 🍳 Item Store - canonical collection, selection and calorie totals
//
// Pure in-memory state. Nothing here touches storage or the screen; the
// coordinator (app.rs) is responsible for keeping those in step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type ItemId = u64;

// ============================================================================
// CALORIES
// ============================================================================

/// Non-negative calorie count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calories(u32);

impl Calories {
    pub fn new(value: u32) -> Self {
        Calories(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaloriesError {
    #[error("calories are empty")]
    Empty,

    #[error("`{0}` is not a whole, non-negative calorie count")]
    Invalid(String),
}

/// Parses typed input. Surrounding whitespace is ignored; signs, decimals and
/// trailing garbage are rejected rather than coerced.
impl FromStr for Calories {
    type Err = CaloriesError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CaloriesError::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(CaloriesError::Invalid(trimmed.to_string()));
        }
        trimmed
            .parse::<u32>()
            .map(Calories)
            .map_err(|_| CaloriesError::Invalid(trimmed.to_string()))
    }
}

// ============================================================================
// ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub calories: Calories,
}

impl Item {
    /// Row identifier used by the view (`item-<id>`)
    pub fn row_id(&self) -> String {
        row_id(self.id)
    }
}

pub fn row_id(id: ItemId) -> String {
    format!("item-{}", id)
}

/// Inverse of [`row_id`]
pub fn parse_row_id(row_id: &str) -> Option<ItemId> {
    row_id.strip_prefix("item-")?.parse().ok()
}

// ============================================================================
// ITEM STORE
// ============================================================================

#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    selected: Option<ItemId>,
    // Highest id handed out since the collection was last empty
    high_water: Option<ItemId>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        let high_water = items.iter().map(|item| item.id).max();
        Self {
            items,
            selected: None,
            high_water,
        }
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item and return a copy of it. `None` once the id space
    /// is exhausted; the collection is left untouched.
    pub fn create(&mut self, name: impl Into<String>, calories: Calories) -> Option<Item> {
        let id = self.next_id()?;
        let item = Item {
            id,
            name: name.into(),
            calories,
        };

        self.high_water = Some(id);
        self.items.push(item.clone());
        Some(item)
    }

    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Rewrite the selected item in place. `None` when nothing is selected.
    pub fn update_selected(&mut self, name: impl Into<String>, calories: Calories) -> Option<Item> {
        let selected = self.selected?;
        let item = self.items.iter_mut().find(|item| item.id == selected)?;
        item.name = name.into();
        item.calories = calories;
        Some(item.clone())
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
        self.high_water = None;
    }

    pub fn set_selected(&mut self, item: &Item) {
        self.selected = Some(item.id);
    }

    pub fn get_selected(&self) -> Option<&Item> {
        self.selected.and_then(|id| self.find_by_id(id))
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    /// Recomputed from scratch on every call
    pub fn total_calories(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.calories.get()))
            .sum()
    }

    fn next_id(&self) -> Option<ItemId> {
        let max_existing = self.items.iter().map(|item| item.id).max();
        match max_existing.max(self.high_water) {
            Some(id) => id.checked_add(1),
            None => Some(0),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
