//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Recipe;
use crate::scaling::DEFAULT_MULTIPLIER;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical recipe collection, mirrored from localStorage at startup
    pub recipes: Vec<Recipe>,
    /// Per-recipe servings multiplier; transient, reset on reload
    pub multipliers: HashMap<u32, f64>,
}

impl AppState {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the active multiplier for a recipe
pub fn store_set_multiplier(store: &AppStore, recipe_id: u32, value: f64) {
    store.multipliers().write().insert(recipe_id, value);
}

/// Active multiplier for a recipe, 1.0 when none has been set
pub fn store_multiplier(store: &AppStore, recipe_id: u32) -> f64 {
    store
        .multipliers()
        .get()
        .get(&recipe_id)
        .copied()
        .unwrap_or(DEFAULT_MULTIPLIER)
}
