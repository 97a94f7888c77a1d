//! Recipe Storage
//!
//! Persists the recipe collection in browser localStorage under a fixed key.
//! Reads degrade to an empty collection; writes log failures and move on.

use crate::models::Recipe;

/// localStorage key holding the JSON-serialized collection
pub const STORAGE_KEY: &str = "recipes";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the persisted collection.
///
/// Missing key, unavailable storage, and corrupt payloads all degrade to an
/// empty collection so the caller never has to handle a storage error.
pub fn load() -> Vec<Recipe> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(json)) => decode(&json),
        _ => Vec::new(),
    }
}

/// Persist the collection as the new canonical state.
pub fn save(recipes: &[Recipe]) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(recipes) {
        Ok(json) => {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                web_sys::console::error_1(&"[STORAGE] set_item failed".into());
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[STORAGE] serialize failed: {}", e).into());
        }
    }
}

/// Decode a persisted payload; corrupt data yields an empty collection
pub fn decode(json: &str) -> Vec<Recipe> {
    serde_json::from_str(json).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, Recipe};

    #[test]
    fn test_decode_corrupt_payload_degrades_to_empty() {
        assert!(decode("not json at all").is_empty());
        assert!(decode("{\"id\":1}").is_empty());
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let recipes = vec![Recipe {
            id: 7,
            name: "Toast".to_string(),
            ingredients: vec![Ingredient {
                amount: 2.0,
                unit: String::new(),
                item: "bread slices".to_string(),
            }],
            instructions: "1. Toast bread\n2. Serve".to_string(),
            servings: 1,
        }];

        let json = serde_json::to_string(&recipes).unwrap();
        assert_eq!(decode(&json), recipes);
    }
}
