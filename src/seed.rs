//! Default Recipe Seeding
//!
//! Populates an empty persisted collection with the starter recipes.

use crate::models::{Ingredient, Recipe};
use crate::storage;

fn ingredient(amount: f64, unit: &str, item: &str) -> Ingredient {
    Ingredient {
        amount,
        unit: unit.to_string(),
        item: item.to_string(),
    }
}

/// The five starter recipes written on first run (ids 1..=5)
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Classic Spaghetti Carbonara".to_string(),
            ingredients: vec![
                ingredient(400.0, "g", "spaghetti"),
                ingredient(200.0, "g", "pancetta"),
                ingredient(4.0, "", "large eggs"),
                ingredient(100.0, "g", "Pecorino Romano"),
            ],
            instructions: "1. Cook pasta\n2. Fry pancetta\n3. Mix eggs and cheese\n4. Combine all ingredients".to_string(),
            servings: 4,
        },
        Recipe {
            id: 2,
            name: "Chicken Tikka Masala".to_string(),
            ingredients: vec![
                ingredient(500.0, "g", "chicken breast"),
                ingredient(400.0, "ml", "coconut milk"),
                ingredient(2.0, "tbsp", "tikka masala paste"),
            ],
            instructions: "1. Marinate chicken\n2. Cook chicken\n3. Add sauce ingredients\n4. Simmer".to_string(),
            servings: 4,
        },
        Recipe {
            id: 3,
            name: "Greek Salad".to_string(),
            ingredients: vec![
                ingredient(4.0, "", "tomatoes"),
                ingredient(1.0, "", "cucumber"),
                ingredient(200.0, "g", "feta cheese"),
                ingredient(50.0, "g", "black olives"),
            ],
            instructions: "1. Chop vegetables\n2. Combine ingredients\n3. Add dressing".to_string(),
            servings: 2,
        },
        Recipe {
            id: 4,
            name: "Banana Smoothie".to_string(),
            ingredients: vec![
                ingredient(2.0, "", "bananas"),
                ingredient(300.0, "ml", "milk"),
                ingredient(2.0, "tbsp", "honey"),
            ],
            instructions: "1. Peel bananas\n2. Blend all ingredients\n3. Serve cold".to_string(),
            servings: 2,
        },
        Recipe {
            id: 5,
            name: "Guacamole".to_string(),
            ingredients: vec![
                ingredient(3.0, "", "avocados"),
                ingredient(1.0, "", "lime"),
                ingredient(1.0, "", "red onion"),
                ingredient(2.0, "", "tomatoes"),
            ],
            instructions: "1. Mash avocados\n2. Dice vegetables\n3. Mix ingredients\n4. Season".to_string(),
            servings: 4,
        },
    ]
}

/// Replace an empty collection with the defaults; no-op on a non-empty one
pub fn ensure_seeded(recipes: Vec<Recipe>) -> Vec<Recipe> {
    if recipes.is_empty() {
        default_recipes()
    } else {
        recipes
    }
}

/// Two-step startup sequence: load persisted recipes, then seed-and-persist
/// the defaults if the store was empty. Runs once at app construction.
pub fn load_or_seed() -> Vec<Recipe> {
    let loaded = storage::load();
    let was_empty = loaded.is_empty();
    let recipes = ensure_seeded(loaded);
    if was_empty {
        storage::save(&recipes);
    }
    recipes
}
