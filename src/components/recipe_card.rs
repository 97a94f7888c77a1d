//! Recipe Card Component
//!
//! One card per recipe: name, multiplier input, scaled servings,
//! ingredient list, and instructions.

use leptos::prelude::*;

use crate::models::Recipe;
use crate::scaling::scaled_display;
use crate::store::{store_multiplier, use_app_store};

use super::MultiplierInput;

/// A single recipe card with amounts scaled by the active multiplier
#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let store = use_app_store();

    let id = recipe.id;
    let base_servings = recipe.servings;
    let multiplier = move || store_multiplier(&store, id);

    view! {
        <div class="recipe-card">
            <h2 class="recipe-name">{recipe.name}</h2>

            <MultiplierInput recipe_id=id />

            <p class="servings-line">
                "Original servings: " {base_servings}
                " | Adjusted servings: "
                {move || scaled_display(base_servings as f64, multiplier())}
            </p>

            <h3>"Ingredients:"</h3>
            <ul class="ingredient-list">
                {recipe.ingredients.into_iter().map(|ing| {
                    let amount = ing.amount;
                    view! {
                        <li>
                            {move || scaled_display(amount, multiplier())}
                            " " {ing.unit} " " {ing.item}
                        </li>
                    }
                }).collect_view()}
            </ul>

            <h3>"Instructions:"</h3>
            // line breaks preserved via white-space: pre-line
            <p class="instructions">{recipe.instructions}</p>
        </div>
    }
}
