//! UI Components
//!
//! Reusable Leptos components.

mod multiplier_input;
mod recipe_card;

pub use multiplier_input::MultiplierInput;
pub use recipe_card::RecipeCard;
