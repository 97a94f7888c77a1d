//! Multiplier Input Component
//!
//! Numeric field controlling the servings multiplier for one recipe.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::scaling::parse_multiplier;
use crate::store::{store_multiplier, store_set_multiplier, use_app_store};

/// Servings multiplier field. The min/step are control-level hints only;
/// unparseable text falls back to 1.0 in `parse_multiplier`.
#[component]
pub fn MultiplierInput(recipe_id: u32) -> impl IntoView {
    let store = use_app_store();

    view! {
        <label class="multiplier-label">
            "Servings Multiplier"
            <input
                type="number"
                min="0.5"
                step="0.5"
                prop:value=move || store_multiplier(&store, recipe_id).to_string()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store_set_multiplier(&store, recipe_id, parse_multiplier(&input.value()));
                }
            />
        </label>
    }
}
