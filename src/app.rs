//! Recipe Book App
//!
//! Main application component: startup seeding plus the recipe card list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::RecipeCard;
use crate::seed;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Two-step startup: load persisted recipes, seed defaults when empty.
    // Deliberately not an effect, so seeding cannot re-fire on state changes.
    let recipes = seed::load_or_seed();
    web_sys::console::log_1(&format!("[APP] Loaded {} recipes", recipes.len()).into());

    let store: AppStore = Store::new(AppState::new(recipes));
    provide_context(store);

    view! {
        <div class="app-container">
            <h1>"Recipe Book"</h1>

            {move || store.recipes().get().into_iter().map(|recipe| {
                view! { <RecipeCard recipe=recipe /> }
            }).collect_view()}
        </div>
    }
}
