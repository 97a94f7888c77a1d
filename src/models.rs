//! Frontend Models
//!
//! Recipe data structures, persisted as-is to browser storage.

use serde::{Deserialize, Serialize};

/// One ingredient line; `amount` is calibrated for the base serving count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub amount: f64,
    /// Measurement unit; empty string means a plain count ("4 eggs")
    pub unit: String,
    pub item: String,
}

/// Recipe record (matches the persisted localStorage layout)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    /// Ordered by recipe step order; order is display-relevant
    pub ingredients: Vec<Ingredient>,
    /// Free text with embedded line breaks, rendered pre-line
    pub instructions: String,
    /// Base serving count the ingredient amounts are calibrated for
    pub servings: u32,
}
