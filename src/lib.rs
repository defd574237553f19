//! Crafting recipe material calculator
//!
//! Loads recipe and material definitions from JSON files and sums the raw
//! materials needed to craft a selection of recipes.

pub mod calculator;
pub mod catalog;
pub mod check;
pub mod error;
pub mod models;
pub mod selection;
pub mod session;

pub use calculator::{AggregationResult, aggregate};
pub use error::{AggregateError, CatalogError, SelectionParseError};
pub use models::{Category, Material, MaterialTable, Recipe, RecipeCatalog, Selection};
pub use session::Session;
