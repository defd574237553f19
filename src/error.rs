//! Error types for catalog loading and aggregation

use std::path::PathBuf;

use thiserror::Error;

/// Failure of the aggregation step
#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("material '{material}' used by recipe '{recipe}' has no entry in the material table")]
    MissingMaterialMetadata { material: String, recipe: String },
}

/// Failure while loading or navigating catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("recipe '{recipe}' in {} needs {amount} of '{material}'; amounts must be finite and non-negative", path.display())]
    InvalidAmount {
        path: PathBuf,
        recipe: String,
        material: String,
        amount: f64,
    },

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("category '{category}' has no subcategory '{subcategory}'")]
    UnknownSubcategory { category: String, subcategory: String },

    #[error("no category selected")]
    NoCategorySelected,
}

/// Rejected `NAME[=QTY]` selection token
#[derive(Debug, Error, PartialEq)]
pub enum SelectionParseError {
    #[error("empty selection")]
    Empty,

    #[error("invalid quantity '{quantity}' for '{recipe}': expected a positive integer")]
    InvalidQuantity { recipe: String, quantity: String },
}
