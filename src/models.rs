//! Data models for crafting recipes and materials

use std::num::NonZeroU32;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A raw material as described in `materials.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub image: String,
    pub unit: String,
}

/// A craftable item and its per-unit material costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub image: String,
    /// Material id -> amount needed to craft one unit
    pub materials: IndexMap<String, f64>,
}

/// Recipe name -> recipe, in document order
pub type Subcategory = IndexMap<String, Recipe>;

/// Subcategory name -> recipes, as stored in one recipe file
pub type RecipeCatalog = IndexMap<String, Subcategory>;

/// Material id -> display metadata
pub type MaterialTable = IndexMap<String, Material>;

/// Entry of a category's subcategory list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryRef {
    pub name: String,
    /// Recipe file, relative to the category folder
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Directory under the data root holding the recipe files
    pub folder: String,
    #[serde(default)]
    pub subcategories: Vec<SubcategoryRef>,
}

impl Category {
    /// Find a subcategory by display name or file name
    pub fn subcategory(&self, key: &str) -> Option<&SubcategoryRef> {
        self.subcategories
            .iter()
            .find(|s| s.file == key || s.name == key)
    }
}

/// Top level shape of `categories.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryIndex {
    pub categories: Vec<Category>,
}

impl CategoryIndex {
    /// Find a category by folder or display name
    pub fn find(&self, key: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.folder == key || c.name == key)
    }
}

/// One recipe the user wants to craft, and how many of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub recipe: String,
    pub quantity: NonZeroU32,
}

impl Selection {
    pub fn new(recipe: impl Into<String>, quantity: NonZeroU32) -> Self {
        Self {
            recipe: recipe.into(),
            quantity,
        }
    }

    /// A selection with the default quantity of one
    pub fn single(recipe: impl Into<String>) -> Self {
        Self::new(recipe, NonZeroU32::MIN)
    }
}

/// Summed requirement for one material
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialTotal {
    pub amount: f64,
    pub image: String,
    pub unit: String,
}
