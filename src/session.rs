//! Session state: loaded reference data plus the current category selection

use std::path::{Path, PathBuf};

use tracing::info;

use crate::calculator::{self, AggregationResult};
use crate::catalog;
use crate::error::{AggregateError, CatalogError};
use crate::models::{Category, CategoryIndex, MaterialTable, RecipeCatalog, Selection, SubcategoryRef};

/// Everything a calculation needs, scoped to one user session.
///
/// Materials and categories are loaded once. The recipe catalog is replaced
/// each time a subcategory is selected, so a calculation only ever sees
/// recipes from one file.
#[derive(Debug)]
pub struct Session {
    data_dir: PathBuf,
    materials: MaterialTable,
    categories: CategoryIndex,
    category: Option<Category>,
    subcategory: Option<SubcategoryRef>,
    recipes: RecipeCatalog,
}

impl Session {
    /// Load materials, then categories, from `data_dir`
    pub async fn load(data_dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let data_dir = data_dir.into();
        let materials = catalog::load_materials(&data_dir).await?;
        let categories = catalog::load_categories(&data_dir).await?;

        info!(
            data_dir = %data_dir.display(),
            materials = materials.len(),
            categories = categories.categories.len(),
            "session loaded"
        );

        Ok(Self {
            data_dir,
            materials,
            categories,
            category: None,
            subcategory: None,
            recipes: RecipeCatalog::new(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories.categories
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn subcategory(&self) -> Option<&SubcategoryRef> {
        self.subcategory.as_ref()
    }

    /// Recipes of the selected subcategory; empty until one is selected
    pub fn recipes(&self) -> &RecipeCatalog {
        &self.recipes
    }

    /// Select a category by folder or name. Clears any loaded recipes.
    pub fn select_category(&mut self, key: &str) -> Result<&Category, CatalogError> {
        let category = self
            .categories
            .find(key)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCategory(key.to_string()))?;

        self.subcategory = None;
        self.recipes.clear();
        Ok(self.category.insert(category))
    }

    /// Select a subcategory of the current category and load its recipes
    pub async fn select_subcategory(&mut self, key: &str) -> Result<&RecipeCatalog, CatalogError> {
        let category = self.category.as_ref().ok_or(CatalogError::NoCategorySelected)?;
        let subcategory = category
            .subcategory(key)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownSubcategory {
                category: category.name.clone(),
                subcategory: key.to_string(),
            })?;

        let recipes = catalog::load_recipes(&self.data_dir, category, &subcategory).await?;
        self.subcategory = Some(subcategory);
        self.recipes = recipes;
        Ok(&self.recipes)
    }

    /// Aggregate materials for `selections` against the loaded recipes
    pub fn calculate(&self, selections: &[Selection]) -> Result<AggregationResult, AggregateError> {
        calculator::aggregate(&self.recipes, selections, &self.materials)
    }
}
