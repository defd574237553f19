//! Loading of category, recipe and material files from the data directory

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CatalogError;
use crate::models::{Category, CategoryIndex, MaterialTable, RecipeCatalog, SubcategoryRef};

pub const MATERIALS_FILE: &str = "materials.json";
pub const CATEGORIES_FILE: &str = "categories.json";

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `materials.json` from the data directory
pub async fn load_materials(data_dir: &Path) -> Result<MaterialTable, CatalogError> {
    let path = data_dir.join(MATERIALS_FILE);
    let materials: MaterialTable = read_json(&path).await?;
    debug!(path = %path.display(), count = materials.len(), "loaded materials");
    Ok(materials)
}

/// Load `categories.json` from the data directory
pub async fn load_categories(data_dir: &Path) -> Result<CategoryIndex, CatalogError> {
    let path = data_dir.join(CATEGORIES_FILE);
    let index: CategoryIndex = read_json(&path).await?;
    debug!(path = %path.display(), count = index.categories.len(), "loaded categories");
    Ok(index)
}

/// Location of a subcategory's recipe file
pub fn recipe_path(data_dir: &Path, category: &Category, subcategory: &SubcategoryRef) -> PathBuf {
    data_dir.join(&category.folder).join(&subcategory.file)
}

/// Load and validate the recipe file of one subcategory
pub async fn load_recipes(
    data_dir: &Path,
    category: &Category,
    subcategory: &SubcategoryRef,
) -> Result<RecipeCatalog, CatalogError> {
    let path = recipe_path(data_dir, category, subcategory);
    let catalog: RecipeCatalog = read_json(&path).await?;
    validate_amounts(&path, &catalog)?;

    debug!(
        path = %path.display(),
        recipes = catalog.values().map(|s| s.len()).sum::<usize>(),
        "loaded recipes"
    );
    Ok(catalog)
}

fn validate_amounts(path: &Path, catalog: &RecipeCatalog) -> Result<(), CatalogError> {
    for recipes in catalog.values() {
        for (name, recipe) in recipes {
            for (material, &amount) in &recipe.materials {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(CatalogError::InvalidAmount {
                        path: path.to_path_buf(),
                        recipe: name.clone(),
                        material: material.clone(),
                        amount,
                    });
                }
            }
        }
    }
    Ok(())
}
