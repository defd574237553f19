//! Consistency check over a whole data directory

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::catalog::{self, CATEGORIES_FILE, MATERIALS_FILE};
use crate::error::CatalogError;

/// Problems found while checking the data directory
#[derive(Debug, Default)]
pub struct CheckReport {
    pub files_checked: usize,
    pub recipes_checked: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Find all `.json` files below the data directory
pub fn find_json_files(data_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(data_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect()
}

/// Load every recipe file referenced by `categories.json` and cross-check it
/// against `materials.json`.
///
/// Only failure to load the two top level files is returned as an error;
/// everything else is collected into the report.
pub async fn check_data_dir(data_dir: &Path) -> Result<CheckReport, CatalogError> {
    let mut report = CheckReport::default();

    let materials = catalog::load_materials(data_dir).await?;
    let index = catalog::load_categories(data_dir).await?;
    report.files_checked += 2;

    let mut referenced: HashSet<PathBuf> = HashSet::new();
    referenced.insert(data_dir.join(MATERIALS_FILE));
    referenced.insert(data_dir.join(CATEGORIES_FILE));

    for category in &index.categories {
        for subcategory in &category.subcategories {
            let path = catalog::recipe_path(data_dir, category, subcategory);
            referenced.insert(path.clone());

            let recipes = match catalog::load_recipes(data_dir, category, subcategory).await {
                Ok(recipes) => recipes,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "recipe file failed to load");
                    report.errors.push(format_error_chain(&e));
                    continue;
                }
            };
            report.files_checked += 1;

            let mut seen: HashMap<&str, &str> = HashMap::new();
            for (group, entries) in &recipes {
                for (name, recipe) in entries {
                    report.recipes_checked += 1;

                    if let Some(first) = seen.insert(name, group) {
                        report.warnings.push(format!(
                            "{}: recipe '{}' appears in both '{}' and '{}'; only the first is used",
                            path.display(),
                            name,
                            first,
                            group
                        ));
                    }

                    for material in recipe.materials.keys() {
                        if !materials.contains_key(material) {
                            report.errors.push(format!(
                                "{}: recipe '{}' uses unknown material '{}'",
                                path.display(),
                                name,
                                material
                            ));
                        }
                    }
                }
            }
        }
    }

    for path in find_json_files(data_dir) {
        if !referenced.contains(&path) {
            debug!(path = %path.display(), "unreferenced data file");
            report
                .warnings
                .push(format!("{}: not referenced by {}", path.display(), CATEGORIES_FILE));
        }
    }

    Ok(report)
}

fn format_error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }
        for warning in &self.warnings {
            writeln!(f, "warning: {}", warning)?;
        }
        write!(
            f,
            "Checked {} files ({} recipes). Errors: {}, Warnings: {}",
            self.files_checked,
            self.recipes_checked,
            self.errors.len(),
            self.warnings.len()
        )
    }
}
