//! Material requirement calculator logic

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use tracing::debug;

use crate::error::AggregateError;
use crate::models::{MaterialTable, MaterialTotal, Recipe, RecipeCatalog, Selection};

/// Material totals for a set of selections, in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregationResult {
    pub totals: IndexMap<String, MaterialTotal>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn get(&self, material: &str) -> Option<&MaterialTotal> {
        self.totals.get(material)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MaterialTotal)> {
        self.totals.iter()
    }
}

/// Find a recipe by name in any subcategory of the loaded catalog.
///
/// Recipe names are assumed unique across subcategories; the first match in
/// document order wins.
pub fn find_recipe<'a>(catalog: &'a RecipeCatalog, name: &str) -> Option<&'a Recipe> {
    catalog.values().find_map(|recipes| recipes.get(name))
}

/// Sum the materials needed for every selection.
///
/// Selections naming a recipe absent from `catalog` are skipped. A material
/// without an entry in `materials` aborts the whole calculation.
pub fn aggregate(
    catalog: &RecipeCatalog,
    selections: &[Selection],
    materials: &MaterialTable,
) -> Result<AggregationResult, AggregateError> {
    let mut totals: IndexMap<String, MaterialTotal> = IndexMap::new();

    for selection in selections {
        let Some(recipe) = find_recipe(catalog, &selection.recipe) else {
            debug!(recipe = %selection.recipe, "skipping selection not in loaded catalog");
            continue;
        };

        let quantity = f64::from(selection.quantity.get());
        debug!(recipe = %selection.recipe, quantity = selection.quantity.get(), "adding recipe");

        for (material_id, per_unit) in &recipe.materials {
            let required = per_unit * quantity;

            match totals.entry(material_id.clone()) {
                Entry::Occupied(mut entry) => entry.get_mut().amount += required,
                Entry::Vacant(entry) => {
                    let meta = materials.get(material_id).ok_or_else(|| {
                        AggregateError::MissingMaterialMetadata {
                            material: material_id.clone(),
                            recipe: selection.recipe.clone(),
                        }
                    })?;
                    entry.insert(MaterialTotal {
                        amount: required,
                        image: meta.image.clone(),
                        unit: meta.unit.clone(),
                    });
                }
            }
        }
    }

    Ok(AggregationResult { totals })
}

impl fmt::Display for AggregationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.totals.is_empty() {
            return writeln!(f, "No recipe selected.");
        }

        writeln!(f, "=== Materials Required ===")?;
        for (material, total) in &self.totals {
            writeln!(f, "  {}: {} {}  [{}]", material, total.amount, total.unit, total.image)?;
        }

        Ok(())
    }
}
