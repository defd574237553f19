use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const CATEGORIES: &str = r#"{
  "categories": [
    {
      "name": "Weapons",
      "folder": "weapons",
      "subcategories": [
        { "name": "Melee", "file": "melee.json" },
        { "name": "Ranged", "file": "ranged.json" }
      ]
    },
    {
      "name": "Tools",
      "folder": "tools",
      "subcategories": [ { "name": "Basic", "file": "basic.json" } ]
    }
  ]
}"#;

pub const MATERIALS: &str = r#"{
  "Iron": { "image": "img/iron.png", "unit": "pcs" },
  "Wood": { "image": "img/wood.png", "unit": "pcs" },
  "Leather": { "image": "img/leather.png", "unit": "kg" },
  "String": { "image": "img/string.png", "unit": "m" }
}"#;

pub const MELEE: &str = r#"{
  "Basic": {
    "Sword": { "image": "img/sword.png", "materials": { "Iron": 3, "Wood": 1 } }
  },
  "Heavy": {
    "Greatsword": { "image": "img/greatsword.png", "materials": { "Iron": 6, "Leather": 0.5 } }
  }
}"#;

pub const RANGED: &str = r#"{
  "Bows": {
    "Shortbow": { "image": "img/shortbow.png", "materials": { "Wood": 3, "String": 1.5 } }
  }
}"#;

pub const TOOLS: &str = r#"{
  "Basic": {
    "Hammer": { "image": "img/hammer.png", "materials": { "Iron": 2, "Wood": 1 } }
  }
}"#;

fn write(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, contents).expect("Failed to write fixture file");
}

/// Creates a complete, consistent data directory.
/// The TempDir must be kept alive for the duration of the test.
pub fn create_data_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write(dir.path(), "categories.json", CATEGORIES);
    write(dir.path(), "materials.json", MATERIALS);
    write(dir.path(), "weapons/melee.json", MELEE);
    write(dir.path(), "weapons/ranged.json", RANGED);
    write(dir.path(), "tools/basic.json", TOOLS);
    dir
}

/// Overwrites one file of a fixture data directory.
pub fn overwrite(dir: &TempDir, rel: &str, contents: &str) {
    write(dir.path(), rel, contents);
}
