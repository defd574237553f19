mod common;

use craft_calculator::check;

#[tokio::test]
async fn test_clean_data_dir() -> anyhow::Result<()> {
    let dir = common::create_data_dir();
    let report = check::check_data_dir(dir.path()).await?;

    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
    assert_eq!(report.files_checked, 5);
    assert_eq!(report.recipes_checked, 4);

    Ok(())
}

#[tokio::test]
async fn test_unknown_material_reported() -> anyhow::Result<()> {
    let dir = common::create_data_dir();
    common::overwrite(
        &dir,
        "tools/basic.json",
        r#"{ "Basic": { "Hammer": { "image": "", "materials": { "Iron": 2, "Stone": 1 } } } }"#,
    );

    let report = check::check_data_dir(dir.path()).await?;
    assert!(!report.is_ok());
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("Stone"));

    Ok(())
}

#[tokio::test]
async fn test_missing_and_stray_files() -> anyhow::Result<()> {
    let dir = common::create_data_dir();
    std::fs::remove_file(dir.path().join("weapons/ranged.json"))?;
    common::overwrite(&dir, "weapons/old.json", "{}");

    let report = check::check_data_dir(dir.path()).await?;
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("ranged.json"));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("old.json"));

    Ok(())
}

#[tokio::test]
async fn test_duplicate_recipe_names_warned() -> anyhow::Result<()> {
    let dir = common::create_data_dir();
    common::overwrite(
        &dir,
        "tools/basic.json",
        r#"{
            "Basic": { "Hammer": { "image": "", "materials": { "Iron": 2 } } },
            "Heavy": { "Hammer": { "image": "", "materials": { "Iron": 5 } } }
        }"#,
    );

    let report = check::check_data_dir(dir.path()).await?;
    assert!(report.is_ok());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Hammer"));

    Ok(())
}

#[tokio::test]
async fn test_missing_materials_file_is_fatal() -> anyhow::Result<()> {
    let dir = common::create_data_dir();
    std::fs::remove_file(dir.path().join("materials.json"))?;

    assert!(check::check_data_dir(dir.path()).await.is_err());

    Ok(())
}
