//! Crafting Recipe Calculator
//!
//! Sums the raw materials needed for a set of crafting recipes.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use craft_calculator::check;
use craft_calculator::{Selection, Session};

#[derive(Parser)]
#[command(name = "craft-calc")]
#[command(about = "Material calculator for crafting recipes")]
struct Cli {
    /// Directory holding categories.json, materials.json and recipe folders
    #[arg(short, long, env = "CRAFT_CALC_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories and their subcategories
    Categories,

    /// List all materials with unit and icon
    Materials,

    /// List the recipes of a subcategory
    Recipes {
        /// Category name or folder
        category: String,

        /// Subcategory name or file
        subcategory: String,
    },

    /// Calculate materials needed for the selected recipes
    Calc {
        /// Category name or folder
        category: String,

        /// Subcategory name or file
        subcategory: String,

        /// Recipes to craft, as NAME, NAME=QTY or NAME:QTY
        #[arg(required = true)]
        selections: Vec<Selection>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every file in the data directory
    Check,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Categories => {
            let session = load_session(&cli.data_dir).await?;
            if session.categories().is_empty() {
                println!("No categories defined.");
            }
            for category in session.categories() {
                println!("{} ({})", category.name, category.folder);
                for sub in &category.subcategories {
                    println!("  {} ({})", sub.name, sub.file);
                }
            }
        }

        Commands::Materials => {
            let session = load_session(&cli.data_dir).await?;
            println!("{:<24} {:<10} {}", "Material", "Unit", "Image");
            println!("{}", "-".repeat(60));
            for (id, material) in session.materials() {
                println!("{:<24} {:<10} {}", id, material.unit, material.image);
            }
        }

        Commands::Recipes {
            category,
            subcategory,
        } => {
            let mut session = load_session(&cli.data_dir).await?;
            open_subcategory(&mut session, &category, &subcategory).await?;
            for (group, recipes) in session.recipes() {
                println!("{}:", group);
                for (name, recipe) in recipes {
                    println!("  {}  [{}]", name, recipe.image);
                    for (material, amount) in &recipe.materials {
                        let unit = session
                            .materials()
                            .get(material)
                            .map(|m| m.unit.as_str())
                            .unwrap_or("?");
                        println!("    {} {} {}", material, amount, unit);
                    }
                }
            }
        }

        Commands::Calc {
            category,
            subcategory,
            selections,
            json,
        } => {
            let mut session = load_session(&cli.data_dir).await?;
            open_subcategory(&mut session, &category, &subcategory).await?;
            let result = session.calculate(&selections)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", result);
            }
        }

        Commands::Check => {
            let report = check::check_data_dir(&cli.data_dir)
                .await
                .with_context(|| format!("Failed to check {}", cli.data_dir.display()))?;
            println!("{}", report);
            if !report.is_ok() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn load_session(data_dir: &Path) -> Result<Session> {
    Session::load(data_dir)
        .await
        .with_context(|| format!("Failed to load data from {}", data_dir.display()))
}

async fn open_subcategory(session: &mut Session, category: &str, subcategory: &str) -> Result<()> {
    session.select_category(category)?;
    session
        .select_subcategory(subcategory)
        .await
        .with_context(|| format!("Failed to open '{}' in '{}'", subcategory, category))?;
    Ok(())
}
