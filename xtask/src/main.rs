//! Catalog maintenance tasks for AnimIdManager
//!
//! Usage:
//!   cargo xtask init              # Create the catalog folder and default catalog if none exists
//!   cargo xtask check             # Load the catalog and report what's in it
//!   cargo xtask defaults          # Print the default catalog JSON
//!   cargo xtask reset             # Overwrite the catalog with the defaults
//!
//! All commands take `--assets <DIR>` to point at a project's assets folder.

use anim_id_manager::store::to_json;
use anim_id_manager::{build_defaults, CatalogStore, LocalStorage, Role, StorageBackend, ToolConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Catalog maintenance for AnimIdManager")]
struct Cli {
    /// Project assets directory (overrides config file and ANIM_ID_ASSETS_ROOT)
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default catalog if no catalog file exists yet
    Init,
    /// Load the catalog file and print per-role counts
    Check,
    /// Print the default catalog as JSON
    Defaults,
    /// Overwrite the catalog file with the default catalog
    Reset,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => init(open_store(cli.assets)?),
        Commands::Check => check(open_store(cli.assets)?),
        Commands::Defaults => print_defaults(),
        Commands::Reset => reset(open_store(cli.assets)?),
    }
}

/// Resolve the catalog location and wrap it in a store
fn open_store(assets: Option<PathBuf>) -> Result<CatalogStore<LocalStorage>> {
    let config = ToolConfig::resolve(assets).context("Failed to resolve tool config")?;
    Ok(CatalogStore::new(LocalStorage::new(), config.catalog_path()))
}

/// Create the catalog folder; saving never creates directories on its own
fn ensure_catalog_dir(store: &CatalogStore<LocalStorage>) -> Result<()> {
    if let Some(parent) = store.path().parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

fn init(store: CatalogStore<LocalStorage>) -> Result<()> {
    if store.storage().exists(store.path()) {
        println!("Catalog already exists: {}", store.location());
        return Ok(());
    }

    ensure_catalog_dir(&store)?;
    store
        .save(&store.build_defaults())
        .context("Failed to write default catalog")?;
    println!("Wrote default catalog: {}", store.location());
    Ok(())
}

fn check(store: CatalogStore<LocalStorage>) -> Result<()> {
    let catalog = store
        .load()
        .with_context(|| format!("Catalog is not usable: {}", store.location()))?;

    let Some(catalog) = catalog else {
        println!("No catalog at {} (the editor will start from defaults)", store.location());
        return Ok(());
    };

    println!("{}", store.location());
    for role in Role::ALL {
        let ids = catalog.ids(role);
        let values: Vec<String> = ids.iter().map(|n| n.id.to_string()).collect();
        println!(
            "  {:<18} {:>3} ids  [{}]",
            role.json_key(),
            ids.len(),
            values.join(", ")
        );
    }
    Ok(())
}

fn print_defaults() -> Result<()> {
    let text = to_json(&build_defaults()).context("Failed to serialize defaults")?;
    print!("{}", text);
    Ok(())
}

fn reset(store: CatalogStore<LocalStorage>) -> Result<()> {
    ensure_catalog_dir(&store)?;
    store
        .save(&store.build_defaults())
        .context("Failed to write default catalog")?;
    println!("Reset catalog to defaults: {}", store.location());
    Ok(())
}
