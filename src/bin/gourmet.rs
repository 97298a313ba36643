//! Gourmet Guide CLI
//!
//! Usage:
//!   gourmet                 Start the interactive menu
//!   gourmet list            List recipe names
//!   gourmet show <name>     Show a recipe's details

use anyhow::Result;
use clap::{Parser, Subcommand};
use gourmet_guide::config::{Config, Overrides, RECIPES_PATH_ENV};
use gourmet_guide::{Catalog, FileStore, Menu, Skipped, output};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gourmet")]
#[command(about = "Console recipe catalog backed by plain-text files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to recipes directory
    #[arg(short = 'r', long, global = true, env = RECIPES_PATH_ENV)]
    recipes_path: Option<PathBuf>,

    /// Total calories above which a recipe is flagged
    #[arg(long, global = true)]
    calorie_threshold: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// List recipe names
    List,

    /// Show a recipe's ingredients, calories and steps
    Show {
        /// Recipe name (case-insensitive)
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(Overrides {
        recipes_dir: cli.recipes_path,
        calorie_threshold: cli.calorie_threshold,
    })?;
    tracing::debug!(?config, "resolved configuration");

    let store = FileStore::new(&config.recipes_dir);
    store.ensure_dir()?;

    let (catalog, skipped) = Catalog::load(&store)?;
    report_skipped(&skipped);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(
                catalog,
                store,
                config.calorie_threshold,
                stdin.lock(),
                io::stdout(),
            );
            if menu.welcome()? {
                menu.run()?;
            }
        }

        Commands::List => {
            if catalog.is_empty() {
                output::info(&format!("No recipes found in {}", config.recipes_dir.display()));
            } else {
                output::action(&format!("{} recipe(s)", catalog.len()));
                for name in catalog.names() {
                    output::list_item(name);
                }
            }
        }

        Commands::Show { name } => {
            let Some(recipe) = catalog.find_by_name(&name) else {
                anyhow::bail!(
                    "Recipe '{}' not found\nSearched in: {}",
                    name,
                    config.recipes_dir.display()
                );
            };
            let mut stdout = io::stdout().lock();
            output::write_recipe_details(&mut stdout, recipe, config.calorie_threshold)?;
        }
    }

    Ok(())
}

fn report_skipped(skipped: &[Skipped]) {
    for skip in skipped {
        output::warning(&skip.to_string());
        if let Skipped::Line {
            path,
            line_number,
            reason,
            ..
        } = skip
        {
            output::detail(&format!("{}:{}: {}", path.display(), line_number, reason));
        }
    }
}
