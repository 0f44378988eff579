//! Command-line interface definitions
//!
//! Each subcommand stands in for one screen of the recipe book: `import` is
//! the landing page plus the fetching screen, `show` the recipe detail view,
//! `list` the saved-recipe list.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recibook", version, about = "Save, browse and scale recipes")]
pub struct Cli {
    /// Log debug output (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./recibook.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Storage directory, overriding the configured data_dir
    #[arg(long, global = true, value_name = "PATH", env = "RECIBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a recipe from a link (mocked) and show it
    Import {
        /// Link to the recipe page
        url: String,
        /// Generate a random recipe, as the list page's "create recipe" does
        #[arg(long)]
        random: bool,
        /// Skip the loading screen
        #[arg(long)]
        no_wait: bool,
    },
    /// Show a recipe with ingredients scaled to a serving count
    Show {
        /// Saved recipe id; without it the pending import or the seed is shown
        #[arg(long)]
        id: Option<String>,
        /// Serving count, clamped to the configured bounds
        #[arg(short, long)]
        servings: Option<u32>,
        /// Ingredient positions (1-based) to mark as done
        #[arg(long = "check", value_name = "N")]
        checked: Vec<usize>,
    },
    /// List saved recipes
    #[command(alias = "ls")]
    List {
        /// Match against titles and ingredient names
        #[arg(short, long, default_value = "")]
        search: String,
        /// Collection id (all, breakfast, lunch, dinner, desserts)
        #[arg(short, long)]
        collection: Option<String>,
    },
    /// Save the pending imported recipe
    Save {
        /// Save even when the phone-number confirmation would be required
        #[arg(long)]
        confirm: bool,
    },
    /// Delete a saved recipe
    Delete {
        id: String,
    },
    /// List the available collections
    Collections,
    /// Forget the pending import and pasted link
    ResetSession,
}
