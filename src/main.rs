use clap::Parser;
use env_logger::Env;
use log::debug;
use std::time::Duration;

mod cli;

use crate::cli::{Cli, Commands};
use recibook::filter::{collection_name, show_onboarding_hint};
use recibook::scaler::scaled_ingredients;
use recibook::session::validate_url;
use recibook::{
    load_config, open_recipe_book, AppConfig, FileStorage, IngredientChecklist, RecibookError,
    Recipe, RecipeBook, RecipeImporter, SaveOutcome, Servings, COLLECTIONS,
};

type Book = RecipeBook<FileStorage, FileStorage>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    debug!("Using data directory {}", config.data_dir.display());

    let book = open_recipe_book(&config.data_dir);
    run(cli.command, &book, &config).await?;
    Ok(())
}

async fn run(command: Commands, book: &Book, config: &AppConfig) -> Result<(), RecibookError> {
    match command {
        Commands::Import {
            url,
            random,
            no_wait,
        } => {
            let delay = if no_wait {
                Duration::ZERO
            } else {
                config.fetch_delay()
            };
            if random {
                let url = validate_url(&url)?;
                let recipe = RecipeImporter::builder()
                    .url(url.as_str())
                    .random()
                    .delay(delay)
                    .build()
                    .await?;
                book.hand_off(&url, &recipe)?;
            } else {
                book.submit_url(&url)?;
                // Fetching screen
                tokio::time::sleep(delay).await;
            }
            let recipe = book.resolve(None);
            let servings = Servings::with_bounds(
                recipe.base_servings,
                config.min_servings,
                config.max_servings,
            );
            print_recipe(&recipe, servings, &IngredientChecklist::new());
        }

        Commands::Show {
            id,
            servings,
            checked,
        } => {
            let recipe = book.resolve(id.as_deref());
            let servings = Servings::with_bounds(
                servings.unwrap_or(recipe.base_servings),
                config.min_servings,
                config.max_servings,
            );
            let mut checklist = IngredientChecklist::new();
            for position in checked.into_iter().filter(|p| *p > 0) {
                checklist.toggle(position - 1);
            }
            print_recipe(&recipe, servings, &checklist);
        }

        Commands::List { search, collection } => {
            let collection = collection.unwrap_or_else(|| config.default_collection.clone());
            let recipes = book.list(&search, &collection);
            if recipes.is_empty() {
                println!("No recipes match.");
            }
            for recipe in &recipes {
                let tags = recipe
                    .collection_ids
                    .as_ref()
                    .map(|ids| ids.join(", "))
                    .unwrap_or_default();
                println!("{:<32} {}  [{}]", recipe.id, recipe.title, tags);
            }
            if show_onboarding_hint(&book.store().load()) {
                println!();
                println!("Tip: import a recipe link with `recibook import <URL>` to grow your book.");
            }
        }

        Commands::Save { confirm } => {
            let recipe = book.resolve(None);
            let outcome = if confirm {
                book.save_without_confirmation(&recipe)
            } else {
                book.request_save(&recipe)
            };
            match outcome {
                SaveOutcome::Saved => println!("Saved \"{}\" ({})", recipe.title, recipe.id),
                SaveOutcome::ConfirmationRequired => {
                    println!("Saving \"{}\" needs confirmation; rerun with --confirm", recipe.title)
                }
            }
        }

        Commands::Delete { id } => {
            if book.store().find(&id).is_none() {
                return Err(RecibookError::NotFound(id));
            }
            book.delete_recipe(&id);
            println!("Deleted {}", id);
        }

        Commands::Collections => {
            for (id, name) in COLLECTIONS {
                println!("{:<10} {}", id, name);
            }
        }

        Commands::ResetSession => {
            book.session().clear()?;
            println!("Session cleared");
        }
    }
    Ok(())
}

fn print_recipe(recipe: &Recipe, servings: Servings, checklist: &IngredientChecklist) {
    println!("{}", recipe.title);
    println!("{}", "=".repeat(recipe.title.chars().count()));
    if let Some(ids) = &recipe.collection_ids {
        let names: Vec<&str> = ids
            .iter()
            .map(|id| collection_name(id).unwrap_or(id.as_str()))
            .collect();
        println!("Collections: {}", names.join(", "));
    }
    println!(
        "Serves {} (recipe is for {})",
        servings.get(),
        recipe.base_servings
    );

    println!("\nIngredients");
    for (i, line) in scaled_ingredients(recipe, servings.get()).iter().enumerate() {
        let mark = if checklist.is_checked(i) { "x" } else { " " };
        println!("  [{}] {}", mark, line);
    }

    println!("\nInstructions");
    for (i, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}
