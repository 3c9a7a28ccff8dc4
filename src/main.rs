use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{info, warn};

use nutri_balance::app::{analysis_view, log_meals, recommendation_view, save_meals};
use nutri_balance::carousel::{auto_advance, Carousel};
use nutri_balance::cli::{parse_args, Command};
use nutri_balance::config::AppConfig;
use nutri_balance::entry_session::{run_entry_session, SessionOutcome};
use nutri_balance::logging;
use nutri_balance::meal_log::{now_millis, summarize_slots, MealSlot};
use nutri_balance::recipes::FEATURED_RECIPES;
use nutri_balance::report::{
    export_report_csv, render_analysis, render_featured, render_meal_summary, render_recommendations,
};
use nutri_balance::storage::FileStorage;

fn open_store(path: &Path) -> Result<FileStorage> {
    FileStorage::open(path).with_context(|| format!("Failed to open meal store at {:?}", path))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init();

    let cli_args = parse_args();
    let store_path = cli_args.store.clone().unwrap_or_else(|| config.store_path.clone());

    match cli_args.command {
        Command::Entry => {
            let mut storage = open_store(&store_path)?;
            let stdin = io::stdin();
            let outcome = run_entry_session(stdin.lock(), io::stdout(), now_millis)?;
            match outcome {
                SessionOutcome::Completed(meals) => {
                    save_meals(&mut storage, &meals)?;
                    println!("Saved {} meals. Run `nutri-balance analyze` to see the results.", meals.len());
                }
                SessionOutcome::Aborted => println!("Entry cancelled. Stored meals were left unchanged."),
            }
        }
        Command::Log { breakfast, lunch, dinner, snack } => {
            let mut storage = open_store(&store_path)?;
            let entries = [
                (MealSlot::Breakfast, breakfast),
                (MealSlot::Lunch, lunch),
                (MealSlot::Dinner, dinner),
                (MealSlot::Snack, snack),
            ];
            let meals = log_meals(&mut storage, &entries, now_millis)?;
            print!("{}", render_meal_summary(&summarize_slots(&meals)));
            println!("Saved {} meals.", meals.len());
        }
        Command::Analyze { json, csv } => {
            let storage = open_store(&store_path)?;
            let view = analysis_view(&storage)?;
            if view.meals.is_empty() {
                warn!("no meals stored for today; every nutrient reads as zero");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render_analysis(&view.nutrition, &view.deficient_pairs()));
            }
            if let Some(path) = csv {
                export_report_csv(&view.nutrition, &path)?;
                info!(path = %path.display(), "wrote CSV export");
            }
        }
        Command::Recommend { favorites, json } => {
            let storage = open_store(&store_path)?;
            let view = recommendation_view(&storage, &favorites)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                let deficient: Vec<_> = view.deficient.iter().map(|r| (r.key, r.result.clone())).collect();
                print!("{}", render_recommendations(&deficient, &view.recipes, &view.favorites));
            }
        }
        Command::Featured { rotations, interval_secs } => {
            let period = interval_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(config.carousel_interval);
            let mut carousel = Carousel::new(FEATURED_RECIPES.len());
            if let Some(recipe) = carousel.current(FEATURED_RECIPES) {
                println!("{}", render_featured(recipe, carousel.index(), carousel.len()));
            }

            let (shutdown_tx, shutdown_rx) = oneshot::channel();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    let _ = shutdown_tx.send(());
                }
            });

            let advanced = auto_advance(&mut carousel, period, rotations, shutdown_rx, |index| {
                if let Some(recipe) = FEATURED_RECIPES.get(index) {
                    println!("{}", render_featured(recipe, index, FEATURED_RECIPES.len()));
                    let _ = io::stdout().flush();
                }
            })
            .await;
            info!(advanced, "featured carousel stopped");
        }
    }

    Ok(())
}
