//! sabor - Restaurant Rating Prediction CLI
//!
//! Usage:
//!   sabor predict                       # Predict with form defaults
//!   sabor predict --price 1200 --cuisine "North Indian"
//!   sabor predict -i                    # Fill the form interactively
//!   sabor predict --details             # Show encoded values
//!   sabor localities                    # List locality choices
//!   sabor cuisines                      # List cuisine choices
//!   sabor inspect                       # Inspect the model artifact
//!
//! The model artifact is read from `restaurant_rating_model.sbr` in the
//! working directory, once per process.

use clap::{Parser, Subcommand};
use colored::Colorize;
use sabor::features::{
    CUISINE_COUNT_DEFAULT, CUISINE_COUNT_MAX, CUISINE_COUNT_MIN, DELIVERY_COUNT_DEFAULT,
    DELIVERY_COUNT_MAX, DELIVERY_COUNT_MIN, PRICE_DEFAULT, PRICE_MAX, PRICE_MIN,
};
use sabor::model::ModelHandle;
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::{inspect, options, predict};

/// sabor - Restaurant Rating Predictor
///
/// Predict dining ratings for Delhi NCR restaurants.
#[derive(Parser)]
#[command(name = "sabor")]
#[command(author, version, about)]
#[command(propagate_version = true)]
#[command(after_help = "Predictions based on Zomato Restaurants in Delhi NCR data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a restaurant rating from its attributes
    Predict {
        /// Price for 2 people in ₹
        #[arg(long, default_value_t = PRICE_DEFAULT,
              value_parser = clap::value_parser!(u32).range(i64::from(PRICE_MIN)..=i64::from(PRICE_MAX)))]
        price: u32,

        /// Locality: code 0-25 or name (see `sabor localities`)
        #[arg(long, value_name = "LOCALITY")]
        locality: Option<String>,

        /// Main cuisine: code 0-15 or name (see `sabor cuisines`)
        #[arg(long, value_name = "CUISINE")]
        cuisine: Option<String>,

        /// Number of cuisines offered
        #[arg(long, default_value_t = CUISINE_COUNT_DEFAULT,
              value_parser = clap::value_parser!(u8).range(i64::from(CUISINE_COUNT_MIN)..=i64::from(CUISINE_COUNT_MAX)))]
        cuisine_count: u8,

        /// Delivery rating count
        #[arg(long, default_value_t = DELIVERY_COUNT_DEFAULT,
              value_parser = clap::value_parser!(u32).range(i64::from(DELIVERY_COUNT_MIN)..=i64::from(DELIVERY_COUNT_MAX)))]
        delivery_count: u32,

        /// Serves North Indian (defaults to the main-cuisine suggestion)
        #[arg(long, value_name = "BOOL")]
        north_indian: Option<bool>,

        /// Serves Chinese (defaults to the main-cuisine suggestion)
        #[arg(long, value_name = "BOOL")]
        chinese: Option<bool>,

        /// Is fast food (defaults to the main-cuisine suggestion)
        #[arg(long, value_name = "BOOL")]
        fast_food: Option<bool>,

        /// Fill the form interactively (field flags are ignored)
        #[arg(short, long)]
        interactive: bool,

        /// Show the encoded values behind the prediction
        #[arg(long)]
        details: bool,
    },

    /// List the locality choices understood by the model
    Localities,

    /// List the cuisine choices understood by the model
    Cuisines,

    /// Inspect the model artifact metadata
    Inspect {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    // One artifact load per process; every command shares the handle.
    let model = ModelHandle::with_default_path();

    let result = match cli.command {
        Commands::Predict {
            price,
            locality,
            cuisine,
            cuisine_count,
            delivery_count,
            north_indian,
            chinese,
            fast_food,
            interactive,
            details,
        } => predict::run(
            &model,
            predict::PredictArgs {
                price,
                locality,
                cuisine,
                cuisine_count,
                delivery_count,
                north_indian,
                chinese,
                fast_food,
                interactive,
                details,
            },
        ),

        Commands::Localities => options::localities(),

        Commands::Cuisines => options::cuisines(),

        Commands::Inspect { json } => inspect::run(&model, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            e.exit_code()
        }
    }
}
