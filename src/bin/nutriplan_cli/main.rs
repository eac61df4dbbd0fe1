// ABOUTME: nutriplan CLI - generates weekly nutrition plans and browses the food table
// ABOUTME: Reads JSON plan requests and prints plans as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a plan from a request file
//! nutriplan-cli plan --input request.json --pretty
//!
//! # Reproducible plan with a custom food table
//! nutriplan-cli plan --input request.json --foods foods.json --seed 42
//!
//! # List protein foods
//! nutriplan-cli foods --category protein
//!
//! # Substitutes for salmon without fish
//! nutriplan-cli alternatives --food "Salmón" --allergy fish
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutriplan::logging::LoggingConfig;
use nutriplan::models::{DietaryRestriction, FoodCategory};
use tracing::debug;

use helpers::args::{parse_category, parse_restriction};

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Weekly nutrition planner",
    long_about = "Generates seven-day nutrition plans from a profile and a week of training, and browses the food table."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON food table to use instead of the built-in one
    #[arg(long, global = true)]
    foods: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a weekly plan from a JSON request
    Plan {
        /// Plan request file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Seed for reproducible food picks (overrides the request's seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the food table
    Foods {
        /// Only this category
        #[arg(long, value_parser = parse_category)]
        category: Option<FoodCategory>,
    },

    /// List substitutes for a food
    Alternatives {
        /// Food to replace
        #[arg(long)]
        food: String,

        /// Category of the food (detected from the name when omitted)
        #[arg(long, value_parser = parse_category)]
        category: Option<FoodCategory>,

        /// Allergen tag to exclude (repeatable)
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Dietary restriction to honour (repeatable)
        #[arg(long = "restriction", value_parser = parse_restriction)]
        restrictions: Vec<DietaryRestriction>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let catalog = helpers::load_catalog(cli.foods.as_deref())?;
    debug!(foods = catalog.len(), "Food table ready");

    match cli.command {
        Command::Plan {
            input,
            seed,
            pretty,
        } => commands::plan::run(catalog, &input, seed, pretty)?,
        Command::Foods { category } => commands::foods::list(&catalog, category),
        Command::Alternatives {
            food,
            category,
            allergies,
            restrictions,
        } => commands::foods::alternatives(&catalog, &food, category, &allergies, &restrictions),
    }

    Ok(())
}
