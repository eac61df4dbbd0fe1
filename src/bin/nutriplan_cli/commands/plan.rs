// ABOUTME: Plan generation command for nutriplan-cli
// ABOUTME: Loads a request, runs the planner and prints the weekly plan as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::{Context, Result};
use nutriplan::catalog::FoodCatalog;
use nutriplan::config::NutritionConfig;
use nutriplan::intelligence::NutritionPlanner;
use nutriplan::request::PlanRequest;
use tracing::info;

/// Generate and print a weekly plan
pub fn run(catalog: FoodCatalog, input: &Path, seed: Option<u64>, pretty: bool) -> Result<()> {
    let request = PlanRequest::from_file(input)?;
    let planner = NutritionPlanner::new(NutritionConfig::global().clone(), catalog);

    let plan = match seed.or(request.seed) {
        Some(seed) => {
            info!(seed, "Generating reproducible plan");
            planner.generate_weekly_plan_seeded(&request.profile, &request.week, seed)?
        }
        None => planner.generate_weekly_plan(
            &request.profile,
            &request.week,
            &mut rand::thread_rng(),
        )?,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&plan)
    } else {
        serde_json::to_string(&plan)
    }
    .context("Failed to serialize plan")?;

    println!("{json}");
    Ok(())
}
