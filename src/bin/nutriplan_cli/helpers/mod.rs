// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for nutriplan-cli
// ABOUTME: Argument parsers, table display and food table loading

pub mod args;
pub mod display;

use std::path::Path;

use anyhow::Result;
use nutriplan::catalog::FoodCatalog;

/// Custom table when a path is given, built-in table otherwise
pub fn load_catalog(path: Option<&Path>) -> Result<FoodCatalog> {
    Ok(match path {
        Some(path) => FoodCatalog::from_json_file(path)?,
        None => FoodCatalog::standard(),
    })
}
