// ABOUTME: Injected, immutable food reference table with filtering and lookups
// ABOUTME: Allergy and dietary restriction filters, substitutes and category detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Catalog
//!
//! The catalog is plain read-only data handed to the planner. Tests and the
//! CLI can swap in alternate tables with `FoodCatalog::new` or
//! `FoodCatalog::from_json_file`.

mod standard_foods;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{DietaryRestriction, FoodCategory, FoodRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Food reference table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FoodCatalog {
    foods: Vec<FoodRecord>,
}

impl FoodCatalog {
    /// Wrap a list of records
    #[must_use]
    pub const fn new(foods: Vec<FoodRecord>) -> Self {
        Self { foods }
    }

    /// The built-in table
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_foods::records())
    }

    /// Load a JSON array of food records
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file can't be read, `InvalidFormat` if it
    /// isn't a record array, and `InvalidInput` for records with negative
    /// values or a non-positive serving size
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read food table {}", path.display()))
                .with_source(e)
        })?;
        let catalog: Self = serde_json::from_str(&contents)?;
        catalog.validate()?;
        debug!(path = %path.display(), foods = catalog.len(), "Loaded food table");
        Ok(catalog)
    }

    fn validate(&self) -> AppResult<()> {
        for food in &self.foods {
            let values = [food.calories, food.protein_g, food.carbs_g, food.fat_g];
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(AppError::invalid_input(format!(
                    "Food '{}' has negative or non-numeric nutrition values",
                    food.name
                )));
            }
            if food.serving_size <= 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Food '{}' must have a positive serving size",
                    food.name
                )));
            }
        }
        Ok(())
    }

    /// All records in table order
    #[must_use]
    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Records of one category
    pub fn by_category(&self, category: FoodCategory) -> impl Iterator<Item = &FoodRecord> {
        self.foods.iter().filter(move |f| f.category == category)
    }

    /// Case-insensitive lookup by exact name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FoodRecord> {
        let wanted = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.name.to_lowercase() == wanted)
    }

    /// Records compatible with a set of allergies and restrictions
    #[must_use]
    pub fn available(
        &self,
        allergies: &BTreeSet<String>,
        restrictions: &[DietaryRestriction],
    ) -> Vec<&FoodRecord> {
        self.foods
            .iter()
            .filter(|f| f.is_safe_for(allergies) && f.satisfies(restrictions))
            .collect()
    }

    /// Substitutes for a food within its category
    ///
    /// `exclude` (case-insensitive) is left out. The result is empty when
    /// nothing survives filtering.
    #[must_use]
    pub fn alternatives(
        &self,
        category: FoodCategory,
        exclude: &str,
        allergies: &BTreeSet<String>,
        restrictions: &[DietaryRestriction],
    ) -> Vec<&FoodRecord> {
        let exclude = exclude.trim().to_lowercase();
        self.available(allergies, restrictions)
            .into_iter()
            .filter(|f| f.category == category && f.name.to_lowercase() != exclude)
            .collect()
    }

    /// Guess the category of a free-text food name
    ///
    /// Exact name match first, then keyword matching against catalog names.
    /// Unknown names are treated as fruit.
    #[must_use]
    pub fn detect_category(&self, name: &str) -> FoodCategory {
        if let Some(food) = self.find(name) {
            return food.category;
        }

        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return FoodCategory::Fruit;
        }

        let by_substring = self.foods.iter().find(|f| {
            let known = f.name.to_lowercase();
            wanted.contains(&known) || known.contains(&wanted)
        });
        if let Some(food) = by_substring {
            return food.category;
        }

        // Significant words only; "de", "al" and the like match everything
        self.foods
            .iter()
            .find(|f| {
                f.name
                    .to_lowercase()
                    .split_whitespace()
                    .filter(|word| word.chars().count() > 3)
                    .any(|word| wanted.contains(word))
            })
            .map_or(FoodCategory::Fruit, |f| f.category)
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
