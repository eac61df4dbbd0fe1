// ABOUTME: Macronutrient target models with the 4/4/9 calorie identity
// ABOUTME: MacroTargets, MacroGrams budgets, and MacroPercentages breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::constants::energy_density::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Which macronutrient a calculation is keyed on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Macronutrient {
    /// Protein
    Protein,
    /// Carbohydrate
    Carbs,
    /// Fat
    Fat,
}

/// Gram amounts of the three macronutrients
///
/// Used for per-meal sub-targets and remaining budgets, so values may go
/// negative while a meal is being filled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroGrams {
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

impl MacroGrams {
    /// Create a gram triple
    #[must_use]
    pub const fn new(protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Energy of these grams (4/4/9)
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.fat_g.mul_add(
            KCAL_PER_G_FAT,
            self.protein_g
                .mul_add(KCAL_PER_G_PROTEIN, self.carbs_g * KCAL_PER_G_CARBS),
        )
    }

    /// Grams of one macronutrient
    #[must_use]
    pub const fn get(&self, nutrient: Macronutrient) -> f64 {
        match nutrient {
            Macronutrient::Protein => self.protein_g,
            Macronutrient::Carbs => self.carbs_g,
            Macronutrient::Fat => self.fat_g,
        }
    }
}

impl Sub for MacroGrams {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.protein_g - rhs.protein_g,
            self.carbs_g - rhs.carbs_g,
            self.fat_g - rhs.fat_g,
        )
    }
}

/// Daily macronutrient targets
///
/// `calories` is always derived from the grams and cannot be set
/// independently; deserialization recomputes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "MacroGrams")]
pub struct MacroTargets {
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
}

impl MacroTargets {
    /// Create targets from grams; negative grams are clamped to zero
    #[must_use]
    pub fn new(protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        let grams = MacroGrams::new(protein_g.max(0.0), carbs_g.max(0.0), fat_g.max(0.0));
        Self {
            calories: grams.calories(),
            protein_g: grams.protein_g,
            carbs_g: grams.carbs_g,
            fat_g: grams.fat_g,
        }
    }

    /// Total energy (kcal)
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Protein (grams)
    #[must_use]
    pub const fn protein_g(&self) -> f64 {
        self.protein_g
    }

    /// Carbohydrates (grams)
    #[must_use]
    pub const fn carbs_g(&self) -> f64 {
        self.carbs_g
    }

    /// Fat (grams)
    #[must_use]
    pub const fn fat_g(&self) -> f64 {
        self.fat_g
    }

    /// Share of calories from each macronutrient
    #[must_use]
    pub fn percentages(&self) -> MacroPercentages {
        if self.calories <= 0.0 {
            return MacroPercentages::default();
        }
        MacroPercentages {
            protein_percent: self.protein_g * KCAL_PER_G_PROTEIN / self.calories * 100.0,
            carbs_percent: self.carbs_g * KCAL_PER_G_CARBS / self.calories * 100.0,
            fat_percent: self.fat_g * KCAL_PER_G_FAT / self.calories * 100.0,
        }
    }
}

impl From<MacroGrams> for MacroTargets {
    fn from(grams: MacroGrams) -> Self {
        Self::new(grams.protein_g, grams.carbs_g, grams.fat_g)
    }
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}
