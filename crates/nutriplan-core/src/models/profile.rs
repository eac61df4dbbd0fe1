// ABOUTME: User profile model consumed by the nutrition pipeline
// ABOUTME: Sex, biometrics, goal, steps, meal count, allergies and dietary restrictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::food::DietaryRestriction;
use crate::constants::meals::FALLBACK_MEALS_PER_DAY;
use crate::errors::{AppError, AppResult};

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (+5 kcal Mifflin-St Jeor constant)
    Male,
    /// Female (-161 kcal Mifflin-St Jeor constant)
    Female,
}

/// Body composition goal driving the calorie adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Caloric surplus
    Gain,
    /// Caloric balance
    Maintain,
    /// Caloric deficit
    Lose,
}

const fn default_meals_per_day() -> u8 {
    FALLBACK_MEALS_PER_DAY
}

/// Immutable input to a plan calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Average daily step count
    #[serde(default)]
    pub daily_steps: u32,
    /// Body composition goal
    pub goal: Goal,
    /// Meals per day (3-6; anything else uses the 5-meal template)
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u8,
    /// Allergen tags to exclude, compared case-insensitively
    #[serde(default)]
    pub allergies: BTreeSet<String>,
    /// Dietary restrictions to honour when picking foods
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,
}

impl UserProfile {
    /// Create a profile with no allergies or restrictions and the default meal count
    #[must_use]
    pub fn new(sex: Sex, weight_kg: f64, height_cm: f64, age: u32, goal: Goal) -> Self {
        Self {
            sex,
            weight_kg,
            height_cm,
            age,
            daily_steps: 0,
            goal,
            meals_per_day: default_meals_per_day(),
            allergies: BTreeSet::new(),
            dietary_restrictions: Vec::new(),
        }
    }

    /// Set the daily step count
    #[must_use]
    pub const fn with_steps(mut self, daily_steps: u32) -> Self {
        self.daily_steps = daily_steps;
        self
    }

    /// Set the meals per day
    #[must_use]
    pub const fn with_meals_per_day(mut self, meals_per_day: u8) -> Self {
        self.meals_per_day = meals_per_day;
        self
    }

    /// Add an allergen tag
    #[must_use]
    pub fn with_allergy(mut self, allergen: impl Into<String>) -> Self {
        self.allergies.insert(allergen.into().trim().to_lowercase());
        self
    }

    /// Add a dietary restriction
    #[must_use]
    pub fn with_restriction(mut self, restriction: DietaryRestriction) -> Self {
        if !self.dietary_restrictions.contains(&restriction) {
            self.dietary_restrictions.push(restriction);
        }
        self
    }

    /// Allergy tags normalized to lowercase
    #[must_use]
    pub fn normalized_allergies(&self) -> BTreeSet<String> {
        self.allergies
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Reject biometrics the Mifflin-St Jeor formula is undefined for
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if weight or height is not a positive finite
    /// number, or if age is zero
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be a positive number of kilograms, got {}",
                self.weight_kg
            )));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Height must be a positive number of centimeters, got {}",
                self.height_cm
            )));
        }
        if self.age == 0 {
            return Err(AppError::invalid_input("Age must be at least one year"));
        }
        Ok(())
    }
}
