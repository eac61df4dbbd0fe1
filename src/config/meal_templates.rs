// ABOUTME: Meal percentage templates for 3 to 6 meals per day
// ABOUTME: Each slot takes a fixed share of daily protein, carbs and fat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// One meal's share of the day
///
/// Percentages are of the daily gram targets. Training days shift carbs
/// toward the meals around the session, so each slot carries two carb
/// shares.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSlot {
    /// Meal name
    pub name: String,
    /// Time-of-day label
    pub time: String,
    /// Share of daily protein (%)
    pub protein_pct: f64,
    /// Share of daily carbs on rest days (%)
    pub carbs_rest_pct: f64,
    /// Share of daily carbs on training days (%)
    pub carbs_training_pct: f64,
    /// Share of daily fat (%)
    pub fat_pct: f64,
}

impl MealSlot {
    fn new(name: &str, time: &str, protein: f64, carbs: (f64, f64), fat: f64) -> Self {
        Self {
            name: name.to_owned(),
            time: time.to_owned(),
            protein_pct: protein,
            carbs_rest_pct: carbs.0,
            carbs_training_pct: carbs.1,
            fat_pct: fat,
        }
    }

    /// Carb share for a day type
    #[must_use]
    pub const fn carbs_pct(&self, is_training_day: bool) -> f64 {
        if is_training_day {
            self.carbs_training_pct
        } else {
            self.carbs_rest_pct
        }
    }
}

/// Percentage template for a meal count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTemplate {
    /// Meals per day this template covers
    pub meals_per_day: u8,
    /// Slots in serving order
    pub slots: Vec<MealSlot>,
}

impl MealTemplate {
    /// Check slot count and percentage ranges
    ///
    /// Shares need not add up to exactly 100 %, but may not exceed it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTemplate` describing the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots.len() != usize::from(self.meals_per_day) {
            return Err(ConfigError::InvalidTemplate(format!(
                "{}-meal template has {} slots",
                self.meals_per_day,
                self.slots.len()
            )));
        }

        for slot in &self.slots {
            let shares = [
                slot.protein_pct,
                slot.carbs_rest_pct,
                slot.carbs_training_pct,
                slot.fat_pct,
            ];
            if shares.iter().any(|pct| !(0.0..=100.0).contains(pct)) {
                return Err(ConfigError::InvalidTemplate(format!(
                    "{}: percentages must be between 0 and 100",
                    slot.name
                )));
            }
        }

        let totals = [
            ("protein", self.total(|s| s.protein_pct)),
            ("rest-day carbs", self.total(|s| s.carbs_rest_pct)),
            ("training-day carbs", self.total(|s| s.carbs_training_pct)),
            ("fat", self.total(|s| s.fat_pct)),
        ];
        for (name, total) in totals {
            if total > 100.0 + 1e-9 {
                return Err(ConfigError::InvalidTemplate(format!(
                    "{}-meal template assigns {total}% of daily {name}",
                    self.meals_per_day
                )));
            }
        }

        Ok(())
    }

    fn total(&self, share: impl Fn(&MealSlot) -> f64) -> f64 {
        self.slots.iter().map(share).sum()
    }
}

/// Shipped templates (3, 4, 5 and 6 meals)
#[must_use]
pub fn default_templates() -> Vec<MealTemplate> {
    vec![
        MealTemplate {
            meals_per_day: 3,
            slots: vec![
                MealSlot::new("Desayuno", "08:00", 30.0, (30.0, 30.0), 30.0),
                MealSlot::new("Comida", "14:00", 40.0, (40.0, 45.0), 35.0),
                MealSlot::new("Cena", "21:00", 30.0, (30.0, 25.0), 35.0),
            ],
        },
        MealTemplate {
            meals_per_day: 4,
            slots: vec![
                MealSlot::new("Desayuno", "08:00", 25.0, (25.0, 25.0), 25.0),
                MealSlot::new("Comida", "14:00", 35.0, (35.0, 30.0), 30.0),
                MealSlot::new("Merienda", "17:30", 15.0, (15.0, 25.0), 20.0),
                MealSlot::new("Cena", "21:00", 25.0, (25.0, 20.0), 25.0),
            ],
        },
        MealTemplate {
            meals_per_day: 5,
            slots: vec![
                MealSlot::new("Desayuno", "08:00", 20.0, (20.0, 20.0), 20.0),
                MealSlot::new("Media mañana", "11:00", 10.0, (10.0, 10.0), 15.0),
                MealSlot::new("Comida", "14:00", 35.0, (35.0, 30.0), 30.0),
                MealSlot::new("Merienda", "17:30", 10.0, (10.0, 20.0), 15.0),
                MealSlot::new("Cena", "21:00", 25.0, (25.0, 20.0), 20.0),
            ],
        },
        MealTemplate {
            meals_per_day: 6,
            slots: vec![
                MealSlot::new("Desayuno", "08:00", 15.0, (15.0, 15.0), 15.0),
                MealSlot::new("Media mañana", "11:00", 10.0, (10.0, 10.0), 15.0),
                MealSlot::new("Comida", "14:00", 30.0, (30.0, 25.0), 25.0),
                MealSlot::new("Merienda", "17:30", 10.0, (10.0, 20.0), 15.0),
                MealSlot::new("Cena", "21:00", 25.0, (25.0, 20.0), 20.0),
                MealSlot::new("Recena", "23:00", 10.0, (10.0, 10.0), 10.0),
            ],
        },
    ]
}
