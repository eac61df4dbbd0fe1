// ABOUTME: Generated plan models: meals, daily plans and the weekly plan with rollups
// ABOUTME: Meal totals are always recomputed from their foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::activity::ActivitySession;
use super::food::FoodItem;
use super::nutrition::{MacroPercentages, MacroTargets};
use crate::errors::{AppError, AppResult};

#[derive(Deserialize)]
struct MealPlanRecord {
    name: String,
    time: String,
    #[serde(default)]
    foods: Vec<FoodItem>,
}

/// One meal with its foods
///
/// The aggregate calories and macros are the exact sum of `foods` and are
/// recomputed on every edit and on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "MealPlanRecord")]
pub struct MealPlan {
    name: String,
    time: String,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    foods: Vec<FoodItem>,
}

impl MealPlan {
    /// Create a meal from its foods
    #[must_use]
    pub fn new(name: impl Into<String>, time: impl Into<String>, foods: Vec<FoodItem>) -> Self {
        let mut meal = Self {
            name: name.into(),
            time: time.into(),
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            foods,
        };
        meal.recompute_totals();
        meal
    }

    fn recompute_totals(&mut self) {
        self.calories = self.foods.iter().map(|f| f.calories).sum();
        self.protein_g = self.foods.iter().map(|f| f.protein_g).sum();
        self.carbs_g = self.foods.iter().map(|f| f.carbs_g).sum();
        self.fat_g = self.foods.iter().map(|f| f.fat_g).sum();
    }

    /// Meal name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time-of-day label
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Total energy (kcal)
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Total protein (grams)
    #[must_use]
    pub const fn protein_g(&self) -> f64 {
        self.protein_g
    }

    /// Total carbohydrates (grams)
    #[must_use]
    pub const fn carbs_g(&self) -> f64 {
        self.carbs_g
    }

    /// Total fat (grams)
    #[must_use]
    pub const fn fat_g(&self) -> f64 {
        self.fat_g
    }

    /// Foods in serving order
    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Replace the food at `index`, returning the previous item
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `index` is out of range
    pub fn replace_food(&mut self, index: usize, item: FoodItem) -> AppResult<FoodItem> {
        let slot = self.foods.get_mut(index).ok_or_else(|| {
            AppError::not_found(format!("Food {index} in meal '{}'", self.name))
        })?;
        let previous = std::mem::replace(slot, item);
        self.recompute_totals();
        Ok(previous)
    }
}

impl From<MealPlanRecord> for MealPlan {
    fn from(record: MealPlanRecord) -> Self {
        Self::new(record.name, record.time, record.foods)
    }
}

/// Energy figures for one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayEnergy {
    /// Basal metabolic rate (kcal)
    pub bmr: f64,
    /// Calories burned by scheduled activities (kcal)
    pub activity_calories: f64,
    /// Calories from steps above the baseline (kcal)
    pub steps_calories: f64,
    /// Total daily energy expenditure (kcal)
    pub tdee: f64,
    /// Goal-driven surplus (+) or deficit (-) (kcal)
    pub adjustment: f64,
    /// TDEE plus adjustment (kcal)
    pub target_calories: f64,
}

/// Nutrition plan for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayNutritionPlan {
    /// Weekday
    pub day: Weekday,
    /// Sessions scheduled that day
    pub activities: Vec<ActivitySession>,
    /// Whether any real training is scheduled
    pub is_training_day: bool,
    /// Energy figures
    pub energy: DayEnergy,
    /// Macro targets
    pub macros: MacroTargets,
    /// Calorie share per macronutrient
    pub macro_percentages: MacroPercentages,
    /// Meals in serving order
    pub meals: Vec<MealPlan>,
}

impl DayNutritionPlan {
    /// Sum of meal calories; approximates `energy.target_calories`
    #[must_use]
    pub fn planned_calories(&self) -> f64 {
        self.meals.iter().map(MealPlan::calories).sum()
    }

    /// Number of real activities that day
    #[must_use]
    pub fn training_activity_count(&self) -> usize {
        self.activities
            .iter()
            .filter(|s| !s.activity.is_rest())
            .count()
    }

    /// Mutable access to one meal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `index` is out of range
    pub fn meal_mut(&mut self, index: usize) -> AppResult<&mut MealPlan> {
        let day = self.day;
        self.meals
            .get_mut(index)
            .ok_or_else(|| AppError::not_found(format!("Meal {index} on {day}")))
    }
}

/// Weekly rollups
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct WeeklySummary {
    /// Mean TDEE across the week (kcal)
    pub average_tdee: f64,
    /// Sum of daily target calories (kcal)
    pub total_calories: f64,
    /// Mean daily protein target (grams)
    pub average_protein_g: f64,
    /// Mean daily carbohydrate target (grams)
    pub average_carbs_g: f64,
    /// Mean daily fat target (grams)
    pub average_fat_g: f64,
    /// Days with exactly one activity
    pub training_days: u32,
    /// Days with two or more activities
    pub combined_days: u32,
    /// Days without training
    pub rest_days: u32,
}

impl WeeklySummary {
    /// Aggregate a set of daily plans
    #[must_use]
    pub fn from_days(days: &[DayNutritionPlan]) -> Self {
        if days.is_empty() {
            return Self::default();
        }
        let count = days.len() as f64;
        let mut summary = Self::default();
        for day in days {
            summary.average_tdee += day.energy.tdee;
            summary.total_calories += day.energy.target_calories;
            summary.average_protein_g += day.macros.protein_g();
            summary.average_carbs_g += day.macros.carbs_g();
            summary.average_fat_g += day.macros.fat_g();
            match day.training_activity_count() {
                0 => summary.rest_days += 1,
                1 => summary.training_days += 1,
                _ => summary.combined_days += 1,
            }
        }
        summary.average_tdee /= count;
        summary.average_protein_g /= count;
        summary.average_carbs_g /= count;
        summary.average_fat_g /= count;
        summary
    }
}

/// Seven-day nutrition plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyNutritionPlan {
    /// Plan identifier for the persistence collaborator
    pub id: Uuid,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Days in Monday..Sunday order
    pub days: Vec<DayNutritionPlan>,
    /// Rollups over `days`
    pub summary: WeeklySummary,
}

impl WeeklyNutritionPlan {
    /// Assemble a plan and compute its rollups
    #[must_use]
    pub fn new(days: Vec<DayNutritionPlan>) -> Self {
        let summary = WeeklySummary::from_days(&days);
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            days,
            summary,
        }
    }

    /// Look up a day
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&DayNutritionPlan> {
        self.days.iter().find(|d| d.day == weekday)
    }

    /// Mutable access to one meal of one day
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the day or meal index is out of range
    pub fn meal_mut(&mut self, day_index: usize, meal_index: usize) -> AppResult<&mut MealPlan> {
        self.days
            .get_mut(day_index)
            .ok_or_else(|| AppError::not_found(format!("Day {day_index}")))?
            .meal_mut(meal_index)
    }
}
