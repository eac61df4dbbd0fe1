// ABOUTME: Distributes daily macro targets across meals and fills each meal with foods
// ABOUTME: Percentage templates per meal count plus a greedy single-pass food fill
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Allocator
//!
//! Each meal gets a fixed share of the day's grams from its template slot.
//! The meal is then filled greedily, one food per category:
//!
//! 1. a protein food sized to the protein sub-target (capped in servings)
//! 2. a carb food sized to what is left of the carb sub-target
//! 3. a vegetable at its typical serving, not fitted to any macro
//! 4. a fat food at its typical serving when enough fat budget remains
//!
//! Foods that don't fit are skipped silently, so a meal may come out short.

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{
    FoodCategory, FoodItem, FoodRecord, MacroGrams, MacroTargets, Macronutrient, MealPlan,
    ServingUnit,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::{MealAllocationConfig, MealSlot};

/// Build the meals for one day
///
/// `foods` must already be filtered for the profile's allergies and
/// restrictions. Unsupported meal counts use the fallback template.
///
/// # Errors
///
/// Returns `ConfigInvalid` if neither the requested nor the fallback
/// template is configured
pub fn generate_day_meals<R: Rng + ?Sized>(
    macros: &MacroTargets,
    meals_per_day: u8,
    is_training_day: bool,
    foods: &[&FoodRecord],
    config: &MealAllocationConfig,
    rng: &mut R,
) -> AppResult<Vec<MealPlan>> {
    let (template, used_fallback) = config.template_for(meals_per_day).ok_or_else(|| {
        AppError::config(format!(
            "No meal template for {meals_per_day} or {} meals per day",
            config.fallback_meals_per_day
        ))
    })?;

    if used_fallback {
        warn!(
            requested = meals_per_day,
            fallback = template.meals_per_day,
            "Unsupported meals per day, using fallback template"
        );
    }

    let meals = template
        .slots
        .iter()
        .map(|slot| {
            let target = slot_target(macros, slot, is_training_day);
            let items = generate_meal_foods(&target, foods, config, rng);
            let meal = MealPlan::new(slot.name.clone(), slot.time.clone(), items);
            debug!(
                meal = meal.name(),
                time = meal.time(),
                target_kcal = target.calories().round(),
                planned_kcal = meal.calories(),
                foods = meal.foods().len(),
                "Filled meal"
            );
            meal
        })
        .collect();

    Ok(meals)
}

/// Grams a template slot takes from the day
#[must_use]
pub fn slot_target(macros: &MacroTargets, slot: &MealSlot, is_training_day: bool) -> MacroGrams {
    MacroGrams::new(
        macros.protein_g() * slot.protein_pct / 100.0,
        macros.carbs_g() * slot.carbs_pct(is_training_day) / 100.0,
        macros.fat_g() * slot.fat_pct / 100.0,
    )
}

/// Greedy single-pass fill of one meal
///
/// Returns foods in serving order: protein, carb, vegetable, fat.
pub fn generate_meal_foods<R: Rng + ?Sized>(
    target: &MacroGrams,
    foods: &[&FoodRecord],
    config: &MealAllocationConfig,
    rng: &mut R,
) -> Vec<FoodItem> {
    let mut remaining = *target;
    let mut items = Vec::with_capacity(4);

    if remaining.protein_g > 0.0 {
        let protein = pick(foods, FoodCategory::Protein, rng).and_then(|food| {
            sized_portion(
                food,
                Macronutrient::Protein,
                remaining.protein_g,
                config.protein_serving_cap,
            )
        });
        if let Some(item) = protein {
            remaining = remaining - item.grams();
            items.push(item);
        }
    }

    if remaining.carbs_g > 0.0 {
        let carb = pick(foods, FoodCategory::Carb, rng).and_then(|food| {
            sized_portion(
                food,
                Macronutrient::Carbs,
                remaining.carbs_g,
                config.carb_serving_cap,
            )
        });
        if let Some(item) = carb {
            remaining = remaining - item.grams();
            items.push(item);
        }
    }

    if let Some(item) = pick(foods, FoodCategory::Vegetable, rng).map(FoodRecord::serving) {
        remaining = remaining - item.grams();
        items.push(item);
    }

    if remaining.fat_g > config.fat_threshold_g {
        items.extend(pick(foods, FoodCategory::Fat, rng).map(FoodRecord::serving));
    }

    items
}

fn pick<'a, R: Rng + ?Sized>(
    foods: &[&'a FoodRecord],
    category: FoodCategory,
    rng: &mut R,
) -> Option<&'a FoodRecord> {
    let candidates: Vec<&FoodRecord> = foods
        .iter()
        .copied()
        .filter(|f| f.category == category)
        .collect();
    candidates.choose(rng).copied()
}

/// Portion supplying `grams` of a macro, capped at `max_servings`
fn sized_portion(
    food: &FoodRecord,
    nutrient: Macronutrient,
    grams: f64,
    max_servings: f64,
) -> Option<FoodItem> {
    let quantity = food.quantity_for(nutrient, grams)?;
    let quantity = quantity.min(serving_cap(food, max_servings));
    (quantity > 0.0).then(|| food.portion(quantity))
}

fn serving_cap(food: &FoodRecord, max_servings: f64) -> f64 {
    let cap = food.serving_size * max_servings;
    match food.unit {
        ServingUnit::Grams => cap.round(),
        ServingUnit::Units => cap.floor().max(1.0),
    }
}
