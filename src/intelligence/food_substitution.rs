// ABOUTME: Swaps one food in a generated meal for another, matching its primary macro
// ABOUTME: Resizes a carbohydrate food in the same meal when the calorie shift is too large
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Substitution
//!
//! A local repair on a single meal. The replacement is sized to supply the
//! same grams of the category's primary macro as the food it replaces
//! (protein for protein and dairy, carbs for carb, fruit and vegetable, fat
//! for fat). The rest of the day is left untouched.

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{
    FoodCategory, FoodItem, FoodRecord, MealPlan, ServingUnit, WeeklyNutritionPlan,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::config::SubstitutionConfig;

/// Position of a food inside a weekly plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodLocation {
    /// Day index (0 = Monday)
    pub day: usize,
    /// Meal index within the day
    pub meal: usize,
    /// Food index within the meal
    pub food: usize,
}

/// Result of a substitution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubstitutionOutcome {
    /// The patched meal
    pub meal: MealPlan,
    /// The food that was taken out
    pub replaced: FoodItem,
    /// Meal calorie change after any compensation (kcal)
    pub calorie_shift: f64,
    /// Name of the carbohydrate food resized to compensate, if any
    pub compensated: Option<String>,
}

impl SubstitutionOutcome {
    /// Foods of the patched meal
    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        self.meal.foods()
    }
}

/// Replace the food at `food_index` in a copy of `meal`
///
/// `category` is the category of the food being replaced and selects the
/// macro to match. When that gives no portion (either food lacks the macro,
/// or the amount rounds to zero) the quantity matches calories instead.
///
/// # Errors
///
/// Returns `ResourceNotFound` if `food_index` is out of range
pub fn substitute_food(
    meal: &MealPlan,
    food_index: usize,
    replacement: &FoodRecord,
    category: FoodCategory,
    catalog: &FoodCatalog,
    config: &SubstitutionConfig,
) -> AppResult<SubstitutionOutcome> {
    let original = meal.foods().get(food_index).ok_or_else(|| {
        AppError::not_found(format!("Food {food_index} in meal '{}'", meal.name()))
    })?;

    let nutrient = category.primary_macro();
    let target_grams = original.grams().get(nutrient);
    let quantity = Some(target_grams)
        .filter(|grams| *grams > 0.0)
        .and_then(|grams| replacement.quantity_for(nutrient, grams))
        .filter(|quantity| *quantity > 0.0)
        .or_else(|| replacement.quantity_for_calories(original.calories))
        .filter(|quantity| *quantity > 0.0)
        .unwrap_or(replacement.serving_size);

    let mut patched = meal.clone();
    let replaced = patched.replace_food(food_index, replacement.portion(quantity))?;

    let shift = patched.calories() - meal.calories();
    let compensated = if shift.abs() > config.calorie_tolerance_kcal {
        compensate_with_carbs(&mut patched, food_index, shift, catalog, config)?
    } else {
        None
    };

    let calorie_shift = patched.calories() - meal.calories();
    debug!(
        meal = meal.name(),
        replaced = %replaced.name,
        replacement = %replacement.name,
        quantity,
        calorie_shift,
        compensated = compensated.as_deref().unwrap_or("none"),
        "Substituted food"
    );

    Ok(SubstitutionOutcome {
        meal: patched,
        replaced,
        calorie_shift,
        compensated,
    })
}

/// Patch one meal of a plan in place
///
/// Nothing else in the plan is recomputed.
///
/// # Errors
///
/// Returns `ResourceNotFound` if any index in `location` is out of range
pub fn substitute_in_plan(
    plan: &mut WeeklyNutritionPlan,
    location: FoodLocation,
    replacement: &FoodRecord,
    category: FoodCategory,
    catalog: &FoodCatalog,
    config: &SubstitutionConfig,
) -> AppResult<SubstitutionOutcome> {
    let meal = plan.meal_mut(location.day, location.meal)?;
    let outcome = substitute_food(meal, location.food, replacement, category, catalog, config)?;
    meal.clone_from(&outcome.meal);
    Ok(outcome)
}

/// Resize another carbohydrate food to offset `shift` kcal
fn compensate_with_carbs(
    meal: &mut MealPlan,
    skip_index: usize,
    shift: f64,
    catalog: &FoodCatalog,
    config: &SubstitutionConfig,
) -> AppResult<Option<String>> {
    let candidate = meal
        .foods()
        .iter()
        .enumerate()
        .filter(|(index, item)| *index != skip_index && item.category == FoodCategory::Carb)
        .find_map(|(index, item)| catalog.find(&item.name).map(|record| (index, item, record)));

    let Some((index, item, record)) = candidate else {
        return Ok(None);
    };

    let kcal_per_quantity = record.calories_per_quantity();
    if kcal_per_quantity <= 0.0 {
        return Ok(None);
    }

    let lower = item.quantity * config.compensation_min_fraction;
    let upper = record.serving_size * config.compensation_max_servings;
    let adjusted = (item.quantity - (shift / kcal_per_quantity).round())
        .max(lower)
        .min(upper);
    let adjusted = match record.unit {
        ServingUnit::Grams => adjusted.round(),
        ServingUnit::Units => adjusted.round().max(1.0),
    };

    if (adjusted - item.quantity).abs() < f64::EPSILON {
        return Ok(None);
    }

    let name = record.name.clone();
    meal.replace_food(index, record.portion(adjusted))?;
    Ok(Some(name))
}
