// ABOUTME: Goal-driven calorie adjustment and macronutrient split
// ABOUTME: Protein and fat scale with body weight, carbohydrate fills the remainder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Adjustment & Macro Splitter
//!
//! # Scientific References
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use nutriplan_core::constants::energy_density::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use nutriplan_core::models::{DayActivity, Goal, MacroTargets, UserProfile};

use crate::config::{CalorieAdjustmentConfig, MacroSplitConfig};

/// Signed calorie delta for a goal and a day's training volume
///
/// | goal | rest | 1 | 2 | 3+ |
/// |---|---|---|---|---|
/// | gain | +250 | +350 | +400 | +450 |
/// | lose | -400 | -350 | -250 | -250 |
/// | maintain | 0 | 0 | 0 | 0 |
#[must_use]
pub fn calorie_adjustment(goal: Goal, day: &DayActivity, config: &CalorieAdjustmentConfig) -> f64 {
    config
        .for_goal(goal)
        .for_activity_count(day.training_activity_count())
}

/// Split target calories into macro grams
///
/// Protein and fat are `round(weight x coefficient)`. Carbohydrate takes the
/// remaining calories, floored at `min_carbs_g`. The returned calories are
/// recomputed from the grams, so they can exceed `target_calories` when the
/// floor applies.
#[must_use]
pub fn calculate_macros(
    profile: &UserProfile,
    target_calories: f64,
    is_rest_day: bool,
    config: &MacroSplitConfig,
) -> MacroTargets {
    let coefficients = config.for_goal(profile.goal);

    let protein_g = (profile.weight_kg * coefficients.protein_g_per_kg(is_rest_day)).round();
    let fat_g = (profile.weight_kg * coefficients.fat_g_per_kg(is_rest_day)).round();

    let remaining = fat_g.mul_add(
        -KCAL_PER_G_FAT,
        protein_g.mul_add(-KCAL_PER_G_PROTEIN, target_calories),
    );
    let carbs_g = (remaining / KCAL_PER_G_CARBS).round().max(config.min_carbs_g);

    MacroTargets::new(protein_g, carbs_g, fat_g)
}
