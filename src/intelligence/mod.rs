// ABOUTME: Nutrition planning pipeline: energy model, macro split, meal allocation
// ABOUTME: Also hosts food substitution and the weekly planner that composes the stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous calculation stages. Every stage takes its calibration
//! from `crate::config` and randomness from the caller, so identical inputs
//! and seeds give identical plans.

/// BMR, activity and step burn, TDEE
pub mod energy_model;
/// Food swaps inside generated meals
pub mod food_substitution;
/// Goal adjustment and macro split
pub mod macro_splitter;
/// Meal templates and greedy food fill
pub mod meal_allocator;
/// Weekly planner composing the stages
pub mod planner;

pub use energy_model::{
    calculate_activity_calories, calculate_bmr, calculate_day_tdee, calculate_steps_calories,
};
pub use food_substitution::{substitute_food, substitute_in_plan, FoodLocation, SubstitutionOutcome};
pub use macro_splitter::{calculate_macros, calorie_adjustment};
pub use meal_allocator::{generate_day_meals, generate_meal_foods, slot_target};
pub use planner::NutritionPlanner;
