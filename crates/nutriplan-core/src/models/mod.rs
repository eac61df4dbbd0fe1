// ABOUTME: Core data models for the nutrition planner
// ABOUTME: Re-exports profile, activity, food, macro and plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain, serializable values flowing through the pipeline:
//!
//! - `UserProfile` and `WeeklyActivity`: calculation inputs
//! - `FoodRecord`: static reference rows; `FoodItem`: a planned portion
//! - `MacroTargets`: daily grams with derived calories
//! - `MealPlan`, `DayNutritionPlan`, `WeeklyNutritionPlan`: outputs
//!
//! Aggregates that must stay consistent (`MacroTargets::calories`,
//! `MealPlan` totals) keep private fields and recompute on construction,
//! edit and deserialization.

mod activity;
mod food;
mod nutrition;
mod plan;
mod profile;

pub use activity::{ActivitySession, ActivityType, DayActivity, WeeklyActivity, WEEK};
pub use food::{DietaryRestriction, FoodCategory, FoodItem, FoodOrigin, FoodRecord, ServingUnit};
pub use nutrition::{MacroGrams, MacroPercentages, MacroTargets, Macronutrient};
pub use plan::{DayEnergy, DayNutritionPlan, MealPlan, WeeklyNutritionPlan, WeeklySummary};
pub use profile::{Goal, Sex, UserProfile};
