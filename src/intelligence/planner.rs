// ABOUTME: Weekly nutrition planner composing the energy, macro and meal stages
// ABOUTME: Holds the injected configuration and food catalog; randomness is supplied per call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{
    DayActivity, DayEnergy, DayNutritionPlan, FoodCategory, FoodRecord, MealPlan, UserProfile,
    WeeklyActivity, WeeklyNutritionPlan,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

use super::energy_model::{
    calculate_activity_calories, calculate_bmr, calculate_day_tdee, calculate_steps_calories,
};
use super::food_substitution::{self, FoodLocation, SubstitutionOutcome};
use super::macro_splitter::{calculate_macros, calorie_adjustment};
use super::meal_allocator::generate_day_meals;
use crate::catalog::FoodCatalog;
use crate::config::NutritionConfig;

/// Runs the pipeline for a profile and a week of activities
#[derive(Debug, Clone, Default)]
pub struct NutritionPlanner {
    config: NutritionConfig,
    catalog: FoodCatalog,
}

impl NutritionPlanner {
    /// Create a planner with explicit configuration and food table
    #[must_use]
    pub const fn new(config: NutritionConfig, catalog: FoodCatalog) -> Self {
        Self { config, catalog }
    }

    /// Global configuration with the built-in food table
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(NutritionConfig::global().clone(), FoodCatalog::standard())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Food table in use
    #[must_use]
    pub const fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Energy figures for one day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for invalid biometrics
    pub fn day_energy(&self, profile: &UserProfile, day: &DayActivity) -> AppResult<DayEnergy> {
        let energy = &self.config.energy;
        let bmr = calculate_bmr(profile, &self.config.bmr)?;
        let activity_calories = calculate_activity_calories(day, energy);
        let steps_calories = calculate_steps_calories(profile.daily_steps, energy);
        let tdee = calculate_day_tdee(bmr, activity_calories, steps_calories, energy);
        let adjustment =
            calorie_adjustment(profile.goal, day, &self.config.calorie_adjustments);

        Ok(DayEnergy {
            bmr,
            activity_calories,
            steps_calories,
            tdee,
            adjustment,
            target_calories: tdee + adjustment,
        })
    }

    /// Plan one day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for invalid biometrics and `ConfigInvalid` when
    /// no usable meal template is configured
    pub fn generate_day_plan<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        day: &DayActivity,
        rng: &mut R,
    ) -> AppResult<DayNutritionPlan> {
        let foods = self.available_foods(profile);
        self.plan_day(profile, day, &foods, rng)
    }

    /// Plan a full week
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for invalid biometrics and `ConfigInvalid` when
    /// no usable meal template is configured
    #[instrument(skip_all, fields(goal = ?profile.goal, meals_per_day = profile.meals_per_day))]
    pub fn generate_weekly_plan<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        week: &WeeklyActivity,
        rng: &mut R,
    ) -> AppResult<WeeklyNutritionPlan> {
        profile.validate()?;
        let foods = self.available_foods(profile);

        let days = week
            .days()
            .iter()
            .map(|day| self.plan_day(profile, day, &foods, rng))
            .collect::<AppResult<Vec<_>>>()?;

        let plan = WeeklyNutritionPlan::new(days);
        info!(
            plan_id = %plan.id,
            average_tdee = plan.summary.average_tdee.round(),
            total_calories = plan.summary.total_calories.round(),
            "Generated weekly nutrition plan"
        );
        Ok(plan)
    }

    /// Plan a full week with a deterministic `ChaCha8` stream
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate_weekly_plan`]
    pub fn generate_weekly_plan_seeded(
        &self,
        profile: &UserProfile,
        week: &WeeklyActivity,
        seed: u64,
    ) -> AppResult<WeeklyNutritionPlan> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate_weekly_plan(profile, week, &mut rng)
    }

    /// Swap a food inside a meal using this planner's table and tolerances
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `food_index` is out of range
    pub fn substitute_food(
        &self,
        meal: &MealPlan,
        food_index: usize,
        replacement: &FoodRecord,
        category: FoodCategory,
    ) -> AppResult<SubstitutionOutcome> {
        food_substitution::substitute_food(
            meal,
            food_index,
            replacement,
            category,
            &self.catalog,
            &self.config.substitution,
        )
    }

    /// Swap a food inside a plan in place
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if any index in `location` is out of range
    pub fn substitute_in_plan(
        &self,
        plan: &mut WeeklyNutritionPlan,
        location: FoodLocation,
        replacement: &FoodRecord,
        category: FoodCategory,
    ) -> AppResult<SubstitutionOutcome> {
        food_substitution::substitute_in_plan(
            plan,
            location,
            replacement,
            category,
            &self.catalog,
            &self.config.substitution,
        )
    }

    fn available_foods(&self, profile: &UserProfile) -> Vec<&FoodRecord> {
        let foods = self
            .catalog
            .available(&profile.normalized_allergies(), &profile.dietary_restrictions);
        for category in [
            FoodCategory::Protein,
            FoodCategory::Carb,
            FoodCategory::Vegetable,
            FoodCategory::Fat,
        ] {
            if !foods.iter().any(|f| f.category == category) {
                warn!(%category, "No foods of this category left after allergy and diet filtering");
            }
        }
        foods
    }

    fn plan_day<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        day: &DayActivity,
        foods: &[&FoodRecord],
        rng: &mut R,
    ) -> AppResult<DayNutritionPlan> {
        let energy = self.day_energy(profile, day)?;
        let is_rest_day = day.is_rest_day();
        let macros = calculate_macros(
            profile,
            energy.target_calories,
            is_rest_day,
            &self.config.macros,
        );
        let meals = generate_day_meals(
            &macros,
            profile.meals_per_day,
            !is_rest_day,
            foods,
            &self.config.meal_allocation,
            rng,
        )?;

        let plan = DayNutritionPlan {
            day: day.day(),
            activities: day.sessions().to_vec(),
            is_training_day: !is_rest_day,
            energy,
            macros,
            macro_percentages: macros.percentages(),
            meals,
        };
        debug!(
            day = %plan.day,
            tdee = plan.energy.tdee,
            target = plan.energy.target_calories,
            planned = plan.planned_calories(),
            "Planned day"
        );
        Ok(plan)
    }
}
