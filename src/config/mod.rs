// ABOUTME: Nutrition configuration container, environment overrides and validation
// ABOUTME: Provides a lazily-initialized global configuration with default fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration Module
//!
//! `NutritionConfig` holds every tunable of the pipeline. It is plain data:
//! planners take it by value, tests build alternates with struct update
//! syntax, and `NutritionConfig::global()` caches one loaded from the
//! environment.
//!
//! ```bash
//! export NUTRIPLAN_STEP_BASELINE=6000
//! export NUTRIPLAN_SUBSTITUTION_TOLERANCE_KCAL=50
//! ```

/// Configuration error types
pub mod error;
/// Meal percentage templates
pub mod meal_templates;
/// Configuration sections
pub mod nutrition;

pub use error::ConfigError;
pub use meal_templates::{default_templates, MealSlot, MealTemplate};
pub use nutrition::{
    BmrConfig, CalorieAdjustmentConfig, EnergyConfig, GoalAdjustment, MacroCoefficients,
    MacroSplitConfig, MealAllocationConfig, SubstitutionConfig,
};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use nutriplan_core::constants::meals::{MAX_MEALS_PER_DAY, MIN_MEALS_PER_DAY};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Main nutrition configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Expenditure rates
    pub energy: EnergyConfig,
    /// Goal surplus/deficit table
    pub calorie_adjustments: CalorieAdjustmentConfig,
    /// Macro coefficients
    pub macros: MacroSplitConfig,
    /// Meal templates and greedy fill limits
    pub meal_allocation: MealAllocationConfig,
    /// Food substitution tolerances
    pub substitution: SubstitutionConfig,
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let energy = &self.energy;
        if energy.sedentary_factor < 1.0 {
            return Err(ConfigError::InvalidRange(
                "sedentary_factor must be at least 1.0".into(),
            ));
        }
        let rates = [
            energy.strength_kcal_per_min,
            energy.swimming_kcal_per_min,
            energy.running_kcal_per_min,
            energy.kcal_per_extra_step,
        ];
        if rates.iter().any(|rate| !rate.is_finite() || *rate < 0.0) {
            return Err(ConfigError::InvalidRange(
                "activity and step burn rates must be non-negative".into(),
            ));
        }

        for coefficients in [&self.macros.gain, &self.macros.maintain, &self.macros.lose] {
            let values = [
                coefficients.protein_training_g_per_kg,
                coefficients.protein_rest_g_per_kg,
                coefficients.fat_training_g_per_kg,
                coefficients.fat_rest_g_per_kg,
            ];
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(ConfigError::InvalidRange(
                    "macro coefficients must be non-negative".into(),
                ));
            }
        }
        if self.macros.min_carbs_g < 0.0 {
            return Err(ConfigError::InvalidRange(
                "min_carbs_g must be non-negative".into(),
            ));
        }

        let allocation = &self.meal_allocation;
        if allocation.protein_serving_cap <= 0.0 || allocation.carb_serving_cap <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "serving caps must be positive".into(),
            ));
        }
        if !(MIN_MEALS_PER_DAY..=MAX_MEALS_PER_DAY).contains(&allocation.fallback_meals_per_day) {
            return Err(ConfigError::InvalidRange(format!(
                "fallback_meals_per_day must be between {MIN_MEALS_PER_DAY} and {MAX_MEALS_PER_DAY}"
            )));
        }
        for template in &allocation.templates {
            template.validate()?;
        }
        if allocation.template_for(allocation.fallback_meals_per_day).is_none() {
            return Err(ConfigError::InvalidTemplate(format!(
                "no template for the fallback of {} meals",
                allocation.fallback_meals_per_day
            )));
        }

        let substitution = &self.substitution;
        if substitution.calorie_tolerance_kcal < 0.0 {
            return Err(ConfigError::InvalidRange(
                "calorie_tolerance_kcal must be non-negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&substitution.compensation_min_fraction)
            || substitution.compensation_max_servings <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "compensation bounds are out of range".into(),
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy model
        Self::apply_env_var(
            "NUTRIPLAN_SEDENTARY_FACTOR",
            &mut self.energy.sedentary_factor,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_STRENGTH_KCAL_PER_MIN",
            &mut self.energy.strength_kcal_per_min,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_SWIMMING_KCAL_PER_MIN",
            &mut self.energy.swimming_kcal_per_min,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_RUNNING_KCAL_PER_MIN",
            &mut self.energy.running_kcal_per_min,
        )?;
        Self::apply_env_var("NUTRIPLAN_STEP_BASELINE", &mut self.energy.step_baseline)?;
        Self::apply_env_var(
            "NUTRIPLAN_KCAL_PER_EXTRA_STEP",
            &mut self.energy.kcal_per_extra_step,
        )?;

        // Macro split
        Self::apply_env_var("NUTRIPLAN_MIN_CARBS_G", &mut self.macros.min_carbs_g)?;

        // Meal allocation
        Self::apply_env_var(
            "NUTRIPLAN_PROTEIN_SERVING_CAP",
            &mut self.meal_allocation.protein_serving_cap,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_CARB_SERVING_CAP",
            &mut self.meal_allocation.carb_serving_cap,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_FAT_THRESHOLD_G",
            &mut self.meal_allocation.fat_threshold_g,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_FALLBACK_MEALS_PER_DAY",
            &mut self.meal_allocation.fallback_meals_per_day,
        )?;

        // Substitution
        Self::apply_env_var(
            "NUTRIPLAN_SUBSTITUTION_TOLERANCE_KCAL",
            &mut self.substitution.calorie_tolerance_kcal,
        )?;

        Ok(self)
    }
}
