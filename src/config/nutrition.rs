// ABOUTME: Nutrition pipeline configuration sections with calibrated defaults
// ABOUTME: BMR coefficients, energy rates, goal adjustments, macro coefficients, allocation, substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Pipeline Configuration
//!
//! Every number the pipeline uses lives here so alternate calibrations can be
//! injected in tests or overridden through the environment.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use nutriplan_core::constants::{expenditure, macros, meals};
use nutriplan_core::models::{ActivityType, Goal};
use serde::{Deserialize, Serialize};

use super::meal_templates::{default_templates, MealTemplate};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Daily energy expenditure configuration
///
/// Exercise and steps are added on top of a sedentary BMR multiple instead
/// of using a single activity-level factor, so step movement is not counted
/// twice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyConfig {
    /// Multiplier applied to BMR for non-exercise daily living (1.2)
    pub sedentary_factor: f64,
    /// Strength training burn rate (kcal/min)
    pub strength_kcal_per_min: f64,
    /// Swimming burn rate (kcal/min)
    pub swimming_kcal_per_min: f64,
    /// Running burn rate (kcal/min)
    pub running_kcal_per_min: f64,
    /// Steps already covered by the sedentary factor
    pub step_baseline: u32,
    /// Energy per step above the baseline (kcal)
    pub kcal_per_extra_step: f64,
}

impl EnergyConfig {
    /// Burn rate for an activity; rest burns nothing
    #[must_use]
    pub const fn kcal_per_minute(&self, activity: ActivityType) -> f64 {
        match activity {
            ActivityType::StrengthTraining => self.strength_kcal_per_min,
            ActivityType::Swimming => self.swimming_kcal_per_min,
            ActivityType::Running => self.running_kcal_per_min,
            ActivityType::Rest => 0.0,
        }
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            sedentary_factor: expenditure::SEDENTARY_FACTOR,
            strength_kcal_per_min: expenditure::STRENGTH_KCAL_PER_MIN,
            swimming_kcal_per_min: expenditure::SWIMMING_KCAL_PER_MIN,
            running_kcal_per_min: expenditure::RUNNING_KCAL_PER_MIN,
            step_baseline: expenditure::STEP_BASELINE,
            kcal_per_extra_step: expenditure::KCAL_PER_EXTRA_STEP,
        }
    }
}

/// Calorie adjustment tiers for one goal (kcal, signed)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalAdjustment {
    /// Day without training
    pub rest_day: f64,
    /// Day with one activity
    pub single_activity: f64,
    /// Day with two activities
    pub two_activities: f64,
    /// Day with three or more activities
    pub three_or_more: f64,
}

impl GoalAdjustment {
    /// Adjustment for a number of real activities
    #[must_use]
    pub const fn for_activity_count(&self, count: usize) -> f64 {
        match count {
            0 => self.rest_day,
            1 => self.single_activity,
            2 => self.two_activities,
            _ => self.three_or_more,
        }
    }
}

/// Surplus/deficit table by goal
///
/// More training volume shrinks a cutting deficit to protect performance,
/// and widens a bulking surplus less aggressively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieAdjustmentConfig {
    /// Muscle gain
    pub gain: GoalAdjustment,
    /// Maintenance
    pub maintain: GoalAdjustment,
    /// Fat loss
    pub lose: GoalAdjustment,
}

impl CalorieAdjustmentConfig {
    /// Tiers for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> &GoalAdjustment {
        match goal {
            Goal::Gain => &self.gain,
            Goal::Maintain => &self.maintain,
            Goal::Lose => &self.lose,
        }
    }
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            gain: GoalAdjustment {
                rest_day: 250.0,
                single_activity: 350.0,
                two_activities: 400.0,
                three_or_more: 450.0,
            },
            maintain: GoalAdjustment {
                rest_day: 0.0,
                single_activity: 0.0,
                two_activities: 0.0,
                three_or_more: 0.0,
            },
            lose: GoalAdjustment {
                rest_day: -400.0,
                single_activity: -350.0,
                two_activities: -250.0,
                three_or_more: -250.0,
            },
        }
    }
}

/// Per-kilogram protein and fat coefficients for one goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroCoefficients {
    /// Protein on training days (g/kg)
    pub protein_training_g_per_kg: f64,
    /// Protein on rest days (g/kg)
    pub protein_rest_g_per_kg: f64,
    /// Fat on training days (g/kg)
    pub fat_training_g_per_kg: f64,
    /// Fat on rest days (g/kg)
    pub fat_rest_g_per_kg: f64,
}

impl MacroCoefficients {
    /// Protein coefficient for a day type
    #[must_use]
    pub const fn protein_g_per_kg(&self, is_rest_day: bool) -> f64 {
        if is_rest_day {
            self.protein_rest_g_per_kg
        } else {
            self.protein_training_g_per_kg
        }
    }

    /// Fat coefficient for a day type
    #[must_use]
    pub const fn fat_g_per_kg(&self, is_rest_day: bool) -> f64 {
        if is_rest_day {
            self.fat_rest_g_per_kg
        } else {
            self.fat_training_g_per_kg
        }
    }
}

/// Macro split configuration
///
/// Protein and fat scale with body weight; carbohydrate takes the remaining
/// calories with a floor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroSplitConfig {
    /// Muscle gain coefficients
    pub gain: MacroCoefficients,
    /// Maintenance coefficients
    pub maintain: MacroCoefficients,
    /// Fat loss coefficients
    pub lose: MacroCoefficients,
    /// Carbohydrate floor (grams)
    pub min_carbs_g: f64,
}

impl MacroSplitConfig {
    /// Coefficients for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> &MacroCoefficients {
        match goal {
            Goal::Gain => &self.gain,
            Goal::Maintain => &self.maintain,
            Goal::Lose => &self.lose,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            gain: MacroCoefficients {
                protein_training_g_per_kg: 2.0,
                protein_rest_g_per_kg: 1.9,
                fat_training_g_per_kg: 1.0,
                fat_rest_g_per_kg: 1.1,
            },
            maintain: MacroCoefficients {
                protein_training_g_per_kg: 2.0,
                protein_rest_g_per_kg: 1.9,
                fat_training_g_per_kg: 0.9,
                fat_rest_g_per_kg: 1.0,
            },
            // Higher protein preserves lean mass in a deficit
            lose: MacroCoefficients {
                protein_training_g_per_kg: 2.2,
                protein_rest_g_per_kg: 2.2,
                fat_training_g_per_kg: 0.7,
                fat_rest_g_per_kg: 0.8,
            },
            min_carbs_g: macros::MIN_CARBS_G,
        }
    }
}

/// Meal allocation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealAllocationConfig {
    /// Protein food quantity cap, in typical servings
    pub protein_serving_cap: f64,
    /// Carb food quantity cap, in typical servings
    pub carb_serving_cap: f64,
    /// Remaining fat (grams) above which a fat food is added
    pub fat_threshold_g: f64,
    /// Template used for unsupported meal counts
    pub fallback_meals_per_day: u8,
    /// Percentage templates per meal count
    pub templates: Vec<MealTemplate>,
}

impl MealAllocationConfig {
    /// Template for a meal count, falling back to `fallback_meals_per_day`
    ///
    /// Returns the template and whether the fallback was used.
    #[must_use]
    pub fn template_for(&self, meals_per_day: u8) -> Option<(&MealTemplate, bool)> {
        self.find_template(meals_per_day)
            .map(|template| (template, false))
            .or_else(|| {
                self.find_template(self.fallback_meals_per_day)
                    .map(|template| (template, true))
            })
    }

    fn find_template(&self, meals_per_day: u8) -> Option<&MealTemplate> {
        self.templates
            .iter()
            .find(|t| t.meals_per_day == meals_per_day)
    }
}

impl Default for MealAllocationConfig {
    fn default() -> Self {
        Self {
            protein_serving_cap: 2.0,
            carb_serving_cap: 2.5,
            fat_threshold_g: 3.0,
            fallback_meals_per_day: meals::FALLBACK_MEALS_PER_DAY,
            templates: default_templates(),
        }
    }
}

/// Food substitution configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubstitutionConfig {
    /// Meal calorie shift (kcal) tolerated before compensating
    pub calorie_tolerance_kcal: f64,
    /// Smallest compensated carb quantity, as a fraction of its current quantity
    pub compensation_min_fraction: f64,
    /// Largest compensated carb quantity, in typical servings
    pub compensation_max_servings: f64,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            calorie_tolerance_kcal: 30.0,
            compensation_min_fraction: 0.5,
            compensation_max_servings: 2.5,
        }
    }
}
