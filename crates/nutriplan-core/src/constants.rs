// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy density, activity burn rates, and meal planning defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain. Tunable values used by the pipeline are
//! mirrored in the root crate's `NutritionConfig` defaults; the identities
//! here (kcal per gram) are never configurable.

/// Atwater energy factors
pub mod energy_density {
    /// Protein: 4 kcal per gram
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal per gram
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat: 9 kcal per gram
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Daily energy expenditure defaults
pub mod expenditure {
    /// Non-exercise daily living multiplier applied to BMR
    pub const SEDENTARY_FACTOR: f64 = 1.2;
    /// Strength training burn rate (kcal/min)
    pub const STRENGTH_KCAL_PER_MIN: f64 = 6.5;
    /// Swimming burn rate (kcal/min)
    pub const SWIMMING_KCAL_PER_MIN: f64 = 9.0;
    /// Running burn rate (kcal/min)
    pub const RUNNING_KCAL_PER_MIN: f64 = 10.0;
    /// Steps already covered by the sedentary factor
    pub const STEP_BASELINE: u32 = 5_000;
    /// Energy per step above the baseline (kcal)
    pub const KCAL_PER_EXTRA_STEP: f64 = 0.04;
}

/// Macro split defaults
pub mod macros {
    /// Carbohydrate floor in grams
    pub const MIN_CARBS_G: f64 = 50.0;
}

/// Meal planning defaults
pub mod meals {
    /// Smallest supported meals-per-day
    pub const MIN_MEALS_PER_DAY: u8 = 3;
    /// Largest supported meals-per-day
    pub const MAX_MEALS_PER_DAY: u8 = 6;
    /// Template used when the requested meal count is unsupported
    pub const FALLBACK_MEALS_PER_DAY: u8 = 5;
    /// Days in a weekly plan
    pub const DAYS_PER_WEEK: usize = 7;
}
