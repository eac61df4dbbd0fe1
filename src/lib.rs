// ABOUTME: Main library entry point for the nutriplan weekly nutrition planner
// ABOUTME: Energy model, macro split, meal allocation, substitution, config and loaders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Turns a user profile and a week of training into a seven-day nutrition
//! plan: energy expenditure per day, goal-adjusted calorie targets, macro
//! grams, and meals filled with foods from a reference table.
//!
//! ## Architecture
//!
//! - **models / errors / constants**: re-exported from `nutriplan-core`
//! - **config**: calibration tables with environment overrides
//! - **catalog**: injected, immutable food table
//! - **intelligence**: the calculation stages and the planner
//! - **request**: JSON request loading
//! - **logging**: tracing subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::intelligence::NutritionPlanner;
//! use nutriplan::models::{Goal, Sex, UserProfile, WeeklyActivity};
//! use nutriplan::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let profile = UserProfile::new(Sex::Female, 62.0, 168.0, 31, Goal::Lose).with_steps(9000);
//!     let planner = NutritionPlanner::with_defaults();
//!     let plan = planner.generate_weekly_plan_seeded(&profile, &WeeklyActivity::all_rest(), 7)?;
//!     println!("{} kcal this week", plan.summary.total_calories);
//!     Ok(())
//! }
//! ```

pub use nutriplan_core::{constants, errors, models};

/// Food reference table
pub mod catalog;

/// Pipeline configuration
pub mod config;

/// Calculation stages and planner
pub mod intelligence;

/// Logging configuration and structured logging
pub mod logging;

/// Plan request documents
pub mod request;
