// ABOUTME: Core types and constants for the nutriplan nutrition planner
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! planning pipeline. It holds no calculation logic: the energy model, macro
//! splitter and meal allocator live in the root `nutriplan` crate and operate
//! on the types defined here.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy density and planning constants organized by domain
//! - **models**: Profiles, weekly activity, foods, meals and plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, activity, foods, plans)
pub mod models;
