// ABOUTME: JSON plan request document: profile, weekly activities and optional seed
// ABOUTME: Loaded from a string or a file and validated before planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{UserProfile, WeeklyActivity};
use serde::{Deserialize, Serialize};

/// Input document for one plan generation
///
/// ```json
/// {
///   "profile": {"sex": "male", "weight_kg": 80, "height_cm": 180, "age": 25,
///               "daily_steps": 8000, "goal": "maintain"},
///   "week": [{"day": "Mon", "sessions": [{"activity": "strength-training", "duration_minutes": 60}]}, ...],
///   "seed": 42
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    /// Who the plan is for
    pub profile: UserProfile,
    /// Seven days of activities
    pub week: WeeklyActivity,
    /// Seed for reproducible food picks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl PlanRequest {
    /// Parse and validate a request
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed JSON or an invalid week layout,
    /// and `InvalidInput` for invalid biometrics
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let request: Self = serde_json::from_str(json)?;
        request.profile.validate()?;
        Ok(request)
    }

    /// Read, parse and validate a request file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file can't be read, otherwise the same
    /// errors as [`Self::from_json_str`]
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read plan request {}", path.display()))
                .with_source(e)
        })?;
        Self::from_json_str(&contents)
    }
}
