// ABOUTME: Configuration error types for nutrition config validation
// ABOUTME: Defines error variants for invalid ranges, templates, and environment parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for nutrition config validation.

use nutriplan_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Meal template is malformed
    #[error("Invalid meal template: {0}")]
    InvalidTemplate(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
