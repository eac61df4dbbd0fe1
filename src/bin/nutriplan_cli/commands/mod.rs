// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides access to plan generation and food table commands

pub mod foods;
pub mod plan;
