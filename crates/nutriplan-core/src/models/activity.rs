// ABOUTME: Weekly activity plan models: activity types, sessions, days and weeks
// ABOUTME: Enforces rest-day exclusivity and exactly one entry per weekday
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::constants::meals::DAYS_PER_WEEK;
use crate::errors::{AppError, AppResult};

/// Weekdays in plan order
pub const WEEK: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Activity that can be scheduled on a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityType {
    /// Resistance training
    StrengthTraining,
    /// Swimming
    Swimming,
    /// Running
    Running,
    /// No training
    Rest,
}

impl ActivityType {
    /// Whether this is the rest marker rather than a real activity
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }

    /// Kebab-case label, as used in serialized plans
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StrengthTraining => "strength-training",
            Self::Swimming => "swimming",
            Self::Running => "running",
            Self::Rest => "rest",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One activity with its duration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivitySession {
    /// Activity type
    pub activity: ActivityType,
    /// Duration in minutes (ignored for rest)
    #[serde(default)]
    pub duration_minutes: u32,
}

impl ActivitySession {
    /// Create a session
    #[must_use]
    pub const fn new(activity: ActivityType, duration_minutes: u32) -> Self {
        Self {
            activity,
            duration_minutes,
        }
    }
}

#[derive(Deserialize)]
struct DayActivityRecord {
    day: Weekday,
    #[serde(default)]
    sessions: Vec<ActivitySession>,
}

/// Activities scheduled for one weekday
///
/// Rest, when present, is the only entry. A day may combine several real
/// activities, each at most once. A day with no sessions counts as rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "DayActivityRecord")]
pub struct DayActivity {
    day: Weekday,
    sessions: Vec<ActivitySession>,
}

impl DayActivity {
    /// Create a day, validating the rest and uniqueness rules
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when rest is mixed with training or an activity
    /// type appears more than once
    pub fn new(day: Weekday, sessions: Vec<ActivitySession>) -> AppResult<Self> {
        let has_rest = sessions.iter().any(|s| s.activity.is_rest());
        if has_rest && sessions.len() > 1 {
            return Err(AppError::invalid_input(format!(
                "{day}: rest cannot be combined with other activities"
            )));
        }

        let mut seen = HashSet::with_capacity(sessions.len());
        for session in &sessions {
            if !seen.insert(session.activity) {
                return Err(AppError::invalid_input(format!(
                    "{day}: {} is listed more than once",
                    session.activity
                )));
            }
        }

        Ok(Self { day, sessions })
    }

    /// A rest day
    #[must_use]
    pub fn rest(day: Weekday) -> Self {
        Self {
            day,
            sessions: vec![ActivitySession::new(ActivityType::Rest, 0)],
        }
    }

    /// A day with a single training activity
    ///
    /// Passing `ActivityType::Rest` yields a rest day.
    #[must_use]
    pub fn single(day: Weekday, activity: ActivityType, duration_minutes: u32) -> Self {
        Self {
            day,
            sessions: vec![ActivitySession::new(activity, duration_minutes)],
        }
    }

    /// Weekday label
    #[must_use]
    pub const fn day(&self) -> Weekday {
        self.day
    }

    /// All sessions as supplied, rest included
    #[must_use]
    pub fn sessions(&self) -> &[ActivitySession] {
        &self.sessions
    }

    /// Sessions that burn calories (rest excluded)
    pub fn training_sessions(&self) -> impl Iterator<Item = &ActivitySession> {
        self.sessions.iter().filter(|s| !s.activity.is_rest())
    }

    /// Number of distinct real activities on this day
    #[must_use]
    pub fn training_activity_count(&self) -> usize {
        self.training_sessions().count()
    }

    /// True when nothing but rest (or nothing at all) is scheduled
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.training_activity_count() == 0
    }

    /// True when two or more real activities share the day
    #[must_use]
    pub fn is_combined(&self) -> bool {
        self.training_activity_count() >= 2
    }

    /// Activity types in the order supplied
    #[must_use]
    pub fn activity_types(&self) -> Vec<ActivityType> {
        self.sessions.iter().map(|s| s.activity).collect()
    }
}

impl TryFrom<DayActivityRecord> for DayActivity {
    type Error = AppError;

    fn try_from(record: DayActivityRecord) -> Result<Self, Self::Error> {
        Self::new(record.day, record.sessions)
    }
}

/// Seven days of activity, one per weekday, ordered Monday to Sunday
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<DayActivity>", into = "Vec<DayActivity>")]
pub struct WeeklyActivity {
    days: Vec<DayActivity>,
}

impl WeeklyActivity {
    /// Build a week from exactly seven days with distinct weekdays
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the count is not seven or a weekday repeats
    pub fn new(mut days: Vec<DayActivity>) -> AppResult<Self> {
        if days.len() != DAYS_PER_WEEK {
            return Err(AppError::invalid_input(format!(
                "A weekly plan needs {DAYS_PER_WEEK} days, got {}",
                days.len()
            )));
        }

        let mut seen = HashSet::with_capacity(DAYS_PER_WEEK);
        for day in &days {
            if !seen.insert(day.day()) {
                return Err(AppError::invalid_input(format!(
                    "{} appears more than once in the weekly plan",
                    day.day()
                )));
            }
        }

        days.sort_by_key(|d| d.day().num_days_from_monday());
        Ok(Self { days })
    }

    /// Build a week by asking for each weekday's activities
    #[must_use]
    pub fn from_fn(mut day_for: impl FnMut(Weekday) -> DayActivity) -> Self {
        let days = WEEK
            .iter()
            .map(|&weekday| {
                let mut day = day_for(weekday);
                day.day = weekday;
                day
            })
            .collect();
        Self { days }
    }

    /// A week of rest
    #[must_use]
    pub fn all_rest() -> Self {
        Self::from_fn(DayActivity::rest)
    }

    /// Days in Monday..Sunday order
    #[must_use]
    pub fn days(&self) -> &[DayActivity] {
        &self.days
    }

    /// Look up a weekday
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&DayActivity> {
        self.days.iter().find(|d| d.day() == weekday)
    }
}

impl TryFrom<Vec<DayActivity>> for WeeklyActivity {
    type Error = AppError;

    fn try_from(days: Vec<DayActivity>) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<WeeklyActivity> for Vec<DayActivity> {
    fn from(week: WeeklyActivity) -> Self {
        week.days
    }
}
