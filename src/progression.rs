//! Progression over completed sessions
//!
//! The next scheduled day is a pure round-robin: every finished session
//! advances the cursor by one, whichever day (or freestyle) it actually was.
//! Manual day selection bypasses the cursor for a single session and leaves
//! it untouched, since the cursor depends only on history length.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::plan::{Plan, TrainingDay};

/// Subjective intensity feedback collected when a session is finished
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Light,
    JustRight,
    Hard,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Light => "light",
            Rating::JustRight => "just right",
            Rating::Hard => "hard",
        }
    }

    /// Storage key, stable across releases
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Light => "light",
            Rating::JustRight => "just-right",
            Rating::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Rating> {
        match s {
            "light" => Some(Rating::Light),
            "just-right" => Some(Rating::JustRight),
            "hard" => Some(Rating::Hard),
            _ => None,
        }
    }
}

/// One finished session. `id` is assigned by storage on insert;
/// `day_index` is `None` for freestyle sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletedSession {
    pub id: Option<i64>,
    pub date: DateTime<Utc>,
    pub day_index: Option<u32>,
    pub rating: Rating,
}

/// 0-based cursor into `plan.days`. `None` only for a plan with no days.
pub fn next_day_index(plan: &Plan, history: &[CompletedSession]) -> Option<u32> {
    let days = plan.days.len();
    if days == 0 {
        return None;
    }
    Some((history.len() % days) as u32)
}

/// The day the cursor points at.
pub fn next_day<'a>(plan: &'a Plan, history: &[CompletedSession]) -> Option<&'a TrainingDay> {
    let cursor = next_day_index(plan, history)?;
    plan.days.get(cursor as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingCounts {
    pub light: usize,
    pub just_right: usize,
    pub hard: usize,
}

/// Tally of ratings across history, for summary display.
pub fn rating_counts(history: &[CompletedSession]) -> RatingCounts {
    let mut counts = RatingCounts::default();
    for record in history {
        match record.rating {
            Rating::Light => counts.light += 1,
            Rating::JustRight => counts.just_right += 1,
            Rating::Hard => counts.hard += 1,
        }
    }
    counts
}
