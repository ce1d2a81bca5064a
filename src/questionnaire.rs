//! Questionnaire answers - typed input for plan generation
//!
//! The host UI collects these however it likes; the engine only accepts the
//! closed set of values below and rejects anything out of range at the
//! boundary instead of clamping.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{Level, MuscleGroup, Venue};
use crate::error::PlanError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Maintain,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::FatLoss => "fat loss",
            Goal::MuscleGain => "muscle gain",
            Goal::Maintain => "maintain",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BodyType {
    Ecto,
    Meso,
    Endo,
}

impl BodyType {
    pub fn label(&self) -> &'static str {
        match self {
            BodyType::Ecto => "ectomorph",
            BodyType::Meso => "mesomorph",
            BodyType::Endo => "endomorph",
        }
    }
}

/// How fast the user wants to ramp up load. Carried through to storage for
/// future use; volume parameters currently key off goal and body type only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    Gentle,
    Steady,
    Aggressive,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Gentle => "gentle",
            Intensity::Steady => "steady",
            Intensity::Aggressive => "aggressive",
        }
    }
}

pub const MIN_DAYS_PER_WEEK: u32 = 2;
pub const MAX_DAYS_PER_WEEK: u32 = 6;
pub const MAX_PRIORITY_MUSCLES: usize = 4;

/// One generation request. An empty `injuries` list means "no injuries".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answers {
    pub venue: Venue,
    pub days_per_week: u32,
    pub session_minutes: u32,
    pub goal: Goal,
    pub intensity: Intensity,
    pub experience: Level,
    pub body_type: BodyType,
    pub priority_muscles: Vec<MuscleGroup>,
    pub has_home_equipment: bool,
    pub injuries: Vec<MuscleGroup>,
}

impl Answers {
    pub fn validate(&self) -> Result<(), PlanError> {
        if !(MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK).contains(&self.days_per_week) {
            return Err(PlanError::validation(format!(
                "days per week must be between {MIN_DAYS_PER_WEEK} and {MAX_DAYS_PER_WEEK}, got {}",
                self.days_per_week
            )));
        }
        if self.session_minutes == 0 {
            return Err(PlanError::validation("session duration must be positive"));
        }
        let distinct: HashSet<_> = self.priority_muscles.iter().collect();
        if distinct.len() > MAX_PRIORITY_MUSCLES {
            return Err(PlanError::validation(format!(
                "at most {MAX_PRIORITY_MUSCLES} priority muscle groups, got {}",
                distinct.len()
            )));
        }
        Ok(())
    }

    pub fn is_priority(&self, muscle: MuscleGroup) -> bool {
        self.priority_muscles.contains(&muscle)
    }

    pub fn is_injured(&self, muscle: MuscleGroup) -> bool {
        self.injuries.contains(&muscle)
    }
}
