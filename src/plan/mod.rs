//! Training plan types
//!
//! A plan is an ordered week of training days, each carrying its own exercise
//! list with volume parameters. Plans are produced by [`generator`] and stored
//! by the host as an opaque value; sessions work on deep copies, never on the
//! plan itself.

pub mod generator;
pub mod templates;

pub use generator::generate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, MuscleGroup};

/// One exercise slot inside a day. `id` is stable within the plan and is the
/// handle all session edits use, so removals can never hit the wrong row.
/// `exercise_id` links back to the catalog; ad-hoc exercises added during a
/// session have none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedExercise {
    pub id: u32,
    pub exercise_id: Option<u32>,
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingDay {
    /// 1-based position within the plan
    pub day_index: u32,
    pub focus: String,
    pub estimated_minutes: u32,
    pub exercises: Vec<PlannedExercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub created_at: DateTime<Utc>,
    pub days: Vec<TrainingDay>,
}

impl Plan {
    pub fn day(&self, day_index: u32) -> Option<&TrainingDay> {
        self.days.iter().find(|d| d.day_index == day_index)
    }

    pub fn total_exercises(&self) -> usize {
        self.days.iter().map(|d| d.exercises.len()).sum()
    }

    /// How many planned slots hit each muscle group over the week, in
    /// catalog order. Zero counts are kept so gaps show up in display.
    pub fn muscle_coverage(&self) -> Vec<(MuscleGroup, usize)> {
        MuscleGroup::all()
            .iter()
            .map(|&muscle| {
                let count = self
                    .days
                    .iter()
                    .flat_map(|d| &d.exercises)
                    .filter_map(|e| e.exercise_id.and_then(catalog::find_exercise))
                    .filter(|e| e.targets(muscle))
                    .count();
                (muscle, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_planned(id: u32, exercise_id: u32) -> PlannedExercise {
        let exercise = catalog::find_exercise(exercise_id).unwrap();
        PlannedExercise {
            id,
            exercise_id: Some(exercise_id),
            name: exercise.name.to_string(),
            sets: 3,
            reps: "10-12".to_string(),
            rest_seconds: 60,
        }
    }

    fn create_plan() -> Plan {
        Plan {
            created_at: Utc::now(),
            days: vec![
                TrainingDay {
                    day_index: 1,
                    focus: "Push".to_string(),
                    estimated_minutes: 21,
                    // Bench Press, Overhead Press, Cable Pushdown
                    exercises: vec![create_planned(1, 1), create_planned(2, 16), create_planned(3, 28)],
                },
                TrainingDay {
                    day_index: 2,
                    focus: "Pull".to_string(),
                    estimated_minutes: 14,
                    // Barbell Row, Chin-Up
                    exercises: vec![create_planned(4, 10), create_planned(5, 24)],
                },
            ],
        }
    }

    #[test]
    fn test_day_lookup_uses_day_index() {
        let plan = create_plan();
        assert_eq!(plan.day(1).unwrap().focus, "Push");
        assert_eq!(plan.day(2).unwrap().focus, "Pull");
        assert!(plan.day(3).is_none());
        assert!(plan.day(0).is_none());
    }

    #[test]
    fn test_total_exercises() {
        assert_eq!(create_plan().total_exercises(), 5);
    }

    #[test]
    fn test_muscle_coverage_counts_catalog_tags() {
        let plan = create_plan();
        let coverage = plan.muscle_coverage();

        let count_of = |muscle: MuscleGroup| {
            coverage.iter().find(|(m, _)| *m == muscle).unwrap().1
        };
        // Bench Press hits chest+triceps+shoulders, OHP shoulders+triceps,
        // Pushdown triceps, Row back+biceps, Chin-Up biceps+back.
        assert_eq!(count_of(MuscleGroup::Chest), 1);
        assert_eq!(count_of(MuscleGroup::Triceps), 3);
        assert_eq!(count_of(MuscleGroup::Shoulders), 2);
        assert_eq!(count_of(MuscleGroup::Back), 2);
        assert_eq!(count_of(MuscleGroup::Biceps), 2);
        assert_eq!(count_of(MuscleGroup::Quads), 0);
    }

    #[test]
    fn test_coverage_skips_ad_hoc_exercises() {
        let mut plan = create_plan();
        plan.days[0].exercises.push(PlannedExercise {
            id: 99,
            exercise_id: None,
            name: "Farmer Carry".to_string(),
            sets: 3,
            reps: "40m".to_string(),
            rest_seconds: 60,
        });
        // No catalog link, so coverage is unchanged.
        assert_eq!(plan.muscle_coverage(), create_plan().muscle_coverage());
    }

    #[test]
    fn test_plan_survives_json_round_trip() {
        let plan = create_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.days, plan.days);
    }
}
