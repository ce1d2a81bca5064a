//! Plan generation
//!
//! Pure computation from questionnaire answers to a week of training days.
//! The random source is injected so callers can seed selection; invariants
//! (day count, eligibility, per-day cap) hold for any seed.

use std::cmp::Reverse;

use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::templates::{self, DayTemplate};
use super::{Plan, PlannedExercise, TrainingDay};
use crate::catalog::{self, Equipment, Exercise, Level, Venue};
use crate::error::PlanError;
use crate::questionnaire::{Answers, BodyType, Goal};

/// Rough time cost of one exercise including its rest periods
pub const MINUTES_PER_EXERCISE: u32 = 7;

/// A day may exceed its exercise target by this much before truncation
const DAY_OVERFLOW_ALLOWANCE: usize = 2;

/// Day-global volume defaults derived from goal and body type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeParams {
    pub sets: u32,
    pub reps: &'static str,
    pub rest_seconds: u32,
}

pub fn volume_params(goal: Goal, body_type: BodyType) -> VolumeParams {
    match goal {
        Goal::FatLoss => VolumeParams {
            sets: if body_type == BodyType::Endo { 4 } else { 3 },
            reps: "12-15",
            rest_seconds: 45,
        },
        Goal::MuscleGain => VolumeParams {
            sets: 4,
            reps: "8-10",
            rest_seconds: if body_type == BodyType::Ecto { 120 } else { 90 },
        },
        Goal::Maintain => VolumeParams {
            sets: 3,
            reps: "10-12",
            rest_seconds: 60,
        },
    }
}

fn is_eligible(exercise: &Exercise, answers: &Answers) -> bool {
    if exercise.venue != answers.venue {
        return false;
    }
    if answers.venue == Venue::Home {
        let usable = match exercise.equipment {
            Equipment::Bodyweight => true,
            Equipment::Dumbbells => answers.has_home_equipment,
            _ => false,
        };
        if !usable {
            return false;
        }
    }
    !exercise.muscle_groups.iter().any(|&m| answers.is_injured(m))
}

/// Catalog entries selectable for these answers: venue match, home equipment
/// constraints, no injured muscle involved.
pub fn eligible_exercises(answers: &Answers) -> Vec<&'static Exercise> {
    catalog::all_exercises()
        .iter()
        .filter(|e| is_eligible(e, answers))
        .collect()
}

/// Build a plan from validated answers. Selection shuffles inside each muscle
/// group, so two calls with different rng states may differ; all plan
/// invariants hold regardless.
pub fn generate(answers: &Answers, rng: &mut impl Rng) -> Result<Plan, PlanError> {
    answers.validate()?;

    let pool = eligible_exercises(answers);
    let volume = volume_params(answers.goal, answers.body_type);
    let per_day = (answers.session_minutes / MINUTES_PER_EXERCISE).max(1) as usize;
    let template = templates::select_template(answers.days_per_week, answers.experience);

    let mut next_id: u32 = 1;
    let mut days = Vec::with_capacity(template.len());
    for (position, day) in template.iter().enumerate() {
        let exercises = fill_day(day, &pool, answers, per_day, &volume, &mut next_id, rng);
        days.push(TrainingDay {
            day_index: position as u32 + 1,
            focus: day.focus.to_string(),
            estimated_minutes: exercises.len() as u32 * MINUTES_PER_EXERCISE,
            exercises,
        });
    }

    let plan = Plan {
        created_at: Utc::now(),
        days,
    };
    debug!(
        days = plan.days.len(),
        exercises = plan.total_exercises(),
        pool = pool.len(),
        "generated plan"
    );
    Ok(plan)
}

fn fill_day(
    template: &DayTemplate,
    pool: &[&'static Exercise],
    answers: &Answers,
    per_day: usize,
    volume: &VolumeParams,
    next_id: &mut u32,
    rng: &mut impl Rng,
) -> Vec<PlannedExercise> {
    let slots = per_day.div_ceil(template.muscles.len());

    let mut picked: Vec<&'static Exercise> = Vec::new();
    for &muscle in template.muscles {
        // An exercise spanning two of the day's muscle groups fills one slot,
        // not two.
        let mut candidates: Vec<&'static Exercise> = pool
            .iter()
            .copied()
            .filter(|e| e.targets(muscle))
            .filter(|e| !picked.iter().any(|p| p.id == e.id))
            .collect();
        candidates.shuffle(rng);

        let quota = if answers.is_priority(muscle) {
            if answers.experience != Level::Beginner {
                // Stable sort: advanced entries float up, shuffle order
                // survives within each level.
                candidates.sort_by_key(|e| Reverse(e.level));
            }
            slots + 1
        } else {
            slots
        };
        // Short pools fill what they can; an empty pick is not an error.
        picked.extend(candidates.into_iter().take(quota));
    }
    picked.truncate(per_day + DAY_OVERFLOW_ALLOWANCE);

    picked
        .into_iter()
        .map(|exercise| {
            let id = *next_id;
            *next_id += 1;
            PlannedExercise {
                id,
                exercise_id: Some(exercise.id),
                name: exercise.name.to_string(),
                sets: volume.sets,
                reps: volume.reps.to_string(),
                rest_seconds: volume.rest_seconds,
            }
        })
        .collect()
}
