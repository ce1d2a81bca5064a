//! Schedule templates
//!
//! Which muscle groups a day targets is data, not computation. The generator
//! picks one of these fixed layouts by training frequency and experience, then
//! fills each day's slots from the catalog.

use crate::catalog::{Level, MuscleGroup};

#[derive(Debug, Clone)]
pub struct DayTemplate {
    pub focus: &'static str,
    pub muscles: &'static [MuscleGroup],
}

/// Two days: fixed A/B full-body pair, no style choice at this frequency
pub const FULL_BODY_2: &[DayTemplate] = &[
    DayTemplate {
        focus: "Full Body A",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Quads, MuscleGroup::Abs],
    },
    DayTemplate {
        focus: "Full Body B",
        muscles: &[
            MuscleGroup::Shoulders,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Biceps,
        ],
    },
];

pub const FULL_BODY_3: &[DayTemplate] = &[
    DayTemplate {
        focus: "Full Body A",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Quads],
    },
    DayTemplate {
        focus: "Full Body B",
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Hamstrings, MuscleGroup::Biceps],
    },
    DayTemplate {
        focus: "Full Body C",
        muscles: &[MuscleGroup::Back, MuscleGroup::Glutes, MuscleGroup::Abs],
    },
];

pub const PUSH_PULL_LEGS: &[DayTemplate] = &[
    DayTemplate {
        focus: "Push",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
    },
    DayTemplate {
        focus: "Pull",
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Abs],
    },
    DayTemplate {
        focus: "Legs",
        muscles: &[
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
        ],
    },
];

pub const UPPER_LOWER_4: &[DayTemplate] = &[
    DayTemplate {
        focus: "Upper A",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Shoulders],
    },
    DayTemplate {
        focus: "Lower A",
        muscles: &[MuscleGroup::Quads, MuscleGroup::Hamstrings, MuscleGroup::Glutes],
    },
    DayTemplate {
        focus: "Upper B",
        muscles: &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
        ],
    },
    DayTemplate {
        focus: "Lower B",
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes, MuscleGroup::Calves, MuscleGroup::Abs],
    },
];

pub const BODY_PART_4: &[DayTemplate] = &[
    DayTemplate {
        focus: "Chest & Triceps",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps],
    },
    DayTemplate {
        focus: "Back & Biceps",
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
    },
    DayTemplate {
        focus: "Legs",
        muscles: &[MuscleGroup::Quads, MuscleGroup::Hamstrings, MuscleGroup::Calves],
    },
    DayTemplate {
        focus: "Shoulders & Core",
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Glutes, MuscleGroup::Abs],
    },
];

/// Push/pull/legs rotation restarted to cover a five-day week
pub const ROTATION_5: &[DayTemplate] = &[
    DayTemplate {
        focus: "Push",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
    },
    DayTemplate {
        focus: "Pull",
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Abs],
    },
    DayTemplate {
        focus: "Legs",
        muscles: &[
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
        ],
    },
    DayTemplate {
        focus: "Push",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
    },
    DayTemplate {
        focus: "Pull",
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Abs],
    },
];

pub const FIVE_WAY_SPLIT: &[DayTemplate] = &[
    DayTemplate {
        focus: "Chest",
        muscles: &[MuscleGroup::Chest],
    },
    DayTemplate {
        focus: "Back",
        muscles: &[MuscleGroup::Back],
    },
    DayTemplate {
        focus: "Shoulders",
        muscles: &[MuscleGroup::Shoulders],
    },
    DayTemplate {
        focus: "Legs",
        muscles: &[
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
        ],
    },
    DayTemplate {
        focus: "Arms",
        muscles: &[MuscleGroup::Biceps, MuscleGroup::Triceps],
    },
];

/// Appended as day six at the highest frequency
pub static SIXTH_DAY: DayTemplate = DayTemplate {
    focus: "Legs & Conditioning",
    muscles: &[MuscleGroup::Quads, MuscleGroup::Abs, MuscleGroup::Cardio],
};

/// Pick the day layout for a week. Beginners get the simpler shape at every
/// frequency (full-body or repeated rotation), everyone else gets the split.
/// `days_per_week` must already be validated to the 2..=6 range.
pub fn select_template(days_per_week: u32, experience: Level) -> Vec<&'static DayTemplate> {
    let beginner = experience == Level::Beginner;
    let base: Vec<&'static DayTemplate> = match days_per_week {
        3 if beginner => FULL_BODY_3.iter().collect(),
        3 => PUSH_PULL_LEGS.iter().collect(),
        4 if beginner => UPPER_LOWER_4.iter().collect(),
        4 => BODY_PART_4.iter().collect(),
        5 | 6 if beginner => ROTATION_5.iter().collect(),
        5 | 6 => FIVE_WAY_SPLIT.iter().collect(),
        _ => FULL_BODY_2.iter().collect(),
    };
    if days_per_week == 6 {
        let mut days = base;
        days.push(&SIXTH_DAY);
        days
    } else {
        base
    }
}

#[derive(Debug, Clone)]
pub struct FreestyleEntry {
    pub exercise_id: u32,
    pub sets: u32,
    pub reps: &'static str,
    pub rest_seconds: u32,
}

/// Default circuit for sessions not tied to any plan day. Bodyweight only,
/// so it works at either venue.
pub const FREESTYLE_EXERCISES: &[FreestyleEntry] = &[
    FreestyleEntry {
        exercise_id: 6, // Push-Up
        sets: 3,
        reps: "10-15",
        rest_seconds: 60,
    },
    FreestyleEntry {
        exercise_id: 35, // Bodyweight Squat
        sets: 3,
        reps: "15-20",
        rest_seconds: 60,
    },
    FreestyleEntry {
        exercise_id: 13, // Doorframe Row
        sets: 3,
        reps: "10-12",
        rest_seconds: 60,
    },
    FreestyleEntry {
        exercise_id: 52, // Plank
        sets: 3,
        reps: "30-60 sec",
        rest_seconds: 45,
    },
    FreestyleEntry {
        exercise_id: 57, // Jumping Jacks
        sets: 2,
        reps: "45 sec",
        rest_seconds: 30,
    },
];
