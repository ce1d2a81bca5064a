//! Static exercise catalog
//!
//! The catalog is read-only process-wide data: every plan references entries
//! here by id. Entries are tagged with the muscle groups they hit, the
//! equipment they need, a difficulty level and the venue they belong to.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Muscle groups used for day focus, priorities and injury filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Abs,
    Cardio, // conditioning work, not a muscle in the strict sense
}

impl MuscleGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Cardio => "cardio",
        }
    }

    /// All muscle groups for iteration
    pub fn all() -> &'static [MuscleGroup] {
        &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Abs,
            MuscleGroup::Cardio,
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    Barbell,
    Machine,
    PullupBar,
}

impl Equipment {
    pub fn label(&self) -> &'static str {
        match self {
            Equipment::Bodyweight => "bodyweight",
            Equipment::Dumbbells => "dumbbells",
            Equipment::Barbell => "barbell",
            Equipment::Machine => "machine",
            Equipment::PullupBar => "pull-up bar",
        }
    }
}

/// Difficulty of an exercise, doubling as the user's experience level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Venue {
    Home,
    Gym,
}

impl Venue {
    pub fn label(&self) -> &'static str {
        match self {
            Venue::Home => "home",
            Venue::Gym => "gym",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: u32,
    pub name: &'static str,
    pub muscle_groups: &'static [MuscleGroup],
    pub equipment: Equipment,
    pub level: Level,
    pub venue: Venue,
}

impl Exercise {
    pub fn targets(&self, muscle: MuscleGroup) -> bool {
        self.muscle_groups.contains(&muscle)
    }
}

pub const EXERCISES: &[Exercise] = &[
    // === Chest ===
    Exercise {
        id: 1,
        name: "Bench Press",
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 2,
        name: "Incline Dumbbell Press",
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders],
        equipment: Equipment::Dumbbells,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 3,
        name: "Cable Fly",
        muscle_groups: &[MuscleGroup::Chest],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 4,
        name: "Paused Bench Press",
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: Equipment::Barbell,
        level: Level::Advanced,
        venue: Venue::Gym,
    },
    Exercise {
        id: 5,
        name: "Weighted Dip",
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: Equipment::PullupBar,
        level: Level::Advanced,
        venue: Venue::Gym,
    },
    Exercise {
        id: 6,
        name: "Push-Up",
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 7,
        name: "Dumbbell Floor Press",
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: Equipment::Dumbbells,
        level: Level::Intermediate,
        venue: Venue::Home,
    },
    Exercise {
        id: 8,
        name: "Archer Push-Up",
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: Equipment::Bodyweight,
        level: Level::Advanced,
        venue: Venue::Home,
    },
    // === Back ===
    Exercise {
        id: 9,
        name: "Deadlift",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        equipment: Equipment::Barbell,
        level: Level::Advanced,
        venue: Venue::Gym,
    },
    Exercise {
        id: 10,
        name: "Barbell Row",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 11,
        name: "Lat Pulldown",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 12,
        name: "Weighted Pull-Up",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: Equipment::PullupBar,
        level: Level::Advanced,
        venue: Venue::Gym,
    },
    Exercise {
        id: 13,
        name: "Doorframe Row",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 14,
        name: "One-Arm Dumbbell Row",
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: Equipment::Dumbbells,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 15,
        name: "Superman Hold",
        muscle_groups: &[MuscleGroup::Back],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    // === Shoulders ===
    Exercise {
        id: 16,
        name: "Overhead Press",
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 17,
        name: "Lateral Raise",
        muscle_groups: &[MuscleGroup::Shoulders],
        equipment: Equipment::Dumbbells,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 18,
        name: "Push Press",
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: Equipment::Barbell,
        level: Level::Advanced,
        venue: Venue::Gym,
    },
    Exercise {
        id: 19,
        name: "Pike Push-Up",
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: Equipment::Bodyweight,
        level: Level::Intermediate,
        venue: Venue::Home,
    },
    Exercise {
        id: 20,
        name: "Dumbbell Shoulder Press",
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: Equipment::Dumbbells,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 21,
        name: "Handstand Push-Up",
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: Equipment::Bodyweight,
        level: Level::Advanced,
        venue: Venue::Home,
    },
    // === Biceps ===
    Exercise {
        id: 22,
        name: "Barbell Curl",
        muscle_groups: &[MuscleGroup::Biceps],
        equipment: Equipment::Barbell,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 23,
        name: "Cable Curl",
        muscle_groups: &[MuscleGroup::Biceps],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 24,
        name: "Chin-Up",
        muscle_groups: &[MuscleGroup::Biceps, MuscleGroup::Back],
        equipment: Equipment::PullupBar,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 25,
        name: "Dumbbell Curl",
        muscle_groups: &[MuscleGroup::Biceps],
        equipment: Equipment::Dumbbells,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 26,
        name: "Hammer Curl",
        muscle_groups: &[MuscleGroup::Biceps],
        equipment: Equipment::Dumbbells,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    // === Triceps ===
    Exercise {
        id: 27,
        name: "Close-Grip Bench Press",
        muscle_groups: &[MuscleGroup::Triceps, MuscleGroup::Chest],
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 28,
        name: "Cable Pushdown",
        muscle_groups: &[MuscleGroup::Triceps],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 29,
        name: "Bench Dip",
        muscle_groups: &[MuscleGroup::Triceps],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 30,
        name: "Diamond Push-Up",
        muscle_groups: &[MuscleGroup::Triceps, MuscleGroup::Chest],
        equipment: Equipment::Bodyweight,
        level: Level::Intermediate,
        venue: Venue::Home,
    },
    Exercise {
        id: 31,
        name: "Overhead Dumbbell Extension",
        muscle_groups: &[MuscleGroup::Triceps],
        equipment: Equipment::Dumbbells,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    // === Quads ===
    Exercise {
        id: 32,
        name: "Back Squat",
        muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 33,
        name: "Front Squat",
        muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Abs],
        equipment: Equipment::Barbell,
        level: Level::Advanced,
        venue: Venue::Gym,
    },
    Exercise {
        id: 34,
        name: "Leg Press",
        muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 35,
        name: "Bodyweight Squat",
        muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 36,
        name: "Bulgarian Split Squat",
        muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: Equipment::Dumbbells,
        level: Level::Intermediate,
        venue: Venue::Home,
    },
    Exercise {
        id: 37,
        name: "Pistol Squat",
        muscle_groups: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: Equipment::Bodyweight,
        level: Level::Advanced,
        venue: Venue::Home,
    },
    // === Hamstrings ===
    Exercise {
        id: 38,
        name: "Romanian Deadlift",
        muscle_groups: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 39,
        name: "Leg Curl",
        muscle_groups: &[MuscleGroup::Hamstrings],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 40,
        name: "Good Morning",
        muscle_groups: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        equipment: Equipment::Barbell,
        level: Level::Advanced,
        venue: Venue::Gym,
    },
    Exercise {
        id: 41,
        name: "Single-Leg Romanian Deadlift",
        muscle_groups: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        equipment: Equipment::Dumbbells,
        level: Level::Intermediate,
        venue: Venue::Home,
    },
    Exercise {
        id: 42,
        name: "Nordic Curl",
        muscle_groups: &[MuscleGroup::Hamstrings],
        equipment: Equipment::Bodyweight,
        level: Level::Advanced,
        venue: Venue::Home,
    },
    // === Glutes ===
    Exercise {
        id: 43,
        name: "Hip Thrust",
        muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 44,
        name: "Cable Kickback",
        muscle_groups: &[MuscleGroup::Glutes],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 45,
        name: "Glute Bridge",
        muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 46,
        name: "Step-Up",
        muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::Quads],
        equipment: Equipment::Dumbbells,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    // === Calves ===
    Exercise {
        id: 47,
        name: "Standing Calf Raise",
        muscle_groups: &[MuscleGroup::Calves],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 48,
        name: "Seated Calf Raise",
        muscle_groups: &[MuscleGroup::Calves],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 49,
        name: "Single-Leg Calf Raise",
        muscle_groups: &[MuscleGroup::Calves],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    // === Abs ===
    Exercise {
        id: 50,
        name: "Cable Crunch",
        muscle_groups: &[MuscleGroup::Abs],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 51,
        name: "Hanging Leg Raise",
        muscle_groups: &[MuscleGroup::Abs],
        equipment: Equipment::PullupBar,
        level: Level::Intermediate,
        venue: Venue::Gym,
    },
    Exercise {
        id: 52,
        name: "Plank",
        muscle_groups: &[MuscleGroup::Abs],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 53,
        name: "Crunch",
        muscle_groups: &[MuscleGroup::Abs],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 54,
        name: "Hollow Body Hold",
        muscle_groups: &[MuscleGroup::Abs],
        equipment: Equipment::Bodyweight,
        level: Level::Intermediate,
        venue: Venue::Home,
    },
    // === Cardio ===
    Exercise {
        id: 55,
        name: "Treadmill Intervals",
        muscle_groups: &[MuscleGroup::Cardio],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 56,
        name: "Rowing Machine",
        muscle_groups: &[MuscleGroup::Cardio, MuscleGroup::Back],
        equipment: Equipment::Machine,
        level: Level::Beginner,
        venue: Venue::Gym,
    },
    Exercise {
        id: 57,
        name: "Jumping Jacks",
        muscle_groups: &[MuscleGroup::Cardio],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
    Exercise {
        id: 58,
        name: "Burpee",
        muscle_groups: &[MuscleGroup::Cardio, MuscleGroup::Quads],
        equipment: Equipment::Bodyweight,
        level: Level::Intermediate,
        venue: Venue::Home,
    },
    Exercise {
        id: 59,
        name: "Mountain Climber",
        muscle_groups: &[MuscleGroup::Cardio, MuscleGroup::Abs],
        equipment: Equipment::Bodyweight,
        level: Level::Beginner,
        venue: Venue::Home,
    },
];

pub fn all_exercises() -> &'static [Exercise] {
    EXERCISES
}

pub fn find_exercise(id: u32) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

/// Find exercise by name (for matching stored records)
pub fn find_exercise_by_name(name: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.name == name)
}
