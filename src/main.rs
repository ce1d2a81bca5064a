//! repforge - Personal workout planner and training session tracker

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use repforge::catalog::{Level, MuscleGroup, Venue};
use repforge::db::Database;
use repforge::plan::{self, Plan};
use repforge::progression::{self, Rating};
use repforge::questionnaire::{Answers, BodyType, Goal, Intensity};
use repforge::tui::App;

#[derive(Parser)]
#[command(name = "repforge")]
#[command(author, version, about = "Personal workout planner and training session tracker")]
struct Cli {
    /// Database file (or set REPFORGE_DB)
    #[arg(long, env = "REPFORGE_DB", default_value = "repforge.db")]
    db: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open TUI dashboard
    Tui,

    /// Generate a weekly plan from questionnaire answers
    Plan {
        /// Where you train
        #[arg(long, value_enum)]
        venue: Venue,

        /// Training days per week (2-6)
        #[arg(long)]
        days: u32,

        /// Session length in minutes
        #[arg(long, default_value = "60")]
        minutes: u32,

        #[arg(long, value_enum)]
        goal: Goal,

        #[arg(long, value_enum, default_value = "steady")]
        intensity: Intensity,

        #[arg(long, value_enum)]
        experience: Level,

        #[arg(long, value_enum)]
        body_type: BodyType,

        /// Muscle groups to emphasize (repeatable, up to 4)
        #[arg(long = "priority", value_enum)]
        priority_muscles: Vec<MuscleGroup>,

        /// Dumbbells available for home sessions
        #[arg(long)]
        home_equipment: bool,

        /// Injured muscle groups to avoid entirely (repeatable)
        #[arg(long = "injury", value_enum)]
        injuries: Vec<MuscleGroup>,

        /// Fix the selection seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the stored plan
    Show,

    /// Show which day the rotation points at
    Next,

    /// Start a session (defaults to the next scheduled day)
    Start {
        /// Open a specific plan day
        #[arg(long)]
        day: Option<u32>,

        /// Run the freestyle circuit instead of a plan day
        #[arg(long)]
        freestyle: bool,
    },

    /// List completed sessions
    History {
        /// Number of records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Change the rating of a completed session
    Rate {
        /// Record id (see history)
        id: i64,

        #[arg(value_enum)]
        rating: Rating,
    },

    /// Delete a completed session record
    Delete {
        /// Record id (see history)
        id: i64,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let db = Database::open(&cli.db)?;

    match cli.command {
        Some(Commands::Tui) => {
            let mut app = App::new(db)?;
            app.run()?;
        }

        Some(Commands::Plan {
            venue,
            days,
            minutes,
            goal,
            intensity,
            experience,
            body_type,
            priority_muscles,
            home_equipment,
            injuries,
            seed,
        }) => {
            let answers = Answers {
                venue,
                days_per_week: days,
                session_minutes: minutes,
                goal,
                intensity,
                experience,
                body_type,
                priority_muscles,
                has_home_equipment: home_equipment,
                injuries,
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let plan = plan::generate(&answers, &mut rng)?;
            let id = db.save_plan(&answers, &plan)?;
            println!("Plan #{} saved", id);
            println!("{:-<60}", "");
            print_plan(&plan);
        }

        Some(Commands::Show) => match db.load_plan()? {
            Some(stored) => {
                println!(
                    "Plan #{} from {} ({}, {} days/week, goal: {}, {}, {} pace)",
                    stored.id,
                    stored.plan.created_at.format("%Y-%m-%d"),
                    stored.answers.venue.label(),
                    stored.answers.days_per_week,
                    stored.answers.goal.label(),
                    stored.answers.body_type.label(),
                    stored.answers.intensity.label(),
                );
                println!("{:-<60}", "");
                print_plan(&stored.plan);
            }
            None => println!("No plan yet. Generate one with: repforge plan --help"),
        },

        Some(Commands::Next) => match db.load_plan()? {
            Some(stored) => {
                let history = db.get_sessions()?;
                match progression::next_day(&stored.plan, &history) {
                    Some(day) => {
                        println!(
                            "Next up: Day {} - {} ({} min, {} sessions logged)",
                            day.day_index,
                            day.focus,
                            day.estimated_minutes,
                            history.len()
                        );
                        for exercise in &day.exercises {
                            println!(
                                "  {:28} {} x {:8} rest {}s",
                                exercise.name, exercise.sets, exercise.reps, exercise.rest_seconds
                            );
                        }
                    }
                    None => println!("The stored plan has no days"),
                }
            }
            None => println!("No plan yet. Generate one with: repforge plan --help"),
        },

        Some(Commands::Start { day, freestyle }) => {
            let mut app = App::new(db)?;
            app.open_session(day, freestyle)?;
            app.run()?;
        }

        Some(Commands::History { limit }) => {
            let sessions = db.get_sessions()?;
            let counts = progression::rating_counts(&sessions);
            println!(
                "{} sessions (light {}, just right {}, hard {})",
                sessions.len(),
                counts.light,
                counts.just_right,
                counts.hard
            );
            println!("{:-<60}", "");
            for record in sessions.iter().rev().take(limit) {
                let day = match record.day_index {
                    Some(day_index) => format!("Day {day_index}"),
                    None => "Freestyle".to_string(),
                };
                println!(
                    "#{:<4} {} | {:10} | {}",
                    record.id.unwrap_or_default(),
                    record.date.format("%Y-%m-%d %H:%M"),
                    day,
                    record.rating.label()
                );
            }
        }

        Some(Commands::Rate { id, rating }) => {
            if db.update_rating(id, rating)? {
                println!("Record #{} now rated {}", id, rating.label());
            } else {
                println!("No record with id {}", id);
            }
        }

        Some(Commands::Delete { id }) => {
            if db.delete_session(id)? {
                println!("Record #{} deleted", id);
            } else {
                println!("No record with id {}", id);
            }
        }

        None => {
            // Default: show TUI
            let mut app = App::new(db)?;
            app.run()?;
        }
    }

    Ok(())
}

fn print_plan(plan: &Plan) {
    for day in &plan.days {
        println!("Day {} - {} (~{} min)", day.day_index, day.focus, day.estimated_minutes);
        for exercise in &day.exercises {
            println!(
                "  {:28} {} x {:8} rest {}s",
                exercise.name, exercise.sets, exercise.reps, exercise.rest_seconds
            );
        }
    }
    let coverage: Vec<String> = plan
        .muscle_coverage()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(muscle, count)| format!("{} {}", muscle.label(), count))
        .collect();
    println!("{:-<60}", "");
    println!("Coverage: {}", coverage.join(" | "));
}
