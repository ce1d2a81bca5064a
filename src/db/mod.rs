//! Database module - SQLite storage for plans and session history

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::plan::Plan;
use crate::progression::{CompletedSession, Rating};
use crate::questionnaire::Answers;

/// A generated plan as stored, with the answers that produced it
#[derive(Debug, Clone)]
pub struct StoredPlan {
    pub id: i64,
    pub answers: Answers,
    pub plan: Plan,
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS plans (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL,
                answers TEXT NOT NULL,
                plan TEXT NOT NULL
            )",
            [],
        )?;
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                day_index INTEGER,
                rating TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Store a generated plan together with the answers behind it
    pub fn save_plan(&self, answers: &Answers, plan: &Plan) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO plans (created_at, answers, plan) VALUES (?1, ?2, ?3)",
            params![
                plan.created_at.to_rfc3339(),
                serde_json::to_string(answers)?,
                serde_json::to_string(plan)?,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, days = plan.days.len(), "plan saved");
        Ok(id)
    }

    /// Latest stored plan, if any
    pub fn load_plan(&self) -> Result<Option<StoredPlan>> {
        let row: Option<(i64, String, String)> = self
            .conn
            .query_row(
                "SELECT id, answers, plan FROM plans ORDER BY id DESC LIMIT 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;
        match row {
            Some((id, answers_json, plan_json)) => {
                let answers = serde_json::from_str(&answers_json)?;
                let plan = serde_json::from_str(&plan_json)?;
                Ok(Some(StoredPlan { id, answers, plan }))
            }
            None => Ok(None),
        }
    }

    /// Append a completed session record
    pub fn add_session(&self, record: &CompletedSession) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO sessions (date, day_index, rating) VALUES (?1, ?2, ?3)",
            params![
                record.date.to_rfc3339(),
                record.day_index.map(|v| v as i64),
                record.rating.as_str(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All completed sessions, oldest first
    pub fn get_sessions(&self) -> Result<Vec<CompletedSession>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, date, day_index, rating FROM sessions ORDER BY id ASC")?;

        let sessions = stmt
            .query_map([], |row| {
                let date_str: String = row.get(1)?;
                let day_index: Option<i64> = row.get(2)?;
                let rating_str: String = row.get(3)?;
                Ok(CompletedSession {
                    id: Some(row.get(0)?),
                    date: DateTime::parse_from_rfc3339(&date_str)
                        .map(|d| d.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now()),
                    day_index: day_index.and_then(|v| u32::try_from(v).ok()),
                    rating: Rating::parse(&rating_str).unwrap_or(Rating::JustRight),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sessions)
    }

    /// Replace one record's rating. `Ok(false)` when the id does not exist.
    pub fn update_rating(&self, id: i64, rating: Rating) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE sessions SET rating = ?1 WHERE id = ?2",
            params![rating.as_str(), id],
        )?;
        Ok(changed > 0)
    }

    /// Remove one record. `Ok(false)` when the id does not exist, so a
    /// repeated delete stays a no-op.
    pub fn delete_session(&self, id: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM sessions WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Level, Venue};
    use crate::plan::TrainingDay;
    use crate::questionnaire::{BodyType, Goal, Intensity};

    fn create_answers() -> Answers {
        Answers {
            venue: Venue::Gym,
            days_per_week: 2,
            session_minutes: 45,
            goal: Goal::Maintain,
            intensity: Intensity::Steady,
            experience: Level::Beginner,
            body_type: BodyType::Meso,
            priority_muscles: vec![],
            has_home_equipment: false,
            injuries: vec![],
        }
    }

    fn create_plan(label: &str) -> Plan {
        Plan {
            created_at: Utc::now(),
            days: vec![TrainingDay {
                day_index: 1,
                focus: label.to_string(),
                estimated_minutes: 30,
                exercises: vec![],
            }],
        }
    }

    fn create_record(day_index: Option<u32>, rating: Rating) -> CompletedSession {
        CompletedSession {
            id: None,
            date: Utc::now(),
            day_index,
            rating,
        }
    }

    #[test]
    fn test_save_and_load_plan() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.load_plan().unwrap().is_none());

        let answers = create_answers();
        let plan = create_plan("Full Body A");
        let id = db.save_plan(&answers, &plan).unwrap();

        let stored = db.load_plan().unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.plan.days, plan.days);
        assert_eq!(stored.answers, answers);
    }

    #[test]
    fn test_latest_plan_wins() {
        let db = Database::open_in_memory().unwrap();
        let answers = create_answers();
        db.save_plan(&answers, &create_plan("Old")).unwrap();
        db.save_plan(&answers, &create_plan("New")).unwrap();

        let stored = db.load_plan().unwrap().unwrap();
        assert_eq!(stored.plan.days[0].focus, "New");
    }

    #[test]
    fn test_sessions_round_trip_in_insert_order() {
        let db = Database::open_in_memory().unwrap();
        db.add_session(&create_record(Some(1), Rating::Light)).unwrap();
        db.add_session(&create_record(None, Rating::Hard)).unwrap();

        let sessions = db.get_sessions().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].day_index, Some(1));
        assert_eq!(sessions[0].rating, Rating::Light);
        assert!(sessions[0].id.is_some());
        // Freestyle record keeps its missing day index.
        assert_eq!(sessions[1].day_index, None);
        assert_eq!(sessions[1].rating, Rating::Hard);
    }

    #[test]
    fn test_update_rating_touches_only_the_target() {
        let db = Database::open_in_memory().unwrap();
        let first = db.add_session(&create_record(Some(1), Rating::Light)).unwrap();
        db.add_session(&create_record(Some(2), Rating::JustRight)).unwrap();
        let before = db.get_sessions().unwrap();

        assert!(db.update_rating(first, Rating::Hard).unwrap());

        let after = db.get_sessions().unwrap();
        assert_eq!(after[0].rating, Rating::Hard);
        assert_eq!(after[0].date, before[0].date);
        assert_eq!(after[0].day_index, before[0].day_index);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn test_update_missing_rating_is_a_noop() {
        let db = Database::open_in_memory().unwrap();
        assert!(!db.update_rating(12345, Rating::Hard).unwrap());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let db = Database::open_in_memory().unwrap();
        let first = db.add_session(&create_record(Some(1), Rating::Light)).unwrap();
        db.add_session(&create_record(Some(2), Rating::Hard)).unwrap();

        assert!(db.delete_session(first).unwrap());
        let sessions = db.get_sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].day_index, Some(2));

        // Deleting again neither fails nor changes anything.
        assert!(!db.delete_session(first).unwrap());
        assert_eq!(db.get_sessions().unwrap().len(), 1);
    }
}
